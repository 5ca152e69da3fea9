pub mod d001_skincare;

pub use d001_skincare::ui::Dashboard;
