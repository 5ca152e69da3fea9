//! Wire contracts shared between the GlowUp frontend and its HTTP API.
//!
//! Everything here is plain serde data, so it compiles and tests natively.

pub mod domain;
pub mod shared;
pub mod system;
