//! Theme management: light/dark mode plus an accent color preset.
//!
//! Mode is stored under `theme` and applied as `data-theme` on `<html>`.
//! The accent preset is stored under `glowup_color_theme` and applied as CSS
//! custom properties on `<html>`; the background variable depends on the mode,
//! so the accent is re-applied whenever the mode changes.

pub mod theme_select;

use crate::shared::storage;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

const MODE_STORAGE_KEY: &str = "theme";
const ACCENT_STORAGE_KEY: &str = "glowup_color_theme";
pub const DEFAULT_ACCENT: &str = "beige";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Mode::Dark,
            _ => Mode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

/// Accent color preset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AccentPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    /// "r, g, b" for `rgba()` mixes
    pub primary_rgb: &'static str,
    pub bg_main: &'static str,
    pub bg_main_dark: &'static str,
}

pub const ACCENT_PRESETS: [AccentPreset; 8] = [
    AccentPreset {
        key: "beige",
        name: "Warm Beige",
        primary: "#d4a373",
        primary_light: "#e8c9a8",
        primary_dark: "#b8956a",
        primary_rgb: "212, 163, 115",
        bg_main: "#fefae0",
        bg_main_dark: "#1a1a1a",
    },
    AccentPreset {
        key: "rose",
        name: "Rose Gold",
        primary: "#B76E79",
        primary_light: "#D4A5AD",
        primary_dark: "#8B4D55",
        primary_rgb: "183, 110, 121",
        bg_main: "#FDF5F6",
        bg_main_dark: "#1a1818",
    },
    AccentPreset {
        key: "sage",
        name: "Sage Green",
        primary: "#9CAF88",
        primary_light: "#B8C9A6",
        primary_dark: "#7A8D6A",
        primary_rgb: "156, 175, 136",
        bg_main: "#F5F7F2",
        bg_main_dark: "#181a18",
    },
    AccentPreset {
        key: "blue",
        name: "Dusty Blue",
        primary: "#6B8E9B",
        primary_light: "#9BB5BF",
        primary_dark: "#4D6B77",
        primary_rgb: "107, 142, 155",
        bg_main: "#F3F6F7",
        bg_main_dark: "#18191a",
    },
    AccentPreset {
        key: "lavender",
        name: "Lavender",
        primary: "#9B8AA5",
        primary_light: "#BFB2C7",
        primary_dark: "#7A6B85",
        primary_rgb: "155, 138, 165",
        bg_main: "#F7F5F8",
        bg_main_dark: "#19181a",
    },
    AccentPreset {
        key: "coral",
        name: "Coral",
        primary: "#E07A5F",
        primary_light: "#EAA08C",
        primary_dark: "#B85A42",
        primary_rgb: "224, 122, 95",
        bg_main: "#FEF6F4",
        bg_main_dark: "#1a1818",
    },
    AccentPreset {
        key: "teal",
        name: "Teal",
        primary: "#5F9EA0",
        primary_light: "#8FBFC0",
        primary_dark: "#457A7C",
        primary_rgb: "95, 158, 160",
        bg_main: "#F4F9F9",
        bg_main_dark: "#181a1a",
    },
    AccentPreset {
        key: "plum",
        name: "Plum",
        primary: "#8E4585",
        primary_light: "#B377AB",
        primary_dark: "#6A3364",
        primary_rgb: "142, 69, 133",
        bg_main: "#F9F4F8",
        bg_main_dark: "#1a181a",
    },
];

pub fn find_preset(key: &str) -> Option<&'static AccentPreset> {
    ACCENT_PRESETS.iter().find(|p| p.key == key)
}

/// CSS custom properties for a preset in the given mode.
pub fn css_variables(preset: &AccentPreset, mode: Mode) -> Vec<(&'static str, String)> {
    let rgb = preset.primary_rgb;
    vec![
        ("--color-primary", preset.primary.to_string()),
        ("--color-primary-light", preset.primary_light.to_string()),
        ("--color-primary-dark", preset.primary_dark.to_string()),
        ("--color-primary-rgb", rgb.to_string()),
        ("--shadow-glow", format!("0 0 30px rgba({}, 0.3)", rgb)),
        ("--bg-hover", format!("rgba({}, 0.1)", rgb)),
        ("--icon-star-color", preset.primary.to_string()),
        ("--icon-heart-color", preset.primary.to_string()),
        ("--icon-fire-color", preset.primary.to_string()),
        ("--icon-accent-color", preset.primary.to_string()),
        (
            "--bg-main",
            match mode {
                Mode::Light => preset.bg_main.to_string(),
                Mode::Dark => preset.bg_main_dark.to_string(),
            },
        ),
    ]
}

fn document_root() -> Option<web_sys::HtmlElement> {
    window()?
        .document()?
        .document_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

fn apply_mode(mode: Mode) {
    if let Some(root) = document_root() {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}

fn apply_accent(preset: &AccentPreset, mode: Mode) {
    if let Some(root) = document_root() {
        let style = root.style();
        for (name, value) in css_variables(preset, mode) {
            let _ = style.set_property(name, &value);
        }
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<Mode>,
    /// Key of the active accent preset
    pub accent: RwSignal<&'static str>,
}

impl ThemeContext {
    pub fn toggle_mode(&self) {
        let next = self.mode.get_untracked().toggled();
        self.mode.set(next);
        storage::set_item(MODE_STORAGE_KEY, next.as_str());
        apply_mode(next);
        if let Some(preset) = find_preset(self.accent.get_untracked()) {
            apply_accent(preset, next);
        }
    }

    /// Unknown keys are ignored.
    pub fn set_accent(&self, key: &str) {
        let Some(preset) = find_preset(key) else {
            log::warn!("unknown accent preset {}", key);
            return;
        };
        self.accent.set(preset.key);
        storage::set_item(ACCENT_STORAGE_KEY, preset.key);
        apply_accent(preset, self.mode.get_untracked());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let mode = storage::get_item(MODE_STORAGE_KEY)
        .map(|s| Mode::parse(&s))
        .unwrap_or_default();
    let preset = storage::get_item(ACCENT_STORAGE_KEY)
        .and_then(|key| find_preset(&key))
        .unwrap_or(&ACCENT_PRESETS[0]);

    apply_mode(mode);
    apply_accent(preset, mode);

    provide_context(ThemeContext {
        mode: RwSignal::new(mode),
        accent: RwSignal::new(preset.key),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_unique_and_default_first() {
        assert_eq!(ACCENT_PRESETS[0].key, DEFAULT_ACCENT);
        for (i, a) in ACCENT_PRESETS.iter().enumerate() {
            assert!(ACCENT_PRESETS[i + 1..].iter().all(|b| b.key != a.key));
        }
        assert!(find_preset("teal").is_some());
        assert!(find_preset("neon").is_none());
    }

    #[test]
    fn test_css_variables_follow_mode() {
        let rose = find_preset("rose").unwrap();
        let light = css_variables(rose, Mode::Light);
        let dark = css_variables(rose, Mode::Dark);

        let get = |vars: &[(&str, String)], name: &str| {
            vars.iter().find(|(n, _)| *n == name).map(|(_, v)| v.clone())
        };
        assert_eq!(get(&light, "--bg-main").as_deref(), Some("#FDF5F6"));
        assert_eq!(get(&dark, "--bg-main").as_deref(), Some("#1a1818"));
        assert_eq!(
            get(&light, "--shadow-glow").as_deref(),
            Some("0 0 30px rgba(183, 110, 121, 0.3)")
        );
        assert_eq!(get(&light, "--icon-accent-color").as_deref(), Some("#B76E79"));
    }

    #[test]
    fn test_mode_parse_and_toggle() {
        assert_eq!(Mode::parse("dark"), Mode::Dark);
        assert_eq!(Mode::parse("forest"), Mode::Light);
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
    }
}
