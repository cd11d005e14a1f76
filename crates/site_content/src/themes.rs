//! Fixed theme registry: lookup and selection only; color application belongs to hosts.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Named color palette for a theme, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    /// Background color.
    pub bg: String,
    /// Body text color.
    pub text: String,
    /// Prompt color.
    pub prompt: String,
    /// Accent color.
    pub accent: String,
    /// Error color.
    pub error: String,
    /// Success color.
    pub success: String,
    /// Link color.
    pub link: String,
    /// Muted color.
    pub muted: String,
}

/// Visual effect flags carried by a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEffects {
    /// CRT scanline overlay.
    pub scanlines: bool,
    /// Phosphor glow.
    pub glow: bool,
}

/// One descriptive theme record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Color palette.
    pub colors: ThemePalette,
    /// Effect flags.
    pub effects: ThemeEffects,
}

/// Identifier of the default theme.
pub const DEFAULT_THEME: &str = "green";

fn theme(
    id: &str,
    name: &str,
    description: &str,
    colors: [&str; 8],
    scanlines: bool,
    glow: bool,
) -> Theme {
    let [bg, text, prompt, accent, error, success, link, muted] = colors;
    Theme {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        colors: ThemePalette {
            bg: bg.to_string(),
            text: text.to_string(),
            prompt: prompt.to_string(),
            accent: accent.to_string(),
            error: error.to_string(),
            success: success.to_string(),
            link: link.to_string(),
            muted: muted.to_string(),
        },
        effects: ThemeEffects { scanlines, glow },
    }
}

fn build_themes() -> Vec<Theme> {
    vec![
        theme(
            "green",
            "Green (Classic CRT)",
            "Classic green phosphor terminal",
            [
                "#0a0a0a", "#00ff00", "#ffb000", "#00ffff", "#ff0000", "#00ff00", "#00aaff",
                "#4a4a4a",
            ],
            true,
            true,
        ),
        theme(
            "amber",
            "Amber",
            "Warm amber monochrome",
            [
                "#0a0a0a", "#ffb000", "#ff8c00", "#ffd700", "#ff4444", "#ffb000", "#ffc966",
                "#5a4a2a",
            ],
            true,
            true,
        ),
        theme(
            "blue",
            "Blue",
            "Cool blue hacker aesthetic",
            [
                "#0a0a14", "#00aaff", "#00ffff", "#88ddff", "#ff4466", "#00ff88", "#66ccff",
                "#3a4a5a",
            ],
            true,
            true,
        ),
        theme(
            "matrix",
            "Matrix",
            "The Matrix rain aesthetic",
            [
                "#000000", "#00ff41", "#008f11", "#00ff41", "#ff0000", "#00ff41", "#39ff14",
                "#003b00",
            ],
            false,
            true,
        ),
        theme(
            "high-contrast",
            "High Contrast",
            "Vivid colors on near-black",
            [
                "#0d0d0d", "#e4e4e4", "#ff9e4a", "#ffc66d", "#ff5555", "#a5c261", "#68abdf",
                "#808080",
            ],
            false,
            false,
        ),
        theme(
            "light",
            "Light",
            "Light mode for bright environments",
            [
                "#f5f5f5", "#1a1a1a", "#0066cc", "#cc6600", "#cc0000", "#008800", "#0066cc",
                "#888888",
            ],
            false,
            false,
        ),
        theme(
            "pride",
            "Pride",
            "Rainbow pride colors",
            [
                "#1a1a2e", "#ffffff", "#ff6b6b", "#ffd93d", "#ff6b6b", "#6bcb77", "#4d96ff",
                "#9d4edd",
            ],
            false,
            true,
        ),
    ]
}

/// All registered themes, in display order.
pub fn themes() -> &'static [Theme] {
    static THEMES: OnceLock<Vec<Theme>> = OnceLock::new();
    THEMES.get_or_init(build_themes).as_slice()
}

/// Registered theme identifiers, in display order.
pub fn theme_ids() -> Vec<&'static str> {
    themes().iter().map(|theme| theme.id.as_str()).collect()
}

/// Looks up a theme by identifier.
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    themes().iter().find(|theme| theme.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_registered() {
        assert!(find_theme(DEFAULT_THEME).is_some());
    }

    #[test]
    fn theme_ids_are_unique() {
        let mut ids = theme_ids();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn unknown_theme_is_absent() {
        assert!(find_theme("solarized").is_none());
    }
}
