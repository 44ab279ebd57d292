use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub folder: Color,
    pub document: Color,
    pub notes: Color,
    pub selection_border: Color,
    pub popover_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFF, 0xA0, 0x30),
            dim: Color::Rgb(0x70, 0x70, 0x88),
            folder: Color::Rgb(0x44, 0x88, 0xFF),
            document: Color::Rgb(0x44, 0xDD, 0xAA),
            notes: Color::Rgb(0xFF, 0xD7, 0x00),
            selection_border: Color::Rgb(0xFF, 0xA0, 0x30),
            popover_border: Color::Rgb(0x88, 0x66, 0xFF),
        }
    }
}

impl Theme {
    /// Build the theme, overriding defaults with any colors set in [ui]
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        if let Some(c) = ui.background.as_deref().and_then(parse_hex_color) {
            theme.background = c;
        }
        if let Some(c) = ui.text.as_deref().and_then(parse_hex_color) {
            theme.text = c;
        }
        if let Some(c) = ui.highlight.as_deref().and_then(parse_hex_color) {
            theme.highlight = c;
            theme.selection_border = c;
        }
        if let Some(c) = ui.dim.as_deref().and_then(parse_hex_color) {
            theme.dim = c;
        }
        theme
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
