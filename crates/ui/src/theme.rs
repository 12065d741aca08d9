use mash_config::ThemeConfig;
use ratatui::style::Color;

/// Resolved colors used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub dim: Color,
    pub alert: Color,
}

impl Theme {
    /// Resolve config hex strings to terminal colors, falling back to named
    /// colors for anything unparseable.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: from_hex(&config.accent).unwrap_or(Color::Magenta),
            dim: from_hex(&config.dim).unwrap_or(Color::DarkGray),
            alert: from_hex(&config.alert).unwrap_or(Color::Red),
        }
    }
}

/// Parse a CSS-style hex color string (`#RRGGBB`).
fn from_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

    Some(Color::Rgb(
        byte(&hex[0..2])?,
        byte(&hex[2..4])?,
        byte(&hex[4..6])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_hex() {
        assert_eq!(from_hex("#cba6f7"), Some(Color::Rgb(0xcb, 0xa6, 0xf7)));
        assert_eq!(from_hex("1e1e2e"), Some(Color::Rgb(0x1e, 0x1e, 0x2e)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(from_hex("#fff"), None);
        assert_eq!(from_hex("#nothex"), None);
    }
}
