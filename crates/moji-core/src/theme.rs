/// A theme palette with RGB color tuples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Window background as (r, g, b)
    pub background: (u8, u8, u8),
    /// Tile background as (r, g, b)
    pub surface: (u8, u8, u8),
    /// Primary text color as (r, g, b)
    pub text: (u8, u8, u8),
    /// Muted text (scores, loading status) as (r, g, b)
    pub subtext: (u8, u8, u8),
    /// Accent used when the configured one is not a valid hex color
    pub accent: (u8, u8, u8),
    /// Error status color as (r, g, b)
    pub error: (u8, u8, u8),
    /// "Copied!" marker color as (r, g, b)
    pub success: (u8, u8, u8),
}

/// Parse a hex color string like "#cba6f7" to (r, g, b)
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Get the theme palette for a theme name, falling back to catppuccin-mocha
pub fn get_theme_palette(theme: &str) -> ThemePalette {
    match theme {
        "catppuccin-latte" => ThemePalette {
            background: (239, 241, 245),
            surface: (220, 224, 232),
            text: (76, 79, 105),
            subtext: (108, 111, 133),
            accent: (136, 57, 239),
            error: (210, 15, 57),
            success: (64, 160, 43),
        },
        "nord" => ThemePalette {
            background: (46, 52, 64),
            surface: (59, 66, 82),
            text: (236, 239, 244),
            subtext: (129, 161, 193),
            accent: (136, 192, 208),
            error: (191, 97, 106),
            success: (163, 190, 140),
        },
        "dracula" => ThemePalette {
            background: (40, 42, 54),
            surface: (68, 71, 90),
            text: (248, 248, 242),
            subtext: (98, 114, 164),
            accent: (189, 147, 249),
            error: (255, 85, 85),
            success: (80, 250, 123),
        },
        "gruvbox-dark" => ThemePalette {
            background: (40, 40, 40),
            surface: (60, 56, 54),
            text: (235, 219, 178),
            subtext: (146, 131, 116),
            accent: (250, 189, 47),
            error: (251, 73, 52),
            success: (184, 187, 38),
        },
        _ => ThemePalette {
            background: (30, 30, 46),
            surface: (49, 50, 68),
            text: (205, 214, 244),
            subtext: (108, 112, 134),
            accent: (203, 166, 247),
            error: (243, 139, 168),
            success: (166, 227, 161),
        },
    }
}

/// Get the list of available theme names
pub fn available_themes() -> &'static [&'static str] {
    &[
        "catppuccin-mocha",
        "catppuccin-latte",
        "nord",
        "dracula",
        "gruvbox-dark",
    ]
}
