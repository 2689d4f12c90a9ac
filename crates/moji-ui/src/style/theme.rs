use iced::Theme;
use moji_core::{get_theme_palette, parse_hex_color, Config};

/// Create an Iced theme from Moji's configuration
pub fn moji_theme(config: &Config) -> Theme {
    let palette = get_theme_palette(&config.appearance.theme);
    let accent = parse_hex_color(&config.appearance.accent_color).unwrap_or_else(|| {
        tracing::warn!(
            accent_color = %config.appearance.accent_color,
            "Invalid accent color, using the theme's accent"
        );
        palette.accent
    });
    let rgb = |c: (u8, u8, u8)| iced::Color::from_rgb8(c.0, c.1, c.2);

    let custom_palette = iced::theme::Palette {
        background: rgb(palette.background),
        text: rgb(palette.text),
        primary: rgb(accent),
        success: rgb(palette.success),
        danger: rgb(palette.error),
    };

    Theme::custom("Moji".to_string(), custom_palette)
}
