use ratatui::style::{Color, Modifier, Style};

use super::theme::Theme;
use crate::color::Swatch;

pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

pub fn swatch_color(swatch: Swatch) -> Color {
    hex_to_color(swatch.hex()).unwrap_or(Theme::text())
}

/// Background in the swatch colour with readable text on top.
pub fn swatch_style(swatch: Swatch) -> Style {
    let fg = if swatch.is_dark() {
        Theme::on_dark()
    } else {
        Theme::on_light()
    };
    Style::default()
        .bg(swatch_color(swatch))
        .fg(fg)
        .add_modifier(Modifier::BOLD)
}
