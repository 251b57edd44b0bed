use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Picker"));
    lines.extend(section_lines(&[
        "space: Pick a random colour",
        "r: Reset history",
        "Tab/Left/Right: Move focus between buttons",
        "Enter: Press the focused button",
        "Up/Down, PgUp/PgDn, Home/End: Scroll history",
        "Mouse: Click a button, wheel over history to scroll",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Global"));
    lines.extend(section_lines(&["?: Toggle help", "esc: Close help / Quit", "q: Quit"]));

    lines.push(Line::from(""));
    lines.push(section_title("Rules"));
    lines.extend(section_lines(&[
        "A colour that came up twice in a row sits out the next pick",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
