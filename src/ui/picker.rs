use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{swatch_color, swatch_style};
use super::layout::PickerLayout;
use super::theme::Theme;
use crate::app::{App, Button, ColorPicker};
use crate::color::Swatch;

const SWATCH_WIDTH: usize = 16;
const SWATCH_HEIGHT: u16 = 3;

pub fn build_colours_line(picker: &ColorPicker) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, swatch) in Swatch::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if picker.current() == Some(swatch) {
            swatch_style(swatch)
        } else {
            Style::default().fg(Theme::dim())
        };
        spans.push(Span::styled(format!(" {} ", swatch.name()), style));
    }
    Line::from(spans)
}

pub fn pick_button_label(picker: &ColorPicker) -> &'static str {
    if picker.is_picking() {
        "Picking..."
    } else {
        "Pick Random Colour"
    }
}

pub fn build_selected_text(picker: &ColorPicker) -> Text<'static> {
    let Some(current) = picker.current() else {
        let hint = if picker.is_picking() {
            Span::styled("Picking...", Style::default().fg(Theme::warn()))
        } else {
            Span::styled(
                "Press space to pick a colour",
                Style::default().fg(Theme::dim()),
            )
        };
        return Text::from(Line::from(hint));
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("Selected: ", Style::default().fg(Theme::dim())),
        Span::styled(
            current.name(),
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.push(Line::from(""));
    for _ in 0..SWATCH_HEIGHT {
        lines.push(Line::from(Span::styled(
            "█".repeat(SWATCH_WIDTH),
            Style::default().fg(swatch_color(current)),
        )));
    }
    Text::from(lines)
}

pub fn render(frame: &mut Frame, app: &App, picker: &ColorPicker, layout: &PickerLayout) {
    let colours = Paragraph::new(build_colours_line(picker)).block(section(" Available colours "));
    frame.render_widget(colours, layout.colours);

    frame.render_widget(
        button(
            pick_button_label(picker),
            app.focus == Button::Pick,
            picker.is_picking(),
        ),
        layout.pick_button,
    );

    let selected = Paragraph::new(build_selected_text(picker)).block(section(" Selected "));
    frame.render_widget(selected, layout.selected);
}

pub(super) fn section(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ))
}

pub(super) fn button(label: &str, focused: bool, disabled: bool) -> Paragraph<'_> {
    let (border, text) = if disabled {
        (
            Style::default().fg(Theme::dim()),
            Style::default().fg(Theme::dim()),
        )
    } else if focused {
        (
            Style::default().fg(Theme::highlight()),
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Theme::secondary()),
            Style::default().fg(Theme::text()),
        )
    };
    let border_type = if focused && !disabled {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    Paragraph::new(Span::styled(label, text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .style(border),
        )
}

pub fn render_unmounted(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(Line::from(Span::styled(
        "The picker is closed.",
        Style::default().fg(Theme::dim()),
    )))
    .alignment(Alignment::Center)
    .block(section(" Hue "));
    frame.render_widget(notice, area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn idle_picker_shows_hint_and_plain_colours() {
        let picker = ColorPicker::new(Duration::from_millis(300), StdRng::seed_from_u64(0));
        assert_eq!(pick_button_label(&picker), "Pick Random Colour");
        assert_eq!(
            line_text(&build_colours_line(&picker)),
            " Black    Brown    Pink    Blue "
        );
        let text = build_selected_text(&picker);
        assert_eq!(line_text(&text.lines[0]), "Press space to pick a colour");
    }

    #[test]
    fn picked_colour_is_highlighted_and_shown() {
        let mut picker = ColorPicker::new(Duration::ZERO, StdRng::seed_from_u64(0));
        let now = Instant::now();
        picker.pick_random(now);
        assert_eq!(pick_button_label(&picker), "Picking...");
        let current = picker.tick(now).unwrap();

        let line = build_colours_line(&picker);
        let highlighted: Vec<_> = line
            .spans
            .iter()
            .filter(|span| span.style.bg.is_some())
            .map(|span| span.content.trim().to_string())
            .collect();
        assert_eq!(highlighted, vec![current.name().to_string()]);

        let text = build_selected_text(&picker);
        assert_eq!(line_text(&text.lines[0]), format!("Selected: {current}"));
        assert_eq!(text.lines.len(), 2 + SWATCH_HEIGHT as usize);
    }
}
