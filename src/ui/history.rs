use ratatui::{
    Frame,
    layout::Margin,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::helpers::swatch_style;
use super::layout::PickerLayout;
use super::picker::{button, section};
use super::theme::Theme;
use crate::app::{App, Button, ColorPicker};

pub fn build_history_text(picker: &ColorPicker, width: u16) -> Text<'static> {
    if picker.history().is_empty() {
        return Text::from(Line::from(Span::styled(
            "No picks yet.",
            Style::default().fg(Theme::dim()),
        )));
    }

    let width = usize::from(width);
    let lines = picker
        .history()
        .iter()
        .map(|swatch| {
            Line::from(Span::styled(
                format!(" {:<width$}", swatch.name(), width = width.saturating_sub(1)),
                swatch_style(*swatch),
            ))
        })
        .collect::<Vec<_>>();
    Text::from(lines)
}

pub fn render(frame: &mut Frame, app: &App, picker: &ColorPicker, layout: &PickerLayout) {
    frame.render_widget(
        button("Reset History", app.focus == Button::Reset, false),
        layout.reset_button,
    );

    let title = format!(" History ({}) ", picker.history().len());
    let inner_width = layout.history.width.saturating_sub(2);
    let history = Paragraph::new(build_history_text(picker, inner_width))
        .block(section(&title))
        .scroll((app.history_scroll, 0));
    frame.render_widget(history, layout.history);

    let rows = usize::from(layout.history.height.saturating_sub(2));
    let len = picker.history().len();
    if len > rows {
        let mut state = ScrollbarState::new(len - rows + 1)
            .position(usize::from(app.history_scroll))
            .viewport_content_length(rows);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(Theme::dim())),
            layout.history.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}
