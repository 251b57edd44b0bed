use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::app::Button;

/// Where everything goes for a given frame size. Drawing and mouse
/// hit-testing both go through [`compute`], so they always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickerLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub colours: Rect,
    pub pick_button: Rect,
    pub selected: Rect,
    pub reset_button: Rect,
    pub history: Rect,
}

pub fn compute(area: Rect) -> PickerLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(columns[1]);

    PickerLayout {
        header: rows[0],
        body: rows[1],
        footer: rows[2],
        colours: left[0],
        pick_button: left[1],
        selected: left[2],
        reset_button: right[0],
        history: right[1],
    }
}

/// The button under a mouse position, if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    let layout = compute(area);
    let position = Position::new(column, row);
    if layout.pick_button.contains(position) {
        Some(Button::Pick)
    } else if layout.reset_button.contains(position) {
        Some(Button::Reset)
    } else {
        None
    }
}

/// History rows visible inside the bordered history panel.
pub fn history_rows(area: Rect) -> u16 {
    compute(area).history.height.saturating_sub(2)
}

/// Whether a mouse position is over the history panel.
pub fn over_history(area: Rect, column: u16, row: u16) -> bool {
    compute(area).history.contains(Position::new(column, row))
}
