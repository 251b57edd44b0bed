use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{App, AppEvent};
use crate::ui::layout;

const WHEEL_ROWS: i32 = 3;

/// Polls for crossterm events and maps them to `AppEvent`s.
///
/// `area` is the frame last drawn, used to find which button a click hit.
pub fn poll(timeout: Duration, area: Rect) -> Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let mapped = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::KeyPress(key.code)),
        Event::Mouse(mouse) => map_mouse(mouse, area),
        _ => None,
    };
    Ok(mapped)
}

fn map_mouse(mouse: MouseEvent, area: Rect) -> Option<AppEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            layout::button_at(area, mouse.column, mouse.row).map(AppEvent::Click)
        }
        MouseEventKind::ScrollDown if layout::over_history(area, mouse.column, mouse.row) => {
            Some(AppEvent::ScrollHistory(WHEEL_ROWS))
        }
        MouseEventKind::ScrollUp if layout::over_history(area, mouse.column, mouse.row) => {
            Some(AppEvent::ScrollHistory(-WHEEL_ROWS))
        }
        _ => None,
    }
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    // Well under the pick delay so a pick lands close to on time.
    let tick_rate = Duration::from_millis(50);

    while app.running {
        let area = terminal.draw(|frame| crate::ui::draw(frame, app))?.area;
        app.set_history_rows(layout::history_rows(area));

        if let Some(event) = poll(tick_rate, area)? {
            app.update(event);
        }
        app.update(AppEvent::Tick);
    }
    Ok(())
}
