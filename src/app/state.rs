use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use rand::{RngExt, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::bindings::KeyBindings;
use super::{Action, AppEvent, Button, ColorPicker, DEFAULT_PICK_DELAY};

/// Runtime knobs, filled in from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub pick_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pick_delay: DEFAULT_PICK_DELAY,
            seed: None,
        }
    }
}

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub focus: Button,
    pub show_help: bool,
    /// First history row shown; 0 keeps the newest pick at the top.
    pub history_scroll: u16,
    history_rows: u16,
    picker: Option<ColorPicker>,
    bindings: KeyBindings,
    pick_delay: Duration,
    rng: StdRng,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let mut app = Self {
            running: true,
            focus: Button::Pick,
            show_help: false,
            history_scroll: 0,
            history_rows: 1,
            picker: None,
            bindings: KeyBindings::new(),
            pick_delay: settings.pick_delay,
            rng,
        };
        app.mount_picker();
        app
    }

    pub fn picker(&self) -> Option<&ColorPicker> {
        self.picker.as_ref()
    }

    /// Creates the picker and installs its space key binding.
    pub fn mount_picker(&mut self) {
        if self.picker.is_some() {
            return;
        }
        let rng = StdRng::seed_from_u64(self.rng.random());
        let binding = self.bindings.subscribe(KeyCode::Char(' '), Action::PickRandom);
        self.picker = Some(ColorPicker::new(self.pick_delay, rng).with_binding(binding));
        debug!(delay_ms = self.pick_delay.as_millis() as u64, "picker mounted");
    }

    /// Tells the app how many history rows fit on screen, for paging and clamping.
    pub fn set_history_rows(&mut self, rows: u16) {
        self.history_rows = rows.max(1);
        self.clamp_history_scroll();
    }

    /// Drops the picker together with its history, pending pick and key binding.
    pub fn unmount_picker(&mut self) {
        if self.picker.take().is_some() {
            debug!(bindings = self.bindings.len(), "picker unmounted");
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        self.update_at(event, Instant::now());
    }

    pub(crate) fn update_at(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Tick => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.tick(now);
                }
            }
            AppEvent::KeyPress(key) => self.handle_key(key, now),
            AppEvent::Click(button) => {
                self.focus = button;
                self.dispatch(button.action(), now);
            }
            AppEvent::ScrollHistory(delta) => self.scroll_history(delta),
        }
        self.clamp_history_scroll();
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if let Some(action) = self.bindings.resolve(key) {
            self.dispatch(action, now);
            return;
        }

        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.quit(),
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => self.dispatch(Action::ResetHistory, now),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = self.focus.toggled();
            }
            KeyCode::Enter => self.dispatch(self.focus.action(), now),
            KeyCode::Up => self.scroll_history(-1),
            KeyCode::Down => self.scroll_history(1),
            KeyCode::PageUp => self.scroll_history(-i32::from(self.history_rows)),
            KeyCode::PageDown => self.scroll_history(i32::from(self.history_rows)),
            KeyCode::Home => self.history_scroll = 0,
            KeyCode::End => self.history_scroll = self.max_history_scroll(),
            _ => {}
        }
    }

    fn dispatch(&mut self, action: Action, now: Instant) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match action {
            Action::PickRandom => {
                picker.pick_random(now);
            }
            Action::ResetHistory => picker.reset_history(),
        }
    }

    fn scroll_history(&mut self, delta: i32) {
        let target = (i32::from(self.history_scroll) + delta).max(0);
        self.history_scroll = u16::try_from(target).unwrap_or(u16::MAX);
        self.clamp_history_scroll();
    }

    fn max_history_scroll(&self) -> u16 {
        let len = self.picker.as_ref().map_or(0, |picker| picker.history().len());
        let hidden = len.saturating_sub(usize::from(self.history_rows));
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }

    fn clamp_history_scroll(&mut self) {
        self.history_scroll = self.history_scroll.min(self.max_history_scroll());
    }

    fn quit(&mut self) {
        self.unmount_picker();
        info!("quitting");
        self.running = false;
    }
}
