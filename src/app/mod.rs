mod bindings;
mod deferred;
mod picker;
mod state;

use crossterm::event::KeyCode;

pub use picker::{ColorPicker, DEFAULT_PICK_DELAY};
pub use state::{App, Settings};

/// Possible input events the app reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    Click(Button),
    /// Move the history view by this many rows; positive goes towards older picks.
    ScrollHistory(i32),
}

/// Things the picker can be asked to do, from a key binding or a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PickRandom,
    ResetHistory,
}

/// The two clickable buttons of the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Pick,
    Reset,
}

impl Button {
    pub fn action(self) -> Action {
        match self {
            Button::Pick => Action::PickRandom,
            Button::Reset => Action::ResetHistory,
        }
    }

    fn toggled(self) -> Self {
        match self {
            Button::Pick => Button::Reset,
            Button::Reset => Button::Pick,
        }
    }
}
