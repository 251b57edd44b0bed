use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crossterm::event::KeyCode;
use tracing::debug;

use super::Action;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, KeyCode, Action)>,
}

/// Application-wide key bindings that widgets subscribe to while mounted.
///
/// Cheap to clone; clones share the same registry.
#[derive(Clone, Default)]
pub struct KeyBindings {
    inner: Rc<RefCell<Registry>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key` to `action` until the returned subscription is dropped.
    ///
    /// The newest subscription for a key wins.
    pub fn subscribe(&self, key: KeyCode, action: Action) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, key, action));
        debug!(?key, ?action, id, "key binding installed");
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn resolve(&self, key: KeyCode) -> Option<Action> {
        self.inner
            .borrow()
            .entries
            .iter()
            .rev()
            .find(|(_, bound, _)| *bound == key)
            .map(|(_, _, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Keeps a key binding alive. Dropping it removes the binding.
#[must_use = "the binding is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            registry.entries.retain(|(id, _, _)| *id != self.id);
            debug!(id = self.id, "key binding removed");
        }
    }
}
