//! View state shared by every adapter: form, flash line, result rows.

use crate::{
    form::{FormFields, IdentifierClearPolicy},
    results::ResultsTable,
};

/// Transient status line shown after each action. A single overwritable
/// slot: no queue, no history, no severity. Whichever completion lands last
/// owns the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashSlot {
    message: Option<String>,
}

impl FlashSlot {
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Everything an adapter renders. The controller owns the only live copy and
/// hands out snapshots; adapters never mutate view state directly.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    pub form: FormFields,
    pub flash: FlashSlot,
    pub results: ResultsTable,
}

impl ViewModel {
    pub fn new(policy: IdentifierClearPolicy) -> Self {
        Self {
            form: FormFields::new(policy),
            flash: FlashSlot::default(),
            results: ResultsTable::default(),
        }
    }
}
