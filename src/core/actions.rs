use crate::domain::model::Record;
use crate::domain::ports::ActionHandler;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Delete,
}

/// The view/edit/delete controls shown next to a record.
#[derive(Debug, Clone, Copy)]
pub struct ActionBar<'a> {
    record: &'a Record,
}

impl<'a> ActionBar<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    /// Only an explicit `"estado": false` disables the bar.
    pub fn is_disabled(&self) -> bool {
        matches!(self.record.get("estado"), Some(Value::Bool(false)))
    }

    /// Forwards `action` to `handler`. Returns whether a callback ran.
    pub fn trigger<H: ActionHandler + ?Sized>(&self, action: Action, handler: &mut H) -> bool {
        if self.is_disabled() {
            tracing::debug!("{:?} ignored: record is inactive", action);
            return false;
        }

        match action {
            Action::View => handler.on_view(self.record),
            Action::Edit => handler.on_edit(self.record),
            Action::Delete => handler.on_delete(self.record),
        }
        true
    }
}
