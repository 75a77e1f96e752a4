use crate::domain::model::Record;
use std::collections::HashMap;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn default_headers(&self) -> &HashMap<String, String>;
}

/// Receiver of the view/edit/delete actions offered for a record.
pub trait ActionHandler {
    fn on_view(&mut self, record: &Record);
    fn on_edit(&mut self, record: &Record);
    fn on_delete(&mut self, record: &Record);
}
