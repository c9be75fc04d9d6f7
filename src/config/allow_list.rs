use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static map of user id → display name. Ids are kept as strings so that
/// chat ids and local names share one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList(BTreeMap<String, String>);

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl ToString, name: impl Into<String>) -> Self {
        self.0.insert(id.to_string(), name.into());
        self
    }

    /// Display name for `id`, or `None` when the id is not allowed.
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.0.get(id.trim()).map(String::as_str)
    }
}
