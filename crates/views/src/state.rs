use std::collections::HashMap;

/// Snapshot of named form values, read at trigger time. Stands in for the
/// form inputs a screen reads; a missing field reads as an empty string,
/// the same as an empty input.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: &str, value: &str) {
        self.values.insert(id.to_string(), value.to_string());
    }

    pub fn with(mut self, id: &str, value: &str) -> Self {
        self.set(id, value);
        self
    }

    pub fn value(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }
}
