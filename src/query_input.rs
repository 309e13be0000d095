use crate::data_models::Query;
use crate::routes::Navigation;

/// The search box. Holds whatever the user typed; only a submit with
/// non-blank text turns into a navigation.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    value: String,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Blank input is a no-op, not an error.
    pub fn submit(&self) -> Option<Navigation> {
        Query::parse(&self.value).map(Navigation::to_search)
    }

    pub fn key_down(&self, key: &str) -> Option<Navigation> {
        if key == "Enter" { self.submit() } else { None }
    }
}
