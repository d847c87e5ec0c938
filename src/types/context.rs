use std::collections::HashMap;

use super::Value;

/// Evaluation context: a flat, string-keyed record describing one subject.
///
/// Produced once by the caller and read-only during evaluation. Both the
/// branching policy and the rule engine consume the same context shape, e.g.
/// `age`, `membership`, `region`, `base_price`.
#[derive(Debug, Clone, Default)]
pub struct Context {
    data: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, value.into());
        self
    }

    /// Insert a field (mutable reference version).
    pub fn insert(&mut self, field: &str, value: Value) {
        self.data.insert(field.to_owned(), value);
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Integer field accessor. `None` when missing or not an `Int`.
    #[must_use]
    pub fn int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_int)
    }

    /// Numeric field accessor; integers are widened to `f64`.
    #[must_use]
    pub fn float(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_float)
    }

    /// String field accessor. `None` when missing or not a `String`.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}
