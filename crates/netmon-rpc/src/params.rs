//! Request parameters for API calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameter key selecting how much of each record the server returns.
pub const OUTPUT: &str = "output";

/// Output mode returning full records.
pub const OUTPUT_EXTEND: &str = "extend";

/// Ordered JSON object of request parameters.
///
/// Serializes transparently as the `params` member of a JSON-RPC request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a parameter, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Requests full records unless the caller already chose an output mode.
    pub fn ensure_output(&mut self) {
        if !self.0.contains_key(OUTPUT) {
            self.0.insert(OUTPUT.to_string(), Value::from(OUTPUT_EXTEND));
        }
    }

    /// Consuming form of [`Params::ensure_output`].
    pub fn with_default_output(mut self) -> Self {
        self.ensure_output();
        self
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
