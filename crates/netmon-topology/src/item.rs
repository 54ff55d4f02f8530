//! Typed view of the item records the resolvers read.

use crate::error::{Result, TopologyError};
use crate::key::ALIAS_MARKER;
use serde::Serialize;
use serde_json::{Map, Value};

/// Field holding the item key.
pub const FIELD_KEY: &str = "key_";
/// Field holding the previously observed value.
pub const FIELD_PREVIOUS_VALUE: &str = "prevvalue";
/// Field holding the owning host id.
pub const FIELD_HOST_ID: &str = "hostid";

/// Monitored item as seen by the resolvers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitoredItem {
    /// Item key, e.g. `alias[GigabitEthernet0/1]`
    pub key: String,
    /// Last observed value; names the neighbor for alias items.
    /// Empty for non-alias items that did not report one.
    pub previous_value: String,
    pub host_id: Option<String>,
}

impl MonitoredItem {
    pub fn new(key: impl Into<String>, previous_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            previous_value: previous_value.into(),
            host_id: None,
        }
    }

    /// Whether the key follows the link-alias naming scheme.
    pub fn is_alias(&self) -> bool {
        self.key.contains(ALIAS_MARKER)
    }

    /// Validated extraction from the `index`-th raw record.
    ///
    /// `key_` is always required. `prevvalue` is required for alias items,
    /// the only ones whose value is read.
    pub fn from_record(index: usize, record: &Value) -> Result<Self> {
        let object = record
            .as_object()
            .ok_or_else(|| TopologyError::malformed(index, "<record>", "is not an object"))?;

        let key = required_str(index, object, FIELD_KEY)?;
        let previous_value = if key.contains(ALIAS_MARKER) {
            required_str(index, object, FIELD_PREVIOUS_VALUE)?
        } else {
            optional_str(index, object, FIELD_PREVIOUS_VALUE)?.unwrap_or_default()
        };
        let host_id = optional_str(index, object, FIELD_HOST_ID)?.map(str::to_string);

        Ok(Self {
            key: key.to_string(),
            previous_value: previous_value.to_string(),
            host_id,
        })
    }
}

/// Validate a whole query result. The first malformed record aborts.
pub fn parse_items(records: &[Value]) -> Result<Vec<MonitoredItem>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| MonitoredItem::from_record(index, record))
        .collect()
}

fn required_str<'a>(index: usize, object: &'a Map<String, Value>, field: &str) -> Result<&'a str> {
    optional_str(index, object, field)?
        .ok_or_else(|| TopologyError::malformed(index, field, "is missing"))
}

fn optional_str<'a>(
    index: usize,
    object: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a str>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(TopologyError::malformed(
            index,
            field,
            format!("is not a string ({})", other),
        )),
    }
}
