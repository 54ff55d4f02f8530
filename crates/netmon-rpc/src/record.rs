//! Checked field access on untyped result records.

use crate::error::{Result, RpcError};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Borrow a result element as an object.
pub(crate) fn object<'a>(method: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| RpcError::unexpected(method, "record is not an object"))
}

/// Borrow a string field of a record.
pub(crate) fn str_field<'a>(
    method: &str,
    record: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a str> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(RpcError::unexpected(
            method,
            format!("field '{}' is not a string", field),
        )),
        None => Err(RpcError::unexpected(
            method,
            format!("field '{}' is missing", field),
        )),
    }
}

/// Deserialize an integer the API may send either as a number or as a
/// decimal string (`"30"`).
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Str(s) if s.is_empty() => Ok(0),
        Raw::Str(s) => s
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid integer '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "lenient_i64")]
        n: i64,
    }

    #[test]
    fn test_lenient_int_accepts_both_forms() {
        let a: Sample = serde_json::from_value(json!({"n": 30})).unwrap();
        let b: Sample = serde_json::from_value(json!({"n": "30"})).unwrap();
        assert_eq!(a.n, 30);
        assert_eq!(b.n, 30);
        assert!(serde_json::from_value::<Sample>(json!({"n": "x"})).is_err());
    }

    #[test]
    fn test_str_field() {
        let value = json!({"key_": "alias[Gi0/1]", "delay": 30});
        let record = object("item.get", &value).unwrap();
        assert_eq!(str_field("item.get", record, "key_").unwrap(), "alias[Gi0/1]");
        assert!(str_field("item.get", record, "delay").is_err());
        assert!(str_field("item.get", record, "name").is_err());
    }
}
