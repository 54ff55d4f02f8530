//! Item records and `item.*` wrappers.

use crate::client::Api;
use crate::error::{Result, RpcError};
use crate::params::Params;
use crate::record::{self, lenient_i64};
use async_trait::async_trait;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Declares an integer-coded enum that serializes as its code and accepts
/// the code as a number or a decimal string.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident = $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub fn code(self) -> i64 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let code = lenient_i64(deserializer)?;
                $name::from_code(code).ok_or_else(|| {
                    de::Error::custom(format!("unknown {} code {}", stringify!($name), code))
                })
            }
        }
    };
}

code_enum! {
    /// How the platform collects an item.
    pub enum ItemType {
        ZabbixAgent = 0,
        SnmpV1Agent = 1,
        ZabbixTrapper = 2,
        SimpleCheck = 3,
        SnmpV2Agent = 4,
        ZabbixInternal = 5,
        SnmpV3Agent = 6,
        ZabbixAgentActive = 7,
        ZabbixAggregate = 8,
        WebItem = 9,
        ExternalCheck = 10,
        DatabaseMonitor = 11,
        IpmiAgent = 12,
        SshAgent = 13,
        TelnetAgent = 14,
        Calculated = 15,
        JmxAgent = 16,
    }
}

code_enum! {
    /// Type of the collected value.
    pub enum ValueType {
        Float = 0,
        Character = 1,
        Log = 2,
        Unsigned = 3,
        Text = 4,
    }
}

code_enum! {
    /// Presentation of integer values.
    pub enum DataType {
        Decimal = 0,
        Octal = 1,
        Hexadecimal = 2,
        Boolean = 3,
    }
}

code_enum! {
    /// Preprocessing applied to stored values.
    pub enum DeltaType {
        AsIs = 0,
        Speed = 1,
        Delta = 2,
    }
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// Monitored item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "itemid", skip_serializing_if = "String::is_empty")]
    pub item_id: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub delay: i64,
    #[serde(rename = "hostid")]
    pub host_id: String,
    #[serde(rename = "interfaceid", skip_serializing_if = "String::is_empty")]
    pub interface_id: String,
    #[serde(rename = "key_")]
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub value_type: ValueType,
    pub data_type: DataType,
    pub delta: DeltaType,
    pub description: String,
    pub error: String,
    #[serde(deserialize_with = "lenient_i64", skip_serializing_if = "is_zero")]
    pub history: i64,
    #[serde(deserialize_with = "lenient_i64", skip_serializing_if = "is_zero")]
    pub trends: i64,

    /// Application ids; only sent when creating items.
    #[serde(rename = "applications", skip_serializing_if = "Vec::is_empty", skip_deserializing)]
    pub application_ids: Vec<String>,
}

/// Ordered item collection
pub type Items = Vec<Item>;

/// Index items by key. Duplicate keys are an error.
pub fn items_by_key(items: &[Item]) -> Result<HashMap<String, Item>> {
    let mut by_key = HashMap::with_capacity(items.len());
    for item in items {
        if by_key.insert(item.key.clone(), item.clone()).is_some() {
            return Err(RpcError::unexpected(
                "item.get",
                format!("duplicate key {}", item.key),
            ));
        }
    }
    Ok(by_key)
}

/// Source of raw item records.
///
/// The topology resolvers depend on this seam rather than on [`Api`]
/// directly, so they can be driven by canned records in tests.
#[async_trait]
pub trait ItemQuery: Send + Sync {
    /// Fetch item records matching `params`. When `params` has no `output`
    /// key, full records are requested.
    async fn query_items(&self, params: Params) -> Result<Vec<Value>>;
}

#[async_trait]
impl ItemQuery for Api {
    async fn query_items(&self, params: Params) -> Result<Vec<Value>> {
        let params = params.with_default_output();
        let response = self.call_with_error("item.get", &params).await?;
        let records = response.result_array("item.get")?.clone();
        debug!(count = records.len(), "Fetched item records");
        Ok(records)
    }
}

#[async_trait]
impl<T: ItemQuery + ?Sized> ItemQuery for &T {
    async fn query_items(&self, params: Params) -> Result<Vec<Value>> {
        (**self).query_items(params).await
    }
}

impl Api {
    /// `item.get`, decoded into typed items.
    #[instrument(skip(self))]
    pub async fn items_get(&self, params: Params) -> Result<Items> {
        let records = self.query_items(params).await?;
        let items = serde_json::from_value(Value::Array(records))?;
        Ok(items)
    }

    /// Items belonging to one application.
    pub async fn items_get_by_application_id(&self, id: &str) -> Result<Items> {
        self.items_get(Params::new().with("applicationids", id)).await
    }

    /// `item.create`; fills in `item_id` of every created item.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn items_create(&self, items: &mut [Item]) -> Result<()> {
        let response = self.call_with_error("item.create", &*items).await?;
        let ids = returned_ids("item.create", &response.result)?;
        if ids.len() != items.len() {
            return Err(RpcError::ExpectedMore {
                expected: items.len(),
                got: ids.len(),
            });
        }
        for (item, id) in items.iter_mut().zip(ids) {
            item.item_id = id;
        }
        Ok(())
    }

    /// `item.delete` for the given items; clears their ids on success.
    pub async fn items_delete(&self, items: &mut [Item]) -> Result<()> {
        let ids: Vec<String> = items.iter().map(|i| i.item_id.clone()).collect();
        self.items_delete_by_ids(&ids).await?;
        for item in items.iter_mut() {
            item.item_id.clear();
        }
        Ok(())
    }

    /// `item.delete` by id.
    #[instrument(skip(self))]
    pub async fn items_delete_by_ids(&self, ids: &[String]) -> Result<()> {
        let response = self.call_with_error("item.delete", ids).await?;
        let deleted = returned_ids("item.delete", &response.result)?.len();
        if deleted != ids.len() {
            return Err(RpcError::ExpectedMore {
                expected: ids.len(),
                got: deleted,
            });
        }
        Ok(())
    }

    /// Id of the item whose key equals `key`, or `None`.
    /// With several matches the last one wins.
    pub async fn item_id_by_key(&self, key: &str, params: Params) -> Result<Option<String>> {
        let records = self.query_items(params).await?;
        let mut found = None;
        for value in &records {
            let record = record::object("item.get", value)?;
            if record::str_field("item.get", record, "key_")? == key {
                found = Some(record::str_field("item.get", record, "itemid")?.to_string());
            }
        }
        Ok(found)
    }
}

/// Extract `itemids` from a create/delete result. Some server versions
/// return an object keyed by position instead of an array.
fn returned_ids(method: &str, result: &Value) -> Result<Vec<String>> {
    let object = result
        .as_object()
        .ok_or_else(|| RpcError::unexpected(method, "result is not an object"))?;
    let ids = match object.get("itemids") {
        Some(Value::Array(ids)) => ids.iter().collect::<Vec<_>>(),
        Some(Value::Object(ids)) => ids.values().collect(),
        _ => return Err(RpcError::unexpected(method, "missing itemids")),
    };
    ids.into_iter()
        .map(|id| match id {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(RpcError::unexpected(method, "item id is not a string")),
        })
        .collect()
}
