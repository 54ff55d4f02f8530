//! `screen.*` wrappers.

use crate::client::Api;
use crate::error::{Result, RpcError};
use crate::params::Params;
use crate::record;
use serde_json::Value;

const SCREEN_GET: &str = "screen.get";

/// Screen item resource type for graphs.
pub const RESOURCE_GRAPH: &str = "0";

impl Api {
    /// Resource ids of the graph elements on the screen named `screen_name`.
    pub async fn screen_item_ids(&self, screen_name: &str, params: Params) -> Result<Vec<String>> {
        let screens = self.records(SCREEN_GET, params).await?;
        let mut ids = Vec::new();
        for value in &screens {
            let screen = record::object(SCREEN_GET, value)?;
            if record::str_field(SCREEN_GET, screen, "name")? != screen_name {
                continue;
            }
            let elements = screen
                .get("screenitems")
                .and_then(Value::as_array)
                .ok_or_else(|| RpcError::unexpected(SCREEN_GET, "screenitems is not an array"))?;
            for element in elements {
                let element = record::object(SCREEN_GET, element)?;
                if element.get("resourcetype").and_then(Value::as_str) == Some(RESOURCE_GRAPH) {
                    ids.push(record::str_field(SCREEN_GET, element, "resourceid")?.to_string());
                }
            }
        }
        Ok(ids)
    }

    /// Id of the screen named `screen_name`, if it exists.
    pub async fn screen_id(&self, screen_name: &str, params: Params) -> Result<Option<String>> {
        let mut id = None;
        for value in &self.records(SCREEN_GET, params).await? {
            let screen = record::object(SCREEN_GET, value)?;
            if record::str_field(SCREEN_GET, screen, "name")? == screen_name {
                id = Some(record::str_field(SCREEN_GET, screen, "screenid")?.to_string());
            }
        }
        Ok(id)
    }
}
