//! Graph records and `graph.*` / `graphitem.*` wrappers.

use crate::client::Api;
use crate::error::Result;
use crate::params::Params;
use crate::record::{self, lenient_i64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Graph definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graph {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gitems: Vec<GraphItem>,
    #[serde(deserialize_with = "lenient_i64")]
    pub height: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub width: i64,
}

/// One plotted item of a graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphItem {
    pub color: String,
    #[serde(rename = "itemid")]
    pub item_id: String,
}

const GRAPH_GET: &str = "graph.get";
const GRAPHITEM_GET: &str = "graphitem.get";

impl Api {
    /// Records of a `*.get` call, full output unless `params` says otherwise.
    pub(crate) async fn records(&self, method: &str, params: Params) -> Result<Vec<Value>> {
        let params = params.with_default_output();
        let response = self.call_with_error(method, &params).await?;
        Ok(response.result_array(method)?.clone())
    }

    /// Ids of graphs whose name contains `name_fragment`.
    pub async fn graph_ids_matching(&self, name_fragment: &str, params: Params) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for value in self.records(GRAPH_GET, params).await? {
            let graph = record::object(GRAPH_GET, &value)?;
            let id = record::str_field(GRAPH_GET, graph, "graphid")?;
            if record::str_field(GRAPH_GET, graph, "name")?.contains(name_fragment) {
                ids.push(id.to_string());
            }
        }
        Ok(ids)
    }

    /// Name of the last graph returned, `None` when nothing matched.
    pub async fn graph_name(&self, params: Params) -> Result<Option<String>> {
        let mut name = None;
        for value in self.records(GRAPH_GET, params).await? {
            let graph = record::object(GRAPH_GET, &value)?;
            name = Some(record::str_field(GRAPH_GET, graph, "name")?.to_string());
        }
        Ok(name)
    }

    /// Last non-empty item key among the returned graph items.
    pub async fn graph_item_key(&self, params: Params) -> Result<Option<String>> {
        let mut key = None;
        for value in self.records(GRAPHITEM_GET, params).await? {
            let gitem = record::object(GRAPHITEM_GET, &value)?;
            let k = record::str_field(GRAPHITEM_GET, gitem, "key_")?;
            if !k.is_empty() {
                key = Some(k.to_string());
            }
        }
        Ok(key)
    }

    /// Raw graph item records.
    pub async fn graph_items(&self, params: Params) -> Result<Vec<Value>> {
        self.records(GRAPHITEM_GET, params).await
    }

    /// Whether any returned graph item belongs to `host_id`.
    pub async fn host_has_graph_items(&self, host_id: &str, params: Params) -> Result<bool> {
        for value in self.records(GRAPHITEM_GET, params).await? {
            let gitem = record::object(GRAPHITEM_GET, &value)?;
            if record::str_field(GRAPHITEM_GET, gitem, "hostid")? == host_id {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Non-empty item ids of the returned graph items.
    pub async fn graph_item_ids(&self, params: Params) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for value in self.records(GRAPHITEM_GET, params).await? {
            let gitem = record::object(GRAPHITEM_GET, &value)?;
            let id = record::str_field(GRAPHITEM_GET, gitem, "itemid")?;
            if !id.is_empty() {
                ids.push(id.to_string());
            }
        }
        Ok(ids)
    }

    /// Color of the graph item plotting `item_id`.
    pub async fn graph_item_color(&self, item_id: &str, params: Params) -> Result<Option<String>> {
        let mut color = None;
        for value in self.records(GRAPHITEM_GET, params).await? {
            let gitem = record::object(GRAPHITEM_GET, &value)?;
            if record::str_field(GRAPHITEM_GET, gitem, "itemid")? == item_id {
                color = Some(record::str_field(GRAPHITEM_GET, gitem, "color")?.to_string());
            }
        }
        Ok(color)
    }
}
