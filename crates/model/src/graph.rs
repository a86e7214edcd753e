use serde::{Deserialize, Serialize};

use crate::de;

/// Node in a portrait graph. Ids are coerced to strings at the boundary so
/// both ends of every edge compare uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub field: String,
}

/// Directed relation between two portrait nodes. The label field arrives as
/// `rel`, `relation`, or `label` depending on which backend path produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    #[serde(deserialize_with = "de::id_string")]
    pub source: String,
    #[serde(deserialize_with = "de::id_string")]
    pub target: String,
    #[serde(default, alias = "rel", alias = "label")]
    pub relation: String,
}

/// Relationship graph for one catalog item, from `/api/portrait/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portrait {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default, alias = "edges")]
    pub links: Vec<GraphEdge>,
}
