use serde::{Deserialize, Serialize};

use crate::de;

/// One search hit, rendered as a list card. Optional fields default so a
/// sparse backend record renders as empty text rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "de::loose_string")]
    pub year: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub key_score: f64,
}

/// Hot search keyword from `/api/hot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotKeyword {
    pub kw: String,
}

/// Full record for one catalog item from `/api/detail/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detail {
    #[serde(default, deserialize_with = "de::loose_string")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub enterprise: String,
    #[serde(default, deserialize_with = "de::loose_string")]
    pub year: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub article_score: Option<f64>,
    #[serde(default)]
    pub patent_score: Option<f64>,
    #[serde(default)]
    pub report_score: Option<f64>,
    #[serde(default)]
    pub key_score: Option<f64>,
    #[serde(default)]
    pub source: Vec<String>,
}
