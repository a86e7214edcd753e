use serde::{Deserialize, Serialize};

/// One bar-chart datum from `/api/ranking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankItem {
    pub name: String,
    #[serde(default)]
    pub key_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_item_list() {
        let items: Vec<RankItem> = serde_json::from_str(
            r#"[{"name": "EEG decoding", "key_score": 0.91}, {"name": "BCI chip"}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].key_score, 0.0);
    }
}
