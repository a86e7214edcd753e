//! Query-parameter types for the GET endpoints.
//!
//! Each type encodes to a fixed, fully populated pair list: every key is
//! always present, in the same order, with absent values as empty strings.
//! Identical state therefore always produces an identical request URL.

pub const DEFAULT_SORT: &str = "rel";

/// Parameters of `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub q: String,
    pub kind: String,
    pub field: String,
    pub country: String,
    /// Falls back to relevance ordering when empty.
    pub sort: String,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let sort = if self.sort.is_empty() {
            DEFAULT_SORT.to_string()
        } else {
            self.sort.clone()
        };
        vec![
            ("q", self.q.clone()),
            ("kind", self.kind.clone()),
            ("field", self.field.clone()),
            ("country", self.country.clone()),
            ("sort", sort),
        ]
    }
}

/// Parameters of `GET /api/ranking`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingQuery {
    pub year: String,
    pub field: String,
}

impl RankingQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("year", self.year.clone()), ("field", self.field.clone())]
    }
}

/// Year-range parameters of `GET /api/portrait/{id}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortraitQuery {
    pub start_year: String,
    pub end_year: String,
}

impl PortraitQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start_year", self.start_year.clone()),
            ("end_year", self.end_year.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pairs_fixed_shape() {
        let query = SearchQuery {
            q: "ai".to_string(),
            kind: "patent".to_string(),
            ..SearchQuery::default()
        };
        let pairs = query.pairs();
        assert_eq!(
            pairs,
            vec![
                ("q", "ai".to_string()),
                ("kind", "patent".to_string()),
                ("field", String::new()),
                ("country", String::new()),
                ("sort", "rel".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_pairs_idempotent() {
        let query = SearchQuery::new("脑机接口");
        assert_eq!(query.pairs(), query.pairs());
    }

    #[test]
    fn test_explicit_sort_kept() {
        let query = SearchQuery {
            sort: "year".to_string(),
            ..SearchQuery::default()
        };
        assert_eq!(query.pairs()[4], ("sort", "year".to_string()));
    }

    #[test]
    fn test_portrait_pairs_empty_years() {
        let query = PortraitQuery::default();
        assert_eq!(
            query.pairs(),
            vec![
                ("start_year", String::new()),
                ("end_year", String::new()),
            ]
        );
    }
}
