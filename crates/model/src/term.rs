use serde::{Deserialize, Serialize};

/// One classified term from the identify endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub term: String,
    #[serde(rename = "type")]
    pub term_type: String,
}

impl Term {
    pub fn new(term: impl Into<String>, term_type: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            term_type: term_type.into(),
        }
    }

    pub fn tech(term: impl Into<String>) -> Self {
        Self::new(term, "tech")
    }

    pub fn product(term: impl Into<String>) -> Self {
        Self::new(term, "product")
    }

    pub fn kind(&self) -> TermKind {
        TermKind::classify(&self.term_type)
    }
}

/// Category of a catalog term. The wire carries free-form type strings in
/// several spellings (Chinese and English); everything unrecognized falls
/// back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    KeyTechnology,
    KeyProduct,
    Company,
    Country,
    Other,
}

impl TermKind {
    pub fn classify(raw: &str) -> Self {
        match raw.trim() {
            "关键技术" | "技术" | "tech" | "Tech" | "Technology" | "key-technology" => {
                Self::KeyTechnology
            }
            "关键产品" | "产品" | "product" | "Product" | "key-product" => Self::KeyProduct,
            "企业" | "company" | "Company" | "enterprise" | "Enterprise" => Self::Company,
            "国家" | "country" | "Country" => Self::Country,
            _ => Self::Other,
        }
    }

    /// CSS class used by the badge markup.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::KeyTechnology => "tech",
            Self::KeyProduct => "prod",
            Self::Company => "company",
            Self::Country => "country",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_spellings() {
        assert_eq!(TermKind::classify("关键技术"), TermKind::KeyTechnology);
        assert_eq!(TermKind::classify("tech"), TermKind::KeyTechnology);
        assert_eq!(TermKind::classify("产品"), TermKind::KeyProduct);
        assert_eq!(TermKind::classify("Enterprise"), TermKind::Company);
        assert_eq!(TermKind::classify("国家"), TermKind::Country);
        assert_eq!(TermKind::classify("whatever"), TermKind::Other);
    }

    #[test]
    fn test_term_type_wire_name() {
        let term: Term = serde_json::from_str(r#"{"term":"GNN","type":"关键技术"}"#).unwrap();
        assert_eq!(term.term, "GNN");
        assert_eq!(term.kind(), TermKind::KeyTechnology);
    }
}
