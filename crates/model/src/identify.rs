use serde::{Deserialize, Serialize};

use crate::term::Term;

/// Response body of `POST /api/identify`. `tech` and `product` hold the
/// terms matched against the standard vocabulary; the `raw_` lists carry the
/// full extraction output before matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentifyResult {
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub product: Vec<String>,
    #[serde(default)]
    pub raw_tech: Vec<String>,
    #[serde(default)]
    pub raw_product: Vec<String>,
}

impl IdentifyResult {
    /// Matched terms as a classified list, technologies first.
    pub fn terms(&self) -> Vec<Term> {
        self.tech
            .iter()
            .map(|t| Term::tech(t.clone()))
            .chain(self.product.iter().map(|p| Term::product(p.clone())))
            .collect()
    }
}
