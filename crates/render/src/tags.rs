use model::{Term, TermKind};

use crate::text::escape;

const KIND_ORDER: [TermKind; 5] = [
    TermKind::KeyTechnology,
    TermKind::KeyProduct,
    TermKind::Company,
    TermKind::Country,
    TermKind::Other,
];

/// Badge markup for a classified term list, grouped by category with
/// technologies first. Empty input renders as an empty string.
pub fn term_tags(terms: &[Term]) -> String {
    let mut badges = Vec::with_capacity(terms.len());
    for kind in KIND_ORDER {
        for term in terms.iter().filter(|t| t.kind() == kind) {
            badges.push(format!(
                r#"<span class="tag {}">{}</span>"#,
                kind.css_class(),
                escape(&term.term)
            ));
        }
    }
    badges.join(" ")
}
