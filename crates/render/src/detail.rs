use model::Detail;

use crate::text::{escape, strip_tags};

/// Full card for one catalog item on the detail screen.
pub fn detail_card(detail: &Detail) -> String {
    let mut rows = vec![
        meta_row("Kind", &detail.kind),
        meta_row("Field", &detail.field),
        meta_row("Country", &detail.country),
        meta_row("Enterprise", &detail.enterprise),
        meta_row("Year", &detail.year),
    ];
    for (label, score) in [
        ("Article score", detail.article_score),
        ("Patent score", detail.patent_score),
        ("Report score", detail.report_score),
        ("Key score", detail.key_score),
    ] {
        if let Some(score) = score {
            rows.push(format!(
                r#"  <div class="row score"><span>{label}</span><span>{score}</span></div>"#
            ));
        }
    }

    let sources = if detail.source.is_empty() {
        String::new()
    } else {
        let entries = detail
            .source
            .iter()
            .map(|s| format!("    <li>{}</li>", escape(s)))
            .collect::<Vec<_>>()
            .join("\n");
        format!("  <ul class=\"sources\">\n{entries}\n  </ul>\n")
    };

    format!(
        "<div class=\"detail\">\n  <h2>{name}</h2>\n{rows}\n  <p class=\"abs\">{abstract_text}</p>\n{sources}</div>",
        name = escape(&detail.name),
        rows = rows.join("\n"),
        abstract_text = escape(&strip_tags(&detail.abstract_text)),
    )
}

fn meta_row(label: &str, value: &str) -> String {
    format!(
        r#"  <div class="row"><span>{label}</span><span>{}</span></div>"#,
        escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> Detail {
        serde_json::from_str(
            r#"{
                "id": "n1",
                "name": "云端BCI平台",
                "type": "技术",
                "field": "BCI",
                "country": "CN",
                "year": 2022,
                "abstract": "A cloud platform.",
                "key_score": 0.93,
                "source": ["annual report", "patent DB"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_present_scores_only() {
        let html = detail_card(&detail());
        assert!(html.contains("Key score"));
        assert!(!html.contains("Article score"));
    }

    #[test]
    fn test_sources_listed() {
        let html = detail_card(&detail());
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("annual report"));
    }

    #[test]
    fn test_name_escaped() {
        let mut d = detail();
        d.name = "a & b".to_string();
        assert!(detail_card(&d).contains("a &amp; b"));
    }
}
