use model::HotKeyword;

use crate::text::escape;

/// Anchor list for the hot-keyword strip; each links into the results
/// screen with the keyword as query.
pub fn hot_links(keywords: &[HotKeyword]) -> String {
    keywords
        .iter()
        .map(|keyword| {
            format!(
                r#"<a href="/results?q={}">{}</a>"#,
                urlencoding::encode(&keyword.kw),
                escape(&keyword.kw)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_keywords_empty_output() {
        assert_eq!(hot_links(&[]), "");
    }

    #[test]
    fn test_keyword_url_encoded() {
        let keywords = vec![HotKeyword {
            kw: "可穿戴EEG".to_string(),
        }];
        let html = hot_links(&keywords);
        assert!(html.contains("/results?q=%E5%8F%AF%E7%A9%BF%E6%88%B4EEG"));
        assert!(html.contains(">可穿戴EEG</a>"));
    }

    #[test]
    fn test_one_anchor_per_keyword() {
        let keywords = vec![
            HotKeyword { kw: "BCI".to_string() },
            HotKeyword { kw: "EEG".to_string() },
        ];
        assert_eq!(hot_links(&keywords).matches("<a ").count(), 2);
    }
}
