use regex::Regex;
use std::sync::OnceLock;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

/// Remove any markup embedded in a wire string before it is measured or
/// re-escaped.
pub fn strip_tags(s: &str) -> String {
    tag_re().replace_all(s, "").to_string()
}

pub fn escape(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

/// Bound `s` to `max` characters, appending an ellipsis when truncated.
/// Operates on chars, not bytes, so multi-byte text never splits.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max).collect();
    truncated.push_str("...");
    truncated
}
