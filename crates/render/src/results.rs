use model::ResultItem;

use crate::text::{escape, strip_tags, truncate_chars};

/// Characters of abstract shown on a result card before the ellipsis.
pub const ABSTRACT_PREVIEW_CHARS: usize = 90;

/// Card list markup for search results. Missing optional fields come
/// through as empty strings from the model, so a sparse item still renders.
pub fn result_list(items: &[ResultItem]) -> String {
    items
        .iter()
        .map(result_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn result_card(item: &ResultItem) -> String {
    let preview = truncate_chars(
        &strip_tags(&item.abstract_text),
        ABSTRACT_PREVIEW_CHARS,
    );
    format!(
        r#"<li class="card">
  <div class="title"><a href="/detail/{id}">{name}</a></div>
  <div class="meta">{kind} | {field} | {country} | {year}</div>
  <div class="abs">{preview}</div>
  <div class="score">Key score: {score}</div>
</li>"#,
        id = item.id,
        name = escape(&item.name),
        kind = escape(&item.kind),
        field = escape(&item.field),
        country = escape(&item.country),
        year = escape(&item.year),
        preview = escape(&preview),
        score = item.key_score,
    )
}
