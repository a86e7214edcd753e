use client::{ApiClient, BindOutcome, NoopControl, QueryBinder, SearchQuery};
use render::{result_list, ViewSink};

use crate::apply::apply_html;
use crate::state::FormState;

pub const LIST_TARGET: &str = "list";

/// Results screen: the query and kind come from the page address, the
/// remaining filters from the form at trigger time.
pub struct ResultsView {
    client: ApiClient,
    binder: QueryBinder,
}

impl ResultsView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            binder: QueryBinder::new("results.search"),
        }
    }

    pub async fn load(
        &self,
        q: &str,
        kind: &str,
        form: &FormState,
        sink: &mut dyn ViewSink,
    ) -> BindOutcome<()> {
        let query = SearchQuery {
            q: q.to_string(),
            kind: kind.to_string(),
            field: form.value("field").to_string(),
            country: form.value("country").to_string(),
            sort: form.value("sort").to_string(),
        };

        let outcome = self
            .binder
            .run(&mut NoopControl, self.client.search(&query), |items| {
                result_list(items)
            })
            .await;
        apply_html(sink, LIST_TARGET, outcome)
    }
}
