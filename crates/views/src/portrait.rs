use client::{ApiClient, BindOutcome, NoopControl, PortraitQuery, QueryBinder};
use render::{portrait_graph, ViewSink};

use crate::apply::apply_chart;
use crate::state::FormState;

pub const GRAPH_TARGET: &str = "graph";

/// Portrait screen: loads the relationship graph for one catalog item,
/// bounded by the year range read from the form.
pub struct PortraitView {
    client: ApiClient,
    binder: QueryBinder,
    item_id: String,
}

impl PortraitView {
    pub fn new(client: ApiClient, item_id: impl Into<String>) -> Self {
        Self {
            client,
            binder: QueryBinder::new("portrait.graph"),
            item_id: item_id.into(),
        }
    }

    pub async fn load(&self, form: &FormState, sink: &mut dyn ViewSink) -> BindOutcome<()> {
        let query = PortraitQuery {
            start_year: form.value("sy").to_string(),
            end_year: form.value("ey").to_string(),
        };

        let outcome = self
            .binder
            .run(
                &mut NoopControl,
                self.client.portrait(&self.item_id, &query),
                |portrait| portrait_graph(portrait),
            )
            .await;
        apply_chart(sink, GRAPH_TARGET, outcome)
    }
}
