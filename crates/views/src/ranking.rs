use client::{ApiClient, BindOutcome, NoopControl, QueryBinder, RankingQuery};
use render::{ranking_bar, ViewSink};

use crate::apply::apply_chart;
use crate::state::FormState;

pub const BAR_TARGET: &str = "bar";

/// Ranking screen: loads the key-score bar chart filtered by year and
/// field.
pub struct RankingView {
    client: ApiClient,
    binder: QueryBinder,
}

impl RankingView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            binder: QueryBinder::new("ranking.bar"),
        }
    }

    pub async fn load(&self, form: &FormState, sink: &mut dyn ViewSink) -> BindOutcome<()> {
        let query = RankingQuery {
            year: form.value("year").to_string(),
            field: form.value("field").to_string(),
        };

        let outcome = self
            .binder
            .run(&mut NoopControl, self.client.ranking(&query), |items| {
                ranking_bar(items)
            })
            .await;
        apply_chart(sink, BAR_TARGET, outcome)
    }
}
