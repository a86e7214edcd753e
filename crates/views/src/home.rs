use client::{ApiClient, BindOutcome, NoopControl, QueryBinder};
use render::{hot_links, ViewSink};

use crate::apply::apply_html;

pub const HOT_TARGET: &str = "hot";

/// Index screen: loads the hot keyword strip on page load.
pub struct HomeView {
    client: ApiClient,
    binder: QueryBinder,
}

impl HomeView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            binder: QueryBinder::new("home.hot"),
        }
    }

    pub async fn load(&self, sink: &mut dyn ViewSink) -> BindOutcome<()> {
        let outcome = self
            .binder
            .run(&mut NoopControl, self.client.hot(), |keywords| {
                hot_links(keywords)
            })
            .await;
        apply_html(sink, HOT_TARGET, outcome)
    }
}
