use client::{ApiClient, BindOutcome, NoopControl, QueryBinder};
use render::{detail_card, ViewSink};

use crate::apply::apply_html;

pub const DETAIL_TARGET: &str = "detail";

/// Detail screen: loads the full record for one catalog item.
pub struct DetailView {
    client: ApiClient,
    binder: QueryBinder,
}

impl DetailView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            binder: QueryBinder::new("detail.card"),
        }
    }

    pub async fn load(&self, item_id: i64, sink: &mut dyn ViewSink) -> BindOutcome<()> {
        let outcome = self
            .binder
            .run(&mut NoopControl, self.client.detail(item_id), |detail| {
                detail_card(detail)
            })
            .await;
        apply_html(sink, DETAIL_TARGET, outcome)
    }
}
