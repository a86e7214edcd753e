use client::{ApiClient, BindOutcome, Control, QueryBinder};
use render::{term_tags, ViewSink, ViewUpdate};

use crate::apply::apply_html;

pub const TEXT_TAGS_TARGET: &str = "tags";
pub const FILE_TAGS_TARGET: &str = "fileTags";

const BUSY_LABEL: &str = "Identifying...";

/// Discovery screen: both identify modes post to the unified endpoint and
/// render the matched terms as badges. Each mode has its own button and its
/// own badge target.
pub struct IdentifyView {
    client: ApiClient,
    text_binder: QueryBinder,
    file_binder: QueryBinder,
}

impl IdentifyView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            text_binder: QueryBinder::new("identify.text").with_busy_label(BUSY_LABEL),
            file_binder: QueryBinder::new("identify.file").with_busy_label(BUSY_LABEL),
        }
    }

    pub async fn identify_text(
        &self,
        text: &str,
        control: &mut dyn Control,
        sink: &mut dyn ViewSink,
    ) -> BindOutcome<()> {
        let text = text.trim();
        if text.is_empty() {
            return reject(sink, TEXT_TAGS_TARGET, "Enter some text first.");
        }

        let outcome = self
            .text_binder
            .run(control, self.client.identify_text(text), |result| {
                term_tags(&result.terms())
            })
            .await;
        apply_html(sink, TEXT_TAGS_TARGET, outcome)
    }

    pub async fn identify_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        control: &mut dyn Control,
        sink: &mut dyn ViewSink,
    ) -> BindOutcome<()> {
        if bytes.is_empty() {
            return reject(sink, FILE_TAGS_TARGET, "Choose a file first.");
        }

        let outcome = self
            .file_binder
            .run(
                control,
                self.client.identify_file(file_name, bytes),
                |result| term_tags(&result.terms()),
            )
            .await;
        apply_html(sink, FILE_TAGS_TARGET, outcome)
    }
}

/// Input rejected before any request is made.
fn reject(sink: &mut dyn ViewSink, target: &str, message: &str) -> BindOutcome<()> {
    sink.apply(ViewUpdate::error(target, message));
    BindOutcome::Failed {
        message: message.to_string(),
    }
}
