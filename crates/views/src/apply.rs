//! Map binder outcomes onto a sink: rendered output replaces the target's
//! content, a failure becomes an inline error on the same target, and a
//! stale outcome touches nothing.

use client::BindOutcome;
use render::chart::ChartOption;
use render::{ViewSink, ViewUpdate};

pub(crate) fn apply_html(
    sink: &mut dyn ViewSink,
    target: &str,
    outcome: BindOutcome<String>,
) -> BindOutcome<()> {
    match outcome {
        BindOutcome::Rendered(html) => {
            sink.apply(ViewUpdate::html(target, html));
            BindOutcome::Rendered(())
        }
        BindOutcome::Stale => BindOutcome::Stale,
        BindOutcome::Failed { message } => {
            sink.apply(ViewUpdate::error(target, message.clone()));
            BindOutcome::Failed { message }
        }
    }
}

pub(crate) fn apply_chart(
    sink: &mut dyn ViewSink,
    target: &str,
    outcome: BindOutcome<ChartOption>,
) -> BindOutcome<()> {
    match outcome {
        BindOutcome::Rendered(option) => {
            sink.apply(ViewUpdate::chart(target, option));
            BindOutcome::Rendered(())
        }
        BindOutcome::Stale => BindOutcome::Stale,
        BindOutcome::Failed { message } => {
            sink.apply(ViewUpdate::error(target, message.clone()));
            BindOutcome::Failed { message }
        }
    }
}
