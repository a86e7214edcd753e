//! The seam between renderers and whatever displays their output: named
//! targets that accept content, chart options, or inline errors.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::chart::ChartOption;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    Html { target: String, html: String },
    Chart { target: String, option: ChartOption },
    /// Inline, dismissible error state; prior content stays in place.
    Error { target: String, message: String },
}

impl ViewUpdate {
    pub fn html(target: impl Into<String>, html: impl Into<String>) -> Self {
        Self::Html {
            target: target.into(),
            html: html.into(),
        }
    }

    pub fn chart(target: impl Into<String>, option: ChartOption) -> Self {
        Self::Chart {
            target: target.into(),
            option,
        }
    }

    pub fn error(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Html { target, .. } | Self::Chart { target, .. } | Self::Error { target, .. } => {
                target
            }
        }
    }
}

pub trait ViewSink {
    fn apply(&mut self, update: ViewUpdate);
}

/// In-memory sink holding the current state of every registered target.
/// Updates addressed to an unregistered target are ignored; a screen with
/// no such element simply shows nothing.
#[derive(Debug, Default)]
pub struct MemorySink {
    targets: HashSet<String>,
    html: HashMap<String, String>,
    charts: HashMap<String, ChartOption>,
    errors: HashMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targets<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut sink = Self::default();
        for id in ids {
            sink.register(id);
        }
        sink
    }

    pub fn register(&mut self, id: &str) {
        self.targets.insert(id.to_string());
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.html.get(id).map(String::as_str)
    }

    pub fn chart(&self, id: &str) -> Option<&ChartOption> {
        self.charts.get(id)
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn dismiss_error(&mut self, id: &str) {
        self.errors.remove(id);
    }
}

impl ViewSink for MemorySink {
    fn apply(&mut self, update: ViewUpdate) {
        if !self.targets.contains(update.target()) {
            debug!(element = update.target(), "no such render target, ignoring");
            return;
        }
        match update {
            ViewUpdate::Html { target, html } => {
                self.errors.remove(&target);
                self.html.insert(target, html);
            }
            ViewUpdate::Chart { target, option } => {
                self.errors.remove(&target);
                self.charts.insert(target, option);
            }
            ViewUpdate::Error { target, message } => {
                self.errors.insert(target, message);
            }
        }
    }
}
