//! The one reusable piece of UI glue: read parameters, fetch, decode,
//! render, while keeping the initiating control and stale responses honest.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::FetchError;

/// The UI control that triggered a binding. Disabled and relabeled while a
/// request is in flight, restored on every outcome.
pub trait Control: Send {
    fn set_busy(&mut self, busy_label: &str);
    fn restore(&mut self);
}

/// Control for bindings triggered by page load rather than a button.
pub struct NoopControl;

impl Control for NoopControl {
    fn set_busy(&mut self, _busy_label: &str) {}
    fn restore(&mut self) {}
}

/// Button state machine: disabled with a busy label while in flight,
/// enabled with its default label otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonControl {
    pub label: String,
    pub enabled: bool,
    default_label: String,
}

impl ButtonControl {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            default_label: label.clone(),
            label,
            enabled: true,
        }
    }
}

impl Control for ButtonControl {
    fn set_busy(&mut self, busy_label: &str) {
        self.enabled = false;
        self.label = busy_label.to_string();
    }

    fn restore(&mut self) {
        self.enabled = true;
        self.label = self.default_label.clone();
    }
}

/// What one triggered binding produced.
#[derive(Debug)]
pub enum BindOutcome<R> {
    /// Fetch and render succeeded; the view applies the output.
    Rendered(R),
    /// A newer trigger superseded this one; nothing to apply.
    Stale,
    /// Fetch or decode failed; the view surfaces the message inline.
    Failed { message: String },
}

impl<R> BindOutcome<R> {
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }

    pub fn rendered(self) -> Option<R> {
        match self {
            Self::Rendered(output) => Some(output),
            _ => None,
        }
    }
}

/// Binds one query to one render function. Each trigger claims a new
/// generation; a response that resolves after a later trigger has claimed
/// the counter is discarded instead of overwriting the newer render.
pub struct QueryBinder {
    name: &'static str,
    busy_label: String,
    generation: AtomicU64,
}

impl QueryBinder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            busy_label: "Loading...".to_string(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_busy_label(mut self, busy_label: impl Into<String>) -> Self {
        self.busy_label = busy_label.into();
        self
    }

    pub async fn run<T, R, Fut, F>(
        &self,
        control: &mut dyn Control,
        fetch: Fut,
        render: F,
    ) -> BindOutcome<R>
    where
        Fut: Future<Output = Result<T, FetchError>>,
        F: FnOnce(&T) -> R,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request_id = Uuid::new_v4();

        control.set_busy(&self.busy_label);
        debug!(binding = self.name, %request_id, generation, "issuing request");

        let result = fetch.await;

        let outcome = if self.generation.load(Ordering::SeqCst) != generation {
            debug!(
                binding = self.name,
                %request_id,
                generation,
                "response superseded, discarding"
            );
            BindOutcome::Stale
        } else {
            match result {
                Ok(data) => BindOutcome::Rendered(render(&data)),
                Err(error) => {
                    warn!(
                        binding = self.name,
                        %request_id,
                        generation,
                        error = %error,
                        "request failed"
                    );
                    BindOutcome::Failed {
                        message: error.user_message(),
                    }
                }
            }
        };

        control.restore();
        outcome
    }
}
