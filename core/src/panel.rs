use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::error;

use crate::client::TextGenerator;
use crate::errors::GenerateError;
use crate::request::{GenerationKind, GenerationRequest};

/// Message shown for transport-level failures, regardless of panel
pub const CONNECTIVITY_FAILURE_MESSAGE: &str =
    "An error occurred while connecting to the AI. Please check your network and try again.";

/// Outcome of one generation invocation.
///
/// Held only in transient panel state; a new invocation overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { text: String },
    Failure { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// User-facing message for a failed invocation. Local validation messages are
/// surfaced verbatim; remote failures collapse to the panel's generic message.
fn failure_message(kind: GenerationKind, error: &GenerateError) -> String {
    match error {
        GenerateError::InvalidInput(message) | GenerateError::ConfigError(message) => {
            message.clone()
        }
        GenerateError::RequestError(_) | GenerateError::ReqwestError(_) => {
            CONNECTIVITY_FAILURE_MESSAGE.to_string()
        }
        _ => kind.failure_message().to_string(),
    }
}

/// Runs one generation cycle: validate, build the prompt, issue a single
/// provider call, and reduce the result to a renderable outcome.
///
/// Validation failures short-circuit before any provider traffic. Remote
/// failures are logged for diagnostics and surfaced as a generic message;
/// nothing propagates past the returned `Outcome`.
pub async fn generate<G>(generator: &G, request: &GenerationRequest) -> Outcome
where
    G: TextGenerator + ?Sized,
{
    if let Err(e) = request.validate() {
        return Outcome::Failure {
            message: failure_message(request.kind(), &e),
        };
    }

    let prompt = request.prompt();
    match generator.generate_text(&prompt).await {
        Ok(text) => Outcome::Success { text },
        Err(e) => {
            error!(panel = request.kind().label(), error = %e, "Generation failed");
            Outcome::Failure {
                message: failure_message(request.kind(), &e),
            }
        }
    }
}

/// One form + trigger + result slot for a single generation kind.
///
/// While an invocation is pending the panel is busy and further triggers are
/// no-ops, so one panel never has two overlapping writes to its result slot.
/// Panels are independent of each other.
pub struct Panel<G: TextGenerator + ?Sized> {
    kind: GenerationKind,
    generator: Arc<G>,
    in_flight: AtomicBool,
    last: Mutex<Option<Outcome>>,
}

impl<G: TextGenerator + ?Sized> Panel<G> {
    pub fn new(kind: GenerationKind, generator: Arc<G>) -> Self {
        Self {
            kind,
            generator,
            in_flight: AtomicBool::new(false),
            last: Mutex::new(None),
        }
    }

    pub fn kind(&self) -> GenerationKind {
        self.kind
    }

    /// Whether an invocation is currently outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Most recent outcome, kept until the next invocation overwrites it
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last.lock().unwrap().clone()
    }

    /// Runs one generation cycle for this panel.
    ///
    /// Returns `None` without issuing any provider call when an invocation is
    /// already pending; otherwise the new outcome, which also replaces the
    /// stored one.
    pub async fn trigger(&self, request: GenerationRequest) -> Option<Outcome> {
        debug_assert_eq!(request.kind(), self.kind);

        if self.in_flight.swap(true, Ordering::AcqRel) {
            return None;
        }

        let outcome = generate(self.generator.as_ref(), &request).await;
        *self.last.lock().unwrap() = Some(outcome.clone());
        self.in_flight.store(false, Ordering::Release);

        Some(outcome)
    }
}
