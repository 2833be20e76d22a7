// One submission: validate the form, build the prompt, call the model once
// and decide what to show. No terminal I/O happens here.

use crate::api::TextModel;
use crate::prompt::{build_prompt, Seeker};

/// Shown in place of a prediction when the model call fails.
pub const FALLBACK_ANSWER: &str = "Try again later.";

/// States a submission moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Rejected,
    Building,
    Prompted,
    Calling,
    Succeeded,
    Failed,
    Rendered,
    ErrorRendered,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Rejected | Phase::Rendered | Phase::ErrorRendered)
    }
}

/// What the interface should display for a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A field was empty or there is no API key. Nothing was sent.
    Rejected,
    /// The model's text, unmodified.
    Rendered(String),
    /// The call failed. `cause` is shown as an error, `fallback` as the
    /// answer.
    ErrorRendered { cause: String, fallback: String },
}

/// A single submission. Created fresh for every press of the submit action.
#[derive(Debug)]
pub struct Submission {
    seeker: Seeker,
    credential_present: bool,
    phase: Phase,
    trail: Vec<Phase>,
}

impl Submission {
    pub fn new(seeker: Seeker, credential_present: bool) -> Self {
        Submission {
            seeker,
            credential_present,
            phase: Phase::Idle,
            trail: vec![Phase::Idle],
        }
    }

    fn advance(&mut self, next: Phase) {
        tracing::trace!(from = ?self.phase, to = ?next, "submission phase");
        self.phase = next;
        self.trail.push(next);
    }

    /// Run the submission to a terminal phase. The model is called at most
    /// once and never retried.
    pub fn run<M: TextModel + ?Sized>(mut self, model: &M) -> (Outcome, Vec<Phase>) {
        self.advance(Phase::Validating);
        if !self.seeker.is_complete() || !self.credential_present {
            tracing::info!(
                complete = self.seeker.is_complete(),
                credential = self.credential_present,
                "submission rejected"
            );
            self.advance(Phase::Rejected);
            return self.finish(Outcome::Rejected);
        }

        self.advance(Phase::Building);
        let prompt = build_prompt(&self.seeker);
        self.advance(Phase::Prompted);

        self.advance(Phase::Calling);
        let outcome = match model.generate(&prompt) {
            Ok(text) => {
                self.advance(Phase::Succeeded);
                self.advance(Phase::Rendered);
                Outcome::Rendered(text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "model call failed");
                self.advance(Phase::Failed);
                self.advance(Phase::ErrorRendered);
                Outcome::ErrorRendered {
                    cause: e.to_string(),
                    fallback: FALLBACK_ANSWER.to_string(),
                }
            }
        };
        self.finish(outcome)
    }

    fn finish(self, outcome: Outcome) -> (Outcome, Vec<Phase>) {
        debug_assert!(self.phase.is_terminal(), "ended in {:?}", self.phase);
        (outcome, self.trail)
    }
}

/// Convenience wrapper: run a fresh submission and return only the outcome.
pub fn submit<M: TextModel + ?Sized>(
    model: &M,
    seeker: Seeker,
    credential_present: bool,
) -> Outcome {
    Submission::new(seeker, credential_present).run(model).0
}
