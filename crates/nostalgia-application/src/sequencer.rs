//! Ordered, cancellable presentation scripts.
//!
//! A [`Sequence`] is a list of cues, each with the delay to wait before it
//! fires. The [`Sequencer`] plays one sequence at a time against a
//! [`Stage`]. Cancelling the token stops the script between cues; the
//! cue that is already performing always completes.

use crate::stage::{CueAction, Stage};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub delay: Duration,
    pub action: CueAction,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    cues: Vec<Cue>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cue that fires immediately after the previous one.
    pub fn then(self, action: CueAction) -> Self {
        self.after(Duration::ZERO, action)
    }

    /// Appends a cue that fires `delay` after the previous one.
    pub fn after(mut self, delay: Duration, action: CueAction) -> Self {
        self.push(delay, action);
        self
    }

    pub fn push(&mut self, delay: Duration, action: CueAction) {
        self.cues.push(Cue { delay, action });
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Sum of every delay.
    pub fn total_delay(&self) -> Duration {
        self.cues.iter().map(|cue| cue.delay).sum()
    }
}

/// How far a sequence got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOutcome {
    pub completed: usize,
    pub cancelled: bool,
}

#[derive(Clone)]
pub struct Sequencer {
    stage: Arc<dyn Stage>,
}

impl Sequencer {
    pub fn new(stage: Arc<dyn Stage>) -> Self {
        Self { stage }
    }

    pub async fn run(&self, sequence: Sequence, cancel: &CancellationToken) -> SequenceOutcome {
        let total = sequence.len();
        let mut completed = 0;

        for cue in sequence.cues {
            if cancel.is_cancelled() {
                break;
            }
            if !cue.delay.is_zero() {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(cue.delay) => {}
                }
            }
            self.stage.perform(&cue.action);
            completed += 1;
        }

        let cancelled = completed < total;
        if cancelled {
            debug!(completed, total, "sequence cancelled");
        }
        SequenceOutcome {
            completed,
            cancelled,
        }
    }
}
