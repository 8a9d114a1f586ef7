//! The presentation seam.
//!
//! The application layer never draws anything. It emits [`CueAction`]s in
//! order and the attached [`Stage`] renders them however it likes.

use crate::onboarding::OnboardingStep;
use nostalgia_core::shape::PlacedShape;
use serde::Serialize;
use std::sync::Mutex;

/// Full-width panels shown during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    VideoPool,
    Player,
}

/// One presentation instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CueAction {
    /// Slide the current prompt out and this one in.
    SwapPrompt {
        step: OnboardingStep,
        title: String,
        /// Secondary control text, e.g. the skip link on the naming prompt.
        hint: Option<String>,
    },
    /// Empty the text input and re-arm submit-on-Enter.
    ClearInput,
    ShowNameplate { text: String },
    /// Drop a new shape into the collage.
    DropShape { shape: PlacedShape },
    ShowPanel { panel: Panel },
    /// Release the collage shape at `index` during playback.
    ReleaseShape { index: usize },
    /// Animate the whole collage out.
    ClearCollage,
    ShowReplayFrame { title: String },
}

/// Receives cues from the sequencer.
pub trait Stage: Send + Sync {
    fn perform(&self, action: &CueAction);
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStage;

impl Stage for NullStage {
    fn perform(&self, _action: &CueAction) {}
}

/// Keeps every cue in order. Used headless and in tests.
#[derive(Debug, Default)]
pub struct RecordingStage {
    actions: Mutex<Vec<CueAction>>,
}

impl RecordingStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns and clears the recorded cues.
    pub fn take(&self) -> Vec<CueAction> {
        self.actions
            .lock()
            .map(|mut actions| std::mem::take(&mut *actions))
            .unwrap_or_default()
    }
}

impl Stage for RecordingStage {
    fn perform(&self, action: &CueAction) {
        if let Ok(mut actions) = self.actions.lock() {
            actions.push(action.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_stage_take_clears() {
        let stage = RecordingStage::new();
        stage.perform(&CueAction::ClearInput);
        stage.perform(&CueAction::ClearCollage);

        assert_eq!(
            stage.take(),
            vec![CueAction::ClearInput, CueAction::ClearCollage]
        );
        assert!(stage.take().is_empty());
    }
}
