//! Application layer for nostalgiaTok.
//!
//! Coordinates the domain types with whatever presentation layer is
//! attached through [`Stage`]: the onboarding state machine, the scripted
//! cue sequencer and the saved-session replay controller.

pub mod onboarding;
pub mod replay;
pub mod sequencer;
pub mod settings;
pub mod stage;

pub use onboarding::{FlowError, OnboardingFlow, OnboardingStep, Transition};
pub use replay::{ReplayController, ReplayError, ReplayFrame};
pub use sequencer::{Cue, Sequence, SequenceOutcome, Sequencer};
pub use settings::FlowSettings;
pub use stage::{CueAction, NullStage, Panel, RecordingStage, Stage};
