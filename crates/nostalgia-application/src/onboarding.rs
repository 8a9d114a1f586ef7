//! The guided onboarding flow.
//!
//! ```text
//! Name -> Year -> Preferences -> Topics -> NameThisMemory -> Saved -> Playback
//!          ^                                                              |
//!          +-------------------------- restart ----------------------------+
//! ```
//!
//! Every transition holds the flow lock from the moment input is accepted
//! until its cue sequence has finished. A second submission that arrives
//! while a transition is in flight is rejected with
//! [`FlowError::TransitionInFlight`] rather than queued.
//!
//! Storage failures never stop the flow. A failed append or name write is
//! logged and the flow continues as if nothing had been saved.

use crate::sequencer::{Sequence, Sequencer};
use crate::settings::FlowSettings;
use crate::stage::{CueAction, Panel, Stage};
use nostalgia_core::locale::Phrase;
use nostalgia_core::session::{Session, SessionRecordStore, StoredRecord};
use nostalgia_core::shape::{Category, Collage, PlacedShape};
use nostalgia_core::user::ProfileRepository;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    #[default]
    Name,
    Year,
    Preferences,
    Topics,
    NameThisMemory,
    Saved,
    Playback,
}

impl OnboardingStep {
    /// The prompt shown while waiting in this step, if it takes input.
    pub fn prompt(self) -> Option<Phrase> {
        match self {
            Self::Name => Some(Phrase::AskName),
            Self::Year => Some(Phrase::AskPeriod),
            Self::Preferences => Some(Phrase::AskCreators),
            Self::Topics => Some(Phrase::AskTopics),
            Self::NameThisMemory => Some(Phrase::AskLabel),
            Self::Saved | Self::Playback => None,
        }
    }

    pub fn accepts_input(self) -> bool {
        self.prompt().is_some()
    }

    /// The session field collected in this step.
    pub fn category(self) -> Option<Category> {
        match self {
            Self::Year => Some(Category::Year),
            Self::Preferences => Some(Category::Preferences),
            Self::Topics => Some(Category::Topics),
            _ => None,
        }
    }

    /// Saved sessions may be browsed only before the draft has content
    /// beyond the year.
    pub fn allows_replay(self) -> bool {
        matches!(self, Self::Name | Self::Year)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("a transition is already in flight")]
    TransitionInFlight,

    #[error("cannot {action} while in step {step:?}")]
    InvalidStep {
        step: OnboardingStep,
        action: &'static str,
    },

    #[error("the flow has been abandoned")]
    Abandoned,
}

/// What a completed transition did.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: OnboardingStep,
    pub to: OnboardingStep,
    /// Shapes added to the collage by this transition.
    pub shapes: Vec<PlacedShape>,
    /// Record appended to the store, if the append succeeded.
    pub saved: Option<StoredRecord>,
    pub cues_run: usize,
}

#[derive(Debug, Default)]
struct FlowState {
    step: OnboardingStep,
    name: Option<String>,
    draft: Session,
    collage: Collage,
    /// Set while a chosen saved session is playing back.
    template: Option<Session>,
}

pub struct OnboardingFlow {
    state: Mutex<FlowState>,
    records: Arc<dyn SessionRecordStore>,
    profile: Arc<dyn ProfileRepository>,
    sequencer: Sequencer,
    settings: FlowSettings,
    cancel: CancellationToken,
}

impl OnboardingFlow {
    pub fn new(
        records: Arc<dyn SessionRecordStore>,
        profile: Arc<dyn ProfileRepository>,
        stage: Arc<dyn Stage>,
        settings: FlowSettings,
    ) -> Self {
        Self {
            state: Mutex::new(FlowState::default()),
            records,
            profile,
            sequencer: Sequencer::new(stage),
            settings,
            cancel: CancellationToken::new(),
        }
    }

    /// Shows the first prompt.
    ///
    /// A returning user with a stored name is greeted and starts at
    /// [`OnboardingStep::Year`]; everyone else starts at
    /// [`OnboardingStep::Name`].
    pub async fn begin(&self) -> Result<Transition, FlowError> {
        let mut state = self.acquire()?;
        let from = state.step;

        let stored = match self.profile.load_name().await {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, "could not read stored name, asking again");
                None
            }
        };

        let catalog = &self.settings.catalog;
        let timings = self.settings.timings;
        let sequence = match &stored {
            Some(name) => {
                info!(name = %name, "returning user");
                Sequence::new()
                    .then(CueAction::SwapPrompt {
                        step: OnboardingStep::Name,
                        title: catalog.greeting(name),
                        hint: None,
                    })
                    .after(
                        timings.prompt_swap(),
                        CueAction::ShowNameplate {
                            text: catalog.nameplate(name),
                        },
                    )
                    .after(timings.prompt_swap(), self.prompt_cue(OnboardingStep::Year))
            }
            None => Sequence::new().then(self.prompt_cue(OnboardingStep::Name)),
        };

        state.step = if stored.is_some() {
            OnboardingStep::Year
        } else {
            OnboardingStep::Name
        };
        state.name = stored;
        state.draft = Session::new();
        state.collage.clear();
        state.template = None;

        self.finish(state, from, sequence, Vec::new(), None).await
    }

    /// Submits text for the current step.
    pub async fn advance(&self, input: &str) -> Result<Transition, FlowError> {
        let mut state = self.acquire()?;
        let from = state.step;

        match from {
            OnboardingStep::Name => self.submit_name(state, input).await,
            OnboardingStep::Year | OnboardingStep::Preferences | OnboardingStep::Topics => {
                self.submit_field(&mut state, input);
                let shapes = self.collect_field(&mut state, input);
                let next = match from {
                    OnboardingStep::Year => OnboardingStep::Preferences,
                    OnboardingStep::Preferences => OnboardingStep::Topics,
                    _ => OnboardingStep::NameThisMemory,
                };
                state.step = next;
                let sequence = self.drop_sequence(&shapes, next);
                self.finish(state, from, sequence, shapes, None).await
            }
            OnboardingStep::NameThisMemory => {
                let record = StoredRecord::new(input, state.draft.clone());
                let saved = match self.records.append(&record).await {
                    Ok(()) => {
                        info!(label = %record.label, "session saved");
                        Some(record)
                    }
                    Err(e) => {
                        warn!(error = %e, "could not save session, continuing without it");
                        None
                    }
                };
                self.play_back(state, from, saved).await
            }
            OnboardingStep::Saved | OnboardingStep::Playback => Err(FlowError::InvalidStep {
                step: from,
                action: "submit input",
            }),
        }
    }

    /// Declines to label the session. Nothing is saved.
    pub async fn skip_naming(&self) -> Result<Transition, FlowError> {
        let state = self.acquire()?;
        let from = state.step;
        if from != OnboardingStep::NameThisMemory {
            return Err(FlowError::InvalidStep {
                step: from,
                action: "skip naming",
            });
        }
        debug!("naming skipped, session not saved");
        self.play_back(state, from, None).await
    }

    /// Plays back a saved session chosen from the replay view.
    ///
    /// The template is rendered read-only. The current draft is discarded
    /// when playback ends and the flow restarts.
    pub async fn enter_playback(&self, template: Session) -> Result<Transition, FlowError> {
        let mut state = self.acquire()?;
        let from = state.step;
        state.draft = Session::new();
        state.collage = Collage::from_session(&self.settings.generator, &template);
        state.template = Some(template);
        let shapes = state.collage.shapes().to_vec();

        let mut sequence = Sequence::new().then(CueAction::ClearCollage);
        for shape in &shapes {
            sequence.push(
                self.settings.timings.shape_drop(),
                CueAction::DropShape {
                    shape: shape.clone(),
                },
            );
        }
        for action in self.playback_actions(shapes.len()) {
            sequence.push(action.0, action.1);
        }
        state.step = OnboardingStep::Playback;
        self.finish(state, from, sequence, shapes, None).await
    }

    /// Leaves playback and starts a new session at the year prompt. The
    /// stored name is kept.
    pub async fn restart(&self) -> Result<Transition, FlowError> {
        let mut state = self.acquire()?;
        let from = state.step;
        if from != OnboardingStep::Playback {
            return Err(FlowError::InvalidStep {
                step: from,
                action: "restart",
            });
        }
        state.draft = Session::new();
        state.collage.clear();
        state.template = None;
        state.step = OnboardingStep::Year;

        let sequence = Sequence::new()
            .then(CueAction::ClearCollage)
            .after(
                self.settings.timings.prompt_swap(),
                self.prompt_cue(OnboardingStep::Year),
            );
        self.finish(state, from, sequence, Vec::new(), None).await
    }

    /// Drops the draft and returns to name entry.
    pub async fn return_to_start(&self) -> Result<Transition, FlowError> {
        let mut state = self.acquire()?;
        let from = state.step;
        state.draft = Session::new();
        state.collage.clear();
        state.template = None;
        state.step = OnboardingStep::Name;

        let sequence = Sequence::new()
            .then(CueAction::ClearCollage)
            .then(CueAction::ClearInput)
            .then(self.prompt_cue(OnboardingStep::Name));
        self.finish(state, from, sequence, Vec::new(), None).await
    }

    /// Stops any running cue sequence and refuses further transitions.
    /// An unsaved draft is lost.
    pub fn abandon(&self) {
        info!("onboarding abandoned");
        self.cancel.cancel();
    }

    pub fn is_abandoned(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Current step. Waits for an in-flight transition to finish.
    pub async fn step(&self) -> OnboardingStep {
        self.state.lock().await.step
    }

    pub async fn draft(&self) -> Session {
        self.state.lock().await.draft.clone()
    }

    pub async fn collage(&self) -> Collage {
        self.state.lock().await.collage.clone()
    }

    pub async fn name(&self) -> Option<String> {
        self.state.lock().await.name.clone()
    }

    pub fn settings(&self) -> &FlowSettings {
        &self.settings
    }

    fn acquire(&self) -> Result<MutexGuard<'_, FlowState>, FlowError> {
        if self.cancel.is_cancelled() {
            return Err(FlowError::Abandoned);
        }
        self.state
            .try_lock()
            .map_err(|_| FlowError::TransitionInFlight)
    }

    async fn submit_name(
        &self,
        mut state: MutexGuard<'_, FlowState>,
        input: &str,
    ) -> Result<Transition, FlowError> {
        let catalog = &self.settings.catalog;
        let name = if input.is_empty() {
            catalog.text(Phrase::Your).to_string()
        } else {
            input.to_string()
        };

        if let Err(e) = self.profile.save_name(&name).await {
            warn!(error = %e, "could not store name");
        }

        let sequence = Sequence::new()
            .then(CueAction::ClearInput)
            .then(CueAction::ShowNameplate {
                text: catalog.nameplate(&name),
            })
            .after(
                self.settings.timings.prompt_swap(),
                self.prompt_cue(OnboardingStep::Year),
            );

        state.name = Some(name);
        state.step = OnboardingStep::Year;
        self.finish(state, OnboardingStep::Name, sequence, Vec::new(), None)
            .await
    }

    fn submit_field(&self, state: &mut FlowState, input: &str) {
        match state.step {
            OnboardingStep::Year => state.draft.year = input.to_string(),
            OnboardingStep::Preferences => state.draft.preferences = input.to_string(),
            OnboardingStep::Topics => state.draft.topics = input.to_string(),
            _ => {}
        }
    }

    fn collect_field(&self, state: &mut FlowState, input: &str) -> Vec<PlacedShape> {
        let Some(category) = state.step.category() else {
            return Vec::new();
        };
        let shapes = state
            .collage
            .add_field(&self.settings.generator, input, category);
        debug!(%category, count = shapes.len(), "shapes generated");
        shapes
    }

    /// Plays back the current collage.
    ///
    /// The flow sits in [`OnboardingStep::Saved`] while the release cues run
    /// and settles in [`OnboardingStep::Playback`] once they have all played.
    /// A flow abandoned mid-release stays in `Saved`.
    async fn play_back(
        &self,
        mut state: MutexGuard<'_, FlowState>,
        from: OnboardingStep,
        saved: Option<StoredRecord>,
    ) -> Result<Transition, FlowError> {
        let mut sequence = Sequence::new().then(CueAction::ClearInput);
        for (delay, action) in self.playback_actions(state.collage.len()) {
            sequence.push(delay, action);
        }
        state.step = OnboardingStep::Saved;
        let outcome = self.sequencer.run(sequence, &self.cancel).await;
        if outcome.cancelled {
            debug!(?from, cues = outcome.completed, "playback interrupted");
            return Err(FlowError::Abandoned);
        }
        state.step = OnboardingStep::Playback;
        drop(state);

        debug!(?from, cues = outcome.completed, "playback started");
        Ok(Transition {
            from,
            to: OnboardingStep::Playback,
            shapes: Vec::new(),
            saved,
            cues_run: outcome.completed,
        })
    }

    fn playback_actions(&self, shape_count: usize) -> Vec<(Duration, CueAction)> {
        let timings = self.settings.timings;
        let mut actions = vec![(
            timings.prompt_swap(),
            CueAction::ShowPanel {
                panel: Panel::VideoPool,
            },
        )];
        for index in 0..shape_count {
            actions.push((timings.release_interval(), CueAction::ReleaseShape { index }));
        }
        actions.push((
            timings.shape_settle(),
            CueAction::ShowPanel {
                panel: Panel::Player,
            },
        ));
        actions
    }

    fn drop_sequence(&self, shapes: &[PlacedShape], next: OnboardingStep) -> Sequence {
        let timings = self.settings.timings;
        let mut sequence = Sequence::new().then(CueAction::ClearInput);
        for shape in shapes {
            sequence.push(
                timings.shape_drop(),
                CueAction::DropShape {
                    shape: shape.clone(),
                },
            );
        }
        let settle = if shapes.is_empty() {
            timings.prompt_swap()
        } else {
            timings.shape_settle().max(timings.prompt_swap())
        };
        sequence.push(settle, self.prompt_cue(next));
        sequence
    }

    fn prompt_cue(&self, step: OnboardingStep) -> CueAction {
        let catalog = &self.settings.catalog;
        let title = step
            .prompt()
            .map(|phrase| catalog.plain(phrase))
            .unwrap_or_default();
        let hint = match step {
            OnboardingStep::NameThisMemory => Some(catalog.plain(Phrase::SkipLabel)),
            OnboardingStep::Name | OnboardingStep::Year => Some(catalog.plain(Phrase::ViewSaved)),
            _ => None,
        };
        CueAction::SwapPrompt { step, title, hint }
    }

    /// Runs the transition's cues while still holding the lock.
    async fn finish(
        &self,
        state: MutexGuard<'_, FlowState>,
        from: OnboardingStep,
        sequence: Sequence,
        shapes: Vec<PlacedShape>,
        saved: Option<StoredRecord>,
    ) -> Result<Transition, FlowError> {
        let to = state.step;
        let outcome = self.sequencer.run(sequence, &self.cancel).await;
        drop(state);

        debug!(?from, ?to, cues = outcome.completed, "transition complete");
        if outcome.cancelled {
            return Err(FlowError::Abandoned);
        }
        Ok(Transition {
            from,
            to,
            shapes,
            saved,
            cues_run: outcome.completed,
        })
    }
}
