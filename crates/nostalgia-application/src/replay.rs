//! Browsing saved sessions.
//!
//! The controller loads every record once on [`ReplayController::start`]
//! and walks a cursor over them. Deleting writes through to the store and
//! reloads, so the cursor always indexes what the store holds.

use crate::onboarding::{FlowError, OnboardingFlow, Transition};
use crate::sequencer::{Sequence, Sequencer};
use crate::settings::FlowSettings;
use crate::stage::{CueAction, Stage};
use nostalgia_core::StoreError;
use nostalgia_core::session::{SessionRecordStore, StoredRecord};
use nostalgia_core::shape::Collage;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("no saved sessions")]
    EmptyStore,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// The saved session under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayFrame {
    /// `label(position/count)`, with a 1-based position.
    pub title: String,
    pub record: StoredRecord,
    pub collage: Collage,
    pub cursor: usize,
    pub count: usize,
}

pub struct ReplayController {
    records: Arc<dyn SessionRecordStore>,
    sequencer: Sequencer,
    settings: FlowSettings,
    loaded: Vec<StoredRecord>,
    cursor: usize,
    cancel: CancellationToken,
}

impl ReplayController {
    pub fn new(
        records: Arc<dyn SessionRecordStore>,
        stage: Arc<dyn Stage>,
        settings: FlowSettings,
    ) -> Self {
        Self {
            records,
            sequencer: Sequencer::new(stage),
            settings,
            loaded: Vec::new(),
            cursor: 0,
            cancel: CancellationToken::new(),
        }
    }

    /// Loads all records and shows the first one.
    ///
    /// Returns `None` when nothing is saved. An unreadable store counts as
    /// empty.
    pub async fn start(&mut self) -> Option<ReplayFrame> {
        self.loaded = match self.records.list_all().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "could not load saved sessions");
                Vec::new()
            }
        };
        self.cursor = 0;
        info!(count = self.loaded.len(), "replay started");

        if self.loaded.is_empty() {
            return None;
        }
        Some(self.show().await)
    }

    /// Moves to the next record, wrapping after the last.
    pub async fn next(&mut self) -> Result<ReplayFrame, ReplayError> {
        if self.loaded.is_empty() {
            return Err(ReplayError::EmptyStore);
        }
        self.cursor = (self.cursor + 1) % self.loaded.len();
        Ok(self.show().await)
    }

    /// Deletes the record under the cursor, then advances as [`next`] does.
    ///
    /// Returns [`ReplayError::EmptyStore`] once the last record is gone.
    ///
    /// [`next`]: ReplayController::next
    pub async fn delete(&mut self) -> Result<ReplayFrame, ReplayError> {
        if self.loaded.is_empty() {
            return Err(ReplayError::EmptyStore);
        }
        let index = self.cursor;
        self.records.delete_at(index).await?;

        self.loaded = match self.records.list_all().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "reload after delete failed, pruning locally");
                let mut local = std::mem::take(&mut self.loaded);
                local.remove(index);
                local
            }
        };
        debug!(index, remaining = self.loaded.len(), "record deleted");

        if self.loaded.is_empty() {
            self.cursor = 0;
            self.sequencer
                .run(Sequence::new().then(CueAction::ClearCollage), &self.cancel)
                .await;
            return Err(ReplayError::EmptyStore);
        }
        self.cursor = (index + 1) % self.loaded.len();
        Ok(self.show().await)
    }

    /// Hands the record under the cursor to the flow for playback.
    pub async fn choose(&mut self, flow: &OnboardingFlow) -> Result<Transition, ReplayError> {
        let record = self
            .loaded
            .get(self.cursor)
            .cloned()
            .ok_or(ReplayError::EmptyStore)?;
        info!(label = %record.label, "replaying saved session");
        self.close();
        Ok(flow.enter_playback(record.session).await?)
    }

    /// Leaves the replay view without changing anything.
    pub async fn exit(&mut self) {
        self.close();
        self.sequencer
            .run(Sequence::new().then(CueAction::ClearCollage), &self.cancel)
            .await;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    fn close(&mut self) {
        self.loaded.clear();
        self.cursor = 0;
    }

    async fn show(&self) -> ReplayFrame {
        let frame = self.frame();
        let timings = self.settings.timings;

        let mut sequence = Sequence::new()
            .then(CueAction::ClearCollage)
            .then(CueAction::ShowReplayFrame {
                title: frame.title.clone(),
            });
        for shape in frame.collage.shapes() {
            sequence.push(
                timings.shape_drop(),
                CueAction::DropShape {
                    shape: shape.clone(),
                },
            );
        }
        self.sequencer.run(sequence, &self.cancel).await;
        frame
    }

    fn frame(&self) -> ReplayFrame {
        let count = self.loaded.len();
        let record = self.loaded[self.cursor % count].clone();
        let collage = Collage::from_session(&self.settings.generator, &record.session);
        ReplayFrame {
            title: format!("{}({}/{})", record.label, self.cursor + 1, count),
            record,
            collage,
            cursor: self.cursor,
            count,
        }
    }
}
