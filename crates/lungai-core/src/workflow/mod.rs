//! Mock analysis workflow -- the state machine behind the X-ray panel.
//!
//! ```text
//! Idle ──select_file──▶ FileSelected ──start_analysis──▶ Analyzing ──timer──▶ Completed
//!   ▲                        ▲                                │                    │
//!   └──────── reset ─────────┴──────── select_file ───────────┴────────────────────┘
//! ```
//!
//! The UI owns one [`AnalysisWorkflow`] and calls [`AnalysisWorkflow::process_messages`]
//! once per frame. Timer threads never touch the state directly; they post
//! tagged completions and the workflow applies only the one belonging to the
//! current submission.
pub mod timer;

use crate::analysis::{AnalysisProfile, AnalysisResult, RandomSource, ThreadRandom};
use crate::error::SubmitError;
use crate::settings::Settings;
use crate::upload::UploadedImage;

use chrono::{DateTime, Local};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub use timer::{PendingAnalysis, SharedSource, SubmissionId, WorkflowMessage};

/// Maximum number of timer messages applied per `process_messages` call.
///
/// Only stale completions can pile up (one per superseded submission), so
/// this bound is never reached in normal use.
const MAX_MESSAGES_PER_FRAME: usize = 64;

/// Where the workflow currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    /// Nothing uploaded.
    Idle,
    /// A valid image is recorded; no analysis scheduled.
    FileSelected,
    /// A timer is pending for the current submission.
    Analyzing,
    /// The current submission produced this result.
    Completed(AnalysisResult),
}

impl AnalysisState {
    /// Short label for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::FileSelected => "X-ray selected",
            Self::Analyzing => "Analyzing X-ray...",
            Self::Completed(_) => "Analysis complete",
        }
    }
}

/// State holder for one analysis panel.
pub struct AnalysisWorkflow {
    state: AnalysisState,
    upload: Option<UploadedImage>,
    /// Identifier of the catalog entry the panel belongs to.
    condition: Option<String>,

    profile: AnalysisProfile,
    delay: Duration,
    source: SharedSource,

    last_id: u64,
    current: Option<SubmissionId>,
    pending: Option<PendingAnalysis>,
    tx: Sender<WorkflowMessage>,
    rx: Receiver<WorkflowMessage>,

    completed_at: Option<DateTime<Local>>,
    stale_discarded: u64,
}

impl AnalysisWorkflow {
    /// Workflow with the profile's own delay and the thread-local generator.
    pub fn new(profile: AnalysisProfile) -> Self {
        Self::with_source(profile, profile.delay(), ThreadRandom)
    }

    /// Workflow with an explicit delay and random source.
    pub fn with_source(
        profile: AnalysisProfile,
        delay: Duration,
        source: impl RandomSource + 'static,
    ) -> Self {
        Self::with_boxed_source(profile, delay, Box::new(source))
    }

    /// Workflow configured from the settings file.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_boxed_source(
            settings.profile,
            settings.analysis_delay(),
            settings.random_source(),
        )
    }

    fn with_boxed_source(
        profile: AnalysisProfile,
        delay: Duration,
        source: Box<dyn RandomSource>,
    ) -> Self {
        let (tx, rx) = unbounded();
        Self {
            state: AnalysisState::Idle,
            upload: None,
            condition: None,
            profile,
            delay,
            source: Arc::new(Mutex::new(source)),
            last_id: 0,
            current: None,
            pending: None,
            tx,
            rx,
            completed_at: None,
            stale_discarded: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// The result of the current submission, once it has completed.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            AnalysisState::Completed(r) => Some(r),
            _ => None,
        }
    }

    pub fn upload(&self) -> Option<&UploadedImage> {
        self.upload.as_ref()
    }

    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    pub fn profile(&self) -> AnalysisProfile {
        self.profile
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_analyzing(&self) -> bool {
        self.state == AnalysisState::Analyzing
    }

    /// Id of the most recent `start_analysis` call still in effect.
    pub fn current_submission(&self) -> Option<SubmissionId> {
        self.current
    }

    /// Wall-clock time the current result arrived.
    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }

    /// Completions dropped because their submission had been superseded.
    pub fn stale_discarded(&self) -> u64 {
        self.stale_discarded
    }

    // ── Transitions ───────────────────────────────────────────

    /// Set the catalog entry this panel analyses for. Does not touch the
    /// upload or the state.
    pub fn set_condition(&mut self, condition: Option<&str>) {
        self.condition = condition.map(str::to_owned);
    }

    /// Record `file` as the current upload without starting an analysis.
    ///
    /// Non-image files are refused and leave everything unchanged. A valid
    /// file cancels any pending analysis and clears the previous result.
    pub fn select_file(&mut self, file: UploadedImage) -> Result<(), SubmitError> {
        if !file.is_image() {
            warn!(
                "Rejected upload {} with non-image type {}",
                file.name, file.mime_type
            );
            return Err(SubmitError::InvalidFileType {
                name: file.name.to_string(),
                mime: file.mime_type.to_string(),
            });
        }

        self.cancel_pending();
        info!("Selected {} ({})", file.name, file.display_size());
        self.upload = Some(file);
        self.current = None;
        self.completed_at = None;
        self.state = AnalysisState::FileSelected;
        Ok(())
    }

    /// Schedule an analysis of the current upload.
    ///
    /// Allowed from `FileSelected` and `Completed` (re-analysis of the same
    /// file). Refused while `Analyzing` or when nothing is uploaded.
    pub fn start_analysis(&mut self) -> Result<SubmissionId, SubmitError> {
        if self.is_analyzing() {
            return Err(SubmitError::AnalysisInProgress);
        }
        let Some(upload) = self.upload.as_ref() else {
            return Err(SubmitError::NoFileSelected);
        };

        let id = SubmissionId(self.last_id + 1);
        let pending = timer::schedule(
            id,
            self.profile,
            self.delay,
            Arc::clone(&self.source),
            self.tx.clone(),
        )?;

        info!(
            "Analysis {} started for {} (condition: {}, delay {:?})",
            id,
            upload.name,
            self.condition.as_deref().unwrap_or("none"),
            self.delay
        );
        self.last_id = id.0;
        self.current = Some(id);
        self.pending = Some(pending);
        self.completed_at = None;
        self.state = AnalysisState::Analyzing;
        Ok(id)
    }

    /// Record `file` and analyse it straight away.
    ///
    /// Any analysis still pending for an earlier file is discarded. If the
    /// file is valid but the timer cannot be scheduled, the file stays
    /// selected.
    pub fn submit_file(&mut self, file: UploadedImage) -> Result<SubmissionId, SubmitError> {
        self.select_file(file)?;
        self.start_analysis()
    }

    /// Drop the upload and any result, cancelling a pending analysis.
    /// Used when the user navigates away from the panel.
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.upload = None;
        self.current = None;
        self.completed_at = None;
        self.state = AnalysisState::Idle;
    }

    /// Apply timer completions. Called once per frame.
    ///
    /// Returns `true` if the state changed and the UI should repaint.
    pub fn process_messages(&mut self) -> bool {
        let mut repaint = false;
        let mut messages_this_frame = 0usize;
        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match self.rx.try_recv() {
                Ok(m) => m,
                Err(_) => break,
            };
            messages_this_frame += 1;
            match msg {
                WorkflowMessage::Completed { id, result } => {
                    if self.current == Some(id) && self.is_analyzing() {
                        info!(
                            "Analysis {} complete: confidence {}%, likelihood {}%",
                            id, result.confidence, result.likelihood
                        );
                        self.pending = None;
                        self.completed_at = Some(Local::now());
                        self.state = AnalysisState::Completed(result);
                        repaint = true;
                    } else {
                        debug!("Discarding stale result for analysis {}", id);
                        self.stale_discarded += 1;
                    }
                }
            }
        }
        repaint
    }

    fn cancel_pending(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            pending.cancel();
        }
    }
}
