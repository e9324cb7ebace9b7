//! State machine behind the Upload page.
//!
//! The flow owns the selected media type, the chosen file, its preview
//! handle, the outstanding submission and the last result. It is generic
//! over the file and preview types so the browser can plug in its own
//! handles while the transitions stay testable off the browser.

use derive_more::Display;
use thiserror::Error;
use uuid::Uuid;

use crate::inference::{InferenceError, InferenceResult};
use crate::media::MediaType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    fn new() -> Self {
        SubmissionId(Uuid::new_v4())
    }
}

/// The request currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    /// Media type active when the request was issued.
    pub media_type: MediaType,
    /// Set when the file or media type changed after submit. The
    /// response is still awaited; a successful result is thrown away,
    /// a failure is still reported.
    pub superseded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
    Submitting,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Please select a file")]
    NoFileSelected,
    #[error("An inference request is already in progress")]
    AlreadyInFlight,
}

/// What happened when a response was handed to [`UploadFlow::complete`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The result is now shown.
    Applied,
    /// The request failed; the user has to be told.
    Failed(InferenceError),
    /// The request succeeded but the selection changed while it was in flight.
    Discarded,
    /// No outstanding submission carries this id.
    Unmatched,
}

pub struct UploadFlow<F, P> {
    media_type: MediaType,
    file: Option<F>,
    preview: Option<P>,
    pending: Option<Submission>,
    result: Option<InferenceResult>,
}

impl<F, P> Default for UploadFlow<F, P> {
    fn default() -> Self {
        Self {
            media_type: MediaType::default(),
            file: None,
            preview: None,
            pending: None,
            result: None,
        }
    }
}

impl<F, P> UploadFlow<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    pub fn result(&self) -> Option<&InferenceResult> {
        self.result.as_ref()
    }

    pub fn pending(&self) -> Option<&Submission> {
        self.pending.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Submitting
        } else if self.result.is_some() {
            Phase::Completed
        } else if self.file.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// Switches the media type. Any chosen file, preview and result are
    /// dropped, even when the type did not change.
    pub fn select_media_type(&mut self, media_type: MediaType) {
        self.media_type = media_type;
        self.file = None;
        self.preview = None;
        self.result = None;
        self.supersede_pending();
    }

    /// Replaces the chosen file and its preview. Clears the last result.
    pub fn select_file(&mut self, file: F, preview: P) {
        self.file = Some(file);
        self.preview = Some(preview);
        self.result = None;
        self.supersede_pending();
    }

    /// Hands a response back to the flow. Only the outstanding submission
    /// is accepted; anything else is reported as [`Outcome::Unmatched`].
    pub fn complete(
        &mut self,
        id: SubmissionId,
        response: Result<InferenceResult, InferenceError>,
    ) -> Outcome {
        let submission = match self.pending {
            Some(submission) if submission.id == id => submission,
            _ => return Outcome::Unmatched,
        };
        self.pending = None;

        // Failures are always reported, even for a superseded submission.
        let result = match response {
            Ok(result) => result,
            Err(e) => return Outcome::Failed(e),
        };

        if submission.superseded || submission.media_type != self.media_type {
            return Outcome::Discarded;
        }

        match result {
            result if result.media_type() == submission.media_type => {
                self.result = Some(result);
                Outcome::Applied
            }
            result => Outcome::Failed(InferenceError::Decode(format!(
                "expected {} result, got {}",
                submission.media_type,
                result.media_type()
            ))),
        }
    }

    fn supersede_pending(&mut self) {
        if let Some(submission) = self.pending.as_mut() {
            submission.superseded = true;
        }
    }
}

impl<F: Clone, P> UploadFlow<F, P> {
    /// Starts a submission for the chosen file. Rejected without any state
    /// change when no file is chosen or a request is already in flight.
    pub fn submit(&mut self) -> Result<(Submission, F), FlowError> {
        if self.pending.is_some() {
            return Err(FlowError::AlreadyInFlight);
        }
        let file = self.file.clone().ok_or(FlowError::NoFileSelected)?;

        let submission = Submission {
            id: SubmissionId::new(),
            media_type: self.media_type,
            superseded: false,
        };
        self.pending = Some(submission);
        self.result = None;

        Ok((submission, file))
    }
}
