//! Submission flow shared by the upload and text forms.
//!
//! [`UploadSubmitter`] owns the request/response cycle: precondition check,
//! "sending" status, the single network call, and conversion of the
//! [`ClassificationResult`] into a [`ResultPanel`]. The UI regions it
//! writes to are injected as a [`ResultView`].
//!
//! Every submission takes a ticket from a shared [`Generation`] counter.
//! A response only reaches the view while its ticket is still current, so
//! a slow answer can never overwrite the result of a newer submission.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::{CONNECTION_ERROR_TEXT, ENTER_TEXT_TEXT, SELECT_FILE_TEXT, SENDING_TEXT};
use crate::services::upload::Transport;
use crate::types::{
    render_emails, ClassificationResult, ResultPanel, SubmitError, SubmitResult, TransportError,
};

/// Display regions written by the submitter.
pub trait ResultView {
    /// Replace the processing-mode display.
    fn set_mode(&self, mode: &str);

    /// Replace the result container contents.
    fn show(&self, panel: ResultPanel);
}

/// Monotonic submission counter.
#[derive(Clone, Debug, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    /// Start a new submission, invalidating all earlier tickets.
    pub fn advance(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

pub struct UploadSubmitter<T, V> {
    transport: T,
    view: V,
    generation: Generation,
}

impl<T, V> UploadSubmitter<T, V>
where
    T: Transport,
    V: ResultView,
{
    pub fn new(transport: T, view: V) -> Self {
        Self {
            transport,
            view,
            generation: Generation::default(),
        }
    }

    /// Submit the selected file to the upload endpoint.
    ///
    /// Returns the number of rendered email blocks.
    pub async fn submit_file(&self, file: Option<T::File>) -> SubmitResult<usize> {
        let ticket = self.generation.advance();

        let Some(file) = file else {
            self.view.show(ResultPanel::message(SELECT_FILE_TEXT));
            return Err(SubmitError::NoFile);
        };

        self.view.show(ResultPanel::message(SENDING_TEXT));
        let body = self.transport.upload(file).await;
        self.finish(ticket, body)
    }

    /// Submit free text to the ask endpoint.
    pub async fn submit_text(&self, text: &str) -> SubmitResult<usize> {
        let ticket = self.generation.advance();

        if text.trim().is_empty() {
            self.view.show(ResultPanel::message(ENTER_TEXT_TEXT));
            return Err(SubmitError::EmptyText);
        }

        self.view.show(ResultPanel::message(SENDING_TEXT));
        let body = self.transport.ask(text).await;
        self.finish(ticket, body)
    }

    fn finish(&self, ticket: u64, body: Result<String, TransportError>) -> SubmitResult<usize> {
        if !self.generation.is_current(ticket) {
            log::debug!("Discarding response of superseded submission #{}", ticket);
            return Err(SubmitError::Superseded);
        }

        let result = match decode(body) {
            Ok(result) => result,
            Err(e) => {
                log::error!("❌ Submission #{} failed: {}", ticket, e);
                self.view.show(ResultPanel::message(CONNECTION_ERROR_TEXT));
                return Err(e);
            }
        };

        self.view.set_mode(result.mode.as_deref().unwrap_or_default());

        if let Some(error) = result.server_error() {
            log::warn!("Server rejected submission #{}: {}", ticket, error);
            self.view.show(ResultPanel::ServerError(error.to_string()));
            return Err(SubmitError::Server(error.to_string()));
        }

        let Some(emails) = result.emails.as_deref() else {
            log::error!("❌ Submission #{} failed: response has neither error nor emails", ticket);
            self.view.show(ResultPanel::message(CONNECTION_ERROR_TEXT));
            return Err(SubmitError::Transport("Response has no emails".to_string()));
        };

        let panel = ResultPanel::Emails(render_emails(emails));
        let count = panel.block_count();
        log::info!("✅ Submission #{}: {} emails classified", ticket, count);
        self.view.show(panel);
        Ok(count)
    }
}

fn decode(body: Result<String, TransportError>) -> SubmitResult<ClassificationResult> {
    Ok(ClassificationResult::from_json(&body?)?)
}
