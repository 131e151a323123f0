//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Classification server request/response structures
//! - **Render Types** - What the result container displays
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{
    DEFAULT_CSS_CLASS, EMPTY_MESSAGE_TEXT, NO_SUBJECT_TEXT,
};

// =============================================================================
// API Types
// =============================================================================

/// Body of `POST /ask`.
#[derive(Clone, Debug, Serialize)]
pub struct AskRequest<'a> {
    pub text: &'a str,
}

/// Response of `/upload` and `/ask`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClassificationResult {
    /// Processing strategy reported by the server
    #[serde(default)]
    pub mode: Option<String>,
    /// Present and non-empty on failure
    #[serde(default)]
    pub error: Option<String>,
    /// Classified emails, in document order. Absent on error payloads.
    #[serde(default)]
    pub emails: Option<Vec<EmailRecord>>,
}

impl ClassificationResult {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// The server-reported error, if any. Empty strings do not count.
    pub fn server_error(&self) -> Option<&str> {
        non_empty(&self.error)
    }
}

/// One classified email and its suggested reply.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EmailRecord {
    #[serde(default)]
    pub assunto: Option<String>,
    #[serde(default)]
    pub mensagem: Option<String>,
    #[serde(default)]
    pub classificacao: Option<String>,
    #[serde(default)]
    pub resposta: Option<String>,
    #[serde(default)]
    pub css_class: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// =============================================================================
// Render Types
// =============================================================================

/// Display model for one [`EmailRecord`].
#[derive(Clone, Debug, PartialEq)]
pub struct EmailBlock {
    /// 1-based position in the response
    pub index: usize,
    pub subject: String,
    /// Rendered whitespace-preserving
    pub message: String,
    pub classification: String,
    pub response: String,
    /// Visual category
    pub category: String,
}

impl EmailBlock {
    /// Build the block for the record at 0-based `position`.
    pub fn from_record(position: usize, record: &EmailRecord) -> Self {
        Self {
            index: position + 1,
            subject: non_empty(&record.assunto).unwrap_or(NO_SUBJECT_TEXT).to_string(),
            message: non_empty(&record.mensagem).unwrap_or(EMPTY_MESSAGE_TEXT).to_string(),
            classification: record.classificacao.clone().unwrap_or_default(),
            response: record.resposta.clone().unwrap_or_default(),
            category: non_empty(&record.css_class).unwrap_or(DEFAULT_CSS_CLASS).to_string(),
        }
    }

    /// Full class attribute of the block.
    pub fn class_name(&self) -> String {
        format!("email-box {}", self.category)
    }

    pub fn heading(&self) -> String {
        format!("Email {}", self.index)
    }
}

/// Convert response records into display blocks, preserving order.
pub fn render_emails(records: &[EmailRecord]) -> Vec<EmailBlock> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| EmailBlock::from_record(i, record))
        .collect()
}

/// Content of the result container.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultPanel {
    /// Nothing submitted yet
    #[default]
    Empty,
    /// Plain text: sending status, validation notice, connection error
    Message(String),
    /// Error reported by the server, shown after the error label
    ServerError(String),
    /// Classified emails
    Emails(Vec<EmailBlock>),
}

impl ResultPanel {
    pub fn message(text: impl Into<String>) -> Self {
        ResultPanel::Message(text.into())
    }

    /// Number of rendered email blocks.
    pub fn block_count(&self) -> usize {
        match self {
            ResultPanel::Emails(blocks) => blocks.len(),
            _ => 0,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Failure during the HTTP exchange.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransportError {
    /// The request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The request was rejected or the connection was lost.
    #[error("HTTP request failed: {0}")]
    Send(String),

    /// The response body could not be read.
    #[error("Failed to read response: {0}")]
    Body(String),
}

/// Why a submission rendered no emails.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    /// Upload form submitted without a file.
    #[error("No file selected")]
    NoFile,

    /// Text form submitted blank.
    #[error("No text entered")]
    EmptyText,

    /// The server answered with an `error` field.
    #[error("Server error: {0}")]
    Server(String),

    /// Network failure or unreadable response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A newer submission started before this one finished.
    #[error("Superseded by a newer submission")]
    Superseded,
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Transport(format!("Failed to parse response: {}", err))
    }
}

/// Result type alias for submissions.
pub type SubmitResult<T> = Result<T, SubmitError>;
