//! UI Components for the Inbox Triage application.
//!
//! # Layout Components
//! - [`Header`] - Title and processing mode display
//!
//! # Feature Components
//! - [`UploadForm`] - Email file selection and upload
//! - [`FileNameLabel`] - Name of the selected file
//! - [`AskForm`] - Free-text classification
//! - [`ResultsPanel`] - Classified emails or error messages

mod header;
mod upload;
mod file_label;
mod ask;
mod results;

pub use header::*;
pub use upload::*;
pub use file_label::*;
pub use ask::*;
pub use results::*;
