//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - HTTP transport to the classification server
//! - [`submitter`] - Submission flow and result rendering

pub mod upload;
pub mod submitter;

pub use upload::*;
pub use submitter::*;

use std::rc::Rc;

use crate::components::SignalView;

/// The submitter wired to the browser, shared by both forms.
pub type SharedSubmitter = Rc<UploadSubmitter<HttpTransport, SignalView>>;
