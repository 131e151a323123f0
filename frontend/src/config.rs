//! Application configuration.
//!
//! Centralized configuration for the Inbox Triage frontend.
//! Endpoints and every user-visible string live here.

/// Backend API base URL.
///
/// Empty means same origin: the page is served by the classification server.
pub const BACKEND_URL: &str = "";

/// File upload endpoint (multipart).
pub const UPLOAD_PATH: &str = "/upload";

/// Free-text classification endpoint (JSON).
pub const ASK_PATH: &str = "/ask";

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Page title.
pub const APP_NAME: &str = "Inbox Triage";

// =============================================================================
// UI strings
// =============================================================================

/// Shown while a request is in flight.
pub const SENDING_TEXT: &str = "Enviando...";

/// Shown when the upload form is submitted without a file.
pub const SELECT_FILE_TEXT: &str = "Selecione um arquivo.";

/// Shown when the text form is submitted blank.
pub const ENTER_TEXT_TEXT: &str = "Digite um texto.";

/// Generic transport failure message.
pub const CONNECTION_ERROR_TEXT: &str = "Erro ao conectar com o servidor.";

/// Label preceding a server-reported error.
pub const ERROR_LABEL: &str = "Erro:";

/// File-name label when nothing is selected.
pub const NO_FILE_CHOSEN_TEXT: &str = "Nenhum arquivo escolhido";

/// Subject placeholder.
pub const NO_SUBJECT_TEXT: &str = "(sem assunto)";

/// Message body placeholder.
pub const EMPTY_MESSAGE_TEXT: &str = "(vazia)";

/// Category used when the server sends none.
pub const DEFAULT_CSS_CLASS: &str = "indefinido";
