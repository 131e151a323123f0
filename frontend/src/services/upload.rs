//! HTTP exchange with the classification server.
//!
//! [`Transport`] is the seam between the submitter and the network;
//! [`HttpTransport`] is the browser implementation on top of `gloo-net`.

use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::{ASK_PATH, BACKEND_URL, FILE_FIELD, UPLOAD_PATH};
use crate::types::{AskRequest, TransportError};

/// Sends submissions and returns the raw response body.
///
/// The HTTP status is not interpreted: the server reports its own failures
/// inside the JSON body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Handle to a user-selected file.
    type File;

    /// `POST` the file as multipart form data.
    async fn upload(&self, file: Self::File) -> Result<String, TransportError>;

    /// `POST` free text as JSON.
    async fn ask(&self, text: &str) -> Result<String, TransportError>;
}

/// Browser transport using `fetch`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl Transport for HttpTransport {
    type File = File;

    async fn upload(&self, file: File) -> Result<String, TransportError> {
        let form_data = FormData::new().map_err(js_error(TransportError::Request))?;
        form_data
            .append_with_blob_and_filename(FILE_FIELD, &file, &file.name())
            .map_err(js_error(TransportError::Request))?;

        log::info!("📤 Uploading {} ({} bytes)", file.name(), file.size());

        let request = Request::post(&self.url(UPLOAD_PATH))
            .body(form_data)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        read_body(response).await
    }

    async fn ask(&self, text: &str) -> Result<String, TransportError> {
        log::info!("📤 Sending {} characters for classification", text.chars().count());

        let request = Request::post(&self.url(ASK_PATH))
            .json(&AskRequest { text })
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<String, TransportError> {
    if !response.ok() {
        log::debug!("Server answered HTTP {}", response.status());
    }

    response
        .text()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))
}

fn js_error(variant: fn(String) -> TransportError) -> impl Fn(JsValue) -> TransportError {
    move |value| variant(format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_urls() {
        let transport = HttpTransport::default();
        assert_eq!(transport.url(UPLOAD_PATH), "/upload");
        assert_eq!(transport.url(ASK_PATH), "/ask");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let transport = HttpTransport::new("http://localhost:5000/");
        assert_eq!(transport.url(UPLOAD_PATH), "http://localhost:5000/upload");
    }

    #[test]
    fn test_ask_request_body() {
        let body = serde_json::to_value(AskRequest { text: "Preciso do relatório" }).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "Preciso do relatório" }));
    }
}
