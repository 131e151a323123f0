//! Inbox Triage - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that sends email files (or pasted text) to the
//! classification server and displays each email's category and suggested
//! reply.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (processing mode)                                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── UploadForm + FileNameLabel ──┐                         │
//! │  ├── AskForm ─────────────────────┤ UploadSubmitter         │
//! │  └── ResultsPanel ◀───────────────┘ (SignalView)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints and UI strings
//! - [`types`] - Response, render and error types
//! - [`components`] - UI components (Header, UploadForm, ResultsPanel, etc.)
//! - [`services`] - Transport and submission flow

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    ClassificationResult, EmailRecord,
    // Render
    EmailBlock, ResultPanel,
    // Errors
    SubmitError, SubmitResult, TransportError,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic and logging hooks, then mount the app.
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📬 Inbox Triage - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (mode, set_mode) = create_signal(String::new());
    let (panel, set_panel) = create_signal(ResultPanel::Empty);

    let submitter: SharedSubmitter = Rc::new(UploadSubmitter::new(
        HttpTransport::default(),
        SignalView::new(set_mode, set_panel),
    ));

    view! {
        <Header mode=mode/>

        <div class="container">
            <UploadForm submitter=submitter.clone()/>
            <AskForm submitter=submitter/>
            <ResultsPanel panel=panel/>
        </div>
    }
}
