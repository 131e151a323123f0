//! Result container and the signal-backed [`ResultView`].

use leptos::*;

use crate::config::ERROR_LABEL;
use crate::services::ResultView;
use crate::types::{EmailBlock, ResultPanel};

/// [`ResultView`] writing into Leptos signals.
#[derive(Clone, Copy)]
pub struct SignalView {
    set_mode: WriteSignal<String>,
    set_panel: WriteSignal<ResultPanel>,
}

impl SignalView {
    pub fn new(set_mode: WriteSignal<String>, set_panel: WriteSignal<ResultPanel>) -> Self {
        Self { set_mode, set_panel }
    }
}

impl ResultView for SignalView {
    fn set_mode(&self, mode: &str) {
        self.set_mode.set(mode.to_string());
    }

    fn show(&self, panel: ResultPanel) {
        self.set_panel.set(panel);
    }
}

#[component]
pub fn ResultsPanel(panel: ReadSignal<ResultPanel>) -> impl IntoView {
    view! {
        <div id="responseContent" class="response-content">
            {move || match panel.get() {
                ResultPanel::Empty => ().into_view(),
                ResultPanel::Message(text) => text.into_view(),
                ResultPanel::ServerError(error) => view! {
                    <strong>{ERROR_LABEL}</strong>
                    " "
                    {error}
                }
                .into_view(),
                ResultPanel::Emails(blocks) => blocks
                    .into_iter()
                    .map(|block| view! { <EmailBox block=block/> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn EmailBox(block: EmailBlock) -> impl IntoView {
    let class = block.class_name();
    let heading = block.heading();

    view! {
        <div class=class>
            <h3>{heading}</h3>
            <p><strong>"Assunto:"</strong> " " {block.subject}</p>
            <p>
                <strong>"Mensagem:"</strong>
                " "
                <pre style="white-space:pre-wrap">{block.message}</pre>
            </p>
            <p><strong>"Classificação:"</strong> " " {block.classification}</p>
            <p><strong>"Resposta:"</strong> " " {block.response}</p>
        </div>
    }
}
