//! Free-text classification form.

use leptos::*;

use crate::services::SharedSubmitter;

#[component]
pub fn AskForm(submitter: SharedSubmitter) -> impl IntoView {
    let text_input = create_node_ref::<html::Textarea>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let text = text_input.get().map(|input| input.value()).unwrap_or_default();
        let submitter = submitter.clone();
        spawn_local(async move {
            if let Err(e) = submitter.submit_text(&text).await {
                log::debug!("Text submission finished without results: {}", e);
            }
        });
    };

    view! {
        <form id="askForm" class="ask-section" on:submit=on_submit>
            <textarea
                id="askText"
                rows="6"
                placeholder="Cole aqui o texto de um email"
                node_ref=text_input
            ></textarea>
            <button type="submit" class="submit-button">"Classificar texto"</button>
        </form>
    }
}
