//! Email file upload form.
//!
//! Handles file selection, the file-name label and submission.

use leptos::*;
use web_sys::HtmlInputElement;

use super::file_label::{file_name_label, selected_names, FileNameLabel};
use crate::services::SharedSubmitter;

#[component]
pub fn UploadForm(submitter: SharedSubmitter) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();
    let (file_label, set_file_label) = create_signal(file_name_label(Vec::<String>::new()));

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        set_file_label.set(file_name_label(selected_names(&input)));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let submitter = submitter.clone();
        spawn_local(async move {
            if let Err(e) = submitter.submit_file(file).await {
                log::debug!("Upload finished without results: {}", e);
            }
        });
    };

    view! {
        <form id="uploadForm" class="upload-section" on:submit=on_submit>
            <label for="fileInput" class="upload-button">
                "Escolher arquivo"
            </label>
            <input
                type="file"
                id="fileInput"
                accept=".txt,.pdf"
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />
            <FileNameLabel label=file_label/>
            <button type="submit" class="submit-button">"Enviar"</button>
        </form>
    }
}
