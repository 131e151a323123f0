//! Selected file name display.

use leptos::*;
use web_sys::HtmlInputElement;

use crate::config::NO_FILE_CHOSEN_TEXT;

/// Label text for a selection: the first file name, or the placeholder.
pub fn file_name_label<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .next()
        .map(Into::into)
        .unwrap_or_else(|| NO_FILE_CHOSEN_TEXT.to_string())
}

/// Names of the files currently selected in `input`.
pub fn selected_names(input: &HtmlInputElement) -> Vec<String> {
    let Some(files) = input.files() else {
        return Vec::new();
    };

    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| file.name())
        .collect()
}

#[component]
pub fn FileNameLabel(label: ReadSignal<String>) -> impl IntoView {
    view! {
        <span id="fileNameDisplay" class="file-name">
            {move || label.get()}
        </span>
    }
}
