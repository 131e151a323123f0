use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header(mode: ReadSignal<String>) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <span class="logo">{APP_NAME}</span>
            </div>
            <div class="header-right">
                <span class="badge">
                    "Modo: "
                    <span id="processingMode">{move || mode.get()}</span>
                </span>
            </div>
        </header>
    }
}
