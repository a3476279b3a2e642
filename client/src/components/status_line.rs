//! Inline status/error message under a form.

use leptos::prelude::*;

#[component]
pub fn StatusLine(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="status-line">{move || message.get()}</p>
        </Show>
    }
}
