//! Labelled form inputs bound to string signals.
//!
//! DESIGN
//! ======
//! Pages keep every input as a raw `RwSignal<String>` and parse on submit, so
//! these components only mirror the value in and out of the DOM.

use leptos::prelude::*;

use crate::net::types::{Gender, Role};

/// Single-line text input.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Role picker limited to the self-service roles.
#[component]
pub fn RoleSelect(value: RwSignal<Role>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">"Role"</span>
            <select
                class="form-field__input"
                prop:value=move || value.get().as_str()
                on:change=move |ev| {
                    if let Some(role) = Role::parse(&event_target_value(&ev)) {
                        value.set(role);
                    }
                }
            >
                {Role::SELECTABLE
                    .into_iter()
                    .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn GenderSelect(value: RwSignal<Gender>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">"Gender"</span>
            <select
                class="form-field__input"
                prop:value=move || value.get().as_str()
                on:change=move |ev| {
                    if let Some(gender) = Gender::parse(&event_target_value(&ev)) {
                        value.set(gender);
                    }
                }
            >
                <option value="male">"Male"</option>
                <option value="female">"Female"</option>
            </select>
        </label>
    }
}
