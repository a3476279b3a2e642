//! Profile editing for the signed-in user.

#[cfg(test)]
#[path = "customer_change_info_test.rs"]
mod customer_change_info_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use super::address_book::AddressBook;
use super::form;
use crate::components::form_field::{GenderSelect, TextField};
use crate::components::nav_bar::NavBar;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::{Gender, UpdateProfileRequest};
use crate::routes::{CUSTOMER_LINKS, Page};
use crate::state::session::SessionStore;

const NAME_MAX: usize = 50;

/// Blank name fields are left unchanged; at least one field must change.
pub(crate) fn validate_profile_update(
    user_id: Option<String>,
    first_name: &str,
    last_name: &str,
    gender: Option<Gender>,
) -> Result<UpdateProfileRequest, &'static str> {
    let user_id = user_id.ok_or("Sign in to edit your profile.")?;
    let first_name = form::optional(first_name);
    let last_name = form::optional(last_name);
    let too_long = |name: &Option<String>| name.as_ref().is_some_and(|n| n.chars().count() > NAME_MAX);
    if too_long(&first_name) || too_long(&last_name) {
        return Err("Names must be at most 50 characters.");
    }
    if first_name.is_none() && last_name.is_none() && gender.is_none() {
        return Err("Nothing to update.");
    }
    Ok(UpdateProfileRequest { user_id, first_name, last_name, gender })
}

#[component]
pub fn CustomerChangeInfoPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let gender = RwSignal::new(Gender::Male);
    let change_gender = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let chosen_gender = change_gender.get().then(|| gender.get());
        let request =
            match validate_profile_update(store.get_user_id(), &first_name.get(), &last_name.get(), chosen_gender) {
                Ok(request) => request,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Saving...".to_owned());

        let client = client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::update_profile(&client, &request, token.as_deref()).await {
                Ok(_) => info.set("Profile updated.".to_owned()),
                Err(e) => info.set(format!("Update failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <Title text=Page::CustomerChangeInfo.title()/>
        <NavBar links=CUSTOMER_LINKS/>
        <main class="page">
            <form class="form-card" on:submit=on_submit>
                <h1>"Edit profile"</h1>
                <TextField label="First name" value=first_name/>
                <TextField label="Last name" value=last_name/>
                <label class="form-field form-field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || change_gender.get()
                        on:change=move |ev| change_gender.set(event_target_checked(&ev))
                    />
                    <span>"Change gender"</span>
                </label>
                <Show when=move || change_gender.get()>
                    <GenderSelect value=gender/>
                </Show>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
                <StatusLine message=info/>
            </form>
            <AddressBook/>
        </main>
    }
}
