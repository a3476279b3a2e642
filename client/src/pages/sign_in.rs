//! Sign-in page: phone number, password and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the user id and token are committed to the session store and
//! the user lands on the main page for the role the gateway reports.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::form;
use crate::components::form_field::{RoleSelect, TextField};
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::{LoggedInUser, LoginRequest, Role};
use crate::routes::{Page, main_page_for};
use crate::state::session::SessionStore;

pub(crate) fn validate_sign_in(phone: &str, password: &str, role: Role) -> Result<LoginRequest, &'static str> {
    let phone_number = form::phone_number(phone).ok_or("Enter a valid phone number.")?;
    let password = form::password(password).ok_or("Password must be 8 to 128 characters.")?;
    Ok(LoginRequest { phone_number, role, password })
}

/// Commit the signed-in identity and return the page to land on.
pub(crate) fn commit_sign_in(store: SessionStore, user: LoggedInUser) -> Page {
    store.update_user_id(Some(user.user_id));
    store.update_token(Some(user.token));
    main_page_for(user.role)
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let navigate = use_navigate();

    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Customer);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_sign_in(&phone.get(), &password.get(), role.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&client, &request).await {
                Ok(user) => {
                    busy.set(false);
                    info.set(String::new());
                    let landing = commit_sign_in(store, user);
                    navigate(landing.path(), NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {}", e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text=Page::SignIn.title()/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <TextField label="Phone number" value=phone input_type="tel" placeholder="09121234567"/>
                <TextField label="Password" value=password input_type="password"/>
                <RoleSelect value=role/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
                <StatusLine message=info/>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href=Page::SignUp.path()>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
