//! Account verification with the code issued at sign-up.

#[cfg(test)]
#[path = "verify_account_test.rs"]
mod verify_account_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::form;
use crate::components::form_field::TextField;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::VerifyRequest;
use crate::routes::Page;
use crate::state::session::SessionStore;

const AUTH_CODE_MAX: usize = 10;

pub(crate) fn validate_verification(user_id: Option<String>, code: &str) -> Result<VerifyRequest, &'static str> {
    let user_id = user_id.ok_or("Sign up first so we know which account to verify.")?;
    let auth_code = form::required(code, AUTH_CODE_MAX).ok_or("Enter the verification code.")?;
    Ok(VerifyRequest { user_id, auth_code })
}

#[component]
pub fn VerifyAccountPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let navigate = use_navigate();

    let code = RwSignal::new(untrack(|| store.get_auth_code()).unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let verify_client = client.clone();
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_verification(store.get_user_id(), &code.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying...".to_owned());

        let client = verify_client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::verify_account(&client, &request).await {
                Ok(_) => {
                    busy.set(false);
                    store.update_auth_code(Some(request.auth_code));
                    navigate(Page::SignIn.path(), NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Verification failed: {}", e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    let on_resend = move |_| {
        if busy.get() {
            return;
        }
        let Some(user_id) = store.get_user_id() else {
            info.set("Sign up first so we know which account to verify.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Requesting a new code...".to_owned());

        let client = client.clone();
        spawn_local(async move {
            match api::resend_code(&client, &user_id).await {
                Ok(issued) => {
                    code.set(issued.auth_code.clone());
                    store.update_auth_code(Some(issued.auth_code));
                    info.set("A new code was issued.".to_owned());
                }
                Err(e) => info.set(format!("Could not resend the code: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <Title text=Page::VerifyAccount.title()/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_verify>
                <h1>"Verify your account"</h1>
                <TextField label="Verification code" value=code placeholder="123456"/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Verify"
                </button>
                <button class="form-button form-button--secondary" type="button" disabled=move || busy.get() on:click=on_resend>
                    "Resend code"
                </button>
                <Show when=move || store.get_auth_code().is_some()>
                    <p class="status-line status-line--code">
                        "Code: "
                        <span>{move || store.get_auth_code().unwrap_or_default()}</span>
                    </p>
                </Show>
                <StatusLine message=info/>
            </form>
        </div>
    }
}
