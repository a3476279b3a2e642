//! Sign-up page creating a customer, driver or supplier account.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway answers with the new user id and a verification code; both go
//! into the session store before moving on to account verification.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::form;
use crate::components::form_field::{GenderSelect, RoleSelect, TextField};
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::{AuthCodeResponse, Gender, RegistrationRequest, Role};
use crate::routes::Page;
use crate::state::session::SessionStore;

const NAME_MAX: usize = 50;
const NATIONAL_ID_MAX: usize = 20;

/// Raw sign-up input as typed.
#[derive(Clone, Debug, Default)]
pub(crate) struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub gender: Gender,
    pub national_id: String,
}

pub(crate) fn validate_sign_up(input: &SignUpForm) -> Result<RegistrationRequest, &'static str> {
    let first_name = form::required(&input.first_name, NAME_MAX).ok_or("Enter your first name.")?;
    let last_name = form::required(&input.last_name, NAME_MAX).ok_or("Enter your last name.")?;
    let phone_number = form::phone_number(&input.phone).ok_or("Enter a valid phone number.")?;
    let password = form::password(&input.password).ok_or("Password must be 8 to 128 characters.")?;
    if input.password != input.confirm_password {
        return Err("Passwords do not match.");
    }
    let national_id = form::optional(&input.national_id);
    if national_id.as_ref().is_some_and(|id| id.chars().count() > NATIONAL_ID_MAX) {
        return Err("National id must be at most 20 characters.");
    }
    Ok(RegistrationRequest {
        first_name,
        last_name,
        phone_number,
        password,
        role: input.role,
        gender: input.gender,
        national_id,
    })
}

/// Commit the new account's id and verification code; returns the next page.
pub(crate) fn commit_sign_up(store: SessionStore, created: AuthCodeResponse) -> Page {
    store.update_user_id(Some(created.user_id));
    store.update_auth_code(Some(created.auth_code));
    Page::VerifyAccount
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let national_id = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Customer);
    let gender = RwSignal::new(Gender::Male);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = SignUpForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            phone: phone.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            role: role.get(),
            gender: gender.get(),
            national_id: national_id.get(),
        };
        let request = match validate_sign_up(&input) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&client, &request).await {
                Ok(created) => {
                    busy.set(false);
                    info.set(String::new());
                    let next = commit_sign_up(store, created);
                    navigate(next.path(), NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Sign-up failed: {}", e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text=Page::SignUp.title()/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <TextField label="First name" value=first_name/>
                <TextField label="Last name" value=last_name/>
                <TextField label="Phone number" value=phone input_type="tel" placeholder="09121234567"/>
                <TextField label="Password" value=password input_type="password"/>
                <TextField label="Confirm password" value=confirm_password input_type="password"/>
                <TextField label="National id (optional)" value=national_id/>
                <RoleSelect value=role/>
                <GenderSelect value=gender/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Sign up"
                </button>
                <StatusLine message=info/>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href=Page::SignIn.path()>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
