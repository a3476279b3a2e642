//! Customer address book shown under the profile form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Addresses live only in the gateway; the list is fetched on mount and
//! patched locally after each add, delete or preference change.

#[cfg(test)]
#[path = "address_book_test.rs"]
mod address_book_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form;
use crate::components::form_field::TextField;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::{Address, AddressInfo};
use crate::state::session::SessionStore;

const LINE_MAX: usize = 100;
const CITY_MAX: usize = 50;
const POSTAL_CODE_MAX: usize = 20;
const COUNTRY_MAX: usize = 50;

/// Raw address fields as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct AddressForm {
    pub line_1: String,
    pub line_2: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

fn bounded_optional(value: &str, max: usize, message: &'static str) -> Result<Option<String>, &'static str> {
    match form::optional(value) {
        Some(text) if text.chars().count() > max => Err(message),
        other => Ok(other),
    }
}

pub(crate) fn validate_address(input: &AddressForm) -> Result<AddressInfo, &'static str> {
    Ok(AddressInfo {
        address_line_1: form::required(&input.line_1, LINE_MAX).ok_or("Enter the first address line.")?,
        address_line_2: bounded_optional(&input.line_2, LINE_MAX, "Address lines must be at most 100 characters.")?,
        city: form::required(&input.city, CITY_MAX).ok_or("Enter the city.")?,
        postal_code: bounded_optional(&input.postal_code, POSTAL_CODE_MAX, "Postal code must be at most 20 characters.")?,
        country: bounded_optional(&input.country, COUNTRY_MAX, "Country must be at most 50 characters.")?,
    })
}

/// One-line rendering such as `1 Main St, Apt 2, Tehran 12345, Iran`.
pub(crate) fn address_summary(address: &Address) -> String {
    let info = &address.info;
    let city = match &info.postal_code {
        Some(code) => format!("{} {code}", info.city),
        None => info.city.clone(),
    };
    [Some(info.address_line_1.clone()), info.address_line_2.clone(), Some(city), info.country.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Only `address_id` stays marked as the default.
pub(crate) fn mark_preferred(addresses: &[Address], address_id: &str) -> Vec<Address> {
    addresses
        .iter()
        .map(|a| Address { is_default: a.address_id == address_id, ..a.clone() })
        .collect()
}

pub(crate) fn remove_address(addresses: &[Address], address_id: &str) -> Vec<Address> {
    addresses.iter().filter(|a| a.address_id != address_id).cloned().collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum AddressAction {
    Prefer(String),
    Delete(String),
}

#[component]
pub fn AddressBook() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();

    let addresses = RwSignal::new(Vec::<Address>::new());
    let line_1 = RwSignal::new(String::new());
    let line_2 = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load_client = client.clone();
    Effect::new(move || {
        let token = untrack(|| store.get_token());
        let client = load_client.clone();
        spawn_local(async move {
            match api::fetch_addresses(&client, token.as_deref()).await {
                Ok(list) => addresses.set(list),
                Err(e) => info.set(format!("Could not load your addresses: {}", e.user_message())),
            }
        });
    });

    let add_client = client.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = AddressForm {
            line_1: line_1.get(),
            line_2: line_2.get(),
            city: city.get(),
            postal_code: postal_code.get(),
            country: country.get(),
        };
        let request = match validate_address(&input) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = add_client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::add_address(&client, &request, token.as_deref()).await {
                Ok(created) => {
                    addresses.update(|list| {
                        let id = created.address_id.clone();
                        let preferred = created.is_default;
                        list.push(created);
                        if preferred {
                            *list = mark_preferred(list, &id);
                        }
                    });
                    for field in [line_1, line_2, city, postal_code, country] {
                        field.set(String::new());
                    }
                    info.set("Address added.".to_owned());
                }
                Err(e) => info.set(format!("Could not add the address: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    let run_action = move |action: AddressAction| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let client = client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match action {
                AddressAction::Prefer(id) => match api::set_preferred_address(&client, &id, token.as_deref()).await {
                    Ok(_) => {
                        addresses.update(|list| *list = mark_preferred(list, &id));
                        info.set("Default address updated.".to_owned());
                    }
                    Err(e) => info.set(format!("Could not set the default address: {}", e.user_message())),
                },
                AddressAction::Delete(id) => match api::delete_address(&client, &id, token.as_deref()).await {
                    Ok(_) => {
                        addresses.update(|list| *list = remove_address(list, &id));
                        info.set("Address deleted.".to_owned());
                    }
                    Err(e) => info.set(format!("Could not delete the address: {}", e.user_message())),
                },
            }
            busy.set(false);
        });
    };

    view! {
        <section class="form-card">
            <h2>"Addresses"</h2>
            <ul class="card-list">
                {move || {
                    addresses
                        .get()
                        .into_iter()
                        .map(|address| {
                            let summary = address_summary(&address);
                            let is_default = address.is_default;
                            let prefer_id = address.address_id.clone();
                            let delete_id = address.address_id;
                            let prefer = run_action.clone();
                            let delete = run_action.clone();
                            view! {
                                <li class="card">
                                    <p class="card__detail">{summary}</p>
                                    <Show when=move || is_default>
                                        <p class="card__detail">"Default address"</p>
                                    </Show>
                                    <div class="card__actions">
                                        <button
                                            class="form-button form-button--secondary"
                                            hidden=is_default
                                            disabled=move || busy.get()
                                            on:click=move |_| prefer(AddressAction::Prefer(prefer_id.clone()))
                                        >
                                            "Make default"
                                        </button>
                                        <button
                                            class="form-button form-button--danger"
                                            disabled=move || busy.get()
                                            on:click=move |_| delete(AddressAction::Delete(delete_id.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <form class="form-card" on:submit=on_add>
                <TextField label="Address line 1" value=line_1/>
                <TextField label="Address line 2 (optional)" value=line_2/>
                <TextField label="City" value=city/>
                <TextField label="Postal code (optional)" value=postal_code/>
                <TextField label="Country (optional)" value=country/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Add address"
                </button>
            </form>
            <StatusLine message=info/>
        </section>
    }
}
