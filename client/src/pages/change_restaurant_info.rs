//! Edit or delete the supplier's restaurant.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is pre-filled from the restaurant cached in the session store; a
//! successful update is merged back into the store without a refetch.

#[cfg(test)]
#[path = "change_restaurant_info_test.rs"]
mod change_restaurant_info_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::register_restaurant::{RestaurantFields, RestaurantForm, validate_location};
use crate::components::form_field::TextField;
use crate::components::nav_bar::NavBar;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::{RestaurantInfo, UpdateRestaurantRequest};
use crate::routes::{Page, SUPPLIER_LINKS};
use crate::state::session::SessionStore;

pub(crate) fn validate_restaurant_update(
    restaurant_id: Option<String>,
    input: &RestaurantForm,
) -> Result<UpdateRestaurantRequest, &'static str> {
    let restaurant_id = restaurant_id.ok_or("Register a restaurant first.")?;
    let location = validate_location(input)?;
    Ok(UpdateRestaurantRequest {
        restaurant_id,
        name: location.name,
        postal_code: location.postal_code,
        address: location.address,
        address_lat: location.address_lat,
        address_lng: location.address_lng,
    })
}

/// Cached restaurant with the updated fields applied.
pub(crate) fn apply_update(info: &RestaurantInfo, update: &UpdateRestaurantRequest) -> RestaurantInfo {
    RestaurantInfo {
        name: update.name.clone(),
        postal_code: update.postal_code.clone(),
        address: update.address.clone(),
        address_lat: update.address_lat,
        address_lng: update.address_lng,
        ..info.clone()
    }
}

#[component]
pub fn ChangeRestaurantInfoPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let navigate = use_navigate();

    let initial = untrack(|| store.get_restaurant_info())
        .map(|info| RestaurantForm::from_info(&info))
        .unwrap_or_default();
    let fields = RestaurantFields::new(initial);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Refill when the cached restaurant arrives after mount.
    Effect::new(move |previous: Option<Option<String>>| {
        let current = store.get_restaurant_info();
        let id = current.as_ref().map(|r| r.id.clone());
        if previous.is_some_and(|prev| prev != id) {
            if let Some(restaurant) = current {
                fields.fill(RestaurantForm::from_info(&restaurant));
            }
        }
        id
    });

    let save_client = client.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let cached = store.get_restaurant_info();
        let request = match validate_restaurant_update(cached.as_ref().map(|r| r.id.clone()), &fields.read()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        let client = save_client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::update_restaurant(&client, &request, token.as_deref()).await {
                Ok(_) => {
                    if let Some(cached) = cached {
                        store.update_restaurant_info(Some(apply_update(&cached, &request)));
                    }
                    info.set("Restaurant updated.".to_owned());
                }
                Err(e) => info.set(format!("Update failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        if busy.get() {
            return;
        }
        let Some(restaurant_id) = store.get_restaurant_info().map(|r| r.id) else {
            info.set("Register a restaurant first.".to_owned());
            return;
        };
        busy.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::delete_restaurant(&client, &restaurant_id, token.as_deref()).await {
                Ok(_) => {
                    busy.set(false);
                    store.update_restaurant_info(None);
                    navigate(Page::SupplierMain.path(), NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Delete failed: {}", e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text=Page::ChangeRestaurantInfo.title()/>
        <NavBar links=SUPPLIER_LINKS/>
        <main class="page">
            <form class="form-card" on:submit=on_submit>
                <h1>"Edit restaurant"</h1>
                <TextField label="Name" value=fields.name/>
                <TextField label="Postal code" value=fields.postal_code/>
                <TextField label="Address" value=fields.address/>
                <TextField label="Latitude" value=fields.lat input_type="number"/>
                <TextField label="Longitude" value=fields.lng input_type="number"/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
                <button
                    class="form-button form-button--danger"
                    type="button"
                    disabled=move || busy.get()
                    on:click=on_delete
                >
                    "Delete restaurant"
                </button>
                <StatusLine message=info/>
            </form>
        </main>
    }
}
