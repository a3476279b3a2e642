//! Restaurant registration for suppliers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RestaurantForm` and its validation are shared with the edit page.

#[cfg(test)]
#[path = "register_restaurant_test.rs"]
mod register_restaurant_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::form;
use crate::components::form_field::TextField;
use crate::components::nav_bar::NavBar;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::{RegisterRestaurantRequest, RestaurantInfo};
use crate::routes::{Page, SUPPLIER_LINKS};
use crate::state::session::SessionStore;

const NAME_MAX: usize = 100;
const POSTAL_CODE_MAX: usize = 100;
const ADDRESS_MAX: usize = 300;
const LICENCE_MAX: usize = 100;

/// Raw restaurant fields as typed; coordinates stay text until validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RestaurantForm {
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub lat: String,
    pub lng: String,
    pub licence_id: String,
}

impl RestaurantForm {
    pub(crate) fn from_info(info: &RestaurantInfo) -> Self {
        Self {
            name: info.name.clone(),
            postal_code: info.postal_code.clone(),
            address: info.address.clone(),
            lat: info.address_lat.to_string(),
            lng: info.address_lng.to_string(),
            licence_id: info.restaurant_licence_id.clone(),
        }
    }
}

/// Validated location fields shared by registration and update.
pub(crate) struct Location {
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub address_lat: f64,
    pub address_lng: f64,
}

pub(crate) fn validate_location(input: &RestaurantForm) -> Result<Location, &'static str> {
    Ok(Location {
        name: form::required(&input.name, NAME_MAX).ok_or("Enter the restaurant name.")?,
        postal_code: form::required(&input.postal_code, POSTAL_CODE_MAX).ok_or("Enter the postal code.")?,
        address: form::required(&input.address, ADDRESS_MAX).ok_or("Enter the address.")?,
        address_lat: form::coordinate(&input.lat, 90.0).ok_or("Latitude must be a number between -90 and 90.")?,
        address_lng: form::coordinate(&input.lng, 180.0)
            .ok_or("Longitude must be a number between -180 and 180.")?,
    })
}

pub(crate) fn validate_restaurant(input: &RestaurantForm) -> Result<RegisterRestaurantRequest, &'static str> {
    let location = validate_location(input)?;
    let restaurant_licence_id = form::required(&input.licence_id, LICENCE_MAX).ok_or("Enter the licence id.")?;
    Ok(RegisterRestaurantRequest {
        name: location.name,
        postal_code: location.postal_code,
        address: location.address,
        address_lat: location.address_lat,
        address_lng: location.address_lng,
        restaurant_licence_id,
    })
}

/// Signals backing a [`RestaurantForm`].
#[derive(Clone, Copy)]
pub(crate) struct RestaurantFields {
    pub name: RwSignal<String>,
    pub postal_code: RwSignal<String>,
    pub address: RwSignal<String>,
    pub lat: RwSignal<String>,
    pub lng: RwSignal<String>,
    pub licence_id: RwSignal<String>,
}

impl RestaurantFields {
    pub(crate) fn new(initial: RestaurantForm) -> Self {
        Self {
            name: RwSignal::new(initial.name),
            postal_code: RwSignal::new(initial.postal_code),
            address: RwSignal::new(initial.address),
            lat: RwSignal::new(initial.lat),
            lng: RwSignal::new(initial.lng),
            licence_id: RwSignal::new(initial.licence_id),
        }
    }

    pub(crate) fn read(&self) -> RestaurantForm {
        RestaurantForm {
            name: self.name.get(),
            postal_code: self.postal_code.get(),
            address: self.address.get(),
            lat: self.lat.get(),
            lng: self.lng.get(),
            licence_id: self.licence_id.get(),
        }
    }

    pub(crate) fn fill(&self, input: RestaurantForm) {
        self.name.set(input.name);
        self.postal_code.set(input.postal_code);
        self.address.set(input.address);
        self.lat.set(input.lat);
        self.lng.set(input.lng);
        self.licence_id.set(input.licence_id);
    }
}

#[component]
pub fn RegisterRestaurantPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let navigate = use_navigate();

    let fields = RestaurantFields::new(RestaurantForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_restaurant(&fields.read()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Registering restaurant...".to_owned());

        let client = client.clone();
        let navigate = navigate.clone();
        let token = store.get_token();
        spawn_local(async move {
            if let Err(e) = api::register_restaurant(&client, &request, token.as_deref()).await {
                info.set(format!("Registration failed: {}", e.user_message()));
                busy.set(false);
                return;
            }
            if let Ok(restaurant) = api::fetch_supplier_restaurant(&client, token.as_deref()).await {
                store.update_restaurant_info(Some(restaurant));
            }
            busy.set(false);
            navigate(Page::SupplierMain.path(), NavigateOptions::default());
        });
    };

    view! {
        <Title text=Page::RegisterRestaurant.title()/>
        <NavBar links=SUPPLIER_LINKS/>
        <main class="page">
            <form class="form-card" on:submit=on_submit>
                <h1>"Register restaurant"</h1>
                <TextField label="Name" value=fields.name/>
                <TextField label="Postal code" value=fields.postal_code/>
                <TextField label="Address" value=fields.address/>
                <TextField label="Latitude" value=fields.lat input_type="number" placeholder="35.6892"/>
                <TextField label="Longitude" value=fields.lng input_type="number" placeholder="51.3890"/>
                <TextField label="Licence id" value=fields.licence_id/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
                <StatusLine message=info/>
            </form>
        </main>
    }
}
