//! Vehicle registration for drivers.

#[cfg(test)]
#[path = "register_vehicle_test.rs"]
mod register_vehicle_test;

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
use crate::net::types::RegisterVehicleRequest;
use crate::routes::{DELIVERY_LINKS, Page};
use crate::state::session::SessionStore;

const FIELD_MAX: usize = 100;

pub(crate) fn validate_vehicle(plate: &str, license: &str) -> Result<RegisterVehicleRequest, &'static str> {
    let plate_number = form::required(plate, FIELD_MAX).ok_or("Enter the plate number.")?;
    let license_number = form::required(license, FIELD_MAX).ok_or("Enter the driving licence number.")?;
    Ok(RegisterVehicleRequest { plate_number, license_number })
}

#[component]
pub fn RegisterVehiclePage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let navigate = use_navigate();

    let plate = RwSignal::new(String::new());
    let license = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_vehicle(&plate.get(), &license.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Registering vehicle...".to_owned());

        let client = client.clone();
        let navigate = navigate.clone();
        let token = store.get_token();
        spawn_local(async move {
            if let Err(e) = api::register_vehicle(&client, &request, token.as_deref()).await {
                info.set(format!("Registration failed: {}", e.user_message()));
                busy.set(false);
                return;
            }
            // The main page refetches on mount, so a failed refresh here is not fatal.
            if let Ok(vehicle) = api::fetch_vehicle_info(&client, token.as_deref()).await {
                store.update_vehicle_info(Some(vehicle));
            }
            busy.set(false);
            navigate(Page::DeliveryMain.path(), NavigateOptions::default());
        });
    };

    view! {
        <Title text=Page::RegisterVehicle.title()/>
        <NavBar links=DELIVERY_LINKS/>
        <main class="page">
            <form class="form-card" on:submit=on_submit>
                <h1>"Register vehicle"</h1>
                <TextField label="Plate number" value=plate/>
                <TextField label="Driving licence number" value=license/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
                <StatusLine message=info/>
            </form>
        </main>
    }
}
