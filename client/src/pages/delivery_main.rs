//! Delivery landing page showing the driver's registered vehicle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The vehicle is fetched on mount and cached in the session store. A driver
//! without a vehicle (gateway 404) is pointed at vehicle registration. The
//! online/offline switch is read from the gateway and never cached.

#[cfg(test)]
#[path = "delivery_main_test.rs"]
mod delivery_main_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::routes::{DELIVERY_LINKS, Page};
use crate::state::session::SessionStore;


pub(crate) fn status_text(online: Option<bool>) -> &'static str {
    match online {
        Some(true) => "You are online and can receive orders.",
        Some(false) => "You are offline.",
        None => "Status unknown.",
    }
}

/// State the toggle switches to; an unknown status switches online.
pub(crate) fn next_online(online: Option<bool>) -> bool {
    !online.unwrap_or(false)
}

pub(crate) fn toggle_label(online: Option<bool>) -> &'static str {
    if next_online(online) { "Go online" } else { "Go offline" }
}

#[component]
pub fn DeliveryMainPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let online = RwSignal::new(None::<bool>);

    let load_client = client.clone();
    Effect::new(move || {
        let token = untrack(|| store.get_token());
        let client = load_client.clone();
        spawn_local(async move {
            match api::fetch_vehicle_info(&client, token.as_deref()).await {
                Ok(vehicle) => store.update_vehicle_info(Some(vehicle)),
                Err(e) if e.is_not_found() => store.update_vehicle_info(None),
                Err(e) => info.set(format!("Could not load your vehicle: {}", e.user_message())),
            }
        });
    });

    let status_client = client.clone();
    Effect::new(move || {
        let token = untrack(|| store.get_token());
        let client = status_client.clone();
        spawn_local(async move {
            match api::fetch_driver_status(&client, token.as_deref()).await {
                Ok(status) => online.set(Some(status.is_online)),
                Err(e) => info.set(format!("Could not load your status: {}", e.user_message())),
            }
        });
    });

    let toggle_client = client.clone();
    let on_toggle = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let target = next_online(online.get());
        let client = toggle_client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::set_driver_online(&client, target, token.as_deref()).await {
                Ok(_) => online.set(Some(target)),
                Err(e) => info.set(format!("Could not change your status: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let client = client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::delete_vehicle(&client, token.as_deref()).await {
                Ok(_) => {
                    store.update_vehicle_info(None);
                    info.set("Vehicle removed.".to_owned());
                }
                Err(e) => info.set(format!("Could not remove the vehicle: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <Title text=Page::DeliveryMain.title()/>
        <NavBar links=DELIVERY_LINKS/>
        <main class="page">
            <h1>"Delivery"</h1>
            <section class="card">
                <p class="card__detail">{move || status_text(online.get())}</p>
                <button class="form-button" disabled=move || busy.get() on:click=on_toggle>
                    {move || toggle_label(online.get())}
                </button>
            </section>
            <Show
                when=move || store.get_vehicle_info().is_some()
                fallback=|| {
                    view! {
                        <p class="card__detail">
                            "No vehicle registered. "
                            <A href=Page::RegisterVehicle.path()>"Register one"</A>
                        </p>
                    }
                }
            >
                <section class="card">
                    <h2 class="card__title">"Your vehicle"</h2>
                    <p class="card__detail">
                        "Plate: "
                        {move || store.get_vehicle_info().map(|v| v.plate_number).unwrap_or_default()}
                    </p>
                    <p class="card__detail">
                        "Licence: "
                        {move || store.get_vehicle_info().map(|v| v.license_number).unwrap_or_default()}
                    </p>
                    <button class="form-button form-button--danger" disabled=move || busy.get() on:click=on_delete.clone()>
                        "Remove vehicle"
                    </button>
                </section>
            </Show>
            <StatusLine message=info/>
        </main>
    }
}
