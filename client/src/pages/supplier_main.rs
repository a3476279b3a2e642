//! Supplier landing page showing the owned restaurant.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::RestaurantInfo;
use crate::routes::{Page, SUPPLIER_LINKS};
use crate::state::session::SessionStore;

#[component]
pub fn SupplierMainPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        let token = untrack(|| store.get_token());
        let client = client.clone();
        spawn_local(async move {
            match api::fetch_supplier_restaurant(&client, token.as_deref()).await {
                Ok(restaurant) => store.update_restaurant_info(Some(restaurant)),
                Err(e) if e.is_not_found() => store.update_restaurant_info(None),
                Err(e) => info.set(format!("Could not load your restaurant: {}", e.user_message())),
            }
        });
    });

    let field = move |pick: fn(&RestaurantInfo) -> String| {
        move || store.get_restaurant_info().as_ref().map(pick).unwrap_or_default()
    };

    view! {
        <Title text=Page::SupplierMain.title()/>
        <NavBar links=SUPPLIER_LINKS/>
        <main class="page">
            <h1>"My restaurant"</h1>
            <Show
                when=move || store.get_restaurant_info().is_some()
                fallback=|| {
                    view! {
                        <p class="card__detail">
                            "You have not registered a restaurant yet. "
                            <A href=Page::RegisterRestaurant.path()>"Register it"</A>
                        </p>
                    }
                }
            >
                <section class="card">
                    <h2 class="card__title">{field(|r| r.name.clone())}</h2>
                    <p class="card__detail">{field(|r| r.address.clone())}</p>
                    <p class="card__detail">"Postal code: " {field(|r| r.postal_code.clone())}</p>
                    <p class="card__detail">"Licence: " {field(|r| r.restaurant_licence_id.clone())}</p>
                    <p class="card__actions">
                        <A href=Page::ChangeRestaurantInfo.path()>"Edit details"</A>
                        " · "
                        <A href=Page::Menu.path()>"Manage menu"</A>
                    </p>
                </section>
            </Show>
            <StatusLine message=info/>
        </main>
    }
}
