//! Customer landing page listing restaurants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Picking a restaurant caches it in the session store and opens the menu
//! page for it.

#[cfg(test)]
#[path = "customer_main_test.rs"]
mod customer_main_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::RestaurantInfo;
use crate::routes::{CUSTOMER_LINKS, Page};
use crate::state::session::SessionStore;

/// Restaurants whose name or address contains `query`, case-insensitively.
pub(crate) fn filter_restaurants(restaurants: &[RestaurantInfo], query: &str) -> Vec<RestaurantInfo> {
    let needle = query.trim().to_lowercase();
    restaurants
        .iter()
        .filter(|r| {
            needle.is_empty() || r.name.to_lowercase().contains(&needle) || r.address.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn CustomerMainPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();
    let navigate = use_navigate();

    let restaurants = RwSignal::new(Vec::<RestaurantInfo>::new());
    let query = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        let token = untrack(|| store.get_token());
        let client = client.clone();
        info.set("Loading restaurants...".to_owned());
        spawn_local(async move {
            match api::fetch_all_restaurants(&client, token.as_deref()).await {
                Ok(list) => {
                    info.set(if list.is_empty() { "No restaurants yet.".to_owned() } else { String::new() });
                    restaurants.set(list);
                }
                Err(e) => info.set(format!("Could not load restaurants: {}", e.user_message())),
            }
        });
    });

    let selected = RwSignal::new(None::<RestaurantInfo>);
    Effect::new(move || {
        if let Some(restaurant) = selected.get() {
            store.update_restaurant_info(Some(restaurant));
            navigate(Page::Menu.path(), NavigateOptions::default());
        }
    });

    let visible = move || filter_restaurants(&restaurants.get(), &query.get());

    view! {
        <Title text=Page::CustomerMain.title()/>
        <NavBar links=CUSTOMER_LINKS/>
        <main class="page">
            <h1>"Restaurants"</h1>
            <input
                class="form-field__input"
                type="search"
                placeholder="Search by name or address"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <StatusLine message=info/>
            <ul class="card-list">
                {move || {
                    visible()
                        .into_iter()
                        .map(|restaurant| {
                            let name = restaurant.name.clone();
                            let address = restaurant.address.clone();
                            let on_open = move |_| selected.set(Some(restaurant.clone()));
                            view! {
                                <li class="card">
                                    <h2 class="card__title">{name}</h2>
                                    <p class="card__detail">{address}</p>
                                    <button class="form-button" on:click=on_open>"View menu"</button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </main>
    }
}
