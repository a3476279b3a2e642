//! Menu page for the restaurant cached in the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Customers reach it from the restaurant list and can look items up by id.
//! When the signed-in user owns the cached restaurant the page also exposes
//! add, update and delete.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use super::form;
use crate::components::form_field::TextField;
use crate::components::nav_bar::NavBar;
use crate::components::status_line::StatusLine;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::{MenuItem, MenuItemRequest, UpdateMenuItemRequest};
use crate::routes::{CUSTOMER_LINKS, Page, SUPPLIER_LINKS};
use crate::state::session::{SessionState, SessionStore};

const NAME_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;

/// Raw menu item fields as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct MenuItemForm {
    pub name: String,
    pub price: String,
    pub count: String,
    pub description: String,
}

impl MenuItemForm {
    pub(crate) fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            price: format_price(item.price),
            count: item.count.to_string(),
            description: item.description.clone(),
        }
    }
}

/// Validated item fields, before attaching restaurant or item ids.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MenuDraft {
    pub name: String,
    pub price: f64,
    pub count: u32,
    pub description: String,
}

pub(crate) fn validate_menu_item(input: &MenuItemForm) -> Result<MenuDraft, &'static str> {
    let name = form::required(&input.name, NAME_MAX).ok_or("Enter the item name.")?;
    let price = input
        .price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or("Price must be a non-negative number.")?;
    let count = input
        .count
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|c| *c > 0)
        .ok_or("Count must be a whole number above zero.")?;
    let description = form::optional(&input.description).ok_or("Enter a description.")?;
    if description.chars().count() > DESCRIPTION_MAX {
        return Err("Description must be at most 500 characters.");
    }
    Ok(MenuDraft { name, price, count, description })
}

pub(crate) fn add_request(restaurant_id: Option<String>, draft: MenuDraft) -> Result<MenuItemRequest, &'static str> {
    let restaurant_id = restaurant_id.ok_or("Register a restaurant first.")?;
    Ok(MenuItemRequest {
        restaurant_id,
        name: draft.name,
        price: draft.price,
        count: draft.count,
        description: draft.description,
    })
}

pub(crate) fn update_request(item_id: &str, draft: MenuDraft) -> Result<UpdateMenuItemRequest, &'static str> {
    let item_id = validate_item_id(item_id)?;
    Ok(UpdateMenuItemRequest {
        item_id,
        name: draft.name,
        price: draft.price,
        count: draft.count,
        description: draft.description,
    })
}

/// Item ids end up in the request path, so only UUID-shaped input passes.
pub(crate) fn validate_item_id(raw: &str) -> Result<String, &'static str> {
    if raw.trim().is_empty() {
        return Err("Enter an item id.");
    }
    form::resource_id(raw).ok_or("Item ids contain only hex digits and dashes.")
}

pub(crate) fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Whether the signed-in user owns the cached restaurant.
pub(crate) fn owns_cached_restaurant(session: &SessionState) -> bool {
    match (session.user_id(), session.restaurant_info()) {
        (Some(user_id), Some(restaurant)) => restaurant.owner_user_id == user_id,
        _ => false,
    }
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let store = SessionStore::expect();
    let client = expect_context::<HttpClient>();

    let item_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let count = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let found = RwSignal::new(None::<MenuItem>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let is_owner = move || owns_cached_restaurant(&store.snapshot());
    let restaurant_name = move || {
        store
            .get_restaurant_info()
            .map(|r| r.name)
            .unwrap_or_else(|| "No restaurant selected".to_owned())
    };
    let read_form = move || MenuItemForm {
        name: name.get(),
        price: price.get(),
        count: count.get(),
        description: description.get(),
    };
    let fill_form = move |filled: MenuItemForm| {
        name.set(filled.name);
        price.set(filled.price);
        count.set(filled.count);
        description.set(filled.description);
    };

    let lookup_client = client.clone();
    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let id = match validate_item_id(&item_id.get()) {
            Ok(id) => id,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = lookup_client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::fetch_menu_item(&client, &id, token.as_deref()).await {
                Ok(item) => {
                    fill_form(MenuItemForm::from_item(&item));
                    found.set(Some(item));
                    info.set(String::new());
                }
                Err(e) => {
                    found.set(None);
                    info.set(format!("Lookup failed: {}", e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    let add_client = client.clone();
    let on_add = move |_| {
        if busy.get() {
            return;
        }
        let restaurant_id = store.get_restaurant_info().map(|r| r.id);
        let request = match validate_menu_item(&read_form()).and_then(|draft| add_request(restaurant_id, draft)) {
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
            match api::add_menu_item(&client, &request, token.as_deref()).await {
                Ok(created) => {
                    info.set(format!("Item added with id {}.", created.item_id));
                    item_id.set(created.item_id);
                }
                Err(e) => info.set(format!("Could not add the item: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    let update_client = client.clone();
    let on_update = move |_| {
        if busy.get() {
            return;
        }
        let request =
            match validate_menu_item(&read_form()).and_then(|draft| update_request(&item_id.get(), draft)) {
                Ok(request) => request,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        let client = update_client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::update_menu_item(&client, &request, token.as_deref()).await {
                Ok(_) => info.set("Item updated.".to_owned()),
                Err(e) => info.set(format!("Could not update the item: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        if busy.get() {
            return;
        }
        let id = match validate_item_id(&item_id.get()) {
            Ok(id) => id,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = client.clone();
        let token = store.get_token();
        spawn_local(async move {
            match api::delete_menu_item(&client, &id, token.as_deref()).await {
                Ok(_) => {
                    found.set(None);
                    fill_form(MenuItemForm::default());
                    info.set("Item deleted.".to_owned());
                }
                Err(e) => info.set(format!("Could not delete the item: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <Title text=Page::Menu.title()/>
        {move || {
            if is_owner() {
                view! { <NavBar links=SUPPLIER_LINKS/> }.into_any()
            } else {
                view! { <NavBar links=CUSTOMER_LINKS/> }.into_any()
            }
        }}
        <main class="page">
            <h1>"Menu"</h1>
            <p class="card__detail">{restaurant_name}</p>
            <form class="form-card" on:submit=on_lookup>
                <TextField label="Item id" value=item_id/>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Look up"
                </button>
            </form>
            <Show when=move || found.get().is_some() && !is_owner()>
                <section class="card">
                    <h2 class="card__title">{move || found.get().map(|i| i.name).unwrap_or_default()}</h2>
                    <p class="card__detail">{move || found.get().map(|i| i.description).unwrap_or_default()}</p>
                    <p class="card__detail">
                        {move || found.get().map(|i| format_price(i.price)).unwrap_or_default()}
                    </p>
                </section>
            </Show>
            <Show when=is_owner>
                <section class="form-card">
                    <h2>"Item details"</h2>
                    <TextField label="Name" value=name/>
                    <TextField label="Price" value=price input_type="number"/>
                    <TextField label="Count" value=count input_type="number"/>
                    <TextField label="Description" value=description/>
                    <div class="form-card__actions">
                        <button class="form-button" disabled=move || busy.get() on:click=on_add.clone()>
                            "Add item"
                        </button>
                        <button class="form-button" disabled=move || busy.get() on:click=on_update.clone()>
                            "Update item"
                        </button>
                        <button
                            class="form-button form-button--danger"
                            disabled=move || busy.get()
                            on:click=on_delete.clone()
                        >
                            "Delete item"
                        </button>
                    </div>
                </section>
            </Show>
            <StatusLine message=info/>
        </main>
    }
}
