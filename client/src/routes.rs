//! Static route table mapping URL paths to pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` registers one Leptos `<Route>` per entry of [`ROUTES`], which the
//! host checks against `generate_route_list`; pages use [`Page::path`] and
//! [`main_page_for`] when navigating. Lookup is exact:
//! no parameters, no guards.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// Every screen the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    SignIn,
    SignUp,
    VerifyAccount,
    CustomerMain,
    CustomerChangeInfo,
    DeliveryMain,
    RegisterVehicle,
    SupplierMain,
    RegisterRestaurant,
    ChangeRestaurantInfo,
    Menu,
}

impl Page {
    /// Canonical path used when navigating to this page.
    pub const fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/SignIn",
            Self::SignUp => "/SignUp",
            Self::VerifyAccount => "/VerifyAccount",
            Self::CustomerMain => "/CustomerMainPage",
            Self::CustomerChangeInfo => "/CustomerChangeInfo",
            Self::DeliveryMain => "/DeliveryMain",
            Self::RegisterVehicle => "/RegisterVehicle",
            Self::SupplierMain => "/SupplierMainPage",
            Self::RegisterRestaurant => "/RegisterRestaurantPage",
            Self::ChangeRestaurantInfo => "/ChangeRestaurantInfo",
            Self::Menu => "/Menu",
        }
    }

    /// Router segment (the canonical path without its leading slash).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::SignIn => "SignIn",
            Self::SignUp => "SignUp",
            Self::VerifyAccount => "VerifyAccount",
            Self::CustomerMain => "CustomerMainPage",
            Self::CustomerChangeInfo => "CustomerChangeInfo",
            Self::DeliveryMain => "DeliveryMain",
            Self::RegisterVehicle => "RegisterVehicle",
            Self::SupplierMain => "SupplierMainPage",
            Self::RegisterRestaurant => "RegisterRestaurantPage",
            Self::ChangeRestaurantInfo => "ChangeRestaurantInfo",
            Self::Menu => "Menu",
        }
    }

    /// Document title shown while the page is mounted.
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Sign up",
            Self::VerifyAccount => "Verify account",
            Self::CustomerMain => "Restaurants",
            Self::CustomerChangeInfo => "Edit profile",
            Self::DeliveryMain => "Delivery",
            Self::RegisterVehicle => "Register vehicle",
            Self::SupplierMain => "My restaurant",
            Self::RegisterRestaurant => "Register restaurant",
            Self::ChangeRestaurantInfo => "Edit restaurant",
            Self::Menu => "Menu",
        }
    }
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
}

const fn entry(path: &'static str, page: Page) -> RouteEntry {
    RouteEntry { path, page }
}

/// Root lands on sign-in; every other page is reachable at its canonical path.
pub const ROUTES: &[RouteEntry] = &[
    entry("/", Page::SignIn),
    entry(Page::SignIn.path(), Page::SignIn),
    entry(Page::SignUp.path(), Page::SignUp),
    entry(Page::VerifyAccount.path(), Page::VerifyAccount),
    entry(Page::CustomerMain.path(), Page::CustomerMain),
    entry(Page::CustomerChangeInfo.path(), Page::CustomerChangeInfo),
    entry(Page::DeliveryMain.path(), Page::DeliveryMain),
    entry(Page::RegisterVehicle.path(), Page::RegisterVehicle),
    entry(Page::SupplierMain.path(), Page::SupplierMain),
    entry(Page::RegisterRestaurant.path(), Page::RegisterRestaurant),
    entry(Page::ChangeRestaurantInfo.path(), Page::ChangeRestaurantInfo),
    entry(Page::Menu.path(), Page::Menu),
];

/// Exact lookup of `path` in [`ROUTES`].
pub fn resolve(path: &str) -> Option<Page> {
    ROUTES.iter().find(|route| route.path == path).map(|route| route.page)
}

/// Navigation bar links per role area.
pub const CUSTOMER_LINKS: &[Page] = &[Page::CustomerMain, Page::CustomerChangeInfo, Page::Menu];
pub const DELIVERY_LINKS: &[Page] = &[Page::DeliveryMain, Page::RegisterVehicle];
pub const SUPPLIER_LINKS: &[Page] =
    &[Page::SupplierMain, Page::RegisterRestaurant, Page::ChangeRestaurantInfo, Page::Menu];

/// Landing page after sign-in for each role.
pub fn main_page_for(role: Role) -> Page {
    match role {
        Role::Driver => Page::DeliveryMain,
        Role::Supplier => Page::SupplierMain,
        Role::Customer | Role::Admin => Page::CustomerMain,
    }
}
