//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals, validates input with pure helpers, calls
//! the gateway through the shared `HttpClient`, commits results to the
//! session store and navigates. Rendering details live in `components`.

pub(crate) mod address_book;
pub mod change_restaurant_info;
pub mod customer_change_info;
pub mod customer_main;
pub mod delivery_main;
pub(crate) mod form;
pub mod menu;
pub mod register_restaurant;
pub mod register_vehicle;
pub mod sign_in;
pub mod sign_up;
pub mod supplier_main;
pub mod verify_account;
