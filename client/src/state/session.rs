//! Session store: user id, auth token, verification code and cached
//! restaurant/vehicle payloads.
//!
//! DESIGN
//! ======
//! `SessionState` is the plain record with one mutation and one accessor per
//! field. `SessionStore` is the reactive handle provided via context; its
//! `update_*` actions pass straight through to the mutations and its `get_*`
//! getters read the signal. No validation and no cross-field rules: a session
//! may hold restaurant info regardless of the signed-in role.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{RestaurantInfo, VehicleInfo};

/// Session fields, each independently unset until a page commits a value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    user_id: Option<String>,
    token: Option<String>,
    auth_code: Option<String>,
    restaurant_info: Option<RestaurantInfo>,
    vehicle_info: Option<VehicleInfo>,
}

impl SessionState {
    pub fn set_user_id(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn set_auth_code(&mut self, auth_code: Option<String>) {
        self.auth_code = auth_code;
    }

    pub fn set_restaurant_info(&mut self, restaurant_info: Option<RestaurantInfo>) {
        self.restaurant_info = restaurant_info;
    }

    pub fn set_vehicle_info(&mut self, vehicle_info: Option<VehicleInfo>) {
        self.vehicle_info = vehicle_info;
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn auth_code(&self) -> Option<&str> {
        self.auth_code.as_deref()
    }

    pub fn restaurant_info(&self) -> Option<&RestaurantInfo> {
        self.restaurant_info.as_ref()
    }

    pub fn vehicle_info(&self) -> Option<&VehicleInfo> {
        self.vehicle_info.as_ref()
    }

    /// Reset every field, as on sign-out.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Reactive handle to the session, shared through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Create a store and register it in the current reactive context.
    pub fn provide() -> Self {
        let store = Self::new();
        provide_context(store);
        store
    }

    /// Fetch the store registered by [`SessionStore::provide`].
    ///
    /// # Panics
    ///
    /// Panics when called outside the `App` component tree.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    pub fn update_user_id(&self, user_id: Option<String>) {
        self.state.update(|s| s.set_user_id(user_id));
    }

    pub fn update_token(&self, token: Option<String>) {
        self.state.update(|s| s.set_token(token));
    }

    pub fn update_auth_code(&self, auth_code: Option<String>) {
        self.state.update(|s| s.set_auth_code(auth_code));
    }

    pub fn update_restaurant_info(&self, restaurant_info: Option<RestaurantInfo>) {
        self.state.update(|s| s.set_restaurant_info(restaurant_info));
    }

    pub fn update_vehicle_info(&self, vehicle_info: Option<VehicleInfo>) {
        self.state.update(|s| s.set_vehicle_info(vehicle_info));
    }

    pub fn get_user_id(&self) -> Option<String> {
        self.state.with(|s| s.user_id().map(str::to_owned))
    }

    pub fn get_token(&self) -> Option<String> {
        self.state.with(|s| s.token().map(str::to_owned))
    }

    pub fn get_auth_code(&self) -> Option<String> {
        self.state.with(|s| s.auth_code().map(str::to_owned))
    }

    pub fn get_restaurant_info(&self) -> Option<RestaurantInfo> {
        self.state.with(|s| s.restaurant_info().cloned())
    }

    pub fn get_vehicle_info(&self) -> Option<VehicleInfo> {
        self.state.with(|s| s.vehicle_info().cloned())
    }

    /// Whether a token has been committed.
    pub fn is_signed_in(&self) -> bool {
        self.state.with(|s| s.token().is_some())
    }

    /// Drop every session field.
    pub fn sign_out(&self) {
        self.state.update(SessionState::clear);
    }
}
