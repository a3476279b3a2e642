use super::*;
use leptos::reactive::owner::Owner;

fn restaurant() -> RestaurantInfo {
    RestaurantInfo {
        id: "r-1".to_owned(),
        owner_user_id: "u-1".to_owned(),
        name: "Kebab House".to_owned(),
        postal_code: "12345".to_owned(),
        address: "1 Main St".to_owned(),
        address_lat: 35.7,
        address_lng: 51.4,
        restaurant_licence_id: "LIC-1".to_owned(),
    }
}

fn vehicle() -> VehicleInfo {
    VehicleInfo {
        vehicle_id: "v-1".to_owned(),
        driver_id: "u-2".to_owned(),
        plate_number: "12A345".to_owned(),
        license_number: "DL-77".to_owned(),
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_defaults_to_unset() {
    let state = SessionState::default();
    assert_eq!(state.user_id(), None);
    assert_eq!(state.token(), None);
    assert_eq!(state.auth_code(), None);
    assert_eq!(state.restaurant_info(), None);
    assert_eq!(state.vehicle_info(), None);
}

#[test]
fn session_state_setters_are_independent() {
    let mut state = SessionState::default();
    state.set_token(Some("jwt".to_owned()));
    assert_eq!(state.token(), Some("jwt"));
    assert_eq!(state.user_id(), None);
    assert_eq!(state.auth_code(), None);
}

#[test]
fn session_state_setter_accepts_none() {
    let mut state = SessionState::default();
    state.set_auth_code(Some("4821".to_owned()));
    state.set_auth_code(None);
    assert_eq!(state.auth_code(), None);
}

#[test]
fn session_state_allows_restaurant_and_vehicle_together() {
    let mut state = SessionState::default();
    state.set_restaurant_info(Some(restaurant()));
    state.set_vehicle_info(Some(vehicle()));
    assert_eq!(state.restaurant_info(), Some(&restaurant()));
    assert_eq!(state.vehicle_info(), Some(&vehicle()));
}

#[test]
fn session_state_clear_resets_everything() {
    let mut state = SessionState::default();
    state.set_user_id(Some("u-1".to_owned()));
    state.set_token(Some("jwt".to_owned()));
    state.set_vehicle_info(Some(vehicle()));
    state.clear();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_update_then_get_returns_value() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        store.update_user_id(Some("u-123".to_owned()));
        assert_eq!(store.get_user_id(), Some("u-123".to_owned()));

        store.update_token(Some("jwt".to_owned()));
        assert_eq!(store.get_token(), Some("jwt".to_owned()));

        store.update_auth_code(Some("4821".to_owned()));
        assert_eq!(store.get_auth_code(), Some("4821".to_owned()));

        store.update_restaurant_info(Some(restaurant()));
        assert_eq!(store.get_restaurant_info(), Some(restaurant()));

        store.update_vehicle_info(Some(vehicle()));
        assert_eq!(store.get_vehicle_info(), Some(vehicle()));
    });
}

#[test]
fn store_starts_empty() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        assert_eq!(store.get_user_id(), None);
        assert_eq!(store.get_token(), None);
        assert_eq!(store.get_auth_code(), None);
        assert_eq!(store.get_restaurant_info(), None);
        assert_eq!(store.get_vehicle_info(), None);
        assert!(!store.is_signed_in());
    });
}

#[test]
fn store_copies_share_state() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        let other = store;
        other.update_token(Some("jwt".to_owned()));
        assert!(store.is_signed_in());
    });
}

#[test]
fn store_sign_out_clears_session() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        store.update_user_id(Some("u-1".to_owned()));
        store.update_token(Some("jwt".to_owned()));
        store.update_restaurant_info(Some(restaurant()));
        store.sign_out();
        assert_eq!(store.snapshot(), SessionState::default());
    });
}

#[test]
fn provided_store_is_found_in_context() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = SessionStore::provide();
        provided.update_user_id(Some("u-9".to_owned()));
        let found = SessionStore::expect();
        assert_eq!(found.get_user_id(), Some("u-9".to_owned()));
    });
}
