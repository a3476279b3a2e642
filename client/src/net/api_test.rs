use super::*;

#[test]
fn menu_item_endpoints_embed_item_id() {
    assert_eq!(menu_item_info_endpoint("i-1"), "/menu/info/i-1");
    assert_eq!(menu_item_update_endpoint("i-2"), "/menu/update/i-2");
    assert_eq!(menu_item_delete_endpoint("i-3"), "/menu/delete/i-3");
}

#[test]
fn menu_item_endpoints_keep_id_in_one_segment() {
    assert_eq!(
        menu_item_delete_endpoint("x/../../restaurant/delete"),
        "/menu/delete/x%2F..%2F..%2Frestaurant%2Fdelete"
    );
    assert_eq!(menu_item_info_endpoint("a?b=1#c"), "/menu/info/a%3Fb%3D1%23c");

    let client = HttpClient::default();
    let req = client.prepare(Method::Delete, &menu_item_delete_endpoint("x/../../restaurant/delete"), None, None);
    let tail = req.url.strip_prefix("http://localhost:8000/api/v1/menu/delete/").unwrap();
    assert!(!tail.contains('/'), "{}", req.url);
}

#[test]
fn auth_paths_match_gateway_router() {
    assert_eq!(REGISTER_PATH, "/auth/register");
    assert_eq!(VERIFY_PATH, "/auth/verify");
    assert_eq!(RESEND_CODE_PATH, "/auth/resend_code");
    assert_eq!(LOGIN_PATH, "/auth/login");
}

#[test]
fn every_endpoint_resolves_under_configured_base() {
    let client = HttpClient::default();
    let paths = [
        REGISTER_PATH.to_owned(),
        VERIFY_PATH.to_owned(),
        RESEND_CODE_PATH.to_owned(),
        LOGIN_PATH.to_owned(),
        UPDATE_PROFILE_PATH.to_owned(),
        ADDRESSES_PATH.to_owned(),
        ADDRESS_ADD_PATH.to_owned(),
        ADDRESS_DELETE_PATH.to_owned(),
        ADDRESS_PREFERRED_PATH.to_owned(),
        DRIVER_ONLINE_PATH.to_owned(),
        DRIVER_OFFLINE_PATH.to_owned(),
        DRIVER_STATUS_PATH.to_owned(),
        VEHICLE_REGISTER_PATH.to_owned(),
        VEHICLE_INFO_PATH.to_owned(),
        VEHICLE_DELETE_PATH.to_owned(),
        RESTAURANT_REGISTER_PATH.to_owned(),
        SUPPLIER_RESTAURANT_PATH.to_owned(),
        ALL_RESTAURANTS_PATH.to_owned(),
        RESTAURANT_UPDATE_PATH.to_owned(),
        RESTAURANT_DELETE_PATH.to_owned(),
        MENU_ADD_PATH.to_owned(),
        menu_item_info_endpoint("x"),
    ];
    for path in paths {
        let req = client.prepare(Method::Get, &path, None, None);
        assert!(req.url.starts_with("http://localhost:8000/api/v1/"), "{}", req.url);
        assert!(req.url.ends_with(&path), "{}", req.url);
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }
}

#[test]
fn calls_outside_browser_report_unavailable() {
    let client = HttpClient::default();
    let request = LoginRequest {
        phone_number: "09120000000".to_owned(),
        role: crate::net::types::Role::Customer,
        password: "password1".to_owned(),
    };
    let result = futures::executor::block_on(login(&client, &request));
    assert_eq!(result, Err(ApiError::Unavailable));
    let restaurants = futures::executor::block_on(fetch_all_restaurants(&client, Some("tok")));
    assert_eq!(restaurants, Err(ApiError::Unavailable));
}

#[test]
fn address_and_status_paths_match_gateway_routers() {
    assert_eq!(ADDRESSES_PATH, "/address/get_all_info");
    assert_eq!(ADDRESS_PREFERRED_PATH, "/address/set-preferred");
    assert_eq!(DRIVER_ONLINE_PATH, "/status/online");
    assert_eq!(DRIVER_OFFLINE_PATH, "/status/offline");
    assert_eq!(DRIVER_STATUS_PATH, "/status/get");
}

#[test]
fn address_and_status_calls_outside_browser_report_unavailable() {
    let client = HttpClient::default();
    assert_eq!(futures::executor::block_on(fetch_addresses(&client, Some("tok"))), Err(ApiError::Unavailable));
    assert_eq!(
        futures::executor::block_on(set_driver_online(&client, true, Some("tok"))),
        Err(ApiError::Unavailable)
    );
    assert_eq!(
        futures::executor::block_on(delete_address(&client, "a-1", Some("tok"))),
        Err(ApiError::Unavailable)
    );
}
