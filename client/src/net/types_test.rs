use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Driver).unwrap(), serde_json::json!("driver"));
    let role: Role = serde_json::from_str("\"supplier\"").unwrap();
    assert_eq!(role, Role::Supplier);
}

#[test]
fn role_parse_accepts_form_aliases() {
    assert_eq!(Role::parse(" Customer "), Some(Role::Customer));
    assert_eq!(Role::parse("delivery"), Some(Role::Driver));
    assert_eq!(Role::parse("restaurant"), Some(Role::Supplier));
    assert_eq!(Role::parse("chef"), None);
}

#[test]
fn role_as_str_round_trips_through_parse() {
    for role in [Role::Customer, Role::Driver, Role::Supplier, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn selectable_roles_exclude_admin() {
    assert!(!Role::SELECTABLE.contains(&Role::Admin));
    assert_eq!(Role::SELECTABLE.len(), 3);
}

#[test]
fn gender_parse_is_case_insensitive() {
    assert_eq!(Gender::parse("FEMALE"), Some(Gender::Female));
    assert_eq!(Gender::parse("male"), Some(Gender::Male));
    assert_eq!(Gender::parse("other"), None);
}

#[test]
fn registration_request_omits_missing_national_id() {
    let req = RegistrationRequest {
        first_name: "Sara".to_owned(),
        last_name: "Karimi".to_owned(),
        phone_number: "09121234567".to_owned(),
        password: "secret-pass".to_owned(),
        role: Role::Customer,
        gender: Gender::Female,
        national_id: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["role"], "customer");
    assert_eq!(value["gender"], "female");
    assert!(value.get("national_id").is_none());
}

#[test]
fn logged_in_user_tolerates_sparse_payload() {
    let user: LoggedInUser =
        serde_json::from_str(r#"{"user_id":"u-1","token":"jwt","role":"driver"}"#).unwrap();
    assert_eq!(user.user_id, "u-1");
    assert_eq!(user.role, Role::Driver);
    assert_eq!(user.first_name, None);
}

#[test]
fn success_response_defaults_to_true() {
    let ok: SuccessResponse = serde_json::from_str("{}").unwrap();
    assert!(ok.success);
}

#[test]
fn update_profile_request_skips_unchanged_fields() {
    let req = UpdateProfileRequest {
        user_id: "u-1".to_owned(),
        first_name: Some("Ali".to_owned()),
        last_name: None,
        gender: None,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "user_id": "u-1", "first_name": "Ali" })
    );
}

#[test]
fn all_restaurants_defaults_to_empty_list() {
    let all: AllRestaurantsResponse = serde_json::from_str("{}").unwrap();
    assert!(all.restaurants.is_empty());
}

#[test]
fn restaurant_info_reads_gateway_shape() {
    let json = r#"{
        "id": "r-1",
        "owner_user_id": "u-9",
        "name": "Kebab House",
        "postal_code": "12345",
        "address": "1 Main St",
        "address_lat": 35.7,
        "address_lng": 51.4,
        "restaurant_licence_id": "LIC-1"
    }"#;
    let info: RestaurantInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.name, "Kebab House");
    assert!((info.address_lng - 51.4).abs() < f64::EPSILON);
}

#[test]
fn address_reads_flat_gateway_shape() {
    let json = r#"{
        "user_id": "u-1",
        "address_id": "a-1",
        "address_line_1": "1 Main St",
        "city": "Tehran",
        "postal_code": "12345"
    }"#;
    let address: Address = serde_json::from_str(json).unwrap();
    assert_eq!(address.address_id, "a-1");
    assert!(!address.is_default);
    assert_eq!(address.info.city, "Tehran");
    assert_eq!(address.info.postal_code.as_deref(), Some("12345"));
    assert_eq!(address.info.country, None);
}

#[test]
fn address_info_omits_blank_optionals() {
    let info = AddressInfo {
        address_line_1: "1 Main St".to_owned(),
        city: "Tehran".to_owned(),
        ..AddressInfo::default()
    };
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        serde_json::json!({ "address_line_1": "1 Main St", "city": "Tehran" })
    );
}

#[test]
fn driver_status_reads_flag() {
    let status: DriverStatus = serde_json::from_str(r#"{"is_online":true}"#).unwrap();
    assert!(status.is_online);
}
