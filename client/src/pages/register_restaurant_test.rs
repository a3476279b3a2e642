use super::*;

fn filled() -> RestaurantForm {
    RestaurantForm {
        name: " Kebab House ".to_owned(),
        postal_code: "12345".to_owned(),
        address: "1 Main St".to_owned(),
        lat: "35.6892".to_owned(),
        lng: "51.389".to_owned(),
        licence_id: "LIC-1".to_owned(),
    }
}

#[test]
fn validate_restaurant_builds_request() {
    let request = validate_restaurant(&filled()).unwrap();
    assert_eq!(request.name, "Kebab House");
    assert_eq!(request.restaurant_licence_id, "LIC-1");
    assert!((request.address_lat - 35.6892).abs() < 1e-9);
    assert!((request.address_lng - 51.389).abs() < 1e-9);
}

#[test]
fn validate_restaurant_rejects_out_of_range_coordinates() {
    let mut input = filled();
    input.lat = "95".to_owned();
    assert_eq!(validate_restaurant(&input), Err("Latitude must be a number between -90 and 90."));
    let mut input = filled();
    input.lng = "east".to_owned();
    assert_eq!(validate_restaurant(&input), Err("Longitude must be a number between -180 and 180."));
}

#[test]
fn validate_restaurant_requires_licence() {
    let mut input = filled();
    input.licence_id = " ".to_owned();
    assert_eq!(validate_restaurant(&input), Err("Enter the licence id."));
}

#[test]
fn validate_restaurant_checks_address_length() {
    let mut input = filled();
    input.address = "a".repeat(301);
    assert_eq!(validate_restaurant(&input), Err("Enter the address."));
}

#[test]
fn from_info_prefills_every_field() {
    let info = RestaurantInfo {
        id: "r-1".to_owned(),
        owner_user_id: "u-1".to_owned(),
        name: "Kebab House".to_owned(),
        postal_code: "12345".to_owned(),
        address: "1 Main St".to_owned(),
        address_lat: 35.5,
        address_lng: 51.25,
        restaurant_licence_id: "LIC-1".to_owned(),
    };
    let input = RestaurantForm::from_info(&info);
    assert_eq!(input.name, "Kebab House");
    assert_eq!(input.lat, "35.5");
    assert_eq!(input.lng, "51.25");
    assert_eq!(input.licence_id, "LIC-1");
    assert!(validate_restaurant(&input).is_ok());
}
