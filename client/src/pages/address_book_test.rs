use super::*;

fn typed() -> AddressForm {
    AddressForm {
        line_1: " 1 Main St ".to_owned(),
        line_2: String::new(),
        city: "Tehran".to_owned(),
        postal_code: "12345".to_owned(),
        country: " ".to_owned(),
    }
}

fn stored(id: &str, is_default: bool) -> Address {
    Address {
        user_id: "u-1".to_owned(),
        address_id: id.to_owned(),
        is_default,
        info: AddressInfo {
            address_line_1: format!("{id} Main St"),
            city: "Tehran".to_owned(),
            ..AddressInfo::default()
        },
    }
}

#[test]
fn validate_address_trims_and_drops_blank_optionals() {
    let info = validate_address(&typed()).unwrap();
    assert_eq!(info.address_line_1, "1 Main St");
    assert_eq!(info.address_line_2, None);
    assert_eq!(info.postal_code.as_deref(), Some("12345"));
    assert_eq!(info.country, None);
}

#[test]
fn validate_address_requires_line_and_city() {
    let mut input = typed();
    input.line_1 = "  ".to_owned();
    assert_eq!(validate_address(&input), Err("Enter the first address line."));
    let mut input = typed();
    input.city = String::new();
    assert_eq!(validate_address(&input), Err("Enter the city."));
}

#[test]
fn validate_address_bounds_optional_fields() {
    let mut input = typed();
    input.postal_code = "1".repeat(21);
    assert_eq!(validate_address(&input), Err("Postal code must be at most 20 characters."));
    let mut input = typed();
    input.line_2 = "x".repeat(101);
    assert_eq!(validate_address(&input), Err("Address lines must be at most 100 characters."));
}

#[test]
fn summary_joins_present_parts() {
    let mut address = stored("a-1", false);
    address.info.postal_code = Some("12345".to_owned());
    address.info.country = Some("Iran".to_owned());
    assert_eq!(address_summary(&address), "a-1 Main St, Tehran 12345, Iran");
    assert_eq!(address_summary(&stored("a-2", false)), "a-2 Main St, Tehran");
}

#[test]
fn mark_preferred_keeps_a_single_default() {
    let list = vec![stored("a-1", true), stored("a-2", false)];
    let updated = mark_preferred(&list, "a-2");
    assert!(!updated[0].is_default);
    assert!(updated[1].is_default);
}

#[test]
fn remove_address_drops_only_the_target() {
    let list = vec![stored("a-1", true), stored("a-2", false)];
    let remaining = remove_address(&list, "a-1");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].address_id, "a-2");
}
