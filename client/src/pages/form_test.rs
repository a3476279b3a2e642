use super::*;

#[test]
fn required_trims_and_bounds_length() {
    assert_eq!(required("  Sara  ", 50), Some("Sara".to_owned()));
    assert_eq!(required("   ", 50), None);
    assert_eq!(required("abcdef", 5), None);
    assert_eq!(required("abcde", 5), Some("abcde".to_owned()));
}

#[test]
fn phone_number_accepts_digits_and_leading_plus() {
    assert_eq!(phone_number("09121234567"), Some("09121234567".to_owned()));
    assert_eq!(phone_number(" +989121234567 "), Some("+989121234567".to_owned()));
}

#[test]
fn phone_number_rejects_letters_and_bad_length() {
    assert_eq!(phone_number("0912abc4567"), None);
    assert_eq!(phone_number("12345"), None);
    assert_eq!(phone_number("0912123456789012"), None);
    assert_eq!(phone_number("+"), None);
}

#[test]
fn password_enforces_gateway_bounds() {
    assert_eq!(password("short"), None);
    assert_eq!(password("exactly8"), Some("exactly8".to_owned()));
    assert_eq!(password(&"x".repeat(129)), None);
    assert_eq!(password(" spaced pass "), Some(" spaced pass ".to_owned()));
}

#[test]
fn coordinate_checks_range() {
    assert_eq!(coordinate(" 35.7 ", 90.0), Some(35.7));
    assert_eq!(coordinate("-180", 180.0), Some(-180.0));
    assert_eq!(coordinate("91", 90.0), None);
    assert_eq!(coordinate("north", 90.0), None);
    assert_eq!(coordinate("NaN", 90.0), None);
}

#[test]
fn optional_blank_is_none() {
    assert_eq!(optional("  "), None);
    assert_eq!(optional(" 0012345678 "), Some("0012345678".to_owned()));
}

#[test]
fn resource_id_allows_only_hex_and_dashes() {
    assert_eq!(resource_id(" 0af3-19bc "), Some("0af3-19bc".to_owned()));
    assert_eq!(resource_id("x/../../restaurant/delete"), None);
    assert_eq!(resource_id("a?b=1#c"), None);
    assert_eq!(resource_id(""), None);
    assert_eq!(resource_id(&"f".repeat(ID_MAX + 1)), None);
}
