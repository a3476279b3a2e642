use super::*;

#[test]
fn validate_vehicle_trims_fields() {
    assert_eq!(
        validate_vehicle(" 12A345 ", " DL-77 "),
        Ok(RegisterVehicleRequest { plate_number: "12A345".to_owned(), license_number: "DL-77".to_owned() })
    );
}

#[test]
fn validate_vehicle_requires_both_fields() {
    assert_eq!(validate_vehicle("", "DL-77"), Err("Enter the plate number."));
    assert_eq!(validate_vehicle("12A345", "  "), Err("Enter the driving licence number."));
}

#[test]
fn validate_vehicle_rejects_overlong_plate() {
    assert_eq!(validate_vehicle(&"P".repeat(101), "DL-77"), Err("Enter the plate number."));
}
