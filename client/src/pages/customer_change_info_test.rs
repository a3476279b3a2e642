use super::*;

#[test]
fn validate_profile_update_sends_only_changed_fields() {
    assert_eq!(
        validate_profile_update(Some("u-1".to_owned()), " Ali ", "", None),
        Ok(UpdateProfileRequest {
            user_id: "u-1".to_owned(),
            first_name: Some("Ali".to_owned()),
            last_name: None,
            gender: None,
        })
    );
}

#[test]
fn validate_profile_update_gender_alone_is_enough() {
    let request = validate_profile_update(Some("u-1".to_owned()), "", "", Some(Gender::Female)).unwrap();
    assert_eq!(request.gender, Some(Gender::Female));
}

#[test]
fn validate_profile_update_requires_signed_in_user() {
    assert_eq!(validate_profile_update(None, "Ali", "", None), Err("Sign in to edit your profile."));
}

#[test]
fn validate_profile_update_rejects_empty_change() {
    assert_eq!(validate_profile_update(Some("u-1".to_owned()), " ", "", None), Err("Nothing to update."));
}

#[test]
fn validate_profile_update_rejects_long_names() {
    assert_eq!(
        validate_profile_update(Some("u-1".to_owned()), &"a".repeat(51), "", None),
        Err("Names must be at most 50 characters.")
    );
}
