use super::*;

#[test]
fn error_detail_reads_string_detail() {
    assert_eq!(
        error_detail(r#"{"detail":"User registration failed"}"#),
        Some("User registration failed".to_owned())
    );
}

#[test]
fn error_detail_falls_back_to_message() {
    assert_eq!(error_detail(r#"{"message":"Login failed","error_code":12}"#), Some("Login failed".to_owned()));
}

#[test]
fn error_detail_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","password"],"msg":"too short"},{"msg":"bad role"}]}"#;
    assert_eq!(error_detail(body), Some("too short; bad role".to_owned()));
}

#[test]
fn error_detail_ignores_non_json_and_blank() {
    assert_eq!(error_detail("Internal Server Error"), None);
    assert_eq!(error_detail(r#"{"detail":"  "}"#), None);
    assert_eq!(error_detail(r#"{"ok":false}"#), None);
}

#[test]
fn user_message_prefers_gateway_detail() {
    let err = ApiError::Status { status: 400, detail: Some("Account verification failed".to_owned()) };
    assert_eq!(err.user_message(), "Account verification failed");
    let bare = ApiError::Status { status: 502, detail: None };
    assert_eq!(bare.user_message(), "request failed: 502");
}

#[test]
fn timeout_has_friendly_message() {
    assert_eq!(ApiError::Timeout(1000).to_string(), "request timed out after 1000 ms");
    assert!(ApiError::Timeout(1000).user_message().contains("did not answer"));
}

#[test]
fn is_not_found_matches_only_404() {
    assert!(ApiError::Status { status: 404, detail: None }.is_not_found());
    assert!(!ApiError::Status { status: 400, detail: None }.is_not_found());
    assert!(!ApiError::Unavailable.is_not_found());
}
