use super::*;

#[test]
fn unknown_status_toggles_online() {
    assert!(next_online(None));
    assert_eq!(toggle_label(None), "Go online");
    assert_eq!(status_text(None), "Status unknown.");
}

#[test]
fn toggle_flips_known_status() {
    assert!(!next_online(Some(true)));
    assert!(next_online(Some(false)));
    assert_eq!(toggle_label(Some(true)), "Go offline");
    assert_eq!(toggle_label(Some(false)), "Go online");
}

#[test]
fn status_text_distinguishes_online_and_offline() {
    assert_ne!(status_text(Some(true)), status_text(Some(false)));
}
