use super::*;

#[test]
fn current_user_failed_message_formats_status() {
    assert_eq!(current_user_failed_message(401), "current user request failed: 401");
}

#[test]
fn current_user_endpoint_is_v4_me() {
    assert_eq!(CURRENT_USER_ENDPOINT, "/api/v4/users/me");
}

