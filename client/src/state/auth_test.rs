use super::*;

fn user(id: &str) -> User {
    User { id: id.to_owned(), username: "sam".to_owned(), nickname: String::new() }
}

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.user_id(), None);
}

#[test]
fn user_id_reads_signed_in_user() {
    let state = AuthState { user: Some(user("u42")), loading: false };
    assert_eq!(state.user_id().as_deref(), Some("u42"));
}
