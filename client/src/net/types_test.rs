use super::*;

#[test]
fn user_deserializes_without_nickname() {
    let user: User = serde_json::from_str(r#"{"id":"u1","username":"sam","email":"sam@example.com"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.nickname, "");
    assert_eq!(user.display_name(), "sam");
}

#[test]
fn display_name_prefers_nickname() {
    let user = User { id: "u1".into(), username: "sam".into(), nickname: "Sammy".into() };
    assert_eq!(user.display_name(), "Sammy");
}

#[test]
fn blank_nickname_falls_back_to_username() {
    let user = User { id: "u1".into(), username: "sam".into(), nickname: "  ".into() };
    assert_eq!(user.display_name(), "sam");
}
