use super::*;

#[test]
fn drag_session_default_is_idle() {
    assert_eq!(DragSession::default(), DragSession::Idle);
    assert!(!DragSession::default().is_active());
}

#[test]
fn active_session_reports_active() {
    assert!(DragSession::Active { anchor_x: 12.0 }.is_active());
}

#[test]
fn lhs_grows_when_pointer_moves_right() {
    let dir = ResizeDirection::for_side(Side::Lhs);
    assert_eq!(dir, ResizeDirection::Right);
    assert_eq!(dir.width_delta(100.0, 130.0), 30.0);
    assert_eq!(dir.width_delta(100.0, 60.0), -40.0);
}

#[test]
fn rhs_grows_when_pointer_moves_left() {
    let dir = ResizeDirection::for_side(Side::Rhs);
    assert_eq!(dir, ResizeDirection::Left);
    assert_eq!(dir.width_delta(500.0, 450.0), 50.0);
    assert_eq!(dir.width_delta(500.0, 520.0), -20.0);
}
