use float_wm::{Geometry, HitRegion, MotionDelta, PanelManager, SessionMode};

fn manager() -> PanelManager<u32> {
    let mut m = PanelManager::new();
    m.create_window(1, Geometry::new(200, 100, 400, 300), "one")
        .unwrap();
    m.create_window(2, Geometry::new(50, 50, 200, 200), "two")
        .unwrap();
    m
}

#[test]
fn titlebar_drag_moves_panel_and_raises_it() {
    let mut m = manager();

    // Press lands on panel 1's titlebar: it comes to front and a drag
    // session starts.
    assert!(m.pointer_down(1, 120, 8, HitRegion::Titlebar));
    assert_eq!(m.session_mode(), SessionMode::Dragging);
    assert_eq!(m.stack_order(1), Some(3));

    // Two motion events compose exactly like one with the summed delta.
    m.pointer_move(MotionDelta::new(15, -6));
    m.pointer_move(MotionDelta::new(-4, 10));
    m.pointer_up();

    let g = m.geometry(1).unwrap();
    assert_eq!((g.x, g.y), (200 + 11, 100 + 4));
    assert_eq!((g.width, g.height), (400, 300));
    assert_eq!(m.session_mode(), SessionMode::Idle);
}

#[test]
fn hovered_edge_is_sticky_for_the_following_press() {
    let mut m = manager();

    // Hover near the north-east corner of panel 1.
    let hint = m.cursor_hint(1, 395, 10);
    assert_eq!(hint.cursor_name(), Some("ne-resize"));

    // The press on the frame body reuses that classification even though
    // the press point itself is interior.
    assert!(m.pointer_down(1, 200, 150, HitRegion::FrameBody));
    assert_eq!(m.session_mode(), SessionMode::Resizing(hint));

    m.pointer_move(MotionDelta::new(7, -4));
    m.pointer_up();

    let g = m.geometry(1).unwrap();
    // north: top follows the pointer, height shrinks by the same amount
    assert_eq!(g.y, 100 - 4);
    assert_eq!(g.height, 300 + 4);
    // east: width follows the pointer, left edge stays put
    assert_eq!(g.width, 400 + 7);
    assert_eq!(g.x, 200);
}

#[test]
fn hover_query_has_no_effect_on_sessions_or_geometry() {
    let mut m = manager();
    let before = m.geometry(1).unwrap();
    m.cursor_hint(1, 5, 150);
    m.cursor_hint(1, 395, 290);
    assert_eq!(m.session_mode(), SessionMode::Idle);
    assert_eq!(m.geometry(1).unwrap(), before);
    // ranks untouched too
    assert_eq!(m.stack_order(1), Some(1));
}

#[test]
fn interior_press_raises_without_starting_a_session() {
    let mut m = manager();
    assert!(!m.pointer_down(1, 200, 150, HitRegion::Content));
    assert_eq!(m.stack_order(1), Some(3));
    assert_eq!(m.session_mode(), SessionMode::Idle);
    // motion with no session is dropped on the floor
    assert!(!m.pointer_move(MotionDelta::new(30, 30)));
    assert_eq!(m.geometry(1).unwrap(), Geometry::new(200, 100, 400, 300));
}

#[test]
fn west_resize_keeps_right_edge_fixed() {
    let mut m = manager();
    m.cursor_hint(2, 3, 100);
    assert!(m.pointer_down(2, 3, 100, HitRegion::FrameBody));

    m.pointer_move(MotionDelta::new(-12, 0));
    m.pointer_up();

    let g = m.geometry(2).unwrap();
    assert_eq!(g.x, 50 - 12);
    assert_eq!(g.width, 200 + 12);
    // right edge (x + width) unchanged
    assert_eq!(g.x + g.width, 250);
}

#[test]
fn resize_may_pass_through_zero_without_clamping() {
    let mut m = manager();
    m.cursor_hint(2, 195, 100); // east edge
    m.pointer_down(2, 195, 100, HitRegion::FrameBody);

    // Shrink well past the opposite edge, then grow back out.
    m.pointer_move(MotionDelta::new(-250, 0));
    assert_eq!(m.geometry(2).unwrap().width, -50);
    m.pointer_move(MotionDelta::new(90, 0));
    m.pointer_up();
    assert_eq!(m.geometry(2).unwrap().width, 40);
}
