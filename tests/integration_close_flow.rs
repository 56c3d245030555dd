use float_wm::{Error, Geometry, HitRegion, MotionDelta, PanelManager, SessionMode};

fn manager() -> PanelManager<u32> {
    let mut m = PanelManager::new();
    m.create_window(1, Geometry::new(10, 10, 300, 200), "one")
        .unwrap();
    m.create_window(2, Geometry::new(40, 40, 300, 200), "two")
        .unwrap();
    m
}

#[test]
fn dirty_window_survives_close_until_flag_clears() {
    let mut m = manager();
    m.set_dirty(1, true).unwrap();

    assert_eq!(m.destroy_window(1), Err(Error::DirtyWindow));
    // still registered, still where it was, nothing queued for disposal
    assert_eq!(m.geometry(1), Some(Geometry::new(10, 10, 300, 200)));
    assert!(m.take_closed_windows().is_empty());

    m.set_dirty(1, false).unwrap();
    assert_eq!(m.destroy_window(1), Ok(()));
    assert_eq!(m.take_closed_windows(), vec![1]);
}

#[test]
fn registry_is_consistent_before_disposal_is_observable() {
    let mut m = manager();
    m.destroy_window(2).unwrap();

    // By the time the renderer drains the disposal queue the registry
    // already answers "not found" for the id.
    assert_eq!(m.geometry(2), None);
    assert_eq!(m.stack_order(2), None);
    assert_eq!(m.take_closed_windows(), vec![2]);
}

#[test]
fn stale_events_after_close_are_harmless() {
    let mut m = manager();
    m.destroy_window(1).unwrap();
    m.take_closed_windows();

    // A late event handler firing for the closed id must degrade to no-ops.
    assert!(!m.pointer_down(1, 100, 5, HitRegion::Titlebar));
    assert_eq!(m.session_mode(), SessionMode::Idle);
    assert!(m.cursor_hint(1, 3, 100).is_empty());
    assert_eq!(m.destroy_window(1), Err(Error::NotFound));

    // The surviving window is untouched by any of it.
    assert_eq!(m.geometry(2), Some(Geometry::new(40, 40, 300, 200)));
}

#[test]
fn destroying_the_drag_target_ends_the_session() {
    let mut m = manager();
    m.pointer_down(2, 100, 5, HitRegion::Titlebar);
    assert_eq!(m.session_mode(), SessionMode::Dragging);

    m.destroy_window(2).unwrap();
    assert_eq!(m.session_mode(), SessionMode::Idle);

    // Queued motion from the dead session writes nothing anywhere.
    assert!(!m.pointer_move(MotionDelta::new(25, 25)));
    assert_eq!(m.geometry(1), Some(Geometry::new(10, 10, 300, 200)));

    // Pointer-up after the forced end stays a no-op.
    m.pointer_up();
    assert_eq!(m.session_mode(), SessionMode::Idle);
}

#[test]
fn close_is_idempotent_through_the_queue() {
    let mut m = manager();
    m.destroy_window(1).unwrap();
    assert_eq!(m.destroy_window(1), Err(Error::NotFound));
    // only one disposal queued despite the repeat request
    assert_eq!(m.take_closed_windows(), vec![1]);
}
