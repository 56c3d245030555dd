//! Pointer interaction: edge hit-testing plus the per-window drag/resize
//! state machine.
//!
//! The controller consumes pointer-down/move/up reports from the rendering
//! collaborator and produces geometry writes and bring-to-front calls
//! against a [`WindowRegistry`]. All session state lives in an explicit
//! [`InteractionSession`] value; there is no captured mutable state outside
//! it, so the machine is driven the same way by a real event source or by a
//! test.

use crate::constants::EDGE_BAND;
use crate::geometry::{Geometry, MotionDelta};
use crate::registry::WindowRegistry;

/// Which part of a window's chrome a pointer event landed on, classified by
/// the rendering collaborator from its own scene graph. Keeping this an
/// explicit parameter decouples session logic from any particular UI event
/// object shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Titlebar,
    FrameBody,
    Content,
    CloseControl,
}

/// Subset of frame borders implicated by a hover or resize session.
///
/// Opposite edges never co-occur: the hit-test bands are mutually exclusive
/// per axis (north wins over south, west over east).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSet {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl EdgeSet {
    pub const EMPTY: Self = Self {
        north: false,
        south: false,
        east: false,
        west: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.north || self.south || self.east || self.west)
    }

    /// Classify a window-local pointer position against a border band of
    /// `band` units. Bounds are strict on both sides, so a pointer exactly
    /// on the frame edge (or exactly `band` units in) does not classify.
    pub fn classify(geometry: Geometry, local_x: i32, local_y: i32, band: i32) -> Self {
        let w = geometry.width;
        let h = geometry.height;
        let mut edges = Self::EMPTY;
        if 0 < local_y && local_y < band {
            edges.north = true;
        } else if h - band < local_y && local_y < h {
            edges.south = true;
        }
        if 0 < local_x && local_x < band {
            edges.west = true;
        } else if w - band < local_x && local_x < w {
            edges.east = true;
        }
        edges
    }

    /// CSS-style cursor keyword for this edge set, e.g. `"ne-resize"`.
    /// `None` when empty (interior: no resize affordance).
    pub fn cursor_name(&self) -> Option<&'static str> {
        match (self.north, self.south, self.west, self.east) {
            (true, _, true, _) => Some("nw-resize"),
            (true, _, _, true) => Some("ne-resize"),
            (_, true, true, _) => Some("sw-resize"),
            (_, true, _, true) => Some("se-resize"),
            (true, _, _, _) => Some("n-resize"),
            (_, true, _, _) => Some("s-resize"),
            (_, _, true, _) => Some("w-resize"),
            (_, _, _, true) => Some("e-resize"),
            _ => None,
        }
    }
}

/// What an active session is doing. `Idle` is only ever observed through
/// [`InteractionController::mode`]; the controller stores no session at all
/// while idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Idle,
    Dragging,
    Resizing(EdgeSet),
}

/// Ephemeral state for one in-progress drag or resize, created on
/// pointer-down and discarded on pointer-up or cancellation.
#[derive(Debug, Clone, Copy)]
pub struct InteractionSession<R: Copy + Eq + Ord> {
    target: R,
    edges: EdgeSet,
    dragging: bool,
    // one warning per session when a resize drives an extent non-positive
    warned_degenerate: bool,
}

/// Apply a motion delta to a geometry, independently per edge present in
/// the set. Moving the north or west edge shifts the origin and shrinks the
/// extent; south and east grow it. No minimum-size clamp: extents may go
/// non-positive, a policy left to the rendering collaborator.
pub fn apply_resize(geometry: Geometry, edges: EdgeSet, delta: MotionDelta) -> Geometry {
    let mut g = geometry;
    if edges.north {
        g.y += delta.dy;
        g.height -= delta.dy;
    } else if edges.south {
        g.height += delta.dy;
    }
    if edges.west {
        g.x += delta.dx;
        g.width -= delta.dx;
    } else if edges.east {
        g.width += delta.dx;
    }
    g
}

/// Per-window pointer state machine.
///
/// Single-pointer model: at most one session is active at a time, and a new
/// pointer-down while one is active replaces it (multi-touch behavior is
/// unspecified). Motion reports are ignored while idle; hover hit-testing
/// for the cursor affordance runs continuously and is the only thing that
/// happens outside a session.
#[derive(Debug)]
pub struct InteractionController<R: Copy + Eq + Ord> {
    session: Option<InteractionSession<R>>,
    // last hover classification, keyed by window; the resize direction at
    // press time is sticky to this rather than recomputed
    hover: Option<(R, EdgeSet)>,
    edge_band: i32,
}

impl<R: Copy + Eq + Ord + std::fmt::Debug> Default for InteractionController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Copy + Eq + Ord + std::fmt::Debug> InteractionController<R> {
    pub fn new() -> Self {
        Self {
            session: None,
            hover: None,
            edge_band: EDGE_BAND,
        }
    }

    /// Override the border band thickness. Terminal hosts with coarse cells
    /// want a far thinner band than the layout-unit default.
    pub fn set_edge_band(&mut self, band: i32) {
        self.edge_band = band.max(1);
    }

    pub fn mode(&self) -> SessionMode {
        match &self.session {
            None => SessionMode::Idle,
            Some(s) if s.dragging => SessionMode::Dragging,
            Some(s) => SessionMode::Resizing(s.edges),
        }
    }

    pub fn session_target(&self) -> Option<R> {
        self.session.as_ref().map(|s| s.target)
    }

    /// Advisory hover query: classify the pointer against the window's
    /// border band so the renderer can surface a resize cursor. Records the
    /// classification as the last hover for that window (press-time resize
    /// direction is sticky to it) but never touches session state.
    pub fn cursor_hint(
        &mut self,
        registry: &WindowRegistry<R>,
        id: R,
        local_x: i32,
        local_y: i32,
    ) -> EdgeSet {
        let Some(window) = registry.lookup(id) else {
            return EdgeSet::EMPTY;
        };
        let edges = EdgeSet::classify(window.geometry(), local_x, local_y, self.edge_band);
        self.hover = Some((id, edges));
        edges
    }

    /// Pointer-down on a window. Brings it to front unconditionally, then
    /// classifies the press: titlebar starts a drag, frame body with a
    /// non-empty edge set starts a resize, anything else starts nothing and
    /// is left to ordinary widget interaction.
    ///
    /// Returns true when a session started.
    pub fn pointer_down(
        &mut self,
        registry: &mut WindowRegistry<R>,
        id: R,
        local_x: i32,
        local_y: i32,
        region: HitRegion,
    ) -> bool {
        registry.bring_to_front(id);
        if registry.lookup(id).is_none() {
            return false;
        }
        match region {
            HitRegion::Titlebar => {
                tracing::debug!(window_id = ?id, "drag session started");
                self.session = Some(InteractionSession {
                    target: id,
                    edges: EdgeSet::EMPTY,
                    dragging: true,
                    warned_degenerate: false,
                });
                true
            }
            HitRegion::FrameBody => {
                let edges = match self.hover {
                    Some((hover_id, edges)) if hover_id == id => edges,
                    // no hover recorded for this window (programmatic
                    // driver); fall back to a fresh hit-test
                    _ => self.fresh_classify(registry, id, local_x, local_y),
                };
                if edges.is_empty() {
                    return false;
                }
                tracing::debug!(window_id = ?id, ?edges, "resize session started");
                self.session = Some(InteractionSession {
                    target: id,
                    edges,
                    dragging: false,
                    warned_degenerate: false,
                });
                true
            }
            HitRegion::Content | HitRegion::CloseControl => false,
        }
    }

    fn fresh_classify(
        &self,
        registry: &WindowRegistry<R>,
        id: R,
        local_x: i32,
        local_y: i32,
    ) -> EdgeSet {
        registry
            .lookup(id)
            .map(|window| EdgeSet::classify(window.geometry(), local_x, local_y, self.edge_band))
            .unwrap_or(EdgeSet::EMPTY)
    }

    /// Pointer motion while a session is active. The delta is since the
    /// previous event; it is applied incrementally to the current geometry,
    /// never recomputed from the press offset. Ignored while idle. If the
    /// target vanished mid-session the session ends with no geometry write.
    ///
    /// Returns true when a geometry write happened.
    pub fn pointer_move(&mut self, registry: &mut WindowRegistry<R>, delta: MotionDelta) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(window) = registry.lookup_mut(session.target) else {
            // window destroyed mid-session; stop without touching geometry
            tracing::debug!("session target vanished, cancelling");
            self.session = None;
            return false;
        };
        let next = if session.dragging {
            window.geometry().translated(delta.dx, delta.dy)
        } else {
            apply_resize(window.geometry(), session.edges, delta)
        };
        if next.is_degenerate() && !session.warned_degenerate {
            session.warned_degenerate = true;
            tracing::warn!(target_id = ?session.target, ?next, "resize drove extent non-positive");
        }
        window.set_geometry(next);
        true
    }

    /// Pointer released: clear the active session. Idempotent; releasing
    /// with no session is a no-op.
    pub fn pointer_up(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("session ended");
        }
    }

    /// Force-end the session if it targets `id` (the window is going away).
    /// No further geometry writes will reach it.
    pub fn cancel_for(&mut self, id: R) {
        if self.session.as_ref().is_some_and(|s| s.target == id) {
            tracing::debug!(window_id = ?id, "session cancelled");
            self.session = None;
        }
        if self.hover.is_some_and(|(hover_id, _)| hover_id == id) {
            self.hover = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAND: i32 = 25;

    fn geo() -> Geometry {
        Geometry::new(200, 100, 400, 300)
    }

    #[test]
    fn classify_interior_is_empty() {
        assert!(EdgeSet::classify(geo(), 200, 150, BAND).is_empty());
    }

    #[test]
    fn classify_bounds_are_strict() {
        // exactly on the edge line: outside the band
        assert!(EdgeSet::classify(geo(), 200, 0, BAND).is_empty());
        // exactly band units in: also outside
        assert!(EdgeSet::classify(geo(), 200, BAND, BAND).is_empty());
        // one unit inside either bound: north
        assert!(EdgeSet::classify(geo(), 200, 1, BAND).north);
        assert!(EdgeSet::classify(geo(), 200, BAND - 1, BAND).north);
    }

    #[test]
    fn classify_all_four_single_edges() {
        assert_eq!(
            EdgeSet::classify(geo(), 200, 10, BAND).cursor_name(),
            Some("n-resize")
        );
        assert_eq!(
            EdgeSet::classify(geo(), 200, 290, BAND).cursor_name(),
            Some("s-resize")
        );
        assert_eq!(
            EdgeSet::classify(geo(), 395, 150, BAND).cursor_name(),
            Some("e-resize")
        );
        assert_eq!(
            EdgeSet::classify(geo(), 5, 150, BAND).cursor_name(),
            Some("w-resize")
        );
    }

    #[test]
    fn classify_corners_union_both_axes() {
        let ne = EdgeSet::classify(geo(), 395, 10, BAND);
        assert!(ne.north && ne.east && !ne.south && !ne.west);
        assert_eq!(ne.cursor_name(), Some("ne-resize"));
        let sw = EdgeSet::classify(geo(), 5, 290, BAND);
        assert!(sw.south && sw.west);
        assert_eq!(sw.cursor_name(), Some("sw-resize"));
    }

    #[test]
    fn opposite_edges_never_co_occur_on_tiny_windows() {
        // window thinner than two bands: both bands overlap, first axis
        // check must win
        let tiny = Geometry::new(0, 0, 30, 30);
        let edges = EdgeSet::classify(tiny, 15, 15, BAND);
        assert!(edges.north && !edges.south);
        assert!(edges.west && !edges.east);
    }

    #[test]
    fn resize_north_moves_top_and_shrinks_height() {
        let g = apply_resize(
            geo(),
            EdgeSet {
                north: true,
                ..EdgeSet::EMPTY
            },
            MotionDelta::new(0, 12),
        );
        assert_eq!(g, Geometry::new(200, 112, 400, 288));
    }

    #[test]
    fn resize_north_east_corner() {
        let g = apply_resize(
            geo(),
            EdgeSet {
                north: true,
                east: true,
                ..EdgeSet::EMPTY
            },
            MotionDelta::new(7, -4),
        );
        assert_eq!(g.y, 100 - 4);
        assert_eq!(g.height, 300 + 4);
        assert_eq!(g.width, 400 + 7);
        assert_eq!(g.x, 200);
    }

    #[test]
    fn resize_south_west_corner() {
        let g = apply_resize(
            geo(),
            EdgeSet {
                south: true,
                west: true,
                ..EdgeSet::EMPTY
            },
            MotionDelta::new(-10, 6),
        );
        assert_eq!(g, Geometry::new(190, 100, 410, 306));
    }

    #[test]
    fn resize_has_no_minimum_clamp() {
        let g = apply_resize(
            Geometry::new(0, 0, 10, 10),
            EdgeSet {
                east: true,
                ..EdgeSet::EMPTY
            },
            MotionDelta::new(-30, 0),
        );
        assert_eq!(g.width, -20);
    }

    fn setup() -> (WindowRegistry<u32>, InteractionController<u32>) {
        let mut reg = WindowRegistry::new();
        reg.register(1, geo(), "one").unwrap();
        reg.register(2, Geometry::new(50, 50, 200, 200), "two").unwrap();
        (reg, InteractionController::new())
    }

    #[test]
    fn titlebar_press_starts_drag_and_raises() {
        let (mut reg, mut ctl) = setup();
        assert!(ctl.pointer_down(&mut reg, 1, 100, 10, HitRegion::Titlebar));
        assert_eq!(ctl.mode(), SessionMode::Dragging);
        assert_eq!(reg.lookup(1).unwrap().stack_order(), 3);
    }

    #[test]
    fn content_press_raises_but_starts_nothing() {
        let (mut reg, mut ctl) = setup();
        assert!(!ctl.pointer_down(&mut reg, 1, 100, 100, HitRegion::Content));
        assert_eq!(ctl.mode(), SessionMode::Idle);
        assert_eq!(reg.lookup(1).unwrap().stack_order(), 3);
    }

    #[test]
    fn frame_press_uses_sticky_hover_classification() {
        let (mut reg, mut ctl) = setup();
        // hover near the east edge, then press at interior coordinates; the
        // resize direction must come from the hover, not the press point
        let hint = ctl.cursor_hint(&reg, 1, 395, 150);
        assert_eq!(hint.cursor_name(), Some("e-resize"));
        assert!(ctl.pointer_down(&mut reg, 1, 200, 150, HitRegion::FrameBody));
        assert_eq!(ctl.mode(), SessionMode::Resizing(hint));
    }

    #[test]
    fn frame_press_without_hover_falls_back_to_hit_test() {
        let (mut reg, mut ctl) = setup();
        assert!(ctl.pointer_down(&mut reg, 1, 5, 150, HitRegion::FrameBody));
        assert!(matches!(ctl.mode(), SessionMode::Resizing(e) if e.west));
    }

    #[test]
    fn frame_press_in_interior_starts_nothing() {
        let (mut reg, mut ctl) = setup();
        ctl.cursor_hint(&reg, 1, 200, 150);
        assert!(!ctl.pointer_down(&mut reg, 1, 200, 150, HitRegion::FrameBody));
        assert_eq!(ctl.mode(), SessionMode::Idle);
    }

    #[test]
    fn drag_deltas_compose() {
        let (mut reg, mut ctl) = setup();
        ctl.pointer_down(&mut reg, 1, 100, 10, HitRegion::Titlebar);
        ctl.pointer_move(&mut reg, MotionDelta::new(3, -2));
        ctl.pointer_move(&mut reg, MotionDelta::new(-8, 5));
        ctl.pointer_up();
        let g = reg.lookup(1).unwrap().geometry();
        // same as a single move of the summed delta
        assert_eq!((g.x, g.y), (200 + 3 - 8, 100 - 2 + 5));
        assert_eq!((g.width, g.height), (400, 300));
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let (mut reg, mut ctl) = setup();
        assert!(!ctl.pointer_move(&mut reg, MotionDelta::new(10, 10)));
        assert_eq!(reg.lookup(1).unwrap().geometry(), geo());
    }

    #[test]
    fn pointer_up_is_idempotent() {
        let (mut reg, mut ctl) = setup();
        ctl.pointer_up();
        ctl.pointer_down(&mut reg, 1, 100, 10, HitRegion::Titlebar);
        ctl.pointer_up();
        ctl.pointer_up();
        assert_eq!(ctl.mode(), SessionMode::Idle);
    }

    #[test]
    fn target_destroyed_mid_session_cancels_without_writes() {
        let (mut reg, mut ctl) = setup();
        ctl.pointer_down(&mut reg, 2, 100, 10, HitRegion::Titlebar);
        reg.unregister(2);
        assert!(!ctl.pointer_move(&mut reg, MotionDelta::new(50, 50)));
        assert_eq!(ctl.mode(), SessionMode::Idle);
        // untouched bystander
        assert_eq!(reg.lookup(1).unwrap().geometry(), geo());
    }

    #[test]
    fn cancel_for_only_ends_matching_session() {
        let (mut reg, mut ctl) = setup();
        ctl.pointer_down(&mut reg, 1, 100, 10, HitRegion::Titlebar);
        ctl.cancel_for(2);
        assert_eq!(ctl.mode(), SessionMode::Dragging);
        ctl.cancel_for(1);
        assert_eq!(ctl.mode(), SessionMode::Idle);
        ctl.cancel_for(1);
        assert_eq!(ctl.mode(), SessionMode::Idle);
    }
}
