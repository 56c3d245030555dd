/// Signed panel rectangle: origin and extent in layout units.
///
/// Both axes are signed. A panel may be dragged partially off the surface,
/// and a resize session may drive an extent through zero (see
/// [`Geometry::is_degenerate`]); neither is clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the rectangle has no positive area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Translate the origin by a motion delta, leaving the extent alone.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Pointer motion since the previous event, not since session start.
///
/// Applying deltas incrementally keeps coalesced or dropped intermediate
/// events from accumulating drift against a stale press offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionDelta {
    pub dx: i32,
    pub dy: i32,
}

impl MotionDelta {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}
