//! Shared crate-wide constants.

/// Border-proximity band thickness, in layout units, used by the edge
/// hit-test. A pointer within this distance of a frame edge classifies as a
/// resize grab for that edge; anywhere deeper is frame interior.
///
/// Units: layout units (CSS pixels on a browser-like host). Terminal hosts
/// work in far coarser cells and should override the band per controller;
/// see `InteractionController::set_edge_band`.
pub const EDGE_BAND: i32 = 25;

/// Edge band used by the demo binary. Terminal cells are coarse: the band
/// must reach past the one-cell border ring, because the strict hit-test
/// bounds exclude the frame line itself (the decorator reports frame-line
/// cells one unit inside; see `BoxDecorator::classify`).
pub const DEMO_EDGE_BAND: i32 = 2;

/// Default panel size used by the demo when spawning windows.
pub const DEMO_PANEL_WIDTH: i32 = 34;
pub const DEMO_PANEL_HEIGHT: i32 = 10;

/// Cascade step between successive demo panels so they don't open exactly
/// on top of each other.
pub const DEMO_CASCADE_STEP: i32 = 3;
