//! Floating panel window manager.
//!
//! Movable, resizable, stackable panels (frame + titlebar + content area)
//! over a global front-to-back ordering. The crate is split the way the
//! runtime is: [`registry`] is the z-order authority and knows nothing
//! about pointers; [`interaction`] turns pointer-down/move/up reports into
//! drag and edge-resize sessions; [`manager`] is the narrow facade a
//! rendering collaborator drives. [`decorator`] holds the terminal chrome
//! used by the demo binary.

pub mod constants;
pub mod decorator;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod manager;
pub mod registry;
pub mod tracing_sub;

pub use error::Error;
pub use geometry::{Geometry, MotionDelta};
pub use interaction::{EdgeSet, HitRegion, InteractionController, SessionMode};
pub use manager::PanelManager;
pub use registry::{Window, WindowRegistry};
