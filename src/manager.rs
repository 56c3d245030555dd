//! `PanelManager`: the narrow interface the rendering collaborator drives.
//!
//! Owns one [`WindowRegistry`] and one [`InteractionController`] and wires
//! them together: pointer reports flow to the controller, close requests run
//! the dirty-check-then-unregister flow, and destroyed ids land on a queue
//! the renderer drains to dispose its visual nodes. The registry is torn
//! down before disposal is ever visible, so a concurrently scheduled event
//! referencing the id observes "not found" rather than a half-closed window.

use crate::error::Error;
use crate::geometry::{Geometry, MotionDelta};
use crate::interaction::{EdgeSet, HitRegion, InteractionController, SessionMode};
use crate::registry::WindowRegistry;

pub struct PanelManager<R: Copy + Eq + Ord> {
    registry: WindowRegistry<R>,
    controller: InteractionController<R>,
    // ids destroyed since the last drain; renderer disposes their nodes
    closed_windows: Vec<R>,
}

impl<R: Copy + Eq + Ord + std::fmt::Debug> Default for PanelManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Copy + Eq + Ord + std::fmt::Debug> PanelManager<R> {
    pub fn new() -> Self {
        Self::with_registry(WindowRegistry::new())
    }

    /// Build a manager around an existing registry. Managers are plain
    /// values; embedders run as many independent instances as they like.
    pub fn with_registry(registry: WindowRegistry<R>) -> Self {
        Self {
            registry,
            controller: InteractionController::new(),
            closed_windows: Vec::new(),
        }
    }

    /// See [`InteractionController::set_edge_band`].
    pub fn set_edge_band(&mut self, band: i32) {
        self.controller.set_edge_band(band);
    }

    pub fn registry(&self) -> &WindowRegistry<R> {
        &self.registry
    }

    /// Register a new window at the given geometry, on top of the stack.
    pub fn create_window(
        &mut self,
        id: R,
        geometry: Geometry,
        title: impl Into<String>,
    ) -> Result<(), Error> {
        self.registry.register(id, geometry, title)
    }

    /// Run the close flow: rejected while the window is dirty, otherwise
    /// the window is unregistered (cancelling any session targeting it)
    /// and queued for the renderer to dispose.
    pub fn destroy_window(&mut self, id: R) -> Result<(), Error> {
        let Some(window) = self.registry.lookup(id) else {
            return Err(Error::NotFound);
        };
        if window.is_dirty() {
            tracing::debug!(window_id = ?id, "close rejected: window is dirty");
            return Err(Error::DirtyWindow);
        }
        self.controller.cancel_for(id);
        self.registry.unregister(id);
        self.closed_windows.push(id);
        Ok(())
    }

    /// Drain the ids destroyed since the last call. The renderer disposes
    /// the matching visual nodes; by the time it does, the registry already
    /// reports them as not found.
    pub fn take_closed_windows(&mut self) -> Vec<R> {
        std::mem::take(&mut self.closed_windows)
    }

    pub fn pointer_down(
        &mut self,
        id: R,
        local_x: i32,
        local_y: i32,
        region: HitRegion,
    ) -> bool {
        self.controller
            .pointer_down(&mut self.registry, id, local_x, local_y, region)
    }

    pub fn pointer_move(&mut self, delta: MotionDelta) -> bool {
        self.controller.pointer_move(&mut self.registry, delta)
    }

    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    /// Advisory hover query for the resize-cursor affordance.
    pub fn cursor_hint(&mut self, id: R, local_x: i32, local_y: i32) -> EdgeSet {
        self.controller
            .cursor_hint(&self.registry, id, local_x, local_y)
    }

    /// Raise a window without a pointer event (e.g. focus driven by the
    /// host). No-op on the frontmost window and on unknown ids.
    pub fn bring_to_front(&mut self, id: R) {
        self.registry.bring_to_front(id);
    }

    pub fn session_mode(&self) -> SessionMode {
        self.controller.mode()
    }

    pub fn geometry(&self, id: R) -> Option<Geometry> {
        self.registry.lookup(id).map(|w| w.geometry())
    }

    /// Explicit geometry write outside any session.
    pub fn set_geometry(&mut self, id: R, geometry: Geometry) -> Result<(), Error> {
        let window = self.registry.lookup_mut(id).ok_or(Error::NotFound)?;
        window.set_geometry(geometry);
        Ok(())
    }

    pub fn stack_order(&self, id: R) -> Option<u32> {
        self.registry.lookup(id).map(|w| w.stack_order())
    }

    pub fn title(&self, id: R) -> Option<&str> {
        self.registry.lookup(id).map(|w| w.title())
    }

    pub fn set_title(&mut self, id: R, title: impl Into<String>) -> Result<(), Error> {
        let window = self.registry.lookup_mut(id).ok_or(Error::NotFound)?;
        window.set_title(title);
        Ok(())
    }

    pub fn is_dirty(&self, id: R) -> Option<bool> {
        self.registry.lookup(id).map(|w| w.is_dirty())
    }

    pub fn set_dirty(&mut self, id: R, dirty: bool) -> Result<(), Error> {
        let window = self.registry.lookup_mut(id).ok_or(Error::NotFound)?;
        window.set_dirty(dirty);
        Ok(())
    }

    /// Ids in paint order, back first.
    pub fn windows_back_to_front(&self) -> Vec<R> {
        self.registry.back_to_front()
    }
}
