//! Window registry: the single source of truth for which panels exist and
//! how they stack.
//!
//! The registry knows nothing about pointer events. It owns each `Window`
//! for as long as the window is registered; interaction code borrows entries
//! transiently through lookups and must treat absence as normal (a stale
//! event firing after a close is an expected case, not an error).

use std::collections::BTreeMap;

use crate::error::Error;
use crate::geometry::Geometry;

/// One floating panel: frame geometry, stacking rank, and close policy.
#[derive(Debug, Clone)]
pub struct Window {
    geometry: Geometry,
    stack_order: u32,
    dirty: bool,
    title: String,
}

impl Window {
    fn new(geometry: Geometry, title: String) -> Self {
        Self {
            geometry,
            // assigned by the registry on insert
            stack_order: 0,
            dirty: false,
            title,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    /// Stacking rank; higher renders closer to the viewer. Always positive
    /// for a registered window and mutated only by
    /// [`WindowRegistry::bring_to_front`].
    pub fn stack_order(&self) -> u32 {
        self.stack_order
    }

    /// When set, close requests are rejected. Placeholder policy for
    /// unsaved-changes confirmation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

/// Authoritative list of live windows plus the cached maximum stacking rank.
///
/// An explicitly owned value, not a global: embedders and tests construct as
/// many independent registries as they need.
///
/// Invariants after every call, including not-found paths:
/// - `max_stack_order` equals the max `stack_order` among live windows, or 0
///   when empty;
/// - stack orders of live windows are pairwise distinct.
#[derive(Debug, Default)]
pub struct WindowRegistry<R: Copy + Eq + Ord> {
    windows: BTreeMap<R, Window>,
    max_stack_order: u32,
}

impl<R: Copy + Eq + Ord + std::fmt::Debug> WindowRegistry<R> {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            max_stack_order: 0,
        }
    }

    /// Register a new window at the given geometry, assigning it the next
    /// stacking rank (strictly above everything currently registered).
    ///
    /// Ids are caller-supplied; a duplicate is rejected rather than silently
    /// shadowing the existing entry.
    pub fn register(
        &mut self,
        id: R,
        geometry: Geometry,
        title: impl Into<String>,
    ) -> Result<(), Error> {
        if self.windows.contains_key(&id) {
            return Err(Error::DuplicateId);
        }
        let mut window = Window::new(geometry, title.into());
        self.max_stack_order += 1;
        window.stack_order = self.max_stack_order;
        tracing::debug!(window_id = ?id, stack_order = window.stack_order, "registered window");
        self.windows.insert(id, window);
        Ok(())
    }

    pub fn lookup(&self, id: R) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn lookup_mut(&mut self, id: R) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Remove a window if present; absent ids are a no-op so close paths
    /// stay idempotent. The max rank is rescanned from the survivors — the
    /// removed window need not have held it.
    pub fn unregister(&mut self, id: R) {
        if self.windows.remove(&id).is_none() {
            return;
        }
        self.max_stack_order = self.find_max_stack_order();
        tracing::debug!(window_id = ?id, max_stack_order = self.max_stack_order, "unregistered window");
    }

    fn find_max_stack_order(&self) -> u32 {
        self.windows
            .values()
            .map(Window::stack_order)
            .max()
            .unwrap_or(0)
    }

    /// Raise a window above all others. Already-frontmost windows are left
    /// alone so repeated clicks don't churn ranks; unknown ids are ignored.
    pub fn bring_to_front(&mut self, id: R) {
        let max = self.max_stack_order;
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if window.stack_order == max {
            return;
        }
        self.max_stack_order = max + 1;
        window.stack_order = self.max_stack_order;
        tracing::debug!(window_id = ?id, stack_order = window.stack_order, "brought window to front");
    }

    pub fn max_stack_order(&self) -> u32 {
        self.max_stack_order
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Ids in paint order: back (lowest rank) first, frontmost last.
    pub fn back_to_front(&self) -> Vec<R> {
        let mut ids: Vec<R> = self.windows.keys().copied().collect();
        ids.sort_by_key(|id| self.windows[id].stack_order);
        ids
    }
}
