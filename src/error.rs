use thiserror::Error;

/// Failure taxonomy for manager operations.
///
/// Nothing in this crate is fatal: registry internals treat absent ids as
/// ordinary no-ops, and the facade surfaces a value from this enum only
/// where the caller can usefully react (e.g. re-prompting on a dirty
/// close). The manager must never take down its host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The referenced window is no longer registered. Always recoverable;
    /// stale event handlers are expected to hit this after a close.
    #[error("window not found")]
    NotFound,

    /// Close was requested on a window with unsaved state. The window stays
    /// registered; callers may clear the dirty flag and retry.
    #[error("window has unsaved changes")]
    DirtyWindow,

    /// A window with this id is already registered.
    #[error("window id already registered")]
    DuplicateId,

    /// Reserved for callers that want to enforce positive extents. The core
    /// itself never constructs this; resize sessions are allowed to drive
    /// extents non-positive.
    #[error("invalid geometry")]
    InvalidGeometry,
}
