//! Error types for handle-addressed operations.

use core::fmt;

use crate::Handle;

/// A handle did not refer to a live entry of the map it was used with.
///
/// Returned when the entry was already removed, the map was cleared, or
/// the handle was issued by a different map. The map is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHandle {
    /// The rejected handle.
    pub handle: Handle,
}

impl InvalidHandle {
    #[inline]
    pub(crate) const fn new(handle: Handle) -> Self {
        Self { handle }
    }
}

impl fmt::Display for InvalidHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "handle {:?} does not refer to a live entry of this map",
            self.handle
        )
    }
}

impl std::error::Error for InvalidHandle {}
