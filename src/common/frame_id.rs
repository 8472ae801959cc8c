//! Frame identifier type.

use std::fmt;

/// Identifies a physical frame, `0..max_frames`.
///
/// Frame ids double as indices into the frame store. The free list starts
/// with every id and hands out the highest first.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert!(frame_id.in_range(3));
/// assert_eq!(frame_id.to_string(), "Frame(2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// Whether this frame exists in a store of `capacity` frames.
    #[inline]
    pub fn in_range(self, capacity: usize) -> bool {
        self.0 < capacity
    }

    /// The index into the frame store.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
