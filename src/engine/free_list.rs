//! Free list - the stack of unoccupied frames.

use crate::common::FrameId;

/// LIFO stack of free frame ids.
///
/// Starts full (`0..capacity`), so the first allocation hands out the
/// highest frame index. Replacement never pushes frames back: once the list
/// is empty it stays empty unless a page is explicitly discarded.
#[derive(Debug, Clone)]
pub struct FreeList {
    frames: Vec<FrameId>,
    capacity: usize,
}

impl FreeList {
    /// Create a full free list holding every frame in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: (0..capacity).map(FrameId::new).collect(),
            capacity,
        }
    }

    /// Pop a free frame, or None if all frames are committed.
    #[inline]
    pub fn try_allocate(&mut self) -> Option<FrameId> {
        self.frames.pop()
    }

    /// Return a frame to the list.
    pub fn release(&mut self, frame_id: FrameId) {
        debug_assert!(frame_id.index() < self.capacity, "{} out of range", frame_id);
        debug_assert!(!self.contains(frame_id), "{} released twice", frame_id);
        self.frames.push(frame_id);
    }

    /// Number of free frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if every frame is committed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total number of frames the list was built for.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if `frame_id` is on the list.
    pub fn contains(&self, frame_id: FrameId) -> bool {
        self.frames.contains(&frame_id)
    }

    /// Free frames, bottom of the stack first.
    pub fn as_slice(&self) -> &[FrameId] {
        &self.frames
    }
}
