//! Frame store - the physical side of the tables.
//!
//! A [`Frame`] records which page, if any, occupies it. The [`FrameStore`]
//! is the fixed-size registry of all frames in a run.

use crate::common::{FrameId, PageId};

/// A physical frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    /// Which page is currently loaded, or None if the frame is empty.
    occupant: Option<PageId>,
}

impl Frame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self { occupant: None }
    }

    /// Get the page loaded in this frame.
    #[inline]
    pub fn occupant(&self) -> Option<PageId> {
        self.occupant
    }

    /// Check if the frame is empty (no page loaded).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    fn set_occupant(&mut self, occupant: Option<PageId>) {
        self.occupant = occupant;
    }
}

/// Fixed-capacity registry of physical frames.
///
/// Mutation is crate-private: only [`Tables`](super::Tables) changes
/// occupants, so the frame store never disagrees with the page directory
/// after an operation returns.
#[derive(Debug, Clone)]
pub struct FrameStore {
    frames: Vec<Frame>,
}

impl FrameStore {
    /// Create a store of `capacity` empty frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: vec![Frame::new(); capacity],
        }
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Get a frame by id, or None if the id is out of range.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<&Frame> {
        self.frames.get(frame_id.index())
    }

    /// Page loaded in `frame_id`, if any.
    #[inline]
    pub fn occupant(&self, frame_id: FrameId) -> Option<PageId> {
        self.get(frame_id).and_then(Frame::occupant)
    }

    /// True iff `frame_id` currently holds `page_id`.
    ///
    /// A page entry pointing at a frame is only trusted once the frame
    /// confirms it.
    #[inline]
    pub fn is_resident_and_current(&self, frame_id: FrameId, page_id: PageId) -> bool {
        self.occupant(frame_id) == Some(page_id)
    }

    /// Iterate over `(frame id, occupant)` in frame order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, Option<PageId>)> + '_ {
        self.frames
            .iter()
            .enumerate()
            .map(|(i, frame)| (FrameId::new(i), frame.occupant()))
    }

    /// Iterate over occupied frames only.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.iter()
            .filter_map(|(frame_id, occupant)| occupant.map(|page_id| (frame_id, page_id)))
    }

    /// Number of occupied frames.
    pub fn occupied_count(&self) -> usize {
        self.frames.iter().filter(|f| !f.is_empty()).count()
    }

    pub(crate) fn set_occupant(&mut self, frame_id: FrameId, occupant: Option<PageId>) {
        debug_assert!(frame_id.index() < self.frames.len(), "{} out of range", frame_id);
        self.frames[frame_id.index()].set_occupant(occupant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_new() {
        let frame = Frame::new();
        assert!(frame.is_empty());
        assert_eq!(frame.occupant(), None);
    }

    #[test]
    fn test_store_starts_empty() {
        let store = FrameStore::new(4);
        assert_eq!(store.capacity(), 4);
        assert_eq!(store.occupied_count(), 0);
        assert!(store.iter().all(|(_, occ)| occ.is_none()));
    }

    #[test]
    fn test_set_and_confirm_occupant() {
        let mut store = FrameStore::new(4);
        store.set_occupant(FrameId::new(2), Some(PageId::new(9)));

        assert_eq!(store.occupant(FrameId::new(2)), Some(PageId::new(9)));
        assert!(store.is_resident_and_current(FrameId::new(2), PageId::new(9)));
        assert!(!store.is_resident_and_current(FrameId::new(2), PageId::new(8)));
        assert!(!store.is_resident_and_current(FrameId::new(1), PageId::new(9)));
        assert_eq!(store.occupied_count(), 1);
    }

    #[test]
    fn test_out_of_range_frame_is_never_current() {
        let store = FrameStore::new(2);
        assert!(store.get(FrameId::new(5)).is_none());
        assert!(!store.is_resident_and_current(FrameId::new(5), PageId::new(0)));
    }

    #[test]
    fn test_occupied_iter() {
        let mut store = FrameStore::new(3);
        store.set_occupant(FrameId::new(0), Some(PageId::new(4)));
        store.set_occupant(FrameId::new(2), Some(PageId::new(6)));

        let occupied: Vec<_> = store.occupied().collect();
        assert_eq!(
            occupied,
            vec![
                (FrameId::new(0), PageId::new(4)),
                (FrameId::new(2), PageId::new(6)),
            ]
        );
    }
}
