//! The page directory and frame store, updated together.

use crate::common::{FrameId, PageId};
use crate::engine::{FrameStore, PageDirectory};

/// Page directory and frame store for one run.
///
/// `bind` and `unbind` are the only ways to change residency, and each
/// touches both tables before returning.
///
/// ```text
/// ┌──────────────────────┐        ┌──────────────────────┐
/// │    PageDirectory     │        │      FrameStore      │
/// │ Page → resident, age │◀──────▶│  Frame → occupant    │
/// └──────────────────────┘        └──────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct Tables {
    pages: PageDirectory,
    frames: FrameStore,
}

impl Tables {
    /// Create fresh tables: all pages invalid, all frames empty.
    pub fn new(max_pages: usize, max_frames: usize) -> Self {
        Self {
            pages: PageDirectory::new(max_pages),
            frames: FrameStore::new(max_frames),
        }
    }

    /// The page directory.
    #[inline]
    pub fn pages(&self) -> &PageDirectory {
        &self.pages
    }

    /// The frame store.
    #[inline]
    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    /// Frame the directory believes holds `page_id`.
    #[inline]
    pub fn lookup(&self, page_id: PageId) -> Option<FrameId> {
        self.pages.lookup(page_id)
    }

    /// True iff `frame_id` currently holds `page_id`.
    #[inline]
    pub fn is_resident_and_current(&self, frame_id: FrameId, page_id: PageId) -> bool {
        self.frames.is_resident_and_current(frame_id, page_id)
    }

    /// Make `page_id` resident in `frame_id`.
    ///
    /// The frame must be empty and the page must be invalid.
    pub fn bind(&mut self, page_id: PageId, frame_id: FrameId) {
        debug_assert!(
            self.frames.occupant(frame_id).is_none(),
            "{} is still occupied",
            frame_id
        );
        debug_assert!(self.pages.lookup(page_id).is_none(), "{} already bound", page_id);

        self.pages.set_resident(page_id, Some(frame_id));
        self.frames.set_occupant(frame_id, Some(page_id));
    }

    /// Mark `page_id` invalid and clear its frame.
    ///
    /// Returns the frame the page occupied. A stale entry (the frame now
    /// holds another page) is cleared from the directory without touching
    /// the frame, and None is returned.
    pub fn unbind(&mut self, page_id: PageId) -> Option<FrameId> {
        let frame_id = self.pages.lookup(page_id)?;
        self.pages.set_resident(page_id, None);
        self.pages.reset_recency(page_id);

        if self.frames.is_resident_and_current(frame_id, page_id) {
            self.frames.set_occupant(frame_id, None);
            Some(frame_id)
        } else {
            None
        }
    }

    /// Empty `frame_id`, returning the page that was evicted.
    ///
    /// An already empty frame yields None.
    pub fn evict_frame(&mut self, frame_id: FrameId) -> Option<PageId> {
        let page_id = self.frames.occupant(frame_id)?;
        self.unbind(page_id);
        Some(page_id)
    }

    /// Record an access to `page_id` in the recency counters.
    ///
    /// The accessed page drops to 0; every other resident page ages by one.
    pub fn touch(&mut self, page_id: PageId) {
        for (_, occupant) in self.frames.occupied() {
            if occupant != page_id {
                self.pages.age(occupant);
            }
        }
        self.pages.reset_recency(page_id);
    }
}
