//! Page directory - the virtual side of the tables.

use crate::common::{FrameId, PageId};

/// Per-page state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageEntry {
    /// Frame holding this page, or None while the page is invalid.
    resident: Option<FrameId>,

    /// References since this page was last accessed.
    ///
    /// Only maintained for recency-tracking policies (LRU/MRU).
    recency: i64,
}

impl PageEntry {
    /// Frame holding this page.
    #[inline]
    pub fn resident(&self) -> Option<FrameId> {
        self.resident
    }

    /// Check whether the page is marked valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.resident.is_some()
    }

    /// References since last access.
    #[inline]
    pub fn recency(&self) -> i64 {
        self.recency
    }
}

/// Fixed-capacity registry of virtual pages.
///
/// Lookups with an out-of-range id return None instead of panicking;
/// callers validate ids before mutating.
#[derive(Debug, Clone)]
pub struct PageDirectory {
    entries: Vec<PageEntry>,
}

impl PageDirectory {
    /// Create a directory of `capacity` invalid pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![PageEntry::default(); capacity],
        }
    }

    /// Number of pages in the address space.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Get the entry for a page.
    #[inline]
    pub fn get(&self, page_id: PageId) -> Option<&PageEntry> {
        self.entries.get(page_id.index())
    }

    /// Frame the directory believes holds `page_id`.
    ///
    /// The answer may be stale; confirm it against the frame store.
    #[inline]
    pub fn lookup(&self, page_id: PageId) -> Option<FrameId> {
        self.get(page_id).and_then(PageEntry::resident)
    }

    /// Recency counter for `page_id`.
    #[inline]
    pub fn recency(&self, page_id: PageId) -> Option<i64> {
        self.get(page_id).map(PageEntry::recency)
    }

    /// Iterate over `(page id, entry)` for every valid page.
    pub fn valid_entries(&self) -> impl Iterator<Item = (PageId, &PageEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_valid())
            .map(|(i, entry)| (PageId::new(i as u32), entry))
    }

    /// Number of valid pages.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_valid()).count()
    }

    pub(crate) fn set_resident(&mut self, page_id: PageId, frame_id: Option<FrameId>) {
        self.entries[page_id.index()].resident = frame_id;
    }

    pub(crate) fn reset_recency(&mut self, page_id: PageId) {
        self.entries[page_id.index()].recency = 0;
    }

    pub(crate) fn age(&mut self, page_id: PageId) {
        let entry = &mut self.entries[page_id.index()];
        entry.recency = entry.recency.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_starts_invalid() {
        let dir = PageDirectory::new(8);
        assert_eq!(dir.capacity(), 8);
        assert_eq!(dir.valid_count(), 0);
        assert_eq!(dir.lookup(PageId::new(3)), None);
        assert_eq!(dir.recency(PageId::new(3)), Some(0));
    }

    #[test]
    fn test_out_of_range_lookup() {
        let dir = PageDirectory::new(8);
        assert_eq!(dir.lookup(PageId::new(8)), None);
        assert_eq!(dir.recency(PageId::new(100)), None);
    }

    #[test]
    fn test_recency_counters() {
        let mut dir = PageDirectory::new(4);
        dir.age(PageId::new(1));
        dir.age(PageId::new(1));
        assert_eq!(dir.recency(PageId::new(1)), Some(2));

        dir.reset_recency(PageId::new(1));
        assert_eq!(dir.recency(PageId::new(1)), Some(0));
    }

    #[test]
    fn test_valid_entries() {
        let mut dir = PageDirectory::new(4);
        dir.set_resident(PageId::new(2), Some(FrameId::new(0)));

        let valid: Vec<_> = dir.valid_entries().map(|(p, e)| (p, e.resident())).collect();
        assert_eq!(valid, vec![(PageId::new(2), Some(FrameId::new(0)))]);
    }
}
