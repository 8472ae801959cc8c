//! Page identifier type.

use std::fmt;

/// Identifies a virtual page.
///
/// A page id is only meaningful relative to a `max_pages` bound; use
/// [`PageId::in_range`] before indexing a table with it.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert!(page_id.in_range(1024));
/// assert!(!page_id.in_range(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }

    /// Check whether this id addresses a page in `[0, max_pages)`.
    #[inline]
    pub fn in_range(self, max_pages: usize) -> bool {
        (self.0 as usize) < max_pages
    }

    /// The index into the page table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_id() {
        assert_eq!(PageId::new(1023).index(), 1023);
        assert_eq!(PageId::from(7), PageId::new(7));
    }

    #[test]
    fn test_in_range_is_half_open() {
        assert!(PageId::new(0).in_range(1));
        assert!(PageId::new(1023).in_range(1024));
        assert!(!PageId::new(1024).in_range(1024));
        assert!(!PageId::new(0).in_range(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(PageId::new(9).to_string(), "Page(9)");
    }
}
