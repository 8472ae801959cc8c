//! Validated reference traces.

use crate::common::{Error, PageId, Result};

/// An immutable, ordered sequence of page references.
///
/// Every entry is checked against `max_pages` on construction, so a trace
/// can be replayed without further bounds checks going wrong.
///
/// # Example
/// ```
/// use pagesim::ReferenceTrace;
///
/// let trace = ReferenceTrace::parse_text("0 1 2\n3 0", 1024).unwrap();
/// assert_eq!(trace.len(), 5);
/// assert!(ReferenceTrace::parse_text("5000", 1024).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTrace {
    pages: Vec<PageId>,
    max_pages: usize,
}

impl ReferenceTrace {
    /// Wrap `pages`, rejecting any id outside `[0, max_pages)`.
    ///
    /// # Errors
    /// Returns `Error::OutOfRangeReference` for the first bad entry.
    pub fn new(pages: Vec<PageId>, max_pages: usize) -> Result<Self> {
        if let Some((position, page)) = pages
            .iter()
            .enumerate()
            .find(|(_, page)| !page.in_range(max_pages))
        {
            return Err(Error::OutOfRangeReference {
                position,
                page: page.0,
                max_pages,
            });
        }

        Ok(Self { pages, max_pages })
    }

    /// Build a trace from raw ids.
    ///
    /// # Errors
    /// Returns `Error::OutOfRangeReference` for the first bad entry.
    pub fn from_ids<I>(ids: I, max_pages: usize) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        Self::new(ids.into_iter().map(PageId::new).collect(), max_pages)
    }

    /// Parse whitespace-separated page ids.
    ///
    /// # Errors
    /// Returns `Error::MalformedTrace` for a token that is not a
    /// non-negative integer, and `Error::OutOfRangeReference` for an id
    /// outside the address space.
    pub fn parse_text(text: &str, max_pages: usize) -> Result<Self> {
        let pages = text
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                token.parse::<u32>().map(PageId::new).map_err(|_| {
                    Error::MalformedTrace(format!("bad token '{}' at position {}", token, position))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(pages, max_pages)
    }

    /// Render as one id per line.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.pages.len() * 4);
        for page in &self.pages {
            text.push_str(&page.0.to_string());
            text.push('\n');
        }
        text
    }

    /// The references, in order.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// Address space the trace was validated against.
    #[inline]
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }
}

impl AsRef<[PageId]> for ReferenceTrace {
    fn as_ref(&self) -> &[PageId] {
        &self.pages
    }
}

impl<'a> IntoIterator for &'a ReferenceTrace {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
