//! Table snapshots recorded after each fault in verbose mode.

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::engine::replacer::Policy;
use crate::engine::{Access, Tables};

/// One valid row of the page table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub page: PageId,
    pub frame: FrameId,
    /// Recency counter, for policies that track it.
    pub recency: Option<i64>,
}

/// The page table right after a fault.
///
/// Only valid pages are listed; every other page is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    pub policy: Policy,
    /// Index of the faulting reference in the trace.
    pub position: usize,
    pub page: PageId,
    pub access: Access,
    pub entries: Vec<SnapshotEntry>,
}

impl TableSnapshot {
    pub(crate) fn capture(
        policy: Policy,
        position: usize,
        page: PageId,
        access: Access,
        tables: &Tables,
        with_recency: bool,
    ) -> Self {
        let entries = tables
            .pages()
            .valid_entries()
            .filter_map(|(page, entry)| {
                entry.resident().map(|frame| SnapshotEntry {
                    page,
                    frame,
                    recency: with_recency.then(|| entry.recency()),
                })
            })
            .collect();

        Self {
            policy,
            position,
            page,
            access,
            entries,
        }
    }
}

impl fmt::Display for TableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Page Replacement Algorithm: {} (reference #{}, {}, {})",
            self.policy, self.position, self.page, self.access
        )?;
        writeln!(f, "Page\tFrame\tAuxiliary")?;
        for entry in &self.entries {
            match entry.recency {
                Some(recency) => {
                    writeln!(f, "{}\t{}\t{}", entry.page.0, entry.frame.0, recency)?
                }
                None => writeln!(f, "{}\t{}\t-", entry.page.0, entry.frame.0)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_lists_valid_pages() {
        let mut tables = Tables::new(8, 2);
        tables.bind(PageId::new(3), FrameId::new(1));
        tables.bind(PageId::new(5), FrameId::new(0));
        tables.touch(PageId::new(5));

        let snap = TableSnapshot::capture(
            Policy::Lru,
            4,
            PageId::new(5),
            Access::SoftFault { frame: FrameId::new(0) },
            &tables,
            true,
        );

        assert_eq!(snap.entries.len(), 2);
        assert_eq!(snap.entries[0].page, PageId::new(3));
        assert_eq!(snap.entries[0].recency, Some(1));
        assert_eq!(snap.entries[1].recency, Some(0));
    }

    #[test]
    fn test_display() {
        let mut tables = Tables::new(8, 2);
        tables.bind(PageId::new(3), FrameId::new(1));

        let snap = TableSnapshot::capture(
            Policy::Fifo,
            0,
            PageId::new(3),
            Access::SoftFault { frame: FrameId::new(1) },
            &tables,
            false,
        );

        let text = format!("{}", snap);
        assert!(text.starts_with("Page Replacement Algorithm: FIFO"));
        assert!(text.contains("3\t1\t-"));
    }
}
