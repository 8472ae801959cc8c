//! Recency-based replacement: LRU and MRU.
//!
//! Both read the per-page recency counters the driver maintains: a page's
//! counter is the number of references since it was last touched.

use std::cmp::Reverse;

use crate::common::FrameId;

use super::{Policy, Replacer, VictimContext};

/// Occupied frames paired with their occupant's recency counter.
fn recencies<'a>(ctx: &VictimContext<'a>) -> impl Iterator<Item = (FrameId, i64)> + 'a {
    let pages = ctx.pages;
    ctx.frames
        .occupied()
        .filter_map(move |(frame_id, page_id)| pages.recency(page_id).map(|r| (frame_id, r)))
}

/// Least Recently Used: evicts the page untouched for the most references.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer;

impl LruReplacer {
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for LruReplacer {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn tracks_recency(&self) -> bool {
        true
    }

    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> FrameId {
        // `max_by_key` keeps the last maximum, so rank lower indices higher.
        recencies(ctx)
            .max_by_key(|&(frame_id, recency)| (recency, Reverse(frame_id)))
            .map(|(frame_id, _)| frame_id)
            .unwrap_or(FrameId::new(0))
    }
}

/// Most Recently Used: evicts the page touched most recently.
///
/// Kept as the deliberately wrong heuristic to compare against LRU.
#[derive(Debug, Clone, Default)]
pub struct MruReplacer;

impl MruReplacer {
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for MruReplacer {
    fn policy(&self) -> Policy {
        Policy::Mru
    }

    fn tracks_recency(&self) -> bool {
        true
    }

    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> FrameId {
        // `min_by_key` keeps the first minimum.
        recencies(ctx)
            .min_by_key(|&(_, recency)| recency)
            .map(|(frame_id, _)| frame_id)
            .unwrap_or(FrameId::new(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;
    use crate::engine::Tables;

    /// Frames 0..3 hold pages 10, 11, 12; page 12 touched last, page 10 first.
    fn aged_tables() -> Tables {
        let mut tables = Tables::new(16, 3);
        for (frame, page) in [(0, 10), (1, 11), (2, 12)] {
            tables.bind(PageId::new(page), FrameId::new(frame));
            tables.touch(PageId::new(page));
        }
        tables
    }

    fn ctx(tables: &Tables) -> VictimContext<'_> {
        VictimContext {
            frames: tables.frames(),
            pages: tables.pages(),
            upcoming: &[],
        }
    }

    #[test]
    fn test_lru_picks_oldest() {
        let tables = aged_tables();
        assert_eq!(LruReplacer::new().select_victim(&ctx(&tables)), FrameId::new(0));
    }

    #[test]
    fn test_mru_picks_newest() {
        let tables = aged_tables();
        assert_eq!(MruReplacer::new().select_victim(&ctx(&tables)), FrameId::new(2));
    }

    #[test]
    fn test_ties_go_to_lowest_frame() {
        // Bound but never touched: every counter is 0.
        let mut tables = Tables::new(16, 3);
        for frame in 0..3 {
            tables.bind(PageId::new(frame as u32), FrameId::new(frame));
        }

        assert_eq!(LruReplacer::new().select_victim(&ctx(&tables)), FrameId::new(0));
        assert_eq!(MruReplacer::new().select_victim(&ctx(&tables)), FrameId::new(0));
    }

    #[test]
    fn test_empty_store_falls_back_to_frame_zero() {
        let tables = Tables::new(16, 3);
        assert_eq!(LruReplacer::new().select_victim(&ctx(&tables)), FrameId::new(0));
        assert_eq!(MruReplacer::new().select_victim(&ctx(&tables)), FrameId::new(0));
    }
}
