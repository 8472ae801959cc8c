//! OPT (Belady) replacement policy.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::config::NEVER_REFERENCED_PENALTY;
use crate::common::{FrameId, PageId};

use super::{Policy, Replacer, VictimContext};

/// Evicts the page whose next reference lies farthest in the future.
///
/// Needs the remainder of the trace, which the driver passes in
/// [`VictimContext::upcoming`]. A page that never reappears (including one
/// whose next use would lie past the end of the supplied trace) scores
/// `upcoming.len() + NEVER_REFERENCED_PENALTY`, above any real distance.
#[derive(Debug, Clone, Default)]
pub struct OptReplacer;

impl OptReplacer {
    pub fn new() -> Self {
        Self
    }

    /// Distance to the next use of each frame's occupant, indexed by frame.
    ///
    /// One pass over `upcoming`, stopping once every occupant is located.
    pub fn next_use_distances(ctx: &VictimContext<'_>) -> Vec<usize> {
        let never = ctx.upcoming.len() + NEVER_REFERENCED_PENALTY;
        let mut distances = vec![never; ctx.frames.capacity()];

        let mut pending: HashMap<PageId, FrameId> = ctx
            .frames
            .occupied()
            .map(|(frame_id, page_id)| (page_id, frame_id))
            .collect();

        for (distance, page_id) in ctx.upcoming.iter().enumerate() {
            if pending.is_empty() {
                break;
            }
            if let Some(frame_id) = pending.remove(page_id) {
                distances[frame_id.index()] = distance;
            }
        }

        distances
    }
}

impl Replacer for OptReplacer {
    fn policy(&self) -> Policy {
        Policy::Opt
    }

    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> FrameId {
        Self::next_use_distances(ctx)
            .into_iter()
            .enumerate()
            .max_by_key(|&(index, distance)| (distance, Reverse(index)))
            .map(|(index, _)| FrameId::new(index))
            .unwrap_or(FrameId::new(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Tables;

    fn pids(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    fn tables_with(pages: &[u32]) -> Tables {
        let mut tables = Tables::new(16, pages.len());
        for (frame, &page) in pages.iter().enumerate() {
            tables.bind(PageId::new(page), FrameId::new(frame));
        }
        tables
    }

    #[test]
    fn test_opt_picks_farthest_next_use() {
        let tables = tables_with(&[1, 2, 3]);
        let upcoming = pids(&[4, 2, 1, 3]);
        let ctx = VictimContext {
            frames: tables.frames(),
            pages: tables.pages(),
            upcoming: &upcoming,
        };

        assert_eq!(OptReplacer::next_use_distances(&ctx), vec![2, 1, 3]);
        assert_eq!(OptReplacer::new().select_victim(&ctx), FrameId::new(2));
    }

    #[test]
    fn test_opt_prefers_never_referenced() {
        let tables = tables_with(&[1, 2, 3]);
        let upcoming = pids(&[4, 3, 1]);
        let ctx = VictimContext {
            frames: tables.frames(),
            pages: tables.pages(),
            upcoming: &upcoming,
        };

        let distances = OptReplacer::next_use_distances(&ctx);
        assert_eq!(distances[1], upcoming.len() + NEVER_REFERENCED_PENALTY);
        assert_eq!(OptReplacer::new().select_victim(&ctx), FrameId::new(1));
    }

    #[test]
    fn test_opt_ties_go_to_lowest_frame() {
        // Nothing reappears: all frames score the sentinel.
        let tables = tables_with(&[1, 2, 3]);
        let upcoming = pids(&[9]);
        let ctx = VictimContext {
            frames: tables.frames(),
            pages: tables.pages(),
            upcoming: &upcoming,
        };

        assert_eq!(OptReplacer::new().select_victim(&ctx), FrameId::new(0));
    }

    #[test]
    fn test_opt_end_of_trace() {
        let tables = tables_with(&[1, 2]);
        let ctx = VictimContext {
            frames: tables.frames(),
            pages: tables.pages(),
            upcoming: &[],
        };

        assert_eq!(OptReplacer::new().select_victim(&ctx), FrameId::new(0));
    }
}
