//! FIFO (First-In-First-Out) replacement policy.

use crate::common::FrameId;

use super::{Policy, Replacer, VictimContext};

/// Evicts frames in the order they were filled.
///
/// The free list hands out frames from the highest index down, so a cursor
/// that starts at the top and walks down (wrapping after frame 0) always
/// points at the oldest resident page. No per-page bookkeeping is needed.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    cursor: usize,
    capacity: usize,
}

impl FifoReplacer {
    /// Create a FIFO replacer over `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            cursor: capacity.saturating_sub(1),
            capacity,
        }
    }

    /// Frame the next eviction will pick.
    pub fn cursor(&self) -> FrameId {
        FrameId::new(self.cursor)
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn select_victim(&mut self, _ctx: &VictimContext<'_>) -> FrameId {
        let victim = FrameId::new(self.cursor);
        self.cursor = match self.cursor {
            0 => self.capacity.saturating_sub(1),
            n => n - 1,
        };
        victim
    }
}
