//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evicts in load order via a descending cursor
//! - [`LruReplacer`] / [`MruReplacer`] - recency counters
//! - [`OptReplacer`] - Belady's lookahead over the remaining trace
//! - [`RandomUniformReplacer`] / [`RandomCongruentialReplacer`] - random baselines
//!
//! A replacer is only consulted once the free list is empty. It must always
//! return an in-range frame; ties go to the lowest frame index.

mod fifo;
mod opt;
mod random;
mod recency;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameId, PageId};
use crate::engine::{FrameStore, PageDirectory, RngSource};

pub use fifo::FifoReplacer;
pub use opt::OptReplacer;
pub use random::{Lcg31, RandomCongruentialReplacer, RandomUniformReplacer};
pub use recency::{LruReplacer, MruReplacer};

/// Everything a replacer may inspect when choosing a victim.
#[derive(Debug, Clone, Copy)]
pub struct VictimContext<'a> {
    /// Current occupants.
    pub frames: &'a FrameStore,

    /// Page entries, for recency counters.
    pub pages: &'a PageDirectory,

    /// The trace from the faulting reference onward.
    pub upcoming: &'a [PageId],
}

/// A victim selection strategy.
pub trait Replacer: Send {
    /// Which policy this replacer implements.
    fn policy(&self) -> Policy;

    /// Whether the driver must maintain recency counters for this policy.
    fn tracks_recency(&self) -> bool {
        false
    }

    /// Pick the frame to reclaim.
    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> FrameId;
}

/// The policies under evaluation, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
    Mru,
    Opt,
    RandomUniform,
    RandomCongruential,
}

impl Policy {
    /// Every policy, in the order they are reported.
    pub const ALL: [Policy; 6] = [
        Policy::Fifo,
        Policy::Lru,
        Policy::Mru,
        Policy::Opt,
        Policy::RandomUniform,
        Policy::RandomCongruential,
    ];

    /// Short label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Mru => "MRU",
            Policy::Opt => "OPT",
            Policy::RandomUniform => "RAN",
            Policy::RandomCongruential => "RAN2",
        }
    }

    /// Whether the policy depends on the random source.
    pub fn is_random(self) -> bool {
        matches!(self, Policy::RandomUniform | Policy::RandomCongruential)
    }

    /// Build a fresh replacer for a run over `max_frames` frames.
    ///
    /// Random policies draw their seed from `rng`; deterministic policies
    /// leave it untouched.
    pub fn replacer(self, max_frames: usize, rng: &RngSource) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new(max_frames)),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Mru => Box::new(MruReplacer::new()),
            Policy::Opt => Box::new(OptReplacer::new()),
            Policy::RandomUniform => Box::new(RandomUniformReplacer::new(rng.fork())),
            Policy::RandomCongruential => {
                Box::new(RandomCongruentialReplacer::new(Lcg31::new(rng.next_seed())))
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "mru" => Ok(Policy::Mru),
            "opt" | "belady" => Ok(Policy::Opt),
            "ran" | "random" | "uniform" => Ok(Policy::RandomUniform),
            "ran2" | "lcg" | "congruential" => Ok(Policy::RandomCongruential),
            other => Err(Error::InvalidConfig(format!("unknown policy '{}'", other))),
        }
    }
}
