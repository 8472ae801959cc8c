//! Simulator - the per-reference protocol shared by every policy.
//!
//! The [`Simulator`] provides:
//! - Hit / soft fault / hard fault classification for each reference
//! - Free-list allocation before any eviction
//! - Recency maintenance for the policies that need it
//! - Optional table snapshots after each fault

use std::fmt;

use tracing::{debug, info, trace};

use crate::common::{Error, FrameId, PageId, Result, SimConfig};
use crate::engine::replacer::{Policy, Replacer, VictimContext};
use crate::engine::{FaultStats, FreeList, RngSource, TableSnapshot, Tables};

/// Outcome of one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was resident and the frame store agreed.
    Hit,
    /// The page was loaded into a frame from the free list.
    SoftFault { frame: FrameId },
    /// The page replaced the occupant of a victim frame.
    HardFault {
        frame: FrameId,
        evicted: Option<PageId>,
    },
}

impl Access {
    /// Whether this reference counted as a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        !matches!(self, Access::Hit)
    }

    /// Frame that received the page, for faults.
    pub fn frame(&self) -> Option<FrameId> {
        match *self {
            Access::Hit => None,
            Access::SoftFault { frame } | Access::HardFault { frame, .. } => Some(frame),
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Hit => write!(f, "hit"),
            Access::SoftFault { frame } => write!(f, "soft fault into {}", frame),
            Access::HardFault {
                frame,
                evicted: Some(page),
            } => write!(f, "hard fault into {}, evicting {}", frame, page),
            Access::HardFault {
                frame,
                evicted: None,
            } => write!(f, "hard fault into empty {}", frame),
        }
    }
}

/// Outcome of replaying a whole trace under one policy.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub policy: Policy,
    pub stats: FaultStats,
    /// Free frames left when the trace ended.
    pub free_frames: usize,
    /// Table state after every fault; present only in verbose mode.
    pub snapshots: Option<Vec<TableSnapshot>>,
}

impl SimulationResult {
    /// Report label of the policy.
    pub fn label(&self) -> &'static str {
        self.policy.label()
    }

    /// Total page faults.
    pub fn faults(&self) -> u64 {
        self.stats.faults()
    }
}

/// Replays a reference trace against one replacement policy.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                        Simulator                         │
/// │  ┌──────────────────────┐   ┌────────────────────────┐   │
/// │  │ tables               │   │ free_list              │   │
/// │  │ PageDirectory ⇄      │   │ Vec<FrameId> (LIFO)    │   │
/// │  │ FrameStore           │   └────────────────────────┘   │
/// │  └──────────────────────┘   ┌────────────────────────┐   │
/// │  ┌──────────────────────┐   │ replacer               │   │
/// │  │ stats: FaultStats    │   │ Box<dyn Replacer>      │   │
/// │  └──────────────────────┘   └────────────────────────┘   │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// The replacer is consulted only when a miss finds the free list empty.
///
/// # Usage
/// ```
/// use pagesim::{PageId, Policy, RngSource, SimConfig, Simulator};
///
/// let config = SimConfig::default().with_frames(3);
/// let sim = Simulator::with_policy(&config, Policy::Fifo, &RngSource::seeded(0)).unwrap();
///
/// let trace: Vec<PageId> = [0, 1, 2, 3, 0, 1, 4, 0, 1, 2, 3, 4]
///     .into_iter()
///     .map(PageId::new)
///     .collect();
/// let result = sim.run(&trace).unwrap();
/// assert_eq!(result.faults(), 9);
/// ```
pub struct Simulator {
    /// Page directory and frame store.
    tables: Tables,

    /// Unoccupied frames.
    free_list: FreeList,

    /// Victim selection policy.
    replacer: Box<dyn Replacer>,

    /// Counters for this run.
    stats: FaultStats,

    /// Snapshots after each fault, when verbose.
    snapshots: Option<Vec<TableSnapshot>>,

    /// Cached from the replacer.
    tracks_recency: bool,

    /// Size of the address space.
    max_pages: usize,
}

impl Simulator {
    /// Create a simulator with fresh tables around `replacer`.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `config` fails validation.
    pub fn new(config: &SimConfig, replacer: Box<dyn Replacer>) -> Result<Self> {
        config.validate()?;

        let tracks_recency = replacer.tracks_recency();
        Ok(Self {
            tables: Tables::new(config.max_pages, config.max_frames),
            free_list: FreeList::new(config.max_frames),
            replacer,
            stats: FaultStats::new(),
            snapshots: config.verbose.then(Vec::new),
            tracks_recency,
            max_pages: config.max_pages,
        })
    }

    /// Create a simulator for `policy`, seeding random policies from `rng`.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `config` fails validation.
    pub fn with_policy(config: &SimConfig, policy: Policy, rng: &RngSource) -> Result<Self> {
        config.validate()?;
        Self::new(config, policy.replacer(config.max_frames, rng))
    }

    // ========================================================================
    // Public API: Replay
    // ========================================================================

    /// Process one reference.
    ///
    /// `upcoming` is the trace from this reference onward; only OPT reads it.
    /// An empty or shorter-than-real suffix just makes OPT treat the missing
    /// references as never happening.
    ///
    /// # Errors
    /// Returns `Error::OutOfRangeReference` if `page_id` is outside the
    /// address space. The tables are left untouched.
    pub fn access(&mut self, page_id: PageId, upcoming: &[PageId]) -> Result<Access> {
        if !page_id.in_range(self.max_pages) {
            return Err(Error::OutOfRangeReference {
                position: self.stats.references as usize,
                page: page_id.0,
                max_pages: self.max_pages,
            });
        }

        let position = self.stats.references as usize;
        self.stats.references += 1;

        let access = match self.tables.lookup(page_id) {
            Some(frame_id) if self.tables.is_resident_and_current(frame_id, page_id) => {
                self.stats.hits += 1;
                Access::Hit
            }
            stale => {
                if stale.is_some() {
                    // The directory still points at a frame that moved on.
                    self.tables.unbind(page_id);
                }
                self.handle_fault(page_id, upcoming)
            }
        };

        if self.tracks_recency {
            self.tables.touch(page_id);
        }

        trace!(policy = %self.policy(), position, page = page_id.0, %access, "reference");

        if access.is_fault() {
            if let Some(snapshots) = self.snapshots.as_mut() {
                snapshots.push(TableSnapshot::capture(
                    self.replacer.policy(),
                    position,
                    page_id,
                    access,
                    &self.tables,
                    self.tracks_recency,
                ));
            }
        }

        Ok(access)
    }

    /// Replay a whole trace from the start and produce the result.
    ///
    /// # Errors
    /// Stops at the first out-of-range reference.
    pub fn run(mut self, trace: &[PageId]) -> Result<SimulationResult> {
        for (position, &page_id) in trace.iter().enumerate() {
            self.access(page_id, &trace[position..])?;
        }

        info!(policy = %self.policy(), stats = %self.stats, "run complete");
        Ok(self.finish())
    }

    /// Explicitly evict `page_id` and return its frame to the free list.
    ///
    /// Returns the freed frame, or None if the page was not resident.
    pub fn discard(&mut self, page_id: PageId) -> Option<FrameId> {
        let frame_id = self.tables.unbind(page_id)?;
        self.free_list.release(frame_id);
        debug!(policy = %self.policy(), page = page_id.0, %frame_id, "discarded");
        Some(frame_id)
    }

    /// Consume the simulator and produce its result.
    pub fn finish(self) -> SimulationResult {
        SimulationResult {
            policy: self.replacer.policy(),
            stats: self.stats,
            free_frames: self.free_list.len(),
            snapshots: self.snapshots,
        }
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Policy this simulator runs.
    pub fn policy(&self) -> Policy {
        self.replacer.policy()
    }

    /// Counters so far.
    pub fn stats(&self) -> &FaultStats {
        &self.stats
    }

    /// Page directory and frame store.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Unoccupied frames.
    pub fn free_list(&self) -> &FreeList {
        &self.free_list
    }

    /// Describe the first broken table invariant, if any.
    ///
    /// Checks that free and occupied frames partition the frame range and
    /// that page and frame residency agree in both directions.
    pub fn invariant_violation(&self) -> Option<String> {
        let frames = self.tables.frames();
        let pages = self.tables.pages();

        for (frame_id, occupant) in frames.iter() {
            let free = self.free_list.contains(frame_id);
            match (occupant, free) {
                (Some(page_id), true) => {
                    return Some(format!("{} holds {} but is on the free list", frame_id, page_id))
                }
                (None, false) => {
                    return Some(format!("{} is neither free nor occupied", frame_id))
                }
                (Some(page_id), false) if pages.lookup(page_id) != Some(frame_id) => {
                    return Some(format!("{} holds {} but the page disagrees", frame_id, page_id))
                }
                _ => {}
            }
        }

        for (page_id, entry) in pages.valid_entries() {
            if let Some(frame_id) = entry.resident() {
                if !frames.is_resident_and_current(frame_id, page_id) {
                    return Some(format!("{} points at {} which disagrees", page_id, frame_id));
                }
            }
        }

        if self.free_list.len() + frames.occupied_count() != frames.capacity() {
            return Some("free list has duplicate frames".to_string());
        }

        None
    }

    // ========================================================================
    // Internal: Fault handling
    // ========================================================================

    /// Bring an invalid page in, from the free list if possible.
    fn handle_fault(&mut self, page_id: PageId, upcoming: &[PageId]) -> Access {
        if let Some(frame_id) = self.free_list.try_allocate() {
            self.tables.bind(page_id, frame_id);
            self.stats.soft_faults += 1;
            return Access::SoftFault { frame: frame_id };
        }

        let victim = {
            let ctx = VictimContext {
                frames: self.tables.frames(),
                pages: self.tables.pages(),
                upcoming,
            };
            self.replacer.select_victim(&ctx)
        };
        debug_assert!(
            victim.in_range(self.tables.frames().capacity()),
            "replacer returned {} out of range",
            victim
        );

        let evicted = self.tables.evict_frame(victim);
        if let Some(old) = evicted {
            self.stats.evictions += 1;
            debug!(policy = %self.policy(), victim = %victim, evicted = old.0, page = page_id.0, "evicted");
        }

        self.tables.bind(page_id, victim);
        self.stats.hard_faults += 1;

        Access::HardFault {
            frame: victim,
            evicted,
        }
    }
}
