//! The eviction simulation engine.
//!
//! A run owns a fixed set of tables and replays a trace through them,
//! consulting a replacement policy whenever a miss finds no free frame.
//!
//! # Components
//! - [`Simulator`] - The shared per-reference protocol
//! - [`Tables`] - [`PageDirectory`] and [`FrameStore`], updated together
//! - [`FreeList`] - Stack of unoccupied frames
//! - [`FaultStats`] - Per-run counters
//! - [`TableSnapshot`] - Verbose per-fault table dumps
//! - [`RngSource`] - Seeded-once randomness for the random policies
//! - [`replacer`] - Eviction policy implementations

mod frame_store;
mod free_list;
mod page_directory;
pub mod replacer;
mod rng;
mod simulator;
mod snapshot;
mod stats;
mod tables;

pub use frame_store::{Frame, FrameStore};
pub use free_list::FreeList;
pub use page_directory::{PageDirectory, PageEntry};
pub use replacer::{Policy, Replacer, VictimContext};
pub use rng::RngSource;
pub use simulator::{Access, SimulationResult, Simulator};
pub use snapshot::{SnapshotEntry, TableSnapshot};
pub use stats::FaultStats;
pub use tables::Tables;
