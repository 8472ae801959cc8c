//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Orchestrator (report/)                      │   │
//! │  │     run_policies → one Simulator per policy → Report     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Simulation Engine (engine/)                        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Policies: FIFO | LRU | MRU | OPT | RAN | RAN2  │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │   Simulator + Tables (PageDirectory ⇄ FrameStore)        │   │
//! │  │   + FreeList + FaultStats                                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Traces (trace/)                                │   │
//! │  │     TraceGenerator + ReferenceTrace + TraceFile          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`engine`] - Tables, the simulation driver and eviction policies
//! - [`trace`] - Trace generation and persistence
//! - [`report`] - Multi-policy evaluation
//!
//! # Quick Start
//! ```
//! use pagesim::{run_all, Policy, ReferenceTrace, SimConfig};
//!
//! let config = SimConfig::default().with_frames(3).with_seed(7);
//! let trace = ReferenceTrace::from_ids([0, 1, 2, 3, 0, 1, 4, 0, 1, 2, 3, 4], 1024).unwrap();
//!
//! let report = run_all(&config, &trace).unwrap();
//! assert_eq!(report.faults(Policy::Fifo), Some(9));
//! assert_eq!(report.faults(Policy::Lru), Some(10));
//! ```

pub mod common;
pub mod engine;
pub mod report;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{MAX_FRAMES, MAX_PAGES, TRACE_LENGTH};
pub use common::{Error, FrameId, PageId, Result, SimConfig};

pub use engine::{
    Access, FaultStats, FreeList, Policy, Replacer, RngSource, SimulationResult, Simulator,
    TableSnapshot, Tables,
};
pub use report::{run_all, run_policies, SimulationReport};
pub use trace::{ReferenceTrace, TraceFile, TraceGenerator};
