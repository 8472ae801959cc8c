//! Reference traces - where the page ids come from.
//!
//! The engine only sees `&[PageId]`; this module produces and stores them:
//! - [`ReferenceTrace`] - A validated, immutable trace
//! - [`TraceGenerator`] - Locality-biased synthetic traces
//! - [`TraceFile`] - Binary (CRC32-checked) and text trace files

mod generator;
mod reference_trace;
mod trace_file;

pub use generator::TraceGenerator;
pub use reference_trace::ReferenceTrace;
pub use trace_file::{TraceFile, TraceHeader};
