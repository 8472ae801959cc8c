//! Shared primitives for the simulator.
//!
//! - [`PageId`] / [`FrameId`] - virtual page and physical frame ids
//! - [`SimConfig`] and the default sizes in [`config`]
//! - [`Error`] / [`Result`]

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
