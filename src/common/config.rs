//! Configuration constants and the simulation configuration.

use crate::common::{Error, Result};

/// Size of the virtual address space, in pages.
///
/// Every reference in a trace must fall in `[0, MAX_PAGES)`.
pub const MAX_PAGES: usize = 1024;

/// Number of physical frames available to a run.
pub const MAX_FRAMES: usize = 48;

/// Default length of a generated reference trace.
pub const TRACE_LENGTH: usize = 500;

/// Added to the remaining trace length to score a page that is never
/// referenced again.
///
/// Any value > 0 works; the score only has to dominate every real distance.
pub const NEVER_REFERENCED_PENALTY: usize = 100;

/// Upper bound (exclusive) on how many times the generator repeats a page
/// back to back.
pub const LOCALITY_MAX_RUN: usize = 5;

/// Configuration threaded into every simulation run.
///
/// # Example
/// ```
/// use pagesim::SimConfig;
///
/// let config = SimConfig::default().with_frames(3).with_seed(7);
/// assert_eq!(config.max_frames, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Size of the virtual address space.
    pub max_pages: usize,

    /// Physical capacity in frames.
    pub max_frames: usize,

    /// Length of generated traces.
    pub trace_length: usize,

    /// Record a table snapshot after every fault.
    pub verbose: bool,

    /// Seed for the random policies and the trace generator.
    ///
    /// `None` seeds from OS entropy, so random results differ between runs.
    pub seed: Option<u64>,

    /// Run policies on separate threads.
    pub parallel: bool,
}

impl SimConfig {
    /// Set the number of frames.
    pub fn with_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Set the size of the virtual address space.
    pub fn with_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the generated trace length.
    pub fn with_trace_length(mut self, trace_length: usize) -> Self {
        self.trace_length = trace_length;
        self
    }

    /// Enable or disable per-fault snapshots.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel policy runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that the configuration describes a usable machine.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if there are no frames or no pages,
    /// or if `max_pages` does not fit the `u32` page id space.
    pub fn validate(&self) -> Result<()> {
        if self.max_frames == 0 {
            return Err(Error::InvalidConfig("max_frames must be > 0".into()));
        }
        if self.max_pages == 0 {
            return Err(Error::InvalidConfig("max_pages must be > 0".into()));
        }
        if self.max_pages as u64 > u32::MAX as u64 {
            return Err(Error::InvalidConfig(format!(
                "max_pages {} exceeds the page id space",
                self.max_pages
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_pages: MAX_PAGES,
            max_frames: MAX_FRAMES,
            trace_length: TRACE_LENGTH,
            verbose: false,
            seed: None,
            parallel: true,
        }
    }
}
