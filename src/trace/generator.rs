//! Locality-biased synthetic trace generation.

use rand::Rng;

use crate::common::config::LOCALITY_MAX_RUN;
use crate::common::{PageId, Result, SimConfig};
use crate::trace::ReferenceTrace;

/// Generates traces with short bursts of repeated references.
///
/// The first reference is always page 0. After that the generator picks a
/// uniformly random page and repeats it a random number of times in
/// `[0, LOCALITY_MAX_RUN)`, until the trace reaches its length.
#[derive(Debug, Clone, Copy)]
pub struct TraceGenerator {
    max_pages: usize,
    length: usize,
}

impl TraceGenerator {
    pub fn new(max_pages: usize, length: usize) -> Self {
        Self { max_pages, length }
    }

    /// Generator sized from a configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.max_pages, config.trace_length)
    }

    /// Produce a trace of exactly the configured length.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if the address space is empty or does
    /// not fit the page id space.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<ReferenceTrace> {
        SimConfig::default()
            .with_pages(self.max_pages)
            .validate()?;

        let mut pages = Vec::with_capacity(self.length);
        if self.length > 0 {
            pages.push(PageId::new(0));
        }

        while pages.len() < self.length {
            let run = rng.gen_range(0..LOCALITY_MAX_RUN);
            let page = PageId::new(rng.gen_range(0..self.max_pages) as u32);
            let remaining = self.length - pages.len();
            pages.extend(std::iter::repeat(page).take(run.min(remaining)));
        }

        ReferenceTrace::new(pages, self.max_pages)
    }
}
