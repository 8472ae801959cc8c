//! Fault statistics tracking.

use std::fmt;

/// Counters accumulated by one simulation run.
///
/// Each run owns its own counters, so plain integers suffice; results from
/// parallel runs are merged only after the runs finish.
///
/// # Example
/// ```
/// use pagesim::FaultStats;
///
/// let mut stats = FaultStats::new();
/// stats.references += 4;
/// stats.hits += 1;
/// stats.soft_faults += 3;
/// assert_eq!(stats.faults(), 3);
/// assert_eq!(stats.hit_rate(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultStats {
    /// Number of references replayed.
    pub references: u64,

    /// References whose page was resident and confirmed by the frame store.
    pub hits: u64,

    /// Faults resolved from the free list.
    pub soft_faults: u64,

    /// Faults that required a victim.
    pub hard_faults: u64,

    /// Victims that actually held a page.
    pub evictions: u64,
}

impl FaultStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total page faults.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.soft_faults + self.hard_faults
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults() as f64 / self.references as f64
        }
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ refs: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults(),
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_rates_are_zero() {
        let stats = FaultStats::new();
        assert_eq!(stats.faults(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let stats = FaultStats {
            references: 10,
            hits: 7,
            soft_faults: 2,
            hard_faults: 1,
            evictions: 1,
        };

        assert_eq!(stats.faults(), 3);
        assert_eq!(stats.hit_rate(), 0.7);
        assert_eq!(stats.fault_rate(), 0.3);
    }

    #[test]
    fn test_stats_display() {
        let stats = FaultStats {
            references: 100,
            hits: 80,
            soft_faults: 15,
            hard_faults: 5,
            evictions: 5,
        };

        assert_eq!(
            stats.to_string(),
            "Stats { refs: 100, hits: 80, faults: 20, evictions: 5, hit_rate: 80.00% }"
        );
    }
}
