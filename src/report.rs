//! Running several policies over one trace and collecting the results.

use std::fmt;
use std::thread;

use tracing::info;

use crate::common::{Result, SimConfig};
use crate::engine::{Policy, RngSource, SimulationResult, Simulator};
use crate::trace::ReferenceTrace;

/// Results for every evaluated policy, in evaluation order.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    results: Vec<SimulationResult>,
    trace_len: usize,
}

impl SimulationReport {
    /// All results, in the order the policies were requested.
    pub fn results(&self) -> &[SimulationResult] {
        &self.results
    }

    /// Result for one policy.
    pub fn get(&self, policy: Policy) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.policy == policy)
    }

    /// Fault count for one policy.
    pub fn faults(&self, policy: Policy) -> Option<u64> {
        self.get(policy).map(SimulationResult::faults)
    }

    /// Number of references each policy replayed.
    pub fn trace_len(&self) -> usize {
        self.trace_len
    }

    /// The policy with the fewest faults (first one on ties).
    pub fn best(&self) -> Option<&SimulationResult> {
        self.results.iter().min_by_key(|r| r.faults())
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{}: {}", result.label(), result.faults())?;
        }
        Ok(())
    }
}

/// Replay `trace` once per policy in `policies`.
///
/// Every run gets fresh tables. Random policies are seeded from a single
/// source created from `config.seed`, in the order given, before any run
/// starts; with `config.parallel` the runs then execute on scoped threads.
///
/// # Errors
/// Returns `Error::InvalidConfig` for a bad configuration and
/// `Error::OutOfRangeReference` if the trace does not fit `config.max_pages`.
pub fn run_policies(
    config: &SimConfig,
    trace: &ReferenceTrace,
    policies: &[Policy],
) -> Result<SimulationReport> {
    config.validate()?;

    let rng = RngSource::from_seed(config.seed);
    let simulators = policies
        .iter()
        .map(|&policy| Simulator::with_policy(config, policy, &rng))
        .collect::<Result<Vec<_>>>()?;

    let pages = trace.as_slice();
    let results = if config.parallel && simulators.len() > 1 {
        thread::scope(|scope| {
            let handles: Vec<_> = simulators
                .into_iter()
                .map(|sim| scope.spawn(move || sim.run(pages)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect::<Result<Vec<_>>>()
        })?
    } else {
        simulators
            .into_iter()
            .map(|sim| sim.run(pages))
            .collect::<Result<Vec<_>>>()?
    };

    let report = SimulationReport {
        results,
        trace_len: trace.len(),
    };
    info!(
        policies = policies.len(),
        references = report.trace_len,
        best = report.best().map(SimulationResult::label).unwrap_or("-"),
        "evaluation complete"
    );
    Ok(report)
}

/// Replay `trace` under all six policies.
///
/// # Errors
/// Same as [`run_policies`].
pub fn run_all(config: &SimConfig, trace: &ReferenceTrace) -> Result<SimulationReport> {
    run_policies(config, trace, &Policy::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn belady_trace() -> ReferenceTrace {
        ReferenceTrace::from_ids([0, 1, 2, 3, 0, 1, 4, 0, 1, 2, 3, 4], 1024).unwrap()
    }

    #[test]
    fn test_run_all_reports_every_policy_in_order() {
        let config = SimConfig::default().with_frames(3).with_seed(1);
        let report = run_all(&config, &belady_trace()).unwrap();

        let labels: Vec<_> = report.results().iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["FIFO", "LRU", "MRU", "OPT", "RAN", "RAN2"]);
        assert_eq!(report.trace_len(), 12);
    }

    #[test]
    fn test_report_display() {
        let config = SimConfig::default().with_frames(3).with_parallel(false);
        let report = run_policies(&config, &belady_trace(), &[Policy::Fifo, Policy::Lru]).unwrap();

        assert_eq!(format!("{}", report), "FIFO: 9\nLRU: 10\n");
    }

    #[test]
    fn test_best_is_opt() {
        let config = SimConfig::default().with_frames(3).with_seed(3);
        let report = run_policies(
            &config,
            &belady_trace(),
            &[Policy::Fifo, Policy::Lru, Policy::Opt],
        )
        .unwrap();

        assert_eq!(report.best().unwrap().policy, Policy::Opt);
        assert_eq!(report.faults(Policy::Opt), Some(7));
        assert_eq!(report.faults(Policy::Mru), None);
    }

    #[test]
    fn test_invalid_config() {
        let config = SimConfig::default().with_frames(0);
        assert!(run_all(&config, &belady_trace()).is_err());
    }

    #[test]
    fn test_trace_wider_than_config() {
        let config = SimConfig::default().with_pages(4).with_frames(2);
        assert!(run_all(&config, &belady_trace()).is_err());
    }
}
