//! Property tests over randomly generated traces.

use std::collections::HashSet;

use pagesim::{run_all, PageId, Policy, ReferenceTrace, RngSource, SimConfig, Simulator};
use proptest::prelude::*;

const PAGES: u32 = 24;

fn trace_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..PAGES, 0..160)
}

fn config(frames: usize) -> SimConfig {
    SimConfig::default()
        .with_pages(PAGES as usize)
        .with_frames(frames)
        .with_seed(17)
        .with_parallel(false)
}

proptest! {
    #[test]
    fn prop_opt_is_optimal(ids in trace_strategy(), frames in 1usize..8) {
        let trace = ReferenceTrace::from_ids(ids, PAGES as usize).unwrap();
        let report = run_all(&config(frames), &trace).unwrap();

        let opt = report.faults(Policy::Opt).unwrap();
        for result in report.results() {
            prop_assert!(opt <= result.faults(), "OPT {} > {} {}", opt, result.label(), result.faults());
        }
    }

    #[test]
    fn prop_tables_stay_partitioned(ids in trace_strategy(), frames in 1usize..8) {
        let pages: Vec<PageId> = ids.into_iter().map(PageId::new).collect();
        let rng = RngSource::seeded(3);

        for policy in Policy::ALL {
            let mut sim = Simulator::with_policy(&config(frames), policy, &rng).unwrap();
            for (i, &page) in pages.iter().enumerate() {
                sim.access(page, &pages[i..]).unwrap();
                prop_assert_eq!(sim.invariant_violation(), None);
                prop_assert!(sim.tables().frames().occupied_count() <= frames);
            }
        }
    }

    #[test]
    fn prop_fault_bounds(ids in trace_strategy(), frames in 1usize..8) {
        let distinct = ids.iter().collect::<HashSet<_>>().len() as u64;
        let len = ids.len() as u64;
        let trace = ReferenceTrace::from_ids(ids, PAGES as usize).unwrap();
        let report = run_all(&config(frames), &trace).unwrap();

        for result in report.results() {
            let stats = result.stats;
            prop_assert_eq!(stats.references, len);
            prop_assert_eq!(stats.hits + stats.faults(), len);
            // Every distinct page faults at least once.
            prop_assert!(stats.faults() >= distinct);
            prop_assert!(stats.faults() <= len);
            prop_assert_eq!(stats.soft_faults, distinct.min(frames as u64));
        }
    }

    #[test]
    fn prop_enough_frames_means_compulsory_misses_only(ids in trace_strategy()) {
        let distinct = ids.iter().collect::<HashSet<_>>().len() as u64;
        let trace = ReferenceTrace::from_ids(ids, PAGES as usize).unwrap();
        let report = run_all(&config(PAGES as usize), &trace).unwrap();

        for result in report.results() {
            prop_assert_eq!(result.faults(), distinct);
            prop_assert_eq!(result.stats.evictions, 0);
        }
    }

    #[test]
    fn prop_single_hot_page_faults_once(page in 0..PAGES, repeat in 1usize..40, frames in 1usize..8) {
        let ids = vec![page; repeat];
        let trace = ReferenceTrace::from_ids(ids, PAGES as usize).unwrap();
        let report = run_all(&config(frames), &trace).unwrap();

        for result in report.results() {
            prop_assert_eq!(result.faults(), 1);
        }
    }
}
