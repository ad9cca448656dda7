//! Shared-handle identity probe.
//!
//! Spawns N threads that each request [`ConfigStore::shared`] concurrently
//! and records the address every thread observed.  Because the handle is
//! initialized through a one-time-initialization primitive, all threads
//! must see the same fully-constructed instance no matter how the first
//! accesses interleave.

use std::thread;

use tracing::debug;

use crate::infrastructure::storage::store::ConfigStore;

/// Addresses of the shared store as observed by each probe thread.
#[derive(Debug)]
pub struct ProbeOutcome {
    pub observed: Vec<usize>,
}

impl ProbeOutcome {
    /// `true` when every thread observed the same instance.
    pub fn all_identical(&self) -> bool {
        self.observed.windows(2).all(|pair| pair[0] == pair[1])
    }
}

/// Races `thread_count` threads on first access to the shared handle.
///
/// Each thread resolves [`ConfigStore::shared`] and reports the instance
/// address; the outcome collects them in spawn order.
pub fn probe_shared_handle(thread_count: usize) -> ProbeOutcome {
    let handles: Vec<_> = (0..thread_count)
        .map(|index| {
            thread::Builder::new()
                .name(format!("handle-probe-{index}"))
                .spawn(|| ConfigStore::shared() as *const ConfigStore as usize)
                .expect("failed to spawn probe thread")
        })
        .collect();

    let observed = handles
        .into_iter()
        .map(|handle| handle.join().expect("probe thread panicked"))
        .collect::<Vec<usize>>();

    debug!("probe observed addresses: {observed:?}");
    ProbeOutcome { observed }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_collects_one_address_per_thread() {
        let outcome = probe_shared_handle(4);
        assert_eq!(outcome.observed.len(), 4);
    }

    #[test]
    fn test_all_threads_observe_the_same_instance() {
        let outcome = probe_shared_handle(6);
        assert!(outcome.all_identical());
    }

    #[test]
    fn test_single_thread_probe_is_trivially_identical() {
        assert!(probe_shared_handle(1).all_identical());
    }

    #[test]
    fn test_probe_matches_direct_access() {
        let direct = ConfigStore::shared() as *const ConfigStore as usize;
        let outcome = probe_shared_handle(3);
        assert!(outcome.observed.iter().all(|&addr| addr == direct));
    }
}
