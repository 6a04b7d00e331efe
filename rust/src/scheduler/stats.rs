//! Running aggregates for the end-of-run summary.

use crate::models::Cycle;

/// Counters accumulated while the loop runs.
///
/// Turnaround here is the completion cycle `start + burst`, summed when a
/// process is dispatched. Means divide by the number of dispatched processes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub cycles_run: u64,
    pub created: u64,
    pub dispatched: u64,
    pub completed: u64,
    pub total_wait: u64,
    pub total_turnaround: u64,
}

impl Statistics {
    /// Sums saturate at `u64::MAX` rather than wrapping.
    pub fn record_dispatch(&mut self, wait: Cycle, turnaround: Cycle) {
        self.dispatched += 1;
        self.total_wait = self.total_wait.saturating_add(wait);
        self.total_turnaround = self.total_turnaround.saturating_add(turnaround);
    }

    /// Mean number of processes created per simulated cycle.
    pub fn arrivals_per_cycle(&self) -> f64 {
        ratio(self.created, self.cycles_run)
    }

    pub fn mean_turnaround(&self) -> f64 {
        ratio(self.total_turnaround, self.dispatched)
    }

    pub fn mean_wait(&self) -> f64 {
        ratio(self.total_wait, self.dispatched)
    }
}

fn ratio(sum: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
