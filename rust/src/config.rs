//! Configuration types for the simulation.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::models::Cycle;
use crate::ordering::ReadyPolicy;
use crate::SchedulerError;

/// Lowest accepted per-cycle arrival probability.
pub const MIN_PROBABILITY: f64 = 0.01;
/// Highest accepted per-cycle arrival probability.
pub const MAX_PROBABILITY: f64 = 1.00;

/// How many due jobs the wait queue releases per cycle in file mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdmissionPolicy {
    /// Admit at most the wait-queue head; later same-cycle arrivals slip a cycle each.
    #[default]
    OnePerCycle,
    /// Admit every job whose arrival cycle has been reached.
    AllDue,
}

/// Where new processes come from.
#[derive(Clone, Debug, PartialEq)]
pub enum Workload {
    /// Bernoulli arrivals with the given per-cycle probability.
    Random { probability: f64 },
    /// Jobs pre-loaded from a file of `pid priority arrival burst` lines.
    File { path: PathBuf },
}

/// Accept a per-cycle arrival probability only if it lies in [0.01, 1.00].
pub fn check_probability(probability: f64) -> Result<f64, SchedulerError> {
    if !(MIN_PROBABILITY..=MAX_PROBABILITY).contains(&probability) {
        return Err(SchedulerError::InvalidProbability(probability));
    }
    Ok(probability)
}

impl Workload {
    /// Random workload, rejecting probabilities outside [0.01, 1.00].
    pub fn random(probability: f64) -> Result<Self, SchedulerError> {
        let probability = check_probability(probability)?;
        Ok(Self::Random { probability })
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }
}

/// Parameters of one simulation run.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Last cycle simulated; cycles `0..=cycles` run.
    pub cycles: Cycle,
    /// Priority values drawn for random-mode processes (lower = more urgent)
    pub priority_range: RangeInclusive<i32>,
    /// Burst lengths drawn for random-mode processes
    pub burst_range: RangeInclusive<Cycle>,
    /// Generator seed; `None` seeds from the OS
    pub seed: Option<u64>,
    pub ready_policy: ReadyPolicy,
    pub admission: AdmissionPolicy,
    /// Diagnostic verbosity (0-3), see `logging`
    pub verbosity: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cycles: 100,
            priority_range: -19..=20,
            burst_range: 1..=100,
            seed: None,
            ready_policy: ReadyPolicy::default(),
            admission: AdmissionPolicy::default(),
            verbosity: 0,
        }
    }
}

impl SimulationConfig {
    pub fn with_cycles(cycles: Cycle) -> Self {
        Self {
            cycles,
            ..Default::default()
        }
    }

    /// Check the ranges before any cycle runs.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.priority_range.is_empty() {
            return Err(SchedulerError::InvalidConfig(format!(
                "priority range {}..={} is empty",
                self.priority_range.start(),
                self.priority_range.end()
            )));
        }
        if self.burst_range.is_empty() {
            return Err(SchedulerError::InvalidConfig(format!(
                "burst range {}..={} is empty",
                self.burst_range.start(),
                self.burst_range.end()
            )));
        }
        if *self.burst_range.start() == 0 {
            return Err(SchedulerError::InvalidConfig(
                "burst range must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
