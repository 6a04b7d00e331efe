//! Cycle-driven non-preemptive scheduler.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{AdmissionPolicy, SimulationConfig, Workload};
use crate::models::{Admission, CpuActivity, Cycle, CycleRecord, Job, Pid, ProcessControlBlock};
use crate::queue::QueueError;
use crate::report::Observer;
use crate::workload::{load_jobs, ProcessGenerator};
use crate::{log_debug, log_decisions, log_events};

use super::state::SchedulerState;
use super::stats::Statistics;

/// Errors that can occur while configuring or running a simulation.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Probability {0} is outside of the range [0.01, 1.00]")]
    InvalidProbability(f64),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown scheduling strategy: {0}")]
    UnknownStrategy(String),
    #[error("Cannot read job file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Malformed job on line {line}: {reason}")]
    MalformedJob { line: usize, reason: String },
    #[error("Duplicate process id {0} in job file")]
    DuplicateProcess(Pid),
    #[error("Scheduler invariant violated: {0}")]
    Queue(#[from] QueueError),
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Where a run's arrivals come from.
#[derive(Debug)]
enum ArrivalSource {
    Random(ProcessGenerator),
    /// Jobs are pre-loaded into the wait queue.
    Preloaded,
}

/// One simulation run: owns its queues, generator and counters.
///
/// Each cycle first admits new work, then lets the CPU dispatch, run or
/// retire a process. A dispatched process keeps the CPU until
/// `start + burst <= cycle`.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    source: ArrivalSource,
    state: SchedulerState,
    stats: Statistics,
}

impl Simulation {
    /// Build a run for `workload`, failing before cycle 0 on any bad input.
    pub fn new(config: SimulationConfig, workload: &Workload) -> Result<Self, SchedulerError> {
        match workload {
            Workload::Random { probability } => Self::random(config, *probability),
            Workload::File { path } => {
                let jobs = load_jobs(path)?;
                Self::with_jobs(config, jobs)
            }
        }
    }

    /// Random mode with per-cycle arrival probability `probability`.
    pub fn random(config: SimulationConfig, probability: f64) -> Result<Self, SchedulerError> {
        config.validate()?;
        let generator = ProcessGenerator::new(
            probability,
            config.priority_range.clone(),
            config.burst_range.clone(),
            config.seed,
        )?;
        let state = SchedulerState::new(config.ready_policy);
        log_decisions!(
            config.verbosity,
            "Random mode: p={}, priorities {:?}, bursts {:?}",
            generator.probability(),
            config.priority_range,
            config.burst_range
        );

        Ok(Self {
            config,
            source: ArrivalSource::Random(generator),
            state,
            stats: Statistics::default(),
        })
    }

    /// File mode over already-parsed jobs.
    pub fn with_jobs(config: SimulationConfig, jobs: Vec<Job>) -> Result<Self, SchedulerError> {
        config.validate()?;

        let mut state = SchedulerState::new(config.ready_policy);
        let stats = Statistics {
            created: jobs.len() as u64,
            ..Default::default()
        };
        for job in jobs {
            state.waiting.insert(ProcessControlBlock::from(job));
        }

        Ok(Self {
            config,
            source: ArrivalSource::Preloaded,
            state,
            stats,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Run cycles `0..=cycles`, reporting each one to `observer`.
    pub fn run<O: Observer>(mut self, observer: &mut O) -> Result<Statistics, SchedulerError> {
        let verbosity = self.config.verbosity;
        log_events!(
            verbosity,
            "Starting {} cycles, policy {}",
            self.config.cycles,
            self.config.ready_policy
        );

        for cycle in 0..=self.config.cycles {
            let record = self.step(cycle)?;
            observer.observe(&record)?;
        }

        log_events!(
            verbosity,
            "Finished: {} created, {} dispatched, {} completed, {} still live",
            self.stats.created,
            self.stats.dispatched,
            self.stats.completed,
            self.state.live()
        );
        observer.finish(&self.stats)?;
        Ok(self.stats)
    }

    /// Simulate a single cycle.
    pub fn step(&mut self, cycle: Cycle) -> Result<CycleRecord, SchedulerError> {
        let (waiting_head, ready_head) = self.state.heads();
        log_debug!(
            self.config.verbosity,
            "Cycle {}: waiting={} (head {:?}) ready={} (head {:?}) busy={}",
            cycle,
            self.state.waiting.size(),
            waiting_head,
            self.state.ready.size(),
            ready_head,
            self.state.is_busy()
        );

        let admitted = self.admit(cycle)?;
        let cpu = self.execute(cycle)?;
        self.stats.cycles_run += 1;

        Ok(CycleRecord {
            cycle,
            admitted,
            cpu,
        })
    }

    fn admit(&mut self, cycle: Cycle) -> Result<Vec<Admission>, SchedulerError> {
        let verbosity = self.config.verbosity;
        let mut admitted = Vec::new();

        match &mut self.source {
            ArrivalSource::Random(generator) => {
                match generator.next_arrival(cycle) {
                    Some(job) => {
                        self.stats.created += 1;
                        let pcb = ProcessControlBlock::from(job);
                        admitted.push(Admission::from(&pcb));
                        log_events!(verbosity, "Cycle {}: created process {}", cycle, pcb.pid());
                        self.state.ready.insert(pcb);
                    }
                    None => log_decisions!(verbosity, "Cycle {}: admission trial failed", cycle),
                }
            }
            ArrivalSource::Preloaded => {
                while !self.state.waiting.is_empty() {
                    if self.state.waiting.peek()?.arrival() > cycle {
                        break;
                    }
                    if !admitted.is_empty() && self.config.admission == AdmissionPolicy::OnePerCycle {
                        log_decisions!(
                            verbosity,
                            "Cycle {}: deferring process {} to next cycle",
                            cycle,
                            self.state.waiting.peek()?.pid()
                        );
                        break;
                    }

                    let mut pcb = self.state.waiting.remove()?;
                    pcb.reset_wait();
                    admitted.push(Admission::from(&pcb));
                    log_events!(
                        verbosity,
                        "Cycle {}: admitted process {} (arrival {})",
                        cycle,
                        pcb.pid(),
                        pcb.arrival()
                    );
                    self.state.ready.insert(pcb);
                }
            }
        }

        Ok(admitted)
    }

    fn execute(&mut self, cycle: Cycle) -> Result<CpuActivity, SchedulerError> {
        let verbosity = self.config.verbosity;

        let pcb = match self.state.running.take() {
            Some(pcb) => pcb,
            None if self.state.ready.is_empty() => {
                log_decisions!(verbosity, "Cycle {}: ready queue empty", cycle);
                return Ok(CpuActivity::Idle);
            }
            None => {
                let mut pcb = self.state.ready.remove()?;
                let wait = pcb.dispatch(cycle);
                let turnaround = cycle.saturating_add(pcb.burst());
                self.stats.record_dispatch(wait, turnaround);
                log_events!(
                    verbosity,
                    "Cycle {}: dispatched process {} (priority {}, burst {}, waited {})",
                    cycle,
                    pcb.pid(),
                    pcb.priority(),
                    pcb.burst(),
                    wait
                );
                pcb
            }
        };

        let pid = pcb.pid();
        if pcb.is_finished_by(cycle) {
            self.stats.completed += 1;
            log_events!(verbosity, "Cycle {}: process {} terminated", cycle, pid);
            Ok(CpuActivity::Terminated(pid))
        } else {
            self.state.running = Some(pcb);
            Ok(CpuActivity::Executing(pid))
        }
    }
}
