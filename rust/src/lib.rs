//! Non-preemptive single-core CPU scheduler simulation.
//!
//! The crate is built around two pieces:
//! - [`PriorityQueue`]: a binary min-heap whose ordering is injected as a
//!   [`Comparator`], with no knowledge of scheduling
//! - [`Simulation`]: a discrete-clock loop that admits processes, dispatches
//!   the most urgent ready one and retires it once its burst has elapsed
//!
//! Arrivals come from a seeded random generator (random mode) or a job file
//! (file mode). Each cycle is handed to an [`Observer`]; [`ConsoleReporter`]
//! renders the classic narration and summary.

pub mod config;
pub mod logging;
pub mod models;
pub mod ordering;
pub mod queue;
pub mod report;
pub mod scheduler;
pub mod workload;

pub use config::{AdmissionPolicy, SimulationConfig, Workload};
pub use models::{Admission, CpuActivity, Cycle, CycleRecord, Job, Pid, ProcessControlBlock};
pub use ordering::{ArrivalOrder, ReadyPolicy};
pub use queue::{Comparator, PriorityQueue, QueueError};
pub use report::{ConsoleReporter, Observer};
pub use scheduler::{SchedulerError, SchedulerState, Simulation, Statistics};
pub use workload::{load_jobs, parse_jobs, ProcessGenerator};
