//! Cycle-by-cycle simulation of a single-core, non-preemptive CPU.
//!
//! `Simulation` owns a ready queue (and, in file mode, a wait queue of
//! pre-loaded jobs) plus a single CPU slot. Each cycle it admits due work,
//! then dispatches, continues or retires the running process.

mod core;
mod state;
mod stats;

pub use core::{SchedulerError, Simulation};
pub use state::SchedulerState;
pub use stats::Statistics;
