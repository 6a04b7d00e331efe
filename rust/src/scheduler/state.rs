//! Queues and CPU slot owned by one simulation run.

use crate::models::{Pid, ProcessControlBlock};
use crate::ordering::{ArrivalOrder, ReadyPolicy};
use crate::queue::PriorityQueue;

/// Where every live process control block resides.
///
/// A block is in exactly one of `waiting`, `ready` or `running`, or has
/// terminated and been dropped. It is never reordered in place: moving it
/// between locations is always a `remove` followed by an `insert` or a slot
/// assignment.
#[derive(Debug)]
pub struct SchedulerState {
    /// Jobs loaded from a file that have not arrived yet
    pub waiting: PriorityQueue<ProcessControlBlock, ArrivalOrder>,
    /// Admitted jobs waiting for the CPU
    pub ready: PriorityQueue<ProcessControlBlock, ReadyPolicy>,
    /// The dispatched process, held until it terminates
    pub running: Option<ProcessControlBlock>,
}

impl SchedulerState {
    pub fn new(policy: ReadyPolicy) -> Self {
        Self {
            waiting: PriorityQueue::new(ArrivalOrder),
            ready: PriorityQueue::new(policy),
            running: None,
        }
    }

    /// Number of processes not yet terminated.
    pub fn live(&self) -> usize {
        self.waiting.size() + self.ready.size() + usize::from(self.running.is_some())
    }

    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    /// Pids at the head of the wait and ready queues.
    pub fn heads(&self) -> (Option<Pid>, Option<Pid>) {
        (
            self.waiting.peek().ok().map(|pcb| pcb.pid()),
            self.ready.peek().ok().map(|pcb| pcb.pid()),
        )
    }
}
