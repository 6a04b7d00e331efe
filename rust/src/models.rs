//! Core data types for the simulation.

/// Process identifier, assigned monotonically in random mode.
pub type Pid = u32;

/// Discrete simulated clock value.
pub type Cycle = u64;

/// A job description as read from a job file or synthesized by the generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub pid: Pid,
    pub priority: i32,
    pub arrival: Cycle,
    pub burst: Cycle,
}

impl Job {
    pub fn new(pid: Pid, priority: i32, arrival: Cycle, burst: Cycle) -> Self {
        Self {
            pid,
            priority,
            arrival,
            burst,
        }
    }
}

/// Scheduling metadata for one simulated process.
///
/// `pid`, `priority`, `arrival` and `burst` are fixed at creation and are the
/// only fields the queue orderings read. The bookkeeping fields change only
/// while the block sits outside any heap (in the CPU slot).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessControlBlock {
    pid: Pid,
    priority: i32,
    arrival: Cycle,
    burst: Cycle,
    start: Option<Cycle>,
    wait: Cycle,
    executing: bool,
}

impl ProcessControlBlock {
    pub fn new(pid: Pid, priority: i32, arrival: Cycle, burst: Cycle) -> Self {
        Self {
            pid,
            priority,
            arrival,
            burst,
            start: None,
            wait: 0,
            executing: false,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn arrival(&self) -> Cycle {
        self.arrival
    }

    pub fn burst(&self) -> Cycle {
        self.burst
    }

    pub fn start(&self) -> Option<Cycle> {
        self.start
    }

    pub fn wait(&self) -> Cycle {
        self.wait
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    /// Mark the block as running from `cycle`.
    ///
    /// Returns the wait time (`cycle - arrival`). A block dispatched before its
    /// arrival cycle waits zero cycles.
    pub fn dispatch(&mut self, cycle: Cycle) -> Cycle {
        debug_assert!(!self.executing, "process {} dispatched twice", self.pid);
        self.executing = true;
        self.start = Some(cycle);
        self.wait = cycle.saturating_sub(self.arrival);
        self.wait
    }

    /// Reset the wait counter on admission to the ready queue.
    pub fn reset_wait(&mut self) {
        self.wait = 0;
    }

    /// Cycle at which a dispatched process is due to finish (`start + burst`),
    /// saturating at `Cycle::MAX`.
    pub fn turnaround(&self) -> Option<Cycle> {
        self.start.map(|s| s.saturating_add(self.burst))
    }

    /// Whether a dispatched process has run to completion by `cycle`.
    pub fn is_finished_by(&self, cycle: Cycle) -> bool {
        self.turnaround().is_some_and(|t| t <= cycle)
    }
}

impl From<Job> for ProcessControlBlock {
    fn from(job: Job) -> Self {
        Self::new(job.pid, job.priority, job.arrival, job.burst)
    }
}

/// A job admitted to the ready queue during a cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admission {
    pub pid: Pid,
    pub priority: i32,
    pub burst: Cycle,
}

impl From<&ProcessControlBlock> for Admission {
    fn from(pcb: &ProcessControlBlock) -> Self {
        Self {
            pid: pcb.pid(),
            priority: pcb.priority(),
            burst: pcb.burst(),
        }
    }
}

/// What the CPU did during a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuActivity {
    Idle,
    Executing(Pid),
    Terminated(Pid),
}

/// Everything observable about one simulated cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleRecord {
    pub cycle: Cycle,
    pub admitted: Vec<Admission>,
    pub cpu: CpuActivity,
}
