//! Queue orderings for process control blocks.
//!
//! Two families:
//! - `ArrivalOrder`: wait queue, earliest arrival first
//! - `ReadyPolicy`: ready queue, one of `priority`, `sjf` or `fcfs`
//!
//! Every ordering falls back to pid ascending, so no two distinct processes
//! ever compare equal. Orderings only read fields that are immutable after
//! creation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::ProcessControlBlock;
use crate::queue::Comparator;
use crate::SchedulerError;

/// Wait-queue ordering: (arrival, pid).
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrivalOrder;

impl Comparator<ProcessControlBlock> for ArrivalOrder {
    fn compare(&self, a: &ProcessControlBlock, b: &ProcessControlBlock) -> Ordering {
        a.arrival()
            .cmp(&b.arrival())
            .then(a.pid().cmp(&b.pid()))
    }
}

/// Ready-queue ordering strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadyPolicy {
    /// Lower priority value first: (priority, pid)
    #[default]
    Priority,
    /// Shortest job first: (burst, pid)
    ShortestJobFirst,
    /// First come, first served: (arrival, pid)
    FirstCome,
}

impl ReadyPolicy {
    pub const NAMES: [&'static str; 3] = ["priority", "sjf", "fcfs"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::ShortestJobFirst => "sjf",
            Self::FirstCome => "fcfs",
        }
    }
}

impl Comparator<ProcessControlBlock> for ReadyPolicy {
    fn compare(&self, a: &ProcessControlBlock, b: &ProcessControlBlock) -> Ordering {
        let primary = match self {
            Self::Priority => a.priority().cmp(&b.priority()),
            Self::ShortestJobFirst => a.burst().cmp(&b.burst()),
            Self::FirstCome => a.arrival().cmp(&b.arrival()),
        };
        primary.then(a.pid().cmp(&b.pid()))
    }
}

impl FromStr for ReadyPolicy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "sjf" => Ok(Self::ShortestJobFirst),
            "fcfs" => Ok(Self::FirstCome),
            _ => Err(SchedulerError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for ReadyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::PriorityQueue;

    fn pcb(pid: u32, priority: i32, arrival: u64, burst: u64) -> ProcessControlBlock {
        ProcessControlBlock::new(pid, priority, arrival, burst)
    }

    fn drain_pids<C: Comparator<ProcessControlBlock>>(
        cmp: C,
        items: Vec<ProcessControlBlock>,
    ) -> Vec<u32> {
        let mut q = PriorityQueue::new(cmp);
        for item in items {
            q.insert(item);
        }
        std::iter::from_fn(|| q.remove().ok().map(|p| p.pid())).collect()
    }

    #[test]
    fn test_priority_policy() {
        let pids = drain_pids(
            ReadyPolicy::Priority,
            vec![pcb(1, 5, 0, 1), pcb(2, 1, 0, 1), pcb(3, 3, 0, 1)],
        );
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[test]
    fn test_priority_ties_break_on_pid() {
        let pids = drain_pids(ReadyPolicy::Priority, vec![pcb(10, 4, 0, 1), pcb(7, 4, 0, 1)]);
        assert_eq!(pids, vec![7, 10]);
    }

    #[test]
    fn test_negative_priority_is_more_urgent() {
        let pids = drain_pids(
            ReadyPolicy::Priority,
            vec![pcb(1, 0, 0, 1), pcb(2, -19, 0, 1), pcb(3, 20, 0, 1)],
        );
        assert_eq!(pids, vec![2, 1, 3]);
    }

    #[test]
    fn test_shortest_job_first() {
        let pids = drain_pids(
            ReadyPolicy::ShortestJobFirst,
            vec![pcb(1, 0, 0, 50), pcb(2, 0, 0, 5), pcb(3, 0, 0, 5)],
        );
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[test]
    fn test_first_come() {
        let pids = drain_pids(
            ReadyPolicy::FirstCome,
            vec![pcb(1, -10, 9, 1), pcb(2, 10, 3, 1), pcb(3, 0, 3, 1)],
        );
        assert_eq!(pids, vec![2, 3, 1]);
    }

    #[test]
    fn test_arrival_order() {
        let pids = drain_pids(
            ArrivalOrder,
            vec![pcb(5, 0, 4, 1), pcb(1, 0, 9, 1), pcb(3, 0, 4, 1), pcb(2, 0, 0, 1)],
        );
        assert_eq!(pids, vec![2, 3, 5, 1]);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("priority".parse::<ReadyPolicy>().unwrap(), ReadyPolicy::Priority);
        assert_eq!("SJF".parse::<ReadyPolicy>().unwrap(), ReadyPolicy::ShortestJobFirst);
        assert_eq!("fcfs".parse::<ReadyPolicy>().unwrap(), ReadyPolicy::FirstCome);
        assert!(matches!(
            "lottery".parse::<ReadyPolicy>(),
            Err(SchedulerError::UnknownStrategy(s)) if s == "lottery"
        ));
        for name in ReadyPolicy::NAMES {
            assert_eq!(name.parse::<ReadyPolicy>().unwrap().name(), name);
        }
    }
}
