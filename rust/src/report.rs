//! Output sinks for cycle narration and the final summary.

use std::io::{self, Write};

use crate::models::{CpuActivity, CycleRecord};
use crate::scheduler::Statistics;

/// Receives every simulated cycle, then the run's statistics.
pub trait Observer {
    fn observe(&mut self, record: &CycleRecord) -> io::Result<()>;

    fn finish(&mut self, _stats: &Statistics) -> io::Result<()> {
        Ok(())
    }
}

/// Collects the raw trace.
impl Observer for Vec<CycleRecord> {
    fn observe(&mut self, record: &CycleRecord) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Line-oriented human-readable narration.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for ConsoleReporter<W> {
    fn observe(&mut self, record: &CycleRecord) -> io::Result<()> {
        writeln!(self.out, "*** Cycle # : {}", record.cycle)?;
        if record.admitted.is_empty() {
            writeln!(self.out, "No new job this cycle")?;
        }
        for job in &record.admitted {
            writeln!(
                self.out,
                "Adding job with pid {} and priority {} and burst {}",
                job.pid, job.priority, job.burst
            )?;
        }
        match record.cpu {
            CpuActivity::Idle => writeln!(self.out, "The CPU is idle"),
            CpuActivity::Executing(pid) => writeln!(self.out, "Process {pid} is executing."),
            CpuActivity::Terminated(pid) => writeln!(self.out, "Process {pid} has just terminated."),
        }
    }

    fn finish(&mut self, stats: &Statistics) -> io::Result<()> {
        writeln!(
            self.out,
            "The average number of processes created per cycle is {:.5}",
            stats.arrivals_per_cycle()
        )?;
        writeln!(
            self.out,
            "The average turnaround time per process is {:.6}",
            stats.mean_turnaround()
        )?;
        writeln!(
            self.out,
            "The average wait time per process is {:.10} cycles.",
            stats.mean_wait()
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::models::{Admission, Job};
    use crate::scheduler::Simulation;

    fn render(records: &[CycleRecord], stats: &Statistics) -> String {
        let mut reporter = ConsoleReporter::new(Vec::<u8>::new());
        for record in records {
            reporter.observe(record).unwrap();
        }
        reporter.finish(stats).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_cycle_lines() {
        let records = vec![
            CycleRecord {
                cycle: 0,
                admitted: vec![Admission {
                    pid: 1,
                    priority: -3,
                    burst: 7,
                }],
                cpu: CpuActivity::Executing(1),
            },
            CycleRecord {
                cycle: 1,
                admitted: vec![],
                cpu: CpuActivity::Idle,
            },
        ];
        let text = render(&records, &Statistics::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "*** Cycle # : 0");
        assert_eq!(lines[1], "Adding job with pid 1 and priority -3 and burst 7");
        assert_eq!(lines[2], "Process 1 is executing.");
        assert_eq!(lines[3], "*** Cycle # : 1");
        assert_eq!(lines[4], "No new job this cycle");
        assert_eq!(lines[5], "The CPU is idle");
    }

    #[test]
    fn test_summary_of_single_job_run() {
        let sim = Simulation::with_jobs(SimulationConfig::with_cycles(5), vec![Job::new(1, 5, 0, 3)])
            .unwrap();
        let mut reporter = ConsoleReporter::new(Vec::<u8>::new());
        sim.run(&mut reporter).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains("Process 1 has just terminated."));
        assert_eq!(text.matches("The CPU is idle").count(), 2);
        assert!(text.contains("The average number of processes created per cycle is 0.16667"));
        assert!(text.contains("The average turnaround time per process is 3.000000"));
        assert!(text.contains("The average wait time per process is 0.0000000000 cycles."));
    }
}
