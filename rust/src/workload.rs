//! Sources of new processes.
//!
//! - `ProcessGenerator`: random mode, one Bernoulli trial per cycle
//! - `load_jobs` / `parse_jobs`: file mode, `pid priority arrival burst` per line

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::config::check_probability;
use crate::models::{Cycle, Job, Pid};
use crate::SchedulerError;

/// Synthesizes processes for random mode.
///
/// Owns the only random generator in a run. The admission trial, the priority
/// draw and the burst draw are independent samples.
#[derive(Debug)]
pub struct ProcessGenerator {
    rng: StdRng,
    probability: f64,
    priority_range: RangeInclusive<i32>,
    burst_range: RangeInclusive<Cycle>,
    next_pid: Pid,
}

impl ProcessGenerator {
    /// Create a generator, rejecting a probability outside [0.01, 1.00] or
    /// an empty draw range.
    pub fn new(
        probability: f64,
        priority_range: RangeInclusive<i32>,
        burst_range: RangeInclusive<Cycle>,
        seed: Option<u64>,
    ) -> Result<Self, SchedulerError> {
        let probability = check_probability(probability)?;
        if priority_range.is_empty() || burst_range.is_empty() {
            return Err(SchedulerError::InvalidConfig(format!(
                "empty draw range: priorities {priority_range:?}, bursts {burst_range:?}"
            )));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            rng,
            probability,
            priority_range,
            burst_range,
            next_pid: 1,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Run this cycle's admission trial; on success return a new job arriving now.
    pub fn next_arrival(&mut self, cycle: Cycle) -> Option<Job> {
        if !self.rng.random_bool(self.probability) {
            return None;
        }
        let priority = self.rng.random_range(self.priority_range.clone());
        let burst = self.rng.random_range(self.burst_range.clone());
        let pid = self.next_pid;
        self.next_pid += 1;
        Some(Job::new(pid, priority, cycle, burst))
    }
}

/// Read and parse a job file.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>, SchedulerError> {
    let contents = fs::read_to_string(path).map_err(|source| SchedulerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_jobs(&contents)
}

/// Parse job records, one `pid priority arrival burst` line each.
///
/// Blank lines are skipped. Any other line must hold exactly four integers,
/// with `arrival + burst` representable as a cycle. Process ids must be
/// unique across the file.
pub fn parse_jobs(contents: &str) -> Result<Vec<Job>, SchedulerError> {
    let mut jobs = Vec::new();
    let mut seen: FxHashSet<Pid> = FxHashSet::default();

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 4 {
            return Err(SchedulerError::MalformedJob {
                line: line_no,
                reason: format!("expected 4 fields, found {}", fields.len()),
            });
        }

        let job = Job::new(
            parse_field(fields[0], "process id", line_no)?,
            parse_field(fields[1], "priority", line_no)?,
            parse_field(fields[2], "arrival cycle", line_no)?,
            parse_field(fields[3], "burst length", line_no)?,
        );
        if job.arrival.checked_add(job.burst).is_none() {
            return Err(SchedulerError::MalformedJob {
                line: line_no,
                reason: format!(
                    "burst {} from arrival {} overflows the cycle counter",
                    job.burst, job.arrival
                ),
            });
        }
        if !seen.insert(job.pid) {
            return Err(SchedulerError::DuplicateProcess(job.pid));
        }
        jobs.push(job);
    }

    Ok(jobs)
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    what: &str,
    line: usize,
) -> Result<T, SchedulerError> {
    raw.parse().map_err(|_| SchedulerError::MalformedJob {
        line,
        reason: format!("invalid {what} {raw:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_jobs() {
        let jobs = parse_jobs("1 5 0 3\n2 -4 2 10\n\n  3 0 7 1  \n").unwrap();
        assert_eq!(
            jobs,
            vec![
                Job::new(1, 5, 0, 3),
                Job::new(2, -4, 2, 10),
                Job::new(3, 0, 7, 1),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let err = parse_jobs("1 5 0 3\n2 4 1\n").unwrap_err();
        assert!(matches!(err, SchedulerError::MalformedJob { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_extra_fields() {
        assert!(matches!(
            parse_jobs("1 5 0 3 9"),
            Err(SchedulerError::MalformedJob { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        assert!(matches!(
            parse_jobs("1 high 0 3"),
            Err(SchedulerError::MalformedJob { line: 1, .. })
        ));
        // arrival and burst are unsigned
        assert!(parse_jobs("1 0 -2 3").is_err());
        assert!(parse_jobs("1 0 2 -3").is_err());
    }

    #[test]
    fn test_parse_rejects_overflowing_burst() {
        assert!(matches!(
            parse_jobs("1 0 1 18446744073709551615"),
            Err(SchedulerError::MalformedJob { line: 1, .. })
        ));
        assert!(matches!(
            parse_jobs("1 0 0 3\n2 0 5 18446744073709551611\n"),
            Err(SchedulerError::MalformedJob { line: 2, .. })
        ));
        // arrival + burst landing exactly on the last cycle is fine
        let jobs = parse_jobs("1 0 1 18446744073709551614").unwrap();
        assert_eq!(jobs[0].burst, u64::MAX - 1);
    }

    #[test]
    fn test_parse_rejects_duplicate_pid() {
        assert!(matches!(
            parse_jobs("4 1 0 3\n4 2 1 1\n"),
            Err(SchedulerError::DuplicateProcess(4))
        ));
    }

    #[test]
    fn test_load_jobs_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 5 0 3").unwrap();
        writeln!(file, "2 1 1 2").unwrap();
        let jobs = load_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1], Job::new(2, 1, 1, 2));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(
            load_jobs(&missing),
            Err(SchedulerError::Io { .. })
        ));
    }

    #[test]
    fn test_generator_always_arrives_at_probability_one() {
        let mut generator = ProcessGenerator::new(1.0, -19..=20, 1..=100, Some(7)).unwrap();
        for cycle in 0..50 {
            let job = generator.next_arrival(cycle).unwrap();
            assert_eq!(job.pid, cycle as u32 + 1);
            assert_eq!(job.arrival, cycle);
            assert!((-19..=20).contains(&job.priority));
            assert!((1..=100).contains(&job.burst));
        }
    }

    #[test]
    fn test_generator_draws_spread_over_range() {
        let mut generator = ProcessGenerator::new(1.0, -19..=20, 1..=100, Some(11)).unwrap();
        let priorities: FxHashSet<i32> = (0..200)
            .filter_map(|c| generator.next_arrival(c))
            .map(|j| j.priority)
            .collect();
        // uniform draws over 40 values, not a two-valued collapse
        assert!(priorities.len() > 10);
    }

    #[test]
    fn test_generator_rejects_bad_inputs() {
        assert!(matches!(
            ProcessGenerator::new(1.5, -19..=20, 1..=100, Some(1)),
            Err(SchedulerError::InvalidProbability(_))
        ));
        assert!(matches!(
            ProcessGenerator::new(f64::NAN, -19..=20, 1..=100, Some(1)),
            Err(SchedulerError::InvalidProbability(_))
        ));
        assert!(matches!(
            ProcessGenerator::new(0.5, RangeInclusive::new(3, -3), 1..=100, Some(1)),
            Err(SchedulerError::InvalidConfig(_))
        ));
        assert!(matches!(
            ProcessGenerator::new(0.5, -19..=20, RangeInclusive::new(10, 1), Some(1)),
            Err(SchedulerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_generator_is_reproducible_with_seed() {
        let mut a = ProcessGenerator::new(0.3, -19..=20, 1..=100, Some(42)).unwrap();
        let mut b = ProcessGenerator::new(0.3, -19..=20, 1..=100, Some(42)).unwrap();
        for cycle in 0..100 {
            assert_eq!(a.next_arrival(cycle), b.next_arrival(cycle));
        }
    }
}
