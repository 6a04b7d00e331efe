//! Command-line front end for the scheduler simulation.
//!
//! ```text
//! cpu-sched <CYCLES> -r <PROBABILITY>
//! cpu-sched <CYCLES> -f <JOB_FILE>
//! ```

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, ArgGroup, Parser};

use cpu_sched::{
    AdmissionPolicy, ConsoleReporter, ReadyPolicy, SchedulerError, Simulation, SimulationConfig,
    Statistics, Workload,
};

#[derive(Parser, Debug)]
#[command(
    name = "cpu-sched",
    version,
    about = "Simulate a non-preemptive single-core CPU scheduler"
)]
#[command(group(ArgGroup::new("mode").required(true).args(["probability", "file"])))]
struct Cli {
    /// Last cycle to simulate (cycles 0..=CYCLES run)
    cycles: u64,

    /// Random mode: probability a process is created each cycle, in [0.01, 1.00]
    #[arg(
        short = 'r',
        short_alias = 'R',
        value_name = "PROBABILITY",
        allow_negative_numbers = true
    )]
    probability: Option<f64>,

    /// File mode: jobs as `pid priority arrival burst` lines
    #[arg(short = 'f', short_alias = 'F', value_name = "JOB_FILE")]
    file: Option<PathBuf>,

    /// Seed for the random-mode generator
    #[arg(long)]
    seed: Option<u64>,

    /// Ready-queue ordering: priority, sjf or fcfs
    #[arg(long, default_value = "priority")]
    policy: String,

    /// Admit every due job each cycle instead of one per cycle (file mode)
    #[arg(long)]
    admit_all: bool,

    #[arg(long, default_value_t = -19, allow_negative_numbers = true)]
    priority_min: i32,

    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    priority_max: i32,

    #[arg(long, default_value_t = 1)]
    burst_min: u64,

    #[arg(long, default_value_t = 100)]
    burst_max: u64,

    /// Diagnostics on stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Statistics, SchedulerError> {
    let workload = match (cli.probability, cli.file) {
        (Some(probability), _) => Workload::random(probability)?,
        (None, Some(path)) => Workload::file(path),
        (None, None) => {
            return Err(SchedulerError::InvalidConfig(
                "one of -r or -f is required".to_string(),
            ))
        }
    };

    let config = SimulationConfig {
        cycles: cli.cycles,
        priority_range: cli.priority_min..=cli.priority_max,
        burst_range: cli.burst_min..=cli.burst_max,
        seed: cli.seed,
        ready_policy: cli.policy.parse::<ReadyPolicy>()?,
        admission: if cli.admit_all {
            AdmissionPolicy::AllDue
        } else {
            AdmissionPolicy::OnePerCycle
        },
        verbosity: cli.verbose,
    };

    let simulation = Simulation::new(config, &workload)?;
    let stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(BufWriter::new(stdout.lock()));
    simulation.run(&mut reporter)
}
