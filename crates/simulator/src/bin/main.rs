//! CPU Scheduling Simulator CLI
//!
//! Runs a burst list through FCFS or round-robin scheduling and prints the
//! accepted processes and the average wait time.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use cpusched_simulation::Policy;
use cpusched_simulator::{Simulator, SimulatorConfig, WorkloadConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cpusched")]
#[command(about = "Simulate FCFS and round-robin CPU scheduling")]
#[command(version)]
struct Cli {
    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Also print the dispatch timeline
    #[arg(long, global = true)]
    timeline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// First-come-first-serve: run each process to completion in order
    Fcfs {
        /// Burst length of each process, in arrival order
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        bursts: Vec<i64>,
    },

    /// Round-robin: time-slice processes with a fixed quantum
    Rr {
        /// Time quantum (must be positive)
        #[arg(allow_negative_numbers = true)]
        quantum: i64,

        /// Burst length of each process, in arrival order
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        bursts: Vec<i64>,
    },

    /// Generate a random burst list and schedule it
    Random {
        /// Scheduling policy (fcfs, rr)
        #[arg(long, default_value = "fcfs")]
        policy: String,

        /// Time quantum for rr
        #[arg(long, default_value = "2", allow_negative_numbers = true)]
        quantum: i64,

        /// Number of processes
        #[arg(long, default_value = "8")]
        processes: usize,

        /// Smallest burst length
        #[arg(long, default_value = "1")]
        min_burst: u32,

        /// Largest burst length
        #[arg(long, default_value = "20")]
        max_burst: u32,

        /// Random seed
        #[arg(long, default_value = "12345")]
        seed: u64,
    },
}

fn parse_policy(s: &str, quantum: i64) -> Result<Policy, String> {
    match s.to_lowercase().as_str() {
        "fcfs" => Ok(Policy::Fcfs),
        "rr" | "round-robin" | "roundrobin" => Ok(Policy::RoundRobin { quantum }),
        _ => Err(format!("Unknown policy: {}", s)),
    }
}

fn build_config(command: Commands) -> Result<SimulatorConfig, String> {
    let config = match command {
        Commands::Fcfs { bursts } => SimulatorConfig::fcfs().with_bursts(bursts),
        Commands::Rr { quantum, bursts } => SimulatorConfig::round_robin(quantum).with_bursts(bursts),
        Commands::Random {
            policy,
            quantum,
            processes,
            min_burst,
            max_burst,
            seed,
        } => {
            let workload = WorkloadConfig::default()
                .with_num_processes(processes)
                .with_burst_range(min_burst, max_burst)
                .with_seed(seed);
            SimulatorConfig::new(parse_policy(&policy, quantum)?).with_workload(&workload)
        }
    };
    Ok(config)
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = build_config(cli.command)?.with_timeline(cli.json || cli.timeline);
    let report = Simulator::new(config).run()?;

    if cli.json {
        return Ok(report.render_json()?);
    }

    let mut out = report.render_text();
    if let Some(timeline) = report.render_timeline() {
        out.push_str(&timeline);
    }
    Ok(out)
}

/// How a command-line parse failure is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseFailure {
    /// `--help` or `--version`: clap's own output, success.
    Informational,
    /// Missing arguments or a missing/unknown mode.
    MissingArguments,
    /// Malformed numbers, unknown flags and the like.
    InvalidArguments,
}

impl ParseFailure {
    fn classify(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseFailure::Informational,
            ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::InvalidSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseFailure::MissingArguments,
            _ => ParseFailure::InvalidArguments,
        }
    }

    /// Line printed on stdout, if any.
    fn message(self) -> Option<&'static str> {
        match self {
            ParseFailure::Informational => None,
            ParseFailure::MissingArguments => Some("ERROR: Missing arguments"),
            ParseFailure::InvalidArguments => Some("ERROR: Invalid arguments"),
        }
    }

    fn exit_status(self) -> u8 {
        match self {
            ParseFailure::Informational => 0,
            ParseFailure::MissingArguments | ParseFailure::InvalidArguments => 1,
        }
    }
}

fn report_parse_error(error: clap::Error) -> ExitCode {
    let failure = ParseFailure::classify(error.kind());
    match failure.message() {
        Some(message) => println!("{}", message),
        None => print!("{}", error.render()),
    }
    if failure == ParseFailure::InvalidArguments {
        eprint!("{}", error.render());
    }
    ExitCode::from(failure.exit_status())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e),
    };

    init_tracing();

    match run(cli) {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("cpusched").chain(args.iter().copied()))
    }

    #[test]
    fn test_fcfs_output() {
        let out = run(parse(&["fcfs", "5", "3", "8"]).unwrap()).unwrap();
        assert_eq!(
            out,
            "Using FCFS\n\nAccepted P0: Burst 5\nAccepted P1: Burst 3\nAccepted P2: Burst 8\nAverage wait time: 4.33\n"
        );
    }

    #[test]
    fn test_rr_output_with_timeline() {
        let out = run(parse(&["rr", "2", "3", "1", "--timeline"]).unwrap()).unwrap();
        assert!(out.starts_with("Using RR(2).\n\nAccepted P0: Burst 3\nAccepted P1: Burst 1\n"));
        assert!(out.contains("Average wait time: 1.50\n"));
        assert!(out.ends_with("Timeline:\n  [0, 2) P0\n  [2, 3) P1\n  [3, 4) P0\n"));
    }

    #[test]
    fn test_missing_arguments() {
        for args in [&[][..], &["fcfs"][..], &["rr", "2"][..], &["rr"][..]] {
            let kind = parse(args).unwrap_err().kind();
            assert!(
                matches!(
                    kind,
                    ErrorKind::MissingRequiredArgument
                        | ErrorKind::MissingSubcommand
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ),
                "args {:?} gave {:?}",
                args,
                kind
            );
        }
    }

    #[test]
    fn test_unknown_mode() {
        let kind = parse(&["sjf", "1", "2"]).unwrap_err().kind();
        assert_eq!(kind, ErrorKind::InvalidSubcommand);
    }

    fn failure(args: &[&str]) -> ParseFailure {
        ParseFailure::classify(parse(args).unwrap_err().kind())
    }

    #[test]
    fn test_missing_arguments_reported() {
        for args in [&[][..], &["fcfs"][..], &["rr", "2"][..], &["sjf", "1", "2"][..]] {
            let failure = failure(args);
            assert_eq!(failure, ParseFailure::MissingArguments, "args {:?}", args);
            assert_eq!(failure.message(), Some("ERROR: Missing arguments"));
            assert_eq!(failure.exit_status(), 1);
        }
    }

    #[test]
    fn test_invalid_arguments_reported() {
        for args in [&["fcfs", "abc"][..], &["rr", "x", "1"][..], &["fcfs", "1", "--bogus"][..]] {
            let failure = failure(args);
            assert_eq!(failure, ParseFailure::InvalidArguments, "args {:?}", args);
            assert_eq!(failure.message(), Some("ERROR: Invalid arguments"));
            assert_eq!(failure.exit_status(), 1);
        }
    }

    #[test]
    fn test_help_is_not_an_error() {
        for args in [&["--help"][..], &["--version"][..]] {
            let failure = failure(args);
            assert_eq!(failure, ParseFailure::Informational);
            assert_eq!(failure.message(), None);
            assert_eq!(failure.exit_status(), 0);
        }
    }

    #[test]
    fn test_negative_values_reach_the_core() {
        let err = run(parse(&["rr", "-1", "5"]).unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "Time quantum must be a positive integer, got -1");

        let err = run(parse(&["fcfs", "4", "-2"]).unwrap()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid burst list: P1 has negative burst length -2"
        );
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let err = run(parse(&["rr", "0", "5", "3"]).unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "Time quantum must be a positive integer, got 0");
    }

    #[test]
    fn test_malformed_burst() {
        let kind = parse(&["fcfs", "abc"]).unwrap_err().kind();
        assert_eq!(kind, ErrorKind::ValueValidation);
    }

    #[test]
    fn test_random_workload() {
        let cli = parse(&["random", "--policy", "rr", "--quantum", "3", "--processes", "4"]).unwrap();
        let config = build_config(cli.command).unwrap();
        assert_eq!(config.policy, Policy::RoundRobin { quantum: 3 });
        assert_eq!(config.num_processes(), 4);
    }

    #[test]
    fn test_random_empty_workload_fails() {
        let err = run(parse(&["random", "--processes", "0"]).unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "No processes to schedule");
    }

    #[test]
    fn test_unknown_policy() {
        assert_eq!(
            parse_policy("sjf", 1).unwrap_err(),
            "Unknown policy: sjf"
        );
    }

    #[test]
    fn test_json_output() {
        let out = run(parse(&["--json", "fcfs", "2", "2"]).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["average_wait"], 1.0);
        assert_eq!(value["timeline"][1]["start"], 2);
    }
}
