//! intrigue command-line tool
//!
//! ## Usage
//!
//! ```bash
//! intrigue links friends.txt "Jon Snow" "Arya Stark"
//! intrigue plots friends.txt plots.txt 2
//! intrigue plots friends.txt plots.txt 2 --queen "Daenerys" --format json
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `INTRIGUE_QUEEN`: queen name (default: Cersei Lannister)
//! - `INTRIGUE_MAX_CHAIN_LEN`: optional bound on conspiracy chain length
//! - `RUST_LOG`: Log level filter (default: warn)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! Any failure prints the error on stderr and exits with status 84.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use intrigue_kernel::report::{render_links, render_plot_report};
use intrigue_kernel::{
    degrees_of_separation, parse_conspiracies, parse_friendships, InMemorySocialGraph,
    IntrigueError, PlotPolicy, PlotResolver, SearchLimits,
};

/// Exit status for any failure.
const EXIT_FAILURE: u8 = 84;

/// Degrees of separation and conspiracy resolution over a social graph.
#[derive(Parser, Debug)]
#[command(name = "intrigue", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the degree of separation between two people
    Links {
        /// File of "<a> is friends with <b>" lines
        friends: PathBuf,
        /// First person
        from: String,
        /// Second person
        to: String,
    },
    /// Print names, relationships, conspiracy chains and the verdict
    Plots {
        /// File of "<a> is friends with <b>" lines
        friends: PathBuf,
        /// File of "<a> is plotting against <b>" lines
        conspiracies: PathBuf,
        /// Maximum friendship distance from the queen for an ally
        max_distance: u32,
        /// JSON policy document; command-line flags override its fields
        #[arg(long)]
        policy: Option<PathBuf>,
        /// Queen name
        #[arg(long, env = "INTRIGUE_QUEEN")]
        queen: Option<String>,
        /// Maximum number of people in a conspiracy chain
        #[arg(long, env = "INTRIGUE_MAX_CHAIN_LEN")]
        max_chain_len: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

/// Initialize the tracing subscriber with JSON or pretty format.
///
/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .flatten_event(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn read_input(path: &Path) -> Result<String, IntrigueError> {
    std::fs::read_to_string(path).map_err(|source| IntrigueError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn load_graph(friends: &Path, conspiracies: Option<&Path>) -> Result<InMemorySocialGraph, IntrigueError> {
    let mut graph = InMemorySocialGraph::new();
    graph.ingest_friendships(parse_friendships(&read_input(friends)?)?)?;
    if let Some(path) = conspiracies {
        graph.ingest_conspiracies(parse_conspiracies(&read_input(path)?)?)?;
    }
    debug!(
        people = graph.people().len(),
        friendships = graph.num_friendships(),
        conspiracies = graph.num_conspiracies(),
        "graph loaded"
    );
    Ok(graph)
}

fn load_policy(
    path: Option<&Path>,
    queen: Option<String>,
    max_distance: u32,
    max_chain_len: Option<usize>,
) -> Result<PlotPolicy, IntrigueError> {
    let mut policy = match path {
        Some(path) => PlotPolicy::from_json_str(&read_input(path)?)?,
        None => PlotPolicy::default(),
    };
    policy = policy.with_max_ally_distance(max_distance);
    if let Some(queen) = queen {
        policy = policy.with_queen(queen);
    }
    if let Some(max) = max_chain_len {
        policy = policy.with_limits(SearchLimits::max_chain_len(max));
    }
    policy.validate()?;
    Ok(policy)
}

fn run(args: Args) -> Result<String, IntrigueError> {
    match args.command {
        Command::Links { friends, from, to } => {
            let graph = load_graph(&friends, None)?;
            let degree = degrees_of_separation(&graph, &from, &to);
            Ok(render_links(&from, &to, degree))
        }
        Command::Plots {
            friends,
            conspiracies,
            max_distance,
            policy,
            queen,
            max_chain_len,
            format,
        } => {
            let graph = load_graph(&friends, Some(&conspiracies))?;
            let policy = load_policy(policy.as_deref(), queen, max_distance, max_chain_len)?;
            debug!(
                queen = %policy.queen,
                max_ally_distance = policy.max_ally_distance,
                params_hash = %policy.params_hash(),
                "policy loaded"
            );

            let resolution = PlotResolver::new(&graph, policy).resolve();
            match format {
                Format::Text => {
                    let names = graph.sorted_names();
                    Ok(render_plot_report(&graph, &names, max_distance, &resolution))
                }
                Format::Json => {
                    let doc = serde_json::json!({
                        "fingerprint": resolution.fingerprint(),
                        "resolution": resolution,
                    });
                    Ok(format!("{doc:#}\n"))
                }
            }
        }
    }
}

/// Exit status for a command-line parse failure.
///
/// `--help` and `--version` land here too and succeed.
fn parse_failure_status(e: &clap::Error) -> u8 {
    if e.use_stderr() {
        EXIT_FAILURE
    } else {
        0
    }
}

/// Print the outcome of `run` and return the process exit status.
fn finish(result: Result<String, IntrigueError>) -> u8 {
    match result {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(e) => {
            error!(error = %e, "intrigue failed");
            eprintln!("An error occurred: {e}");
            EXIT_FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_failure_status(&e));
        }
    };
    init_tracing();

    ExitCode::from(finish(run(args)))
}
