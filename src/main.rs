//! pagesim - compare page replacement policies on a reference trace.
//!
//! Usage: pagesim [OPTIONS]
//!
//! Without `--load`, a locality-biased trace is generated. Every policy
//! replays the same trace and the fault counts are printed one per line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pagesim::common::config::{MAX_FRAMES, MAX_PAGES, TRACE_LENGTH};
use pagesim::{run_policies, Policy, ReferenceTrace, Result, SimConfig, TraceFile, TraceGenerator};

/// Command-line configuration
#[derive(Debug, Parser)]
#[command(name = "pagesim", version, about = "Compare page replacement policies")]
struct Cli {
    /// Number of physical frames
    #[arg(short, long, default_value_t = MAX_FRAMES)]
    frames: usize,

    /// Size of the virtual address space in pages
    #[arg(short, long, default_value_t = MAX_PAGES)]
    pages: usize,

    /// Length of the generated trace
    #[arg(short = 'n', long, default_value_t = TRACE_LENGTH)]
    length: usize,

    /// Seed for trace generation and the random policies
    #[arg(short, long)]
    seed: Option<u64>,

    /// Policies to run (default: all). May be repeated.
    #[arg(long = "policy", value_parser = parse_policy)]
    policies: Vec<Policy>,

    /// Read the trace from a file (binary or whitespace-separated text)
    #[arg(long, value_name = "PATH")]
    load: Option<PathBuf>,

    /// Write the trace to a binary trace file
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Write the trace as text, one id per line
    #[arg(long, value_name = "PATH")]
    save_text: Option<PathBuf>,

    /// Print the reference trace before running
    #[arg(long)]
    show_trace: bool,

    /// Print the page table after every fault
    #[arg(long)]
    dump_tables: bool,

    /// Run policies one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_policy(s: &str) -> std::result::Result<Policy, String> {
    s.parse().map_err(|e: pagesim::Error| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "simulation failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main logic separated from main() for cleaner error handling
fn run(cli: &Cli) -> Result<()> {
    let mut config = SimConfig::default()
        .with_frames(cli.frames)
        .with_pages(cli.pages)
        .with_trace_length(cli.length)
        .with_verbose(cli.dump_tables)
        .with_parallel(!cli.sequential);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let trace = load_or_generate(cli, &config)?;
    info!(references = trace.len(), frames = config.max_frames, "trace ready");

    if let Some(path) = &cli.save {
        TraceFile::save(path, &trace)?;
        info!(path = %path.display(), "saved binary trace");
    }
    if let Some(path) = &cli.save_text {
        TraceFile::save_text(path, &trace)?;
        info!(path = %path.display(), "saved text trace");
    }

    if cli.show_trace {
        let ids: Vec<String> = trace.iter().map(|p| p.0.to_string()).collect();
        println!("Reference strings (in row order):\n{}", ids.join("\t"));
    }

    let policies = if cli.policies.is_empty() {
        Policy::ALL.to_vec()
    } else {
        cli.policies.clone()
    };

    let report = run_policies(&config, &trace, &policies)?;

    if cli.dump_tables {
        for result in report.results() {
            for snapshot in result.snapshots.iter().flatten() {
                println!("{}", snapshot);
            }
        }
    }

    print!("{}", report);
    Ok(())
}

fn load_or_generate(cli: &Cli, config: &SimConfig) -> Result<ReferenceTrace> {
    if let Some(path) = &cli.load {
        return TraceFile::load(path, config.max_pages);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    TraceGenerator::from_config(config).generate(&mut rng)
}
