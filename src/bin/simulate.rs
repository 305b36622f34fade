//! Headless battle snake matches: an autopilot player against the hunter.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # 200 matches
//!   cargo run --bin simulate -- -n 50 -t 2000  # 50 matches, 2000 tick cap
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use battle_snake::logging::TracingSubscriber;
use battle_snake::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use std::str::FromStr;

struct Options {
    config: SimConfig,
    json: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = TracingSubscriber::new()
        .rust_log_fallback("warn")
        .to_stderr()
        .try_init()
    {
        eprintln!("Logging disabled: {}", e);
    }

    let config = &options.config;
    println!(
        "Simulating {} matches (tick cap {}, seed {})...\n",
        config.num_runs,
        config.max_ticks_per_run,
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    match run_simulation(config) {
        Ok(report) => {
            println!("{}", report.to_text());
            if options.json {
                println!("{}", report.to_json());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `Ok(None)` means help was requested. `--quick` picks the base preset,
/// so the other flags override it wherever they appear.
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut config = if args.iter().any(|arg| arg == "--quick") {
        SimConfig::quick(1)
    } else {
        SimConfig::default()
    };
    let mut json = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" | "--runs" => config.num_runs = value(arg, iter.next())?,
            "-t" | "--max-ticks" => config.max_ticks_per_run = value(arg, iter.next())?,
            "-s" | "--seed" => config.seed = Some(value(arg, iter.next())?),
            "-v" | "--verbose" => config.verbosity = 2,
            "--json" => json = true,
            "--quick" => {}
            "-h" | "--help" => return Ok(None),
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(Some(Options { config, json }))
}

fn value<T: FromStr>(flag: &str, raw: Option<&String>) -> Result<T, String> {
    let raw = raw.ok_or_else(|| format!("{} needs a value", flag))?;
    raw.parse()
        .map_err(|_| format!("{}: not a valid number: {}", flag, raw))
}

fn print_help() {
    println!("Battle Snake Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of matches (default: 200)");
    println!("    -t, --max-ticks <T>   Tick cap per match (default: 5000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -v, --verbose         Print every match");
    println!("    --json                Also print the report as JSON");
    println!("    --quick               20 seeded matches of 1000 ticks");
    println!("    -h, --help            Show this help");
}
