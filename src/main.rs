//! skillmatch - Binary Entry Point
//!
//! Two subcommands:
//!
//! - `match` (default): read a dataset, rank matches, print them to stdout
//! - `generate`: write a seeded synthetic dataset
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`) so stdout stays clean for
//! the match output.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use tracing_subscriber::EnvFilter;

use skillmatch::config::{parse_number, GenerateConfig, RunConfig};
use skillmatch::io::writer::create_file;
use skillmatch::io::{
    read_demands_from_path, read_supplies_from_path, write_demands, write_matches, write_supplies,
    OutputFormat, RecordGenerator,
};
use skillmatch::MatchingEngine;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    match Command::parse(env::args_os().skip(1))? {
        Command::Match(config) => run_match(&config),
        Command::Generate(config) => run_generate(&config),
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

// ============================================================================
// Subcommands
// ============================================================================

fn run_match(config: &RunConfig) -> Result<()> {
    let paths = config.paths();

    if config.format != OutputFormat::Csv {
        println!();
        println!("MATCHER : {}", config.strategy);
        println!("WRITER  : {}", config.format);
        println!("DATASET : {}", paths.demands.display());
        println!("        : {}", paths.supplies.display());
        println!();
    }

    let demands = read_demands_from_path(&paths.demands, config.skip_header)
        .context("failed to read demand records")?;
    let supplies = read_supplies_from_path(&paths.supplies, config.skip_header)
        .context("failed to read supply records")?;

    let engine = MatchingEngine::new(config.strategy);
    let start = Instant::now();
    let result = engine.run(&demands, &supplies);
    tracing::info!(
        strategy = %config.strategy,
        demands = demands.len(),
        supplies = supplies.len(),
        matches = result.matches.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "matching complete"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_matches(&mut out, &result.matches, config.format).context("failed to write matches")?;
    out.flush().context("failed to flush output")?;

    if config.receipt {
        eprintln!("receipt: {}", result.receipt);
    }
    Ok(())
}

fn run_generate(config: &GenerateConfig) -> Result<()> {
    let paths = config.paths();
    if let Some(dir) = paths.demands.parent() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let mut generator = RecordGenerator::new(config.seed);
    let demands = generator.demands(config.demands);
    let supplies = generator.supplies(config.supplies);
    tracing::info!(seed = config.seed, "generated synthetic records");

    let file = create_file(&paths.demands)?;
    write_demands(BufWriter::new(file), &demands).context("failed to write demand records")?;
    println!("Wrote {} demands to {}", demands.len(), paths.demands.display());

    let file = create_file(&paths.supplies)?;
    write_supplies(BufWriter::new(file), &supplies).context("failed to write supply records")?;
    println!("Wrote {} supplies to {}", supplies.len(), paths.supplies.display());

    Ok(())
}

// ============================================================================
// Argument parsing
// ============================================================================

const USAGE: &str = "\
Usage: skillmatch [match] [OPTIONS]
       skillmatch generate [OPTIONS]

Match options:
  --dataset NAME        Dataset under the datasets directory (default: challenge)
  --datasets-dir PATH   Directory holding datasets (default: datasets)
  --matcher NAME        direct_scan | indexed_join (default: direct_scan)
  --writer NAME         csv | table (default: csv)
  --no-header           Treat the first row of each file as data
  --receipt             Print a match receipt (counts + SHA-256) to stderr

Generate options:
  --dataset NAME        Dataset to write (default: generated)
  --datasets-dir PATH   Directory holding datasets (default: datasets)
  --demands N           Number of demand records (default: 1000)
  --supplies N          Number of supply records (default: 1000)
  --seed N              RNG seed (default: 42)

Environment:
  SKILLMATCH_DATASETS_DIR, SKILLMATCH_DATASET, SKILLMATCH_MATCHER,
  SKILLMATCH_WRITER, SKILLMATCH_SEED, RUST_LOG";

#[derive(Debug)]
enum Command {
    Match(RunConfig),
    Generate(GenerateConfig),
    Help,
}

impl Command {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = std::ffi::OsString>,
    {
        let mut args = args
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|_| anyhow!("invalid UTF-8 in argument"))
            })
            .collect::<Result<Vec<String>>>()?
            .into_iter()
            .peekable();

        let subcommand = args.peek().cloned();
        match subcommand.as_deref() {
            Some("generate") => {
                args.next();
                parse_generate(args)
            }
            Some("match") => {
                args.next();
                parse_match(args)
            }
            _ => parse_match(args),
        }
    }
}

fn parse_match(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let mut config = RunConfig::from_env()?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dataset" => config.dataset = next_value("--dataset", &mut args)?,
            "--datasets-dir" => {
                config.datasets_dir = PathBuf::from(next_value("--datasets-dir", &mut args)?)
            }
            "--matcher" => config.strategy = next_value("--matcher", &mut args)?.parse()?,
            "--writer" => config.format = next_value("--writer", &mut args)?.parse()?,
            "--no-header" => config.skip_header = false,
            "--receipt" => config.receipt = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => bail!("unknown argument: {other}\n\n{USAGE}"),
        }
    }

    Ok(Command::Match(config))
}

fn parse_generate(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let mut config = GenerateConfig::from_env()?;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dataset" => config.dataset = next_value("--dataset", &mut args)?,
            "--datasets-dir" => {
                config.datasets_dir = PathBuf::from(next_value("--datasets-dir", &mut args)?)
            }
            "--demands" => config.demands = parse_number("--demands", &next_value("--demands", &mut args)?)?,
            "--supplies" => {
                config.supplies = parse_number("--supplies", &next_value("--supplies", &mut args)?)?
            }
            "--seed" => config.seed = parse_number("--seed", &next_value("--seed", &mut args)?)?,
            "--help" | "-h" => return Ok(Command::Help),
            other => bail!("unknown argument: {other}\n\n{USAGE}"),
        }
    }

    Ok(Command::Generate(config))
}

fn next_value(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String> {
    let value = args.next().ok_or_else(|| anyhow!("{flag} requires a value"))?;
    if value.is_empty() {
        bail!("{flag} must not be empty");
    }
    Ok(value)
}
