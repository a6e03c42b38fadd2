use clap::Parser;
use jobgraph::builder::JobBuilder;
use jobgraph::error::BuildError;
use jobgraph::job::{
    EntryKind, FtpEntry, HopCondition, Job, JobDocument, LogEntry, LogLevel, Position, StartEntry,
};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The most middle entries a generated job may have. Keeps entry positions within `i32`.
const MAX_ENTRIES: u16 = 10_000;

/// A CLI tool to generate random job documents for the jobgraph tools
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_job.json")]
    output: String,

    /// The number of entries to generate between the start and success entries
    #[arg(
        long,
        default_value_t = 8,
        value_parser = clap::value_parser!(u16).range(..=i64::from(MAX_ENTRIES))
    )]
    entries: u16,

    /// The share of entries that also get an on-failure hop to a failure log entry
    #[arg(long, default_value_t = 0.25)]
    failure_ratio: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    if !(0.0..=1.0).contains(&cli.failure_ratio) {
        eprintln!(
            "Error: --failure-ratio ({}) must be between 0 and 1",
            cli.failure_ratio
        );
        std::process::exit(1);
    }

    info!("Generating a job with {} middle entries...", cli.entries);
    let mut rng = rand::rng();
    let job = generate_job(&mut rng, cli.entries, cli.failure_ratio)?;
    job.validate()?;

    let document = JobDocument::from(&job);
    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    info!(
        "Successfully generated {} entries and {} hops and saved them to '{}'",
        job.entries().len(),
        job.hops().len(),
        cli.output
    );
    Ok(())
}

/// Builds a chain `START -> step 0 -> ... -> Success` of random steps linked on success.
/// Some steps also branch to a shared failure log entry.
fn generate_job(
    rng: &mut ThreadRng,
    count: u16,
    failure_ratio: f64,
) -> Result<Job, BuildError> {
    let mut builder = JobBuilder::new(format!("Generated job ({} steps)", count));

    let start = builder.add_entry("START", StartEntry::default(), Position::new(100, 100))?;
    builder.set_start(&start)?;

    let failure = builder.add_entry(
        "Report failure",
        LogEntry::new(LogLevel::Error, "Job failed", "Failed at ${Internal.Job.Name}"),
        Position::new(100, 300),
    )?;

    let mut previous = start;
    for i in 0..count {
        let position = Position::new(column(i), 100);
        let step = builder.add_entry(format!("step {}", i), random_step(rng, i), position)?;
        let condition = if i == 0 {
            HopCondition::Unconditional
        } else {
            HopCondition::OnSuccess
        };
        builder.add_hop(&previous, &step, condition)?;
        if rng.random_bool(failure_ratio) {
            builder.add_hop(&step, &failure, HopCondition::OnFailure)?;
        }
        previous = step;
    }

    let position = Position::new(column(count), 100);
    let success = builder.add_entry("Success", EntryKind::Success, position)?;
    builder.add_hop(&previous, &success, HopCondition::OnSuccess)?;

    info!("-> Generated {} entries.", builder.entry_count());
    Ok(builder.build())
}

/// Horizontal position of the `index`-th middle entry.
fn column(index: u16) -> i32 {
    300 + 200 * i32::from(index)
}

fn random_step(rng: &mut ThreadRng, index: u16) -> EntryKind {
    if rng.random_bool(0.5) {
        let levels = [LogLevel::Minimal, LogLevel::Basic, LogLevel::Detailed];
        let level = levels[rng.random_range(0..levels.len())];
        EntryKind::WriteToLog(LogEntry::new(
            level,
            format!("Step {}", index),
            format!("Reached step {} of ${{Internal.Job.Name}}", index),
        ))
    } else {
        EntryKind::Ftp(FtpEntry {
            port: rng.random_range(21..=2121u16).to_string(),
            username: format!("user{}", rng.random_range(1..100)),
            credentials_ref: Some("${FTP_PASSWORD}".to_string()),
            wildcard: format!(".*\\.{}", ["csv", "json", "xml"][rng.random_range(0..3)]),
            target_directory: format!("/tmp/step{}/", index),
            ..FtpEntry::new(format!("10.0.0.{}", rng.random_range(1..255)))
        })
    }
}
