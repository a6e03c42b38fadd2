use clap::{Parser, Subcommand};
use jobgraph::prelude::*;
use jobgraph::samples::ftp_demo_job;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Build, check and convert ETL job definitions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log filter, e.g. `info` or `jobgraph_cli=debug`
    #[arg(long, global = true, env = "JOBGRAPH_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the demo FTP job definition
    Demo {
        /// Where to write the job document
        #[arg(short, long, default_value = "etl/generated_ftp_job.kjb")]
        output: PathBuf,
    },
    /// Convert a JSON job document into a job XML document
    Convert {
        /// Path to the JSON job document
        input: PathBuf,
        /// Where to write the job XML; printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse and validate a job XML document
    Check {
        /// Path to the job XML document
        input: PathBuf,
        /// Print an outline of the entries and hops
        #[arg(long)]
        outline: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Demo { output } => run_demo(&output),
        Command::Convert { input, output } => run_convert(&input, output.as_deref()),
        Command::Check { input, outline } => run_check(&input, outline),
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_demo(output: &Path) {
    info!("Generating a FTP job definition");
    let job = ftp_demo_job()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build demo job: {}", e)));
    for entry in job.entries() {
        info!(entry = %entry.name, role = %entry.kind.role(), "Added entry");
    }

    job.validate()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let xml = job
        .to_xml()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    info!("Saving to {}", output.display());
    write_output(output, &xml);
    info!("DONE");
}

fn run_convert(input: &Path, output: Option<&Path>) {
    let json = fs::read_to_string(input).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read '{}': {}", input.display(), e))
    });
    let document: JobDocument = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse job JSON: {}", e)));

    let job = document
        .into_job()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build job: {}", e)));
    info!(
        job = %job.name(),
        entries = job.entries().len(),
        hops = job.hops().len(),
        "Built job"
    );

    job.validate()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    report_warnings(&job);

    let xml = job
        .to_xml()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    match output {
        Some(path) => {
            info!("Saving to {}", path.display());
            write_output(path, &xml);
        }
        None => print!("{}", xml),
    }
}

fn run_check(input: &Path, outline: bool) {
    let text = fs::read_to_string(input).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read '{}': {}", input.display(), e))
    });
    let job = xml::from_xml(&text)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse job XML: {}", e)));

    if outline {
        println!("{}", DisplayJob::new(&job));
    }

    match job.validate() {
        Ok(()) => {
            report_warnings(&job);
            info!(job = %job.name(), "Job is valid");
        }
        Err(errors) => {
            for error in errors.errors() {
                warn!("{}", error);
            }
            exit_with_error(&format!(
                "'{}' failed validation with {} error(s)",
                input.display(),
                errors.len()
            ));
        }
    }
}

fn report_warnings(job: &Job) {
    for entry in job.unreachable_entries() {
        warn!(entry = %entry.name, "Entry is not reachable from the start entry");
    }
    let variables = job.referenced_variables();
    if !variables.is_empty() {
        info!("Job expects variables: {}", variables.join(", "));
    }
}

fn write_output(path: &Path, content: &str) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        });
    }
    fs::write(path, content).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
    });
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
