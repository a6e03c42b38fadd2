//! Ready-made job definitions.

use crate::builder::JobBuilder;
use crate::error::BuildError;
use crate::job::{
    EntryKind, FtpEntry, HopCondition, Job, LogEntry, LogLevel, Position, StartEntry,
};

pub const FTP_DEMO_JOB_NAME: &str = "Generated Demo FTP Job";

/// The demo FTP job: log the engine build information, download every file from the
/// server root into `/tmp/`, and finish successfully.
///
/// `START -> This is FTP job example -(on success)-> FTP Job -(on success)-> Success`
pub fn ftp_demo_job() -> Result<Job, BuildError> {
    let mut builder = JobBuilder::new(FTP_DEMO_JOB_NAME);

    let start = builder.add_entry("START", StartEntry::default(), Position::new(100, 100))?;
    builder.set_start(&start)?;

    let write_to_log = builder.add_entry(
        "This is FTP job example",
        LogEntry::new(
            LogLevel::Minimal,
            "Logging PDI Build Information:",
            "Version: ${Internal.Kettle.Version}\nBuild Date: ${Internal.Kettle.Build.Date}",
        ),
        Position::new(300, 100),
    )?;
    builder.add_hop(&start, &write_to_log, HopCondition::Unconditional)?;

    let ftp = builder.add_entry(
        "FTP Job",
        FtpEntry {
            port: "21".to_string(),
            username: "ftp1".to_string(),
            remote_directory: "/".to_string(),
            wildcard: ".*".to_string(),
            target_directory: "/tmp/".to_string(),
            ..FtpEntry::new("11.12.112.84")
        },
        Position::new(500, 100),
    )?;
    builder.add_hop(&write_to_log, &ftp, HopCondition::OnSuccess)?;

    let success = builder.add_entry("Success", EntryKind::Success, Position::new(700, 100))?;
    builder.add_hop(&ftp, &success, HopCondition::OnSuccess)?;

    Ok(builder.build())
}
