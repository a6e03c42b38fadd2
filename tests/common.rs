//! Common test utilities for building job definitions.
use jobgraph::prelude::*;

/// Builds `START -> Log -> FTP (on success) -> Success (on success)` and returns the builder
/// so tests can keep adding to it.
#[allow(dead_code)]
pub fn chain_builder() -> JobBuilder {
    let mut builder = Job::builder("Chain");
    let start = builder
        .add_entry("START", StartEntry::default(), Position::new(100, 100))
        .expect("start");
    builder.set_start(&start).expect("set start");

    let log = builder
        .add_entry(
            "Log",
            LogEntry::new(LogLevel::Minimal, "Subject", "Hello ${USER}"),
            Position::new(300, 100),
        )
        .expect("log");
    builder
        .add_hop(&start, &log, HopCondition::Unconditional)
        .expect("start -> log");

    let ftp = builder
        .add_entry("FTP", sample_ftp(), Position::new(500, 100))
        .expect("ftp");
    builder
        .add_hop(&log, &ftp, HopCondition::OnSuccess)
        .expect("log -> ftp");

    let success = builder
        .add_entry("Success", EntryKind::Success, Position::new(700, 100))
        .expect("success");
    builder
        .add_hop(&ftp, &success, HopCondition::OnSuccess)
        .expect("ftp -> success");

    builder
}

/// The four-entry chain as a finished job.
#[allow(dead_code)]
pub fn chain_job() -> Job {
    chain_builder().build()
}

#[allow(dead_code)]
pub fn sample_ftp() -> FtpEntry {
    FtpEntry {
        username: "ftp1".to_string(),
        credentials_ref: Some("${FTP_PASSWORD}".to_string()),
        target_directory: "/tmp/".to_string(),
        ..FtpEntry::new("11.12.112.84")
    }
}

/// Wraps entry and hop fragments into a complete job document.
#[allow(dead_code)]
pub fn job_xml(entries: &str, hops: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<job>\n<name>Handwritten</name>\n<entries>{}</entries>\n<hops>{}</hops>\n</job>\n",
        entries, hops
    )
}

#[allow(dead_code)]
pub fn start_entry_xml(name: &str) -> String {
    format!(
        "<entry><name>{}</name><type>SPECIAL</type><start>Y</start><dummy>N</dummy><xloc>0</xloc><yloc>0</yloc></entry>",
        name
    )
}

#[allow(dead_code)]
pub fn success_entry_xml(name: &str) -> String {
    format!(
        "<entry><name>{}</name><type>SUCCESS</type><xloc>0</xloc><yloc>0</yloc></entry>",
        name
    )
}

#[allow(dead_code)]
pub fn hop_xml(from: &str, to: &str) -> String {
    format!(
        "<hop><from>{}</from><to>{}</to><evaluation>Y</evaluation><unconditional>Y</unconditional></hop>",
        from, to
    )
}
