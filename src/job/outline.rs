use super::definition::Job;
use super::entry::EntryKind;
use std::fmt;

/// Formats a [`Job`] as a human-readable outline of its entries and hops.
pub struct DisplayJob<'a> {
    pub job: &'a Job,
}

impl<'a> DisplayJob<'a> {
    pub fn new(job: &'a Job) -> Self {
        Self { job }
    }
}

impl fmt::Display for DisplayJob<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = self.job;
        writeln!(f, "======== JOB: {} ========", job.name())?;
        if !job.description().is_empty() {
            writeln!(f, "{}", job.description())?;
        }

        writeln!(f, "\n--- ENTRIES ---")?;
        for (i, entry) in job.entries().iter().enumerate() {
            let marker = if job.start_name() == Some(entry.name.as_str()) {
                " (start)"
            } else {
                ""
            };
            writeln!(
                f,
                "{:04}: {:<14} {}{} @ ({}, {})",
                i,
                entry.kind.role().to_string(),
                entry.name,
                marker,
                entry.position.x,
                entry.position.y
            )?;
            match &entry.kind {
                EntryKind::WriteToLog(log) => {
                    writeln!(f, "      [{}] {}", log.level, log.subject)?;
                }
                EntryKind::Ftp(ftp) => {
                    writeln!(
                        f,
                        "      {}:{}{} '{}' -> {}",
                        ftp.host, ftp.port, ftp.remote_directory, ftp.wildcard, ftp.target_directory
                    )?;
                }
                EntryKind::Start(_) | EntryKind::Success => {}
            }
        }

        if !job.hops().is_empty() {
            writeln!(f, "\n--- HOPS ---")?;
            for (i, hop) in job.hops().iter().enumerate() {
                writeln!(f, "{:04}: {} -> {} ({})", i, hop.from, hop.to, hop.condition)?;
            }
        }

        write!(f, "\n================ END OF JOB ================")
    }
}
