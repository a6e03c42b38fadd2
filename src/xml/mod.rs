//! Reading and writing the engine's job XML document format.
//!
//! The writer is deterministic: entries and hops are emitted in insertion order, values are
//! escaped, and nothing time- or randomness-dependent ends up in the output. Reading a
//! written document gives back an equal [`Job`].
//!
//! ```rust
//! use jobgraph::samples::ftp_demo_job;
//! use jobgraph::xml;
//!
//! let job = ftp_demo_job().unwrap();
//! let text = xml::to_xml(&job).unwrap();
//! assert_eq!(xml::from_xml(&text).unwrap(), job);
//! ```

use crate::error::XmlError;
use crate::job::Job;

mod codes;
mod reader;
mod writer;

/// Renders `job` as a job XML document.
///
/// The job is written as-is; run [`Job::validate`] first to make sure the engine will
/// accept it.
pub fn to_xml(job: &Job) -> Result<String, XmlError> {
    writer::write_job(job)
}

/// Parses a job XML document.
///
/// Parsing only checks that the document is well-formed and that every value has the
/// expected shape. The resulting job has not been validated: documents written by hand or
/// by other tools may contain duplicate names or dangling hops.
pub fn from_xml(xml: &str) -> Result<Job, XmlError> {
    reader::read_job(xml)
}
