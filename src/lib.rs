//! # jobgraph - ETL Job Graph Builder and Serializer
//!
//! **jobgraph** assembles ETL job definitions in code, checks their structure and writes them
//! out in the job XML document format (`.kjb`) understood by the execution engine. The crate
//! never runs a job: it only produces the definition.
//!
//! ## Core Workflow
//!
//! 1.  **Build**: Use [`JobBuilder`](builder::JobBuilder) (or `Job::builder`) to add entries
//!     (start, write-to-log, FTP, success) and connect them with hops that fire
//!     unconditionally, on success or on failure.
//! 2.  **Validate**: Call [`Job::validate`](job::Job::validate) to check that there is exactly
//!     one start entry, that every hop connects existing entries and that names are unique.
//!     All violations are reported together.
//! 3.  **Serialize**: Call [`xml::to_xml`] to get the document text and store it wherever you
//!     like. [`xml::from_xml`] reads it back.
//!
//! Jobs described in other formats can be converted through the [`IntoJob`](job::IntoJob)
//! trait; [`JobDocument`](job::JobDocument) is the JSON form used by the bundled tools.
//!
//! ## Quick Start
//!
//! ```rust
//! use jobgraph::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let mut builder = Job::builder("Nightly download");
//!
//!     let start = builder.add_entry("START", StartEntry::default(), Position::new(100, 100))?;
//!     builder.set_start(&start)?;
//!
//!     let ftp = builder.add_entry(
//!         "Fetch exports",
//!         FtpEntry {
//!             username: "etl".to_string(),
//!             credentials_ref: Some("${FTP_PASSWORD}".to_string()),
//!             target_directory: "/data/in/".to_string(),
//!             ..FtpEntry::new("ftp.example.com")
//!         },
//!         Position::new(300, 100),
//!     )?;
//!     builder.add_hop(&start, &ftp, HopCondition::Unconditional)?;
//!
//!     let done = builder.add_entry("Success", EntryKind::Success, Position::new(500, 100))?;
//!     builder.add_hop(&ftp, &done, HopCondition::OnSuccess)?;
//!
//!     let job = builder.build();
//!     job.validate()?;
//!
//!     let text = xml::to_xml(&job)?;
//!     assert!(text.contains("<type>FTP</type>"));
//!     assert_eq!(job.referenced_variables(), vec!["FTP_PASSWORD"]);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod job;
pub mod prelude;
pub mod samples;
pub mod validator;
pub mod xml;
