//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the jobgraph crate.
//!
//! # Example
//!
//! ```rust
//! use jobgraph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let job = jobgraph::samples::ftp_demo_job()?;
//! job.validate()?;
//! let text = xml::to_xml(&job)?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

// Building and validation
pub use crate::builder::{EntryRef, JobBuilder};
pub use crate::validator::Validator;

// Job model
pub use crate::job::{
    DisplayJob, EntryKind, EntryRole, FtpEntry, Hop, HopCondition, IntoJob, Job, JobDocument,
    JobEntry, LogEntry, LogLevel, Position, Schedule, StartEntry,
};

// Serialization
pub use crate::xml;

// Error types
pub use crate::error::{
    BuildError, JobConversionError, ValidationError, ValidationErrors, XmlError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
