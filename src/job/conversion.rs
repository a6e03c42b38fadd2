use super::definition::Job;
use super::document::JobDocument;
use crate::builder::{EntryRef, JobBuilder};
use crate::error::JobConversionError;

/// A trait for custom data models that can be converted into a [`Job`].
///
/// This is the extension point for describing jobs in your own format. Implementations
/// should go through [`JobBuilder`] so the usual construction checks apply.
///
/// # Example
///
/// ```rust
/// use jobgraph::prelude::*;
///
/// struct Pipeline {
///     steps: Vec<String>,
/// }
///
/// impl IntoJob for Pipeline {
///     fn into_job(self) -> std::result::Result<Job, JobConversionError> {
///         let mut builder = Job::builder("pipeline");
///         let start = builder.add_entry("START", StartEntry::default(), Position::new(0, 0))?;
///         builder.set_start(&start)?;
///
///         let mut previous = start;
///         for (i, step) in self.steps.into_iter().enumerate() {
///             let log = LogEntry::new(LogLevel::Basic, "step", step);
///             let x = 200 * (i as i32 + 1);
///             let current = builder.add_entry(format!("step {}", i), log, Position::new(x, 0))?;
///             builder.add_hop(&previous, &current, HopCondition::OnSuccess)?;
///             previous = current;
///         }
///         Ok(builder.build())
///     }
/// }
///
/// let job = Pipeline { steps: vec!["fetch".into(), "load".into()] }.into_job().unwrap();
/// assert_eq!(job.entries().len(), 3);
/// ```
pub trait IntoJob {
    /// Consumes the object and converts it into a job definition.
    fn into_job(self) -> Result<Job, JobConversionError>;
}

impl IntoJob for JobDocument {
    fn into_job(self) -> Result<Job, JobConversionError> {
        let mut builder = JobBuilder::new(self.name).with_description(self.description);
        for entry in self.entries {
            builder.add(entry)?;
        }
        for hop in &self.hops {
            let from = EntryRef::from(hop.from.as_str());
            let to = EntryRef::from(hop.to.as_str());
            builder.add_hop(&from, &to, hop.condition)?;
        }
        if let Some(start) = self.start {
            builder.set_start(&EntryRef::from(start))?;
        }
        Ok(builder.build())
    }
}
