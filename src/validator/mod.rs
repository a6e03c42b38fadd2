//! Structural validation of job definitions.
//!
//! The builder already rejects most mistakes as they happen, but jobs read back from XML
//! are not built through it, and a builder can still produce a job without a designated
//! start. The validator runs every check and reports all violations at once.

use crate::error::{ValidationError, ValidationErrors};
use crate::job::Job;

mod checks;

/// Runs the structural checks over a [`Job`].
pub struct Validator;

impl Validator {
    /// Validates `job`, returning every violation found.
    ///
    /// A job is valid when it has exactly one start entry and that entry is the designated
    /// start, every hop connects existing entries, and no two entries share a name.
    /// Cycles are allowed.
    pub fn validate(job: &Job) -> Result<(), ValidationErrors> {
        let mut errors: Vec<ValidationError> = Vec::new();
        checks::check_start(job, &mut errors);
        checks::check_hop_endpoints(job, &mut errors);
        checks::check_unique_names(job, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}
