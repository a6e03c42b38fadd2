use super::definition::{Hop, Job, JobEntry};
use serde::{Deserialize, Serialize};

/// A serde-friendly description of a job, used as the JSON interchange format.
///
/// Unlike [`Job`], a document carries no guarantees: it is turned into a job by replaying it
/// through the builder (see [`IntoJob`](super::IntoJob)), which rejects duplicate names and
/// hops to unknown entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub entries: Vec<JobEntry>,
    #[serde(default)]
    pub hops: Vec<Hop>,
    /// Name of the start entry.
    #[serde(default)]
    pub start: Option<String>,
}

impl From<&Job> for JobDocument {
    fn from(job: &Job) -> Self {
        Self {
            name: job.name.clone(),
            description: job.description.clone(),
            entries: job.entries.clone(),
            hops: job.hops.clone(),
            start: job.start.clone(),
        }
    }
}
