use crate::error::BuildError;
use crate::job::{EntryKind, Hop, HopCondition, Job, JobEntry, Position};
use ahash::AHashMap;
use std::fmt;

/// A reference to an entry of the job being built, handed out by [`JobBuilder::add_entry`].
///
/// References are resolved by entry name, so a reference built by hand with
/// `EntryRef::from("name")` is only accepted if an entry of that name was added.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryRef(String);

impl EntryRef {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryRef {
    fn from(name: &str) -> Self {
        EntryRef(name.to_string())
    }
}

impl From<String> for EntryRef {
    fn from(name: String) -> Self {
        EntryRef(name)
    }
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assembles a [`Job`] one entry and hop at a time.
///
/// Every mutation is checked as it happens: names must be unique, hops may only connect
/// entries that were already added, and only a start entry can be designated as the start.
/// Call [`build`](JobBuilder::build) to obtain the finished, immutable job.
pub struct JobBuilder {
    job: Job,
    index: AHashMap<String, usize>,
}

impl JobBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            job: Job {
                name: name.into(),
                ..Job::default()
            },
            index: AHashMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.job.description = description.into();
        self
    }

    /// Adds an entry and returns a reference to it for use in hops.
    ///
    /// Fails with [`BuildError::DuplicateName`] if the name is already taken, whatever the
    /// role of either entry.
    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        kind: impl Into<EntryKind>,
        position: Position,
    ) -> Result<EntryRef, BuildError> {
        let mut entry = JobEntry::new(name, kind);
        entry.position = position;
        self.add(entry)
    }

    /// Adds a fully configured entry envelope.
    ///
    /// An empty FTP credentials reference is stored as no reference.
    pub fn add(&mut self, mut entry: JobEntry) -> Result<EntryRef, BuildError> {
        if self.index.contains_key(&entry.name) {
            return Err(BuildError::DuplicateName(entry.name));
        }
        if let EntryKind::Ftp(ftp) = &mut entry.kind {
            ftp.normalize();
        }
        let entry_ref = EntryRef(entry.name.clone());
        self.index.insert(entry.name.clone(), self.job.entries.len());
        self.job.entries.push(entry);
        Ok(entry_ref)
    }

    /// Connects two entries. Hops keep the order in which they were added.
    pub fn add_hop(
        &mut self,
        from: &EntryRef,
        to: &EntryRef,
        condition: HopCondition,
    ) -> Result<(), BuildError> {
        self.resolve(from)?;
        self.resolve(to)?;
        self.job.hops.push(Hop {
            from: from.0.clone(),
            to: to.0.clone(),
            condition,
        });
        Ok(())
    }

    /// Designates the start entry. A later call replaces an earlier designation.
    pub fn set_start(&mut self, entry: &EntryRef) -> Result<(), BuildError> {
        let found = self.resolve(entry)?;
        if !found.kind.is_start() {
            return Err(BuildError::InvalidRole {
                name: found.name.clone(),
                role: found.kind.role(),
            });
        }
        self.job.start = Some(entry.0.clone());
        Ok(())
    }

    /// Returns the entry behind a reference, if it belongs to this job.
    pub fn entry(&self, entry: &EntryRef) -> Option<&JobEntry> {
        self.resolve(entry).ok()
    }

    pub fn entry_count(&self) -> usize {
        self.job.entries.len()
    }

    pub fn build(self) -> Job {
        self.job
    }

    fn resolve(&self, entry: &EntryRef) -> Result<&JobEntry, BuildError> {
        self.index
            .get(&entry.0)
            .map(|&i| &self.job.entries[i])
            .ok_or_else(|| BuildError::UnknownEntry(entry.0.clone()))
    }
}
