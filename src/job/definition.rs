use super::entry::EntryKind;
use super::variables;
use crate::builder::JobBuilder;
use crate::error::{ValidationErrors, XmlError};
use crate::validator::Validator;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// A complete job definition: entries, the hops between them and the designated start.
///
/// Jobs are assembled with [`JobBuilder`] and are immutable afterwards. Entries and hops keep
/// their insertion order, which is also the order they are serialized in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Job {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) entries: Vec<JobEntry>,
    pub(crate) hops: Vec<Hop>,
    pub(crate) start: Option<String>,
}

/// A single step of a job: the shared envelope plus its role-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntry {
    pub name: String,
    #[serde(flatten)]
    pub kind: EntryKind,
    #[serde(default)]
    pub position: Position,
    /// Whether the entry is shown on the designer canvas.
    #[serde(default = "default_drawn")]
    pub drawn: bool,
}

fn default_drawn() -> bool {
    true
}

impl JobEntry {
    pub fn new(name: impl Into<String>, kind: impl Into<EntryKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            position: Position::default(),
            drawn: true,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn hidden(mut self) -> Self {
        self.drawn = false;
        self
    }
}

/// Canvas coordinates of an entry. Purely cosmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A directed connection between two entries, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hop {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub condition: HopCondition,
}

/// When a hop is followed, based on the result of its source entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopCondition {
    #[default]
    Unconditional,
    OnSuccess,
    OnFailure,
}

impl fmt::Display for HopCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HopCondition::Unconditional => "unconditional",
            HopCondition::OnSuccess => "on success",
            HopCondition::OnFailure => "on failure",
        };
        f.write_str(label)
    }
}

impl Job {
    pub fn builder(name: impl Into<String>) -> JobBuilder {
        JobBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn entries(&self) -> &[JobEntry] {
        &self.entries
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Name of the designated start entry, if one has been set.
    pub fn start_name(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn start(&self) -> Option<&JobEntry> {
        self.start.as_deref().and_then(|name| self.entry(name))
    }

    /// Looks up an entry by name. With duplicate names (only possible in parsed
    /// documents) the first one wins.
    pub fn entry(&self, name: &str) -> Option<&JobEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// The hops leaving `name`, in insertion order.
    pub fn successors<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Hop> + 'a {
        self.hops.iter().filter(move |hop| hop.from == name)
    }

    /// Entries that cannot be reached from the start entry by following hops.
    ///
    /// When no start is designated every entry is unreachable.
    pub fn unreachable_entries(&self) -> Vec<&JobEntry> {
        let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for hop in &self.hops {
            adjacency
                .entry(hop.from.as_str())
                .or_default()
                .push(hop.to.as_str());
        }

        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut queue: VecDeque<&str> = self.start.as_deref().into_iter().collect();
        while let Some(name) = queue.pop_front() {
            if !visited.insert(name) {
                continue;
            }
            if let Some(targets) = adjacency.get(name) {
                queue.extend(targets.iter().copied());
            }
        }

        self.entries
            .iter()
            .filter(|e| !visited.contains(e.name.as_str()))
            .collect()
    }

    /// Names of all `${...}` variables the job expects the engine to provide, sorted and
    /// without duplicates.
    pub fn referenced_variables(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|entry| variables::entry_placeholders(&entry.kind))
            .sorted()
            .dedup()
            .collect()
    }

    /// Checks the structural invariants of the job. See [`Validator`].
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::validate(self)
    }

    /// Renders the job in the engine's XML document format.
    pub fn to_xml(&self) -> Result<String, XmlError> {
        crate::xml::to_xml(self)
    }
}
