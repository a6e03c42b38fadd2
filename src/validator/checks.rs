use crate::error::ValidationError;
use crate::job::Job;
use ahash::AHashSet;
use itertools::Itertools;

/// Exactly one start entry, and it must be the designated one.
pub(super) fn check_start(job: &Job, errors: &mut Vec<ValidationError>) {
    let start_entries: Vec<String> = job
        .entries()
        .iter()
        .filter(|e| e.kind.is_start())
        .map(|e| e.name.clone())
        .collect();

    if start_entries.len() > 1 {
        errors.push(ValidationError::MultipleStartEntries {
            names: start_entries,
        });
    }

    match job.start() {
        Some(entry) if entry.kind.is_start() => {}
        _ => errors.push(ValidationError::MissingStart),
    }
}

/// Both ends of every hop must name an existing entry.
pub(super) fn check_hop_endpoints(job: &Job, errors: &mut Vec<ValidationError>) {
    let known: AHashSet<&str> = job.entries().iter().map(|e| e.name.as_str()).collect();
    for (i, hop) in job.hops().iter().enumerate() {
        for endpoint in [&hop.from, &hop.to] {
            if !known.contains(endpoint.as_str()) {
                errors.push(ValidationError::UnknownHopEndpoint {
                    hop: i,
                    entry: endpoint.clone(),
                });
            }
        }
    }
}

pub(super) fn check_unique_names(job: &Job, errors: &mut Vec<ValidationError>) {
    let names = || job.entries().iter().map(|e| e.name.as_str());
    let counts = names().counts();
    for name in names().duplicates() {
        errors.push(ValidationError::DuplicateName {
            name: name.to_string(),
            count: counts[name],
        });
    }
}
