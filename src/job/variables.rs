use super::entry::EntryKind;

/// Iterates over the names of the `${NAME}` placeholders in `text`, in order of appearance.
///
/// Unterminated and empty placeholders are skipped.
pub fn placeholders(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        loop {
            let open = rest.find("${")?;
            let after = &rest[open + 2..];
            let close = after.find('}')?;
            let mut name = &after[..close];
            rest = &after[close + 1..];
            // "${a${b}" keeps only the innermost opening
            if let Some(inner) = name.rfind("${") {
                name = &name[inner + 2..];
            }
            if !name.is_empty() {
                return Some(name);
            }
        }
    })
}

/// All placeholders used by the text fields of an entry payload.
pub(crate) fn entry_placeholders(kind: &EntryKind) -> Vec<&str> {
    let fields: Vec<&str> = match kind {
        EntryKind::WriteToLog(log) => vec![log.subject.as_str(), log.message.as_str()],
        EntryKind::Ftp(ftp) => {
            let mut fields = vec![
                ftp.host.as_str(),
                ftp.port.as_str(),
                ftp.username.as_str(),
                ftp.remote_directory.as_str(),
                ftp.wildcard.as_str(),
                ftp.target_directory.as_str(),
            ];
            fields.extend(ftp.credentials_ref.as_deref());
            fields
        }
        EntryKind::Start(_) | EntryKind::Success => Vec::new(),
    };
    fields.into_iter().flat_map(placeholders).collect()
}
