use super::codes::{self, ScheduleFields};
use crate::error::XmlError;
use crate::job::{
    EntryKind, FtpEntry, Hop, Job, JobEntry, LogEntry, LogLevel, Position, StartEntry,
};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::str::FromStr;

/// A minimal element tree. Job documents keep every value in the text of a leaf element and
/// use no attributes, so this is all the structure the reader needs.
#[derive(Debug, Default)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    fn require(&self, name: &str) -> Result<&Element, XmlError> {
        self.child(name).ok_or_else(|| XmlError::MissingElement {
            parent: self.name.clone(),
            element: name.to_string(),
        })
    }

    fn text_of(&self, name: &str) -> Result<&str, XmlError> {
        self.require(name).map(|c| c.text.as_str())
    }

    fn text_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.child(name).map_or(default, |c| c.text.as_str())
    }

    fn parse_or<T: FromStr>(&self, name: &str, default: T) -> Result<T, XmlError> {
        match self.child(name) {
            Some(c) => parse_value(name, &c.text),
            None => Ok(default),
        }
    }

    fn flag_or(&self, name: &str, default: bool) -> Result<bool, XmlError> {
        match self.child(name) {
            Some(c) => codes::parse_yes_no(c.text.trim()).ok_or_else(|| XmlError::InvalidValue {
                element: name.to_string(),
                value: c.text.clone(),
            }),
            None => Ok(default),
        }
    }
}

fn parse_value<T: FromStr>(element: &str, value: &str) -> Result<T, XmlError> {
    value.trim().parse().map_err(|_| XmlError::InvalidValue {
        element: element.to_string(),
        value: value.to_string(),
    })
}

/// Reads the whole document into an element tree.
fn parse_tree(xml: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(XmlError::malformed)? {
            Event::Start(e) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .map_err(XmlError::malformed)?
                    .to_string();
                stack.push(Element::new(name));
            }
            Event::Empty(e) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .map_err(XmlError::malformed)?
                    .to_string();
                attach(&mut stack, &mut root, Element::new(name))?;
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.unescape().map_err(XmlError::malformed)?;
                    current.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    let text = std::str::from_utf8(&e).map_err(XmlError::malformed)?;
                    current.text.push_str(text);
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| XmlError::Malformed("unbalanced closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Eof => break,
            // declarations, comments, processing instructions
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Malformed(format!(
            "element <{}> is never closed",
            open.name
        )));
    }
    root.ok_or_else(|| XmlError::Malformed("document has no root element".to_string()))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(XmlError::Malformed(
            "document has more than one root element".to_string(),
        ))
    }
}

pub(super) fn read_job(xml: &str) -> Result<Job, XmlError> {
    let root = parse_tree(xml)?;
    if root.name != "job" {
        return Err(XmlError::UnexpectedRoot {
            expected: "job".to_string(),
            found: root.name,
        });
    }

    let mut job = Job {
        name: root.text_of("name")?.to_string(),
        description: root.text_or("description", "").to_string(),
        ..Job::default()
    };

    if let Some(entries) = root.child("entries") {
        for node in entries.children_named("entry") {
            let (entry, is_start) = read_entry(node)?;
            if is_start {
                job.start = Some(entry.name.clone());
            }
            job.entries.push(entry);
        }
    }

    if let Some(hops) = root.child("hops") {
        for node in hops.children_named("hop") {
            job.hops.push(read_hop(node)?);
        }
    }

    Ok(job)
}

/// Returns the entry and whether it carries the start flag.
fn read_entry(node: &Element) -> Result<(JobEntry, bool), XmlError> {
    let name = node.text_of("name")?.to_string();
    let type_code = node.text_of("type")?.trim();

    let mut is_start = false;
    let kind = match type_code {
        codes::TYPE_SPECIAL => {
            if node.flag_or("dummy", false)? {
                return Err(XmlError::UnsupportedEntryType {
                    name,
                    type_code: "SPECIAL (dummy)".to_string(),
                });
            }
            is_start = node.flag_or("start", false)?;
            EntryKind::Start(read_start(node)?)
        }
        codes::TYPE_WRITE_TO_LOG => EntryKind::WriteToLog(read_log(node)?),
        codes::TYPE_FTP => EntryKind::Ftp(read_ftp(node)?),
        codes::TYPE_SUCCESS => EntryKind::Success,
        other => {
            return Err(XmlError::UnsupportedEntryType {
                name,
                type_code: other.to_string(),
            });
        }
    };

    let entry = JobEntry {
        name,
        kind,
        position: Position::new(node.parse_or("xloc", 0)?, node.parse_or("yloc", 0)?),
        drawn: node.flag_or("draw", true)?,
    };
    Ok((entry, is_start))
}

fn read_start(node: &Element) -> Result<StartEntry, XmlError> {
    let defaults = ScheduleFields::default();
    let fields = ScheduleFields {
        scheduler_type: node.parse_or("schedulerType", defaults.scheduler_type)?,
        interval_seconds: node.parse_or("intervalSeconds", defaults.interval_seconds)?,
        interval_minutes: node.parse_or("intervalMinutes", defaults.interval_minutes)?,
        hour: node.parse_or("hour", defaults.hour)?,
        minutes: node.parse_or("minutes", defaults.minutes)?,
        week_day: node.parse_or("weekDay", defaults.week_day)?,
        day_of_month: node.parse_or("DayOfMonth", defaults.day_of_month)?,
    };
    Ok(StartEntry {
        repeat: node.flag_or("repeat", false)?,
        schedule: fields.into_schedule()?,
    })
}

fn read_log(node: &Element) -> Result<LogEntry, XmlError> {
    Ok(LogEntry {
        level: node.parse_or("loglevel", LogLevel::default())?,
        subject: node.text_or("logsubject", "").to_string(),
        message: node.text_of("logmessage")?.to_string(),
    })
}

fn read_ftp(node: &Element) -> Result<FtpEntry, XmlError> {
    let defaults = FtpEntry::default();
    let credentials_ref = node.text_or("password", "");
    Ok(FtpEntry {
        host: node.text_of("servername")?.to_string(),
        port: node.text_or("port", &defaults.port).to_string(),
        username: node.text_or("username", "").to_string(),
        credentials_ref: (!credentials_ref.is_empty()).then(|| credentials_ref.to_string()),
        remote_directory: node
            .text_or("ftpdirectory", &defaults.remote_directory)
            .to_string(),
        wildcard: node.text_or("wildcard", &defaults.wildcard).to_string(),
        target_directory: node.text_or("targetdirectory", "").to_string(),
        binary_mode: node.flag_or("binary", defaults.binary_mode)?,
        timeout_secs: node.parse_or("timeout", defaults.timeout_secs)?,
        active_mode: node.flag_or("active", defaults.active_mode)?,
        remove_after_download: node.flag_or("remove", defaults.remove_after_download)?,
        only_new_files: node.flag_or("only_new", defaults.only_new_files)?,
    })
}

fn read_hop(node: &Element) -> Result<Hop, XmlError> {
    let evaluation = node.flag_or("evaluation", true)?;
    let unconditional = node.flag_or("unconditional", false)?;
    Ok(Hop {
        from: node.text_of("from")?.to_string(),
        to: node.text_of("to")?.to_string(),
        condition: codes::condition_from_flags(evaluation, unconditional),
    })
}
