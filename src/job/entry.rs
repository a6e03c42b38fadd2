use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role-specific payload of a job entry.
///
/// Every entry shares the same envelope (see [`JobEntry`](super::JobEntry)); what it
/// actually does is described by one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryKind {
    /// The entry point of the job.
    Start(StartEntry),
    /// Writes a message to the engine log.
    WriteToLog(LogEntry),
    /// Downloads files from an FTP server.
    Ftp(FtpEntry),
    /// Ends the job with a successful result.
    Success,
}

impl EntryKind {
    pub fn role(&self) -> EntryRole {
        match self {
            EntryKind::Start(_) => EntryRole::Start,
            EntryKind::WriteToLog(_) => EntryRole::WriteToLog,
            EntryKind::Ftp(_) => EntryRole::Ftp,
            EntryKind::Success => EntryRole::Success,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, EntryKind::Start(_))
    }
}

impl From<StartEntry> for EntryKind {
    fn from(entry: StartEntry) -> Self {
        EntryKind::Start(entry)
    }
}

impl From<LogEntry> for EntryKind {
    fn from(entry: LogEntry) -> Self {
        EntryKind::WriteToLog(entry)
    }
}

impl From<FtpEntry> for EntryKind {
    fn from(entry: FtpEntry) -> Self {
        EntryKind::Ftp(entry)
    }
}

/// The role of an entry without its payload, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryRole {
    Start,
    WriteToLog,
    Ftp,
    Success,
}

impl fmt::Display for EntryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryRole::Start => "start",
            EntryRole::WriteToLog => "write-to-log",
            EntryRole::Ftp => "ftp",
            EntryRole::Success => "success",
        };
        f.write_str(label)
    }
}

/// Configuration of the start entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartEntry {
    /// Re-run the job according to `schedule` once it finishes.
    pub repeat: bool,
    pub schedule: Schedule,
}

/// When the start entry fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schedule {
    /// Run once, immediately.
    #[default]
    None,
    Interval {
        seconds: u32,
        minutes: u32,
    },
    Daily {
        hour: u8,
        minute: u8,
    },
    /// `weekday` counts from 0 (Sunday) to 6 (Saturday).
    Weekly {
        weekday: u8,
        hour: u8,
        minute: u8,
    },
    Monthly {
        day: u8,
        hour: u8,
        minute: u8,
    },
}

/// Configuration of a write-to-log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub level: LogLevel,
    pub subject: String,
    /// Message template; `${NAME}` placeholders are resolved by the engine at run time.
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Log verbosity understood by the execution engine, from quietest to noisiest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Nothing,
    Error,
    Minimal,
    #[default]
    Basic,
    Detailed,
    Debug,
    Rowlevel,
}

impl LogLevel {
    /// The code written to job documents.
    pub fn code(&self) -> &'static str {
        match self {
            LogLevel::Nothing => "Nothing",
            LogLevel::Error => "Error",
            LogLevel::Minimal => "Minimal",
            LogLevel::Basic => "Basic",
            LogLevel::Detailed => "Detailed",
            LogLevel::Debug => "Debug",
            LogLevel::Rowlevel => "Rowlevel",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nothing" => Ok(LogLevel::Nothing),
            "Error" => Ok(LogLevel::Error),
            "Minimal" => Ok(LogLevel::Minimal),
            "Basic" => Ok(LogLevel::Basic),
            "Detailed" => Ok(LogLevel::Detailed),
            "Debug" => Ok(LogLevel::Debug),
            "Rowlevel" => Ok(LogLevel::Rowlevel),
            other => Err(format!("Unknown log level '{}'", other)),
        }
    }
}

/// Configuration of an FTP download entry.
///
/// Text fields may hold `${NAME}` placeholders, which is why `port` is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FtpEntry {
    pub host: String,
    pub port: String,
    pub username: String,
    /// A reference to the password (usually a variable such as `${FTP_PASSWORD}`), never the
    /// secret itself. Jobs never hold an empty reference: the builder and deserialization
    /// both turn `Some("")` into `None`, matching how documents store a missing password.
    #[serde(deserialize_with = "non_empty_reference")]
    pub credentials_ref: Option<String>,
    pub remote_directory: String,
    /// Regular expression selecting the remote files to fetch.
    pub wildcard: String,
    pub target_directory: String,
    pub binary_mode: bool,
    pub timeout_secs: u32,
    pub active_mode: bool,
    pub remove_after_download: bool,
    pub only_new_files: bool,
}

impl FtpEntry {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.credentials_ref = self.credentials_ref.take().filter(|r| !r.is_empty());
    }
}

fn non_empty_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|r| !r.is_empty()))
}

impl Default for FtpEntry {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: "21".to_string(),
            username: String::new(),
            credentials_ref: None,
            remote_directory: "/".to_string(),
            wildcard: ".*".to_string(),
            target_directory: String::new(),
            binary_mode: true,
            timeout_secs: 10,
            active_mode: false,
            remove_after_download: false,
            only_new_files: false,
        }
    }
}
