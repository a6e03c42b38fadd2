use super::codes::{self, ScheduleFields};
use crate::error::XmlError;
use crate::job::{EntryKind, FtpEntry, Hop, Job, JobEntry, LogEntry, StartEntry};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Thin wrapper over the quick-xml writer that emits the element-per-field layout of job
/// documents.
struct DocumentWriter {
    writer: Writer<Vec<u8>>,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn declaration(&mut self) -> Result<(), XmlError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(XmlError::write)
    }

    fn open(&mut self, tag: &str) -> Result<(), XmlError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(tag)))
            .map_err(XmlError::write)
    }

    fn close(&mut self, tag: &str) -> Result<(), XmlError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .map_err(XmlError::write)
    }

    /// Writes `<tag>value</tag>`, escaping the value.
    fn field(&mut self, tag: &str, value: &str) -> Result<(), XmlError> {
        self.open(tag)?;
        self.writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(XmlError::write)?;
        self.close(tag)
    }

    fn flag(&mut self, tag: &str, value: bool) -> Result<(), XmlError> {
        self.field(tag, codes::yes_no(value))
    }

    fn number(&mut self, tag: &str, value: impl ToString) -> Result<(), XmlError> {
        self.field(tag, &value.to_string())
    }

    fn finish(self) -> Result<String, XmlError> {
        let mut xml = String::from_utf8(self.writer.into_inner()).map_err(XmlError::write)?;
        xml.push('\n');
        Ok(xml)
    }
}

pub(super) fn write_job(job: &Job) -> Result<String, XmlError> {
    let mut out = DocumentWriter::new();
    out.declaration()?;
    out.open("job")?;
    out.field("name", job.name())?;
    out.field("description", job.description())?;

    out.open("entries")?;
    for entry in job.entries() {
        let is_start = job.start_name() == Some(entry.name.as_str());
        write_entry(&mut out, entry, is_start)?;
    }
    out.close("entries")?;

    out.open("hops")?;
    for hop in job.hops() {
        write_hop(&mut out, hop)?;
    }
    out.close("hops")?;

    out.close("job")?;
    out.finish()
}

fn write_entry(out: &mut DocumentWriter, entry: &JobEntry, is_start: bool) -> Result<(), XmlError> {
    out.open("entry")?;
    out.field("name", &entry.name)?;
    out.field("type", codes::type_code(&entry.kind))?;

    match &entry.kind {
        EntryKind::Start(start) => write_start(out, start, is_start)?,
        EntryKind::WriteToLog(log) => write_log(out, log)?,
        EntryKind::Ftp(ftp) => write_ftp(out, ftp)?,
        EntryKind::Success => {}
    }

    out.flag("parallel", false)?;
    out.flag("draw", entry.drawn)?;
    out.number("nr", 0)?;
    out.number("xloc", entry.position.x)?;
    out.number("yloc", entry.position.y)?;
    out.close("entry")
}

fn write_start(out: &mut DocumentWriter, start: &StartEntry, is_start: bool) -> Result<(), XmlError> {
    let schedule = ScheduleFields::from(start.schedule);
    out.flag("start", is_start)?;
    out.flag("dummy", false)?;
    out.flag("repeat", start.repeat)?;
    out.number("schedulerType", schedule.scheduler_type)?;
    out.number("intervalSeconds", schedule.interval_seconds)?;
    out.number("intervalMinutes", schedule.interval_minutes)?;
    out.number("hour", schedule.hour)?;
    out.number("minutes", schedule.minutes)?;
    out.number("weekDay", schedule.week_day)?;
    out.number("DayOfMonth", schedule.day_of_month)
}

fn write_log(out: &mut DocumentWriter, log: &LogEntry) -> Result<(), XmlError> {
    out.field("logmessage", &log.message)?;
    out.field("loglevel", log.level.code())?;
    out.field("logsubject", &log.subject)
}

fn write_ftp(out: &mut DocumentWriter, ftp: &FtpEntry) -> Result<(), XmlError> {
    out.field("servername", &ftp.host)?;
    out.field("port", &ftp.port)?;
    out.field("username", &ftp.username)?;
    out.field("password", ftp.credentials_ref.as_deref().unwrap_or_default())?;
    out.field("ftpdirectory", &ftp.remote_directory)?;
    out.field("targetdirectory", &ftp.target_directory)?;
    out.field("wildcard", &ftp.wildcard)?;
    out.flag("binary", ftp.binary_mode)?;
    out.number("timeout", ftp.timeout_secs)?;
    out.flag("remove", ftp.remove_after_download)?;
    out.flag("only_new", ftp.only_new_files)?;
    out.flag("active", ftp.active_mode)
}

fn write_hop(out: &mut DocumentWriter, hop: &Hop) -> Result<(), XmlError> {
    let (evaluation, unconditional) = codes::condition_flags(hop.condition);
    out.open("hop")?;
    out.field("from", &hop.from)?;
    out.field("to", &hop.to)?;
    out.number("from_nr", 0)?;
    out.number("to_nr", 0)?;
    out.flag("enabled", true)?;
    out.flag("evaluation", evaluation)?;
    out.flag("unconditional", unconditional)?;
    out.close("hop")
}
