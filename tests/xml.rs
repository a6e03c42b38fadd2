//! Tests for writing and reading job XML documents.
mod common;
use common::*;
use jobgraph::prelude::*;

fn positions_of(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| haystack.find(n).unwrap_or_else(|| panic!("'{}' not found", n)))
        .collect()
}

#[test]
fn test_chain_serializes_four_entries_and_three_hops_in_order() {
    let job = chain_job();
    job.validate().expect("chain is valid");
    let text = xml::to_xml(&job).expect("serializes");

    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert_eq!(text.matches("<entry>").count(), 4);
    assert_eq!(text.matches("<hop>").count(), 3);

    let entry_positions = positions_of(
        &text,
        &[
            "<name>START</name>",
            "<name>Log</name>",
            "<name>FTP</name>",
            "<name>Success</name>",
        ],
    );
    assert!(entry_positions.windows(2).all(|w| w[0] < w[1]));

    let hops_start = text.find("<hops>").unwrap();
    assert!(entry_positions.iter().all(|&p| p < hops_start));
    let hop_positions = positions_of(
        &text[hops_start..],
        &["<from>START</from>", "<from>Log</from>", "<from>FTP</from>"],
    );
    assert!(hop_positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_serialization_is_deterministic() {
    let job = chain_job();
    let first = xml::to_xml(&job).unwrap();
    let second = xml::to_xml(&job).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, xml::to_xml(&chain_job()).unwrap());
}

#[test]
fn test_entry_layout() {
    let text = chain_job().to_xml().unwrap();
    assert!(text.contains("<type>SPECIAL</type>"));
    assert!(text.contains("<start>Y</start>"));
    assert!(text.contains("<type>WRITE_TO_LOG</type>"));
    assert!(text.contains("<loglevel>Minimal</loglevel>"));
    assert!(text.contains("<type>FTP</type>"));
    assert!(text.contains("<servername>11.12.112.84</servername>"));
    assert!(text.contains("<password>${FTP_PASSWORD}</password>"));
    assert!(text.contains("<type>SUCCESS</type>"));
    assert!(text.contains("<xloc>700</xloc>"));
}

#[test]
fn test_hop_condition_encoding() {
    let text = chain_job().to_xml().unwrap();
    let hops = &text[text.find("<hops>").unwrap()..];
    let blocks: Vec<&str> = hops.split("<hop>").skip(1).collect();
    assert_eq!(blocks.len(), 3);

    assert!(blocks[0].contains("<evaluation>Y</evaluation>"));
    assert!(blocks[0].contains("<unconditional>Y</unconditional>"));
    assert!(blocks[1].contains("<evaluation>Y</evaluation>"));
    assert!(blocks[1].contains("<unconditional>N</unconditional>"));

    let mut builder = chain_builder();
    builder
        .add_hop(
            &EntryRef::from("FTP"),
            &EntryRef::from("Log"),
            HopCondition::OnFailure,
        )
        .unwrap();
    let text = builder.build().to_xml().unwrap();
    let last = text.rsplit("<hop>").next().unwrap();
    assert!(last.contains("<evaluation>N</evaluation>"));
    assert!(last.contains("<unconditional>N</unconditional>"));
}

#[test]
fn test_values_are_escaped() {
    let mut builder = Job::builder("Tom & Jerry <nightly>");
    let start = builder
        .add_entry("START", StartEntry::default(), Position::default())
        .unwrap();
    builder.set_start(&start).unwrap();
    builder
        .add_entry(
            "log \"quoted\"",
            LogEntry::new(LogLevel::Basic, "a < b", "x > y && 'z'"),
            Position::default(),
        )
        .unwrap();
    let job = builder.build();

    let text = xml::to_xml(&job).unwrap();
    assert!(text.contains("<name>Tom &amp; Jerry &lt;nightly&gt;</name>"));
    assert!(!text.contains("x > y && 'z'"));

    let parsed = xml::from_xml(&text).unwrap();
    assert_eq!(parsed, job);
}

#[test]
fn test_demo_job_round_trip() {
    let job = jobgraph::samples::ftp_demo_job().unwrap();
    let text = xml::to_xml(&job).unwrap();
    assert!(text.contains("<name>Generated Demo FTP Job</name>"));
    assert!(text.contains("Version: ${Internal.Kettle.Version}\nBuild Date:"));

    let parsed = xml::from_xml(&text).unwrap();
    assert_eq!(parsed, job);
    assert_eq!(xml::to_xml(&parsed).unwrap(), text);
}

#[test]
fn test_schedules_round_trip() {
    let schedules = [
        Schedule::None,
        Schedule::Interval {
            seconds: 30,
            minutes: 5,
        },
        Schedule::Daily { hour: 3, minute: 15 },
        Schedule::Weekly {
            weekday: 6,
            hour: 23,
            minute: 59,
        },
        Schedule::Monthly {
            day: 28,
            hour: 0,
            minute: 1,
        },
    ];
    for schedule in schedules {
        let mut builder = Job::builder("scheduled");
        let start = builder
            .add_entry(
                "START",
                StartEntry {
                    repeat: true,
                    schedule,
                },
                Position::default(),
            )
            .unwrap();
        builder.set_start(&start).unwrap();
        let job = builder.build();

        let parsed = xml::from_xml(&job.to_xml().unwrap()).unwrap();
        assert_eq!(parsed, job, "schedule {:?}", schedule);
    }
}

#[test]
fn test_ftp_options_round_trip() {
    let mut builder = Job::builder("ftp options");
    builder
        .add_entry(
            "FTP",
            FtpEntry {
                port: "${FTP_PORT}".to_string(),
                credentials_ref: None,
                binary_mode: false,
                timeout_secs: 120,
                active_mode: true,
                remove_after_download: true,
                only_new_files: true,
                ..sample_ftp()
            },
            Position::new(-20, 40),
        )
        .unwrap();
    let job = builder.build();

    let parsed = xml::from_xml(&xml::to_xml(&job).unwrap()).unwrap();
    assert_eq!(parsed, job);
}

#[test]
fn test_empty_credentials_reference_round_trip() {
    let mut builder = Job::builder("empty password");
    let start = builder
        .add_entry("START", StartEntry::default(), Position::default())
        .unwrap();
    builder.set_start(&start).unwrap();
    let ftp = builder
        .add_entry(
            "FTP",
            FtpEntry {
                credentials_ref: Some(String::new()),
                ..FtpEntry::new("h")
            },
            Position::default(),
        )
        .unwrap();
    match &builder.entry(&ftp).unwrap().kind {
        EntryKind::Ftp(ftp) => assert_eq!(ftp.credentials_ref, None),
        other => panic!("expected an FTP entry, got {:?}", other),
    }
    let job = builder.build();

    let text = job.to_xml().unwrap();
    assert!(text.contains("<password></password>"));
    let parsed = xml::from_xml(&text).unwrap();
    assert_eq!(parsed, job);
}

#[test]
fn test_multiline_text_round_trip() {
    let mut builder = Job::builder("multiline");
    builder
        .add_entry(
            "Log",
            LogEntry::new(LogLevel::Basic, "\tsubject ", "line one\r\nline two\nend"),
            Position::default(),
        )
        .unwrap();
    let job = builder.build();

    let parsed = xml::from_xml(&job.to_xml().unwrap()).unwrap();
    assert_eq!(parsed, job);
}

#[test]
fn test_parse_handwritten_document_with_defaults() {
    let entries = format!(
        "{}<entry><name>Fetch</name><type>FTP</type><servername>host</servername></entry>",
        start_entry_xml("START")
    );
    let text = job_xml(&entries, &hop_xml("START", "Fetch"));
    let job = xml::from_xml(&text).unwrap();

    assert_eq!(job.name(), "Handwritten");
    assert_eq!(job.description(), "");
    assert_eq!(job.start_name(), Some("START"));
    let fetch = job.entry("Fetch").unwrap();
    assert_eq!(fetch.position, Position::default());
    assert!(fetch.drawn);
    match &fetch.kind {
        EntryKind::Ftp(ftp) => {
            assert_eq!(ftp.host, "host");
            assert_eq!(ftp.port, "21");
            assert_eq!(ftp.credentials_ref, None);
            assert!(ftp.binary_mode);
        }
        other => panic!("Expected an FTP entry, got {:?}", other),
    }
    assert!(job.validate().is_ok());
}

#[test]
fn test_parse_rejects_wrong_root() {
    let result = xml::from_xml("<transformation><name>t</name></transformation>");
    assert_eq!(
        result,
        Err(XmlError::UnexpectedRoot {
            expected: "job".to_string(),
            found: "transformation".to_string(),
        })
    );
}

#[test]
fn test_parse_rejects_malformed_documents() {
    assert!(matches!(
        xml::from_xml("<job><name>x</name>"),
        Err(XmlError::Malformed(_))
    ));
    assert!(matches!(
        xml::from_xml("<job><name>x</wrong></job>"),
        Err(XmlError::Malformed(_))
    ));
    assert!(matches!(xml::from_xml(""), Err(XmlError::Malformed(_))));
}

#[test]
fn test_parse_reports_missing_elements() {
    let result = xml::from_xml("<job><entries/></job>");
    assert_eq!(
        result,
        Err(XmlError::MissingElement {
            parent: "job".to_string(),
            element: "name".to_string(),
        })
    );

    let text = job_xml("<entry><name>A</name></entry>", "");
    assert_eq!(
        xml::from_xml(&text),
        Err(XmlError::MissingElement {
            parent: "entry".to_string(),
            element: "type".to_string(),
        })
    );
}

#[test]
fn test_parse_rejects_unsupported_entry_types() {
    let text = job_xml("<entry><name>Mail</name><type>MAIL</type></entry>", "");
    assert_eq!(
        xml::from_xml(&text),
        Err(XmlError::UnsupportedEntryType {
            name: "Mail".to_string(),
            type_code: "MAIL".to_string(),
        })
    );

    let dummy = job_xml(
        "<entry><name>Dummy</name><type>SPECIAL</type><start>N</start><dummy>Y</dummy></entry>",
        "",
    );
    assert!(matches!(
        xml::from_xml(&dummy),
        Err(XmlError::UnsupportedEntryType { name, .. }) if name == "Dummy"
    ));
}

#[test]
fn test_parse_rejects_invalid_values() {
    let text = job_xml(
        "<entry><name>A</name><type>SUCCESS</type><xloc>left</xloc></entry>",
        "",
    );
    assert_eq!(
        xml::from_xml(&text),
        Err(XmlError::InvalidValue {
            element: "xloc".to_string(),
            value: "left".to_string(),
        })
    );

    let text = job_xml(
        "<entry><name>L</name><type>WRITE_TO_LOG</type><logmessage>m</logmessage><loglevel>Loud</loglevel></entry>",
        "",
    );
    assert!(matches!(
        xml::from_xml(&text),
        Err(XmlError::InvalidValue { element, .. }) if element == "loglevel"
    ));

    let text = job_xml(
        &start_entry_xml("START"),
        "<hop><from>START</from><to>START</to><evaluation>maybe</evaluation></hop>",
    );
    assert!(matches!(
        xml::from_xml(&text),
        Err(XmlError::InvalidValue { element, .. }) if element == "evaluation"
    ));
}
