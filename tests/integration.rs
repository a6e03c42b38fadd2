//! Integration tests for jobgraph
//!
//! End-to-end tests that take a job from its JSON description to XML and back.
//!
mod common;
use common::*;
use jobgraph::prelude::*;

const CHAIN_JSON: &str = r#"{
    "name": "From JSON",
    "description": "Described in JSON",
    "entries": [
        { "name": "START", "type": "start", "position": { "x": 100, "y": 100 } },
        {
            "name": "Log",
            "type": "write_to_log",
            "level": "minimal",
            "subject": "Subject",
            "message": "Hello ${USER}",
            "position": { "x": 300, "y": 100 }
        },
        {
            "name": "FTP",
            "type": "ftp",
            "host": "11.12.112.84",
            "username": "ftp1",
            "credentials_ref": "${FTP_PASSWORD}",
            "target_directory": "/tmp/",
            "position": { "x": 500, "y": 100 }
        },
        { "name": "Success", "type": "success", "position": { "x": 700, "y": 100 } }
    ],
    "hops": [
        { "from": "START", "to": "Log" },
        { "from": "Log", "to": "FTP", "condition": "on_success" },
        { "from": "FTP", "to": "Success", "condition": "on_success" }
    ],
    "start": "START"
}"#;

#[test]
fn test_json_document_to_xml_and_back() {
    let document: JobDocument = serde_json::from_str(CHAIN_JSON).expect("valid JSON");
    let job = document.into_job().expect("document converts");

    assert_eq!(job.name(), "From JSON");
    assert!(job.validate().is_ok());

    // same graph as the one built by hand
    let by_hand = chain_job();
    assert_eq!(job.entries(), by_hand.entries());
    assert_eq!(job.hops(), by_hand.hops());

    let text = xml::to_xml(&job).unwrap();
    let parsed = xml::from_xml(&text).unwrap();
    assert_eq!(parsed, job);
}

#[test]
fn test_document_from_job_round_trips_through_json() {
    let job = jobgraph::samples::ftp_demo_job().unwrap();
    let json = serde_json::to_string_pretty(&JobDocument::from(&job)).unwrap();
    assert!(json.contains("\"type\": \"write_to_log\""));

    let document: JobDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(document.into_job().unwrap(), job);
}

#[test]
fn test_document_conversion_surfaces_build_errors() {
    let mut document: JobDocument = serde_json::from_str(CHAIN_JSON).unwrap();
    document.hops.push(Hop {
        from: "Success".to_string(),
        to: "Nowhere".to_string(),
        condition: HopCondition::OnFailure,
    });
    assert_eq!(
        document.into_job(),
        Err(JobConversionError::Build(BuildError::UnknownEntry(
            "Nowhere".to_string()
        )))
    );

    let mut document: JobDocument = serde_json::from_str(CHAIN_JSON).unwrap();
    document.start = Some("Log".to_string());
    assert!(matches!(
        document.into_job(),
        Err(JobConversionError::Build(BuildError::InvalidRole { .. }))
    ));

    let mut document: JobDocument = serde_json::from_str(CHAIN_JSON).unwrap();
    let copy = document.entries[1].clone();
    document.entries.push(copy);
    assert_eq!(
        document.into_job(),
        Err(JobConversionError::Build(BuildError::DuplicateName(
            "Log".to_string()
        )))
    );
}

#[test]
fn test_document_without_start_fails_validation_only() {
    let mut document: JobDocument = serde_json::from_str(CHAIN_JSON).unwrap();
    document.start = None;
    let job = document.into_job().expect("builds without a start");
    assert_eq!(
        job.validate().unwrap_err().errors(),
        &[ValidationError::MissingStart]
    );
}

#[test]
fn test_empty_credentials_reference_reads_as_none() {
    let json = CHAIN_JSON.replace(r#""${FTP_PASSWORD}""#, r#""""#);
    let document: JobDocument = serde_json::from_str(&json).unwrap();
    match &document.entries[2].kind {
        EntryKind::Ftp(ftp) => assert_eq!(ftp.credentials_ref, None),
        other => panic!("expected an FTP entry, got {:?}", other),
    }

    let job = document.into_job().unwrap();
    let parsed = xml::from_xml(&job.to_xml().unwrap()).unwrap();
    assert_eq!(parsed, job);
}
