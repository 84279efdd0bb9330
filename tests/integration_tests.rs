//! Integration tests for the leveled syslog facade
//!
//! These tests verify:
//! - End-to-end filtering through the core logger
//! - Construction failures for missing and unknown parameters
//! - The std vocabulary adapter mapping
//! - Timed blocks and their failure behavior
//! - Settings files and the access log

use leveled_syslog::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn memory_logger(threshold: Severity) -> (Logger, MemoryTransport) {
    let transport = MemoryTransport::new();
    let logger = Logger::with_transport("test_app", threshold, Facility::Local0, transport.clone())
        .expect("valid logger");
    (logger, transport)
}

#[test]
fn test_end_to_end_warning_threshold() {
    let transport = MemoryTransport::new();
    let logger = Logger::builder()
        .app_name("test_app")
        .severity("warning")
        .facility("local0")
        .transport(transport.clone())
        .build()
        .expect("valid logger");

    logger.info("hidden").unwrap();
    assert!(transport.is_empty());

    logger.err("shown").unwrap();
    let records = transport.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Err);
    assert!(records[0].message.contains("shown"));
    assert_eq!(records[0].ident, "test_app");
    assert_eq!(records[0].facility, Facility::Local0);
}

#[test]
fn test_every_severity_against_every_threshold() {
    for threshold in Severity::ALL {
        let (logger, transport) = memory_logger(threshold);
        for severity in Severity::ALL {
            let mut ran = false;
            logger.time(severity, "probe", || ran = true).unwrap();

            let should_write = severity.rank() <= threshold.rank();
            assert_eq!(ran, should_write, "{severity} at threshold {threshold}");
        }

        let expected = usize::from(threshold.rank()) + 1;
        assert_eq!(transport.len(), expected, "threshold {threshold}");
    }
}

#[test]
fn test_construction_requires_each_parameter() {
    let cases = [
        (None, Some("debug"), Some("local0"), "app_name"),
        (Some("test_app"), None, Some("local0"), "severity"),
        (Some("test_app"), Some("debug"), None, "facility"),
    ];

    for (app_name, severity, facility, missing) in cases {
        let mut builder = Logger::builder().transport(MemoryTransport::new());
        if let Some(app_name) = app_name {
            builder = builder.app_name(app_name);
        }
        if let Some(severity) = severity {
            builder = builder.severity(severity);
        }
        if let Some(facility) = facility {
            builder = builder.facility(facility);
        }

        match builder.build() {
            Err(LoggerError::MissingParameter { parameter }) => assert_eq!(parameter, missing),
            other => panic!("expected missing {missing}, got {other:?}"),
        }
    }
}

#[test]
fn test_construction_rejects_unknown_names() {
    let err = Logger::builder()
        .app_name("test_app")
        .severity("junk")
        .facility("local0")
        .transport(MemoryTransport::new())
        .build()
        .unwrap_err();
    assert!(matches!(err, LoggerError::InvalidSeverity { .. }));
    assert!(err.to_string().contains("warning"));

    let err = Logger::builder()
        .app_name("test_app")
        .severity("debug")
        .facility("junk")
        .transport(MemoryTransport::new())
        .build()
        .unwrap_err();
    assert!(matches!(err, LoggerError::InvalidFacility { .. }));

    let err = Logger::builder()
        .app_name("test_app")
        .severity("junk")
        .facility("local0")
        .transport(MemoryTransport::new())
        .build_adapter::<StdLevel>()
        .unwrap_err();
    assert!(matches!(err, LoggerError::InvalidSeverity { .. }));
}

#[test]
fn test_std_adapter_at_warn() {
    let transport = MemoryTransport::new();
    let logger = Logger::builder()
        .app_name("test_app")
        .severity("warn")
        .facility("local0")
        .transport(transport.clone())
        .build_adapter::<StdLevel>()
        .unwrap();

    logger.info("x").unwrap();
    assert!(transport.is_empty());

    logger.error("y").unwrap();
    let records = transport.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Err);
    assert_eq!(records[0].message, "y");
}

#[test]
fn test_std_adapter_from_typed_threshold() {
    for (threshold, level) in [
        (Severity::Warning, StdLevel::Warn),
        (Severity::Err, StdLevel::Error),
        (Severity::Emerg, StdLevel::Unknown),
    ] {
        let logger = Logger::builder()
            .app_name("test_app")
            .threshold(threshold)
            .category(Facility::Local0)
            .transport(MemoryTransport::new())
            .build_adapter::<StdLevel>()
            .expect("typed threshold maps into the vocabulary");
        assert_eq!(logger.level(), level);
    }

    let err = Logger::builder()
        .app_name("test_app")
        .threshold(Severity::Notice)
        .category(Facility::Local0)
        .transport(MemoryTransport::new())
        .build_adapter::<StdLevel>()
        .unwrap_err();
    assert!(matches!(err, LoggerError::InvalidSeverity { .. }));
}

#[test]
fn test_enabled_predicate_is_per_instance() {
    let first =
        StdLogger::with_transport("a", StdLevel::Debug, Facility::User, MemoryTransport::new())
            .unwrap();
    let second =
        StdLogger::with_transport("b", StdLevel::Debug, Facility::User, MemoryTransport::new())
            .unwrap();

    assert!(first.is_debug());
    assert!(second.is_debug());

    first.set_level(StdLevel::Info);
    assert!(!first.is_debug());
    assert!(second.is_debug());
}

#[test]
fn test_timed_block_reports_duration() {
    let (logger, transport) = memory_logger(Severity::Info);
    logger
        .info_timed("slept", || std::thread::sleep(Duration::from_millis(100)))
        .unwrap();

    let message = transport.messages().remove(0);
    let seconds: f64 = message
        .strip_prefix("[time: ")
        .and_then(|rest| rest.split(']').next())
        .and_then(|secs| secs.parse().ok())
        .expect("timed prefix");
    assert!((0.1..1.0).contains(&seconds), "measured {seconds}");
    assert!(message.ends_with("] slept"));
}

#[test]
fn test_failed_block_propagates_without_record() {
    let (logger, transport) = memory_logger(Severity::Debug);

    let err = logger
        .try_time(Severity::Err, "never written", || {
            std::thread::sleep(Duration::from_millis(5));
            Err(std::io::Error::new(std::io::ErrorKind::Other, "backend down"))
        })
        .unwrap_err();

    match err {
        LoggerError::WorkFailed { elapsed, source } => {
            assert!(elapsed >= Duration::from_millis(5));
            assert_eq!(source.to_string(), "backend down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(transport.is_empty());
    assert_eq!(transport.open_count(), 0);
}

#[test]
fn test_transport_failure_is_returned() {
    let (logger, transport) = memory_logger(Severity::Debug);
    transport.fail_writes(true);

    let err = logger.info("lost").unwrap_err();
    assert!(matches!(err, LoggerError::FacilityWrite { .. }));
    assert_eq!(logger.metrics().failed(), 1);
    assert_eq!(transport.open_count(), transport.close_count());
}

#[test]
fn test_settings_file_builds_adapter() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("logger.toml");
    std::fs::write(
        &path,
        r#"
        app_name = "billing"
        severity = "error"
        facility = "local4"
        transport = "console"
        "#,
    )
    .expect("Failed to write settings");

    let settings = LoggerSettings::from_file(&path).unwrap();
    let logger = settings
        .builder()
        .unwrap()
        .transport(MemoryTransport::new())
        .build_adapter::<StdLevel>()
        .unwrap();

    assert_eq!(logger.app_name(), "billing");
    assert_eq!(logger.level(), StdLevel::Error);
    assert_eq!(logger.facility(), Facility::Local4);
}

#[test]
fn test_settings_file_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = LoggerSettings::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, LoggerError::IoOperation { .. }));
}

#[test]
fn test_access_log_through_adapter() {
    let transport = MemoryTransport::new();
    let logger =
        StdLogger::with_transport("web", StdLevel::Info, Facility::Local1, transport.clone())
            .unwrap();
    let access = AccessLog::new(Arc::new(logger));

    let mut request = RequestInfo::new("GET", "/discount");
    request.query_string = "pct=50%".to_string();
    access
        .call(&request, |_| ResponseInfo {
            status: 200,
            content_length: Some(17),
        })
        .unwrap();

    let message = transport.messages().remove(0);
    assert!(message.starts_with("- - \"GET /discount?pct=50%% HTTP/1.1\" 200 17 "));
}
