//! Integration tests for logging from the audit pipeline.

use degree_audit::core::audit::evaluate;
use degree_audit::core::models::{CourseRecord, Transcript};
use degree_audit::core::Catalog;
use logger::{close_file_logging, debug, enable_debug, error, info, set_level, warn, Level};
use std::fs;

#[test]
fn level_names_parse() {
    assert_eq!("error".parse::<Level>(), Ok(Level::Error));
    assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
    assert_eq!(" info ".parse::<Level>(), Ok(Level::Info));
    assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    assert!("trace".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn logs_do_not_panic() {
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(all(feature = "file-logging", feature = "log-debug"))]
#[test]
fn audit_decisions_reach_log_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("audit.log");

    set_level(Level::Debug);
    enable_debug();
    assert!(logger::init_file_logging(&log_path));

    let transcript = Transcript::new(
        vec![CourseRecord::new("ELEC 11014", "Circuits", 1, 1, Some("Withheld"))],
        Vec::new(),
        Vec::new(),
    );
    let _ = evaluate(&Catalog::new(), &transcript);
    close_file_logging();

    let content = fs::read_to_string(&log_path).expect("read log file");
    assert!(content.contains("[DEBUG] Curriculum path: Path 2"));
    assert!(content.contains("[DEBUG] Withheld grade found"));
}
