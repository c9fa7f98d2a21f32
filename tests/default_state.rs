//! Integration test for the logger's construction-time defaults.
//!
//! This file must stay a single test: it relies on being the first (and
//! only) code in its process to touch the global logger, so the defaults
//! are observed before any reconfiguration.

use yellog::Level;

/// Verifies the documented defaults and that sub-Info records are filtered
/// out of the box.
#[test]
fn fresh_process_defaults() {
    assert_eq!(yellog::priority(), Level::Info);
    assert_eq!(yellog::timestamp_format(), yellog::DEFAULT_TIMESTAMP_FORMAT);
    assert_eq!(yellog::file_path(), None);
    assert!(!yellog::is_file_output_enabled());
    assert_eq!(yellog::DEFAULT_LOG_PATH, "log.txt");

    // Default priority is Info: trace and debug produce no output.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("defaults.log");
    assert!(yellog::enable_file_output_to(&path));

    yellog::trace!("x");
    yellog::debug!("x");
    yellog::info!("x");

    let contents = std::fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[INFO ]"));
}
