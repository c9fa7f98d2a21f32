//! Integration tests for the file sink lifecycle: enable, failure, replace.
//!
//! Tests serialize on a local mutex because they reconfigure the shared
//! global logger.

use std::fs;
use std::sync::Mutex;

use yellog::Level;

static LOGGER_GUARD: Mutex<()> = Mutex::new(());

fn guard() -> std::sync::MutexGuard<'static, ()> {
    LOGGER_GUARD.lock().unwrap_or_else(|e| e.into_inner())
}

fn reset() {
    yellog::set_priority(Level::Info);
    yellog::set_timestamp_format(yellog::DEFAULT_TIMESTAMP_FORMAT);
}

// ============================================================================
// Enabling
// ============================================================================

/// Verifies a writable path opens, reports enabled, and receives lines.
#[test]
fn enable_with_writable_path_succeeds() {
    let _guard = guard();
    reset();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.log");

    assert!(yellog::enable_file_output_to(&path));
    assert!(yellog::is_file_output_enabled());
    assert_eq!(yellog::file_path(), Some(path.clone()));

    yellog::info!("hello file");
    let contents = fs::read_to_string(&path).expect("read log");
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.ends_with('\n'));
}

/// Verifies the file is appended to, never truncated, across re-enables of
/// the same path.
#[test]
fn reenabling_same_path_appends() {
    let _guard = guard();
    reset();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("append.log");

    assert!(yellog::enable_file_output_to(&path));
    yellog::info!("first");
    assert!(yellog::enable_file_output_to(&path));
    yellog::info!("second");

    let contents = fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("first"));
    assert!(lines[1].ends_with("second"));
}

// ============================================================================
// Failure
// ============================================================================

/// Verifies an unwritable path reports failure, leaves the sink disabled,
/// records the attempted path, and keeps stdout logging alive.
#[test]
fn enable_with_unwritable_path_fails_cleanly() {
    let _guard = guard();
    reset();
    let dir = tempfile::tempdir().expect("tempdir");
    let missing_parent = dir.path().join("absent").join("out.log");

    assert!(!yellog::enable_file_output_to(&missing_parent));
    assert!(!yellog::is_file_output_enabled());
    assert_eq!(yellog::file_path(), Some(missing_parent));

    // Logging must still be a no-op failure-wise.
    yellog::info!("stdout only");
}

/// Verifies a failed re-enable closes the previously open handle: the old
/// file stops growing even though the new open never happened.
#[test]
fn failed_reopen_disables_previous_sink() {
    let _guard = guard();
    reset();
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("first.log");
    let missing_parent = dir.path().join("absent").join("out.log");

    assert!(yellog::enable_file_output_to(&first));
    yellog::info!("before failure");

    assert!(!yellog::enable_file_output_to(&missing_parent));
    yellog::info!("after failure");

    let contents = fs::read_to_string(&first).expect("read log");
    assert_eq!(contents.lines().count(), 1);
    assert!(!contents.contains("after failure"));
}

// ============================================================================
// Replacement
// ============================================================================

/// Verifies re-enabling at a new path redirects subsequent lines and stops
/// writing to the previous file.
#[test]
fn reenabling_new_path_redirects_output() {
    let _guard = guard();
    reset();
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");

    assert!(yellog::enable_file_output_to(&first));
    yellog::info!("to first");

    assert!(yellog::enable_file_output_to(&second));
    yellog::info!("to second");

    let first_contents = fs::read_to_string(&first).expect("read first");
    assert_eq!(first_contents.lines().count(), 1);
    assert!(first_contents.contains("to first"));

    let second_contents = fs::read_to_string(&second).expect("read second");
    assert_eq!(second_contents.lines().count(), 1);
    assert!(second_contents.contains("to second"));
}
