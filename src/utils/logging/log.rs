//! Operation logging
//!
//! Generation, ingestion and export report through these helpers so their
//! log lines share one shape.

use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `target` - What the operation works on (a collection, a file path)
pub fn log_operation_start(operation: &str, target: &str) {
    log::info!("{operation} {target}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `target` - What the operation worked on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    target: &str,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} {target} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} {target}");
    }
}

/// Log a warning with an optional subject
///
/// # Arguments
/// * `message` - Warning message
/// * `subject` - Optional record or collection the warning is about
pub fn log_warning(message: &str, subject: Option<&str>) {
    if let Some(subject) = subject {
        log::warn!("{message}: {subject}");
    } else {
        log::warn!("{message}");
    }
}
