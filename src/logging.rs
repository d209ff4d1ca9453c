//! Logging utilities for evap-plots.
//!
//! Structured tracing helpers shared by both figure renderers so that every
//! rendering call leaves a searchable trail: what was drawn, where it went and
//! how long it took.

use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    // A subscriber may already be installed by the host application.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }
}

/// Run `f`, logging its duration at debug level under a fresh render id
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let render_id = generate_render_id();

    debug!(
        operation = operation,
        render_id = %render_id,
        "Starting operation"
    );

    let result = f();

    debug!(
        operation = operation,
        render_id = %render_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Timed section finished"
    );

    result
}

/// Log a summary of a written figure
pub fn log_render_stats(
    figure: &str,
    path: &Path,
    dimensions: (u32, u32),
    panel_count: usize,
    points_drawn: usize,
    bytes_written: u64,
) {
    info!(
        operation = "render",
        figure = figure,
        path = %path.display(),
        width = dimensions.0,
        height = dimensions.1,
        panels = panel_count,
        points_drawn = points_drawn,
        size_kb = bytes_written / 1024,
        "Figure written"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::PlotError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}

/// Generate a unique render ID
pub fn generate_render_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_generate_render_id() {
        let id1 = generate_render_id();
        let id2 = generate_render_id();

        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_log_timed_operation() {
        let result = log_timed_operation("test_operation", || {
            std::thread::sleep(Duration::from_millis(1));
            42
        });

        assert_eq!(result, 42);
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing("debug");
        init_tracing("info");
    }
}
