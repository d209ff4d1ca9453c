//! Assertion utilities for testing.

use evap_plots::{PanelKind, RenderReport};

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a report holds one panel of `kind` in each of the given rows,
/// all in `column`.
pub fn assert_panel_rows(report: &RenderReport, kind: PanelKind, column: usize, rows: &[usize]) {
    let panels: Vec<_> = report.panels_of(kind).collect();
    let actual_rows: Vec<usize> = panels.iter().map(|p| p.row).collect();
    assert_eq!(actual_rows, rows, "Rows of {:?} panels differ", kind);
    for panel in panels {
        assert_eq!(
            panel.column, column,
            "{:?} panel in row {} is in column {}, expected {}",
            kind, panel.row, panel.column, column
        );
    }
}
