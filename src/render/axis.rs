//! Continuous axis with a fixed set of tick positions.

use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use std::ops::Range;

/// `f64` axis whose ticks are exactly the given positions
#[derive(Clone)]
pub(crate) struct TickedAxis {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}

impl TickedAxis {
    /// Ticks outside `range` are dropped
    pub(crate) fn new(range: Range<f64>, ticks: &[f64]) -> Self {
        let ticks = ticks
            .iter()
            .copied()
            .filter(|t| range.start <= *t && *t <= range.end)
            .collect();
        Self {
            inner: range.into(),
            ticks,
        }
    }

    pub(crate) fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl Ranged for TickedAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        // Light mesh lines ask for zero points
        if hint.max_num_points() == 0 {
            return Vec::new();
        }
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

impl ValueFormatter<f64> for TickedAxis {
    fn format(value: &f64) -> String {
        format!("{}", value)
    }
}
