//! Figure renderers.
//!
//! Each renderer draws a 3 x 2 grid (one row per season) into an in-memory
//! RGB buffer and encodes it to the output path in a single pass. The format
//! is chosen from the file extension, as the image endpoint of a tile server
//! would pick it from a request parameter.

mod axis;
pub mod spatial;
pub mod timeseries;

pub(crate) use axis::TickedAxis;
pub use spatial::render_spatial_bias;
pub use timeseries::render_timeseries_trends;

use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::FontStyle;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::data::{ClimateZone, ZONE_COUNT};
use crate::error::{PlotError, Result};

/// Font family used for every label
pub(crate) const FONT: &str = "sans-serif";

/// What a panel of the figure shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Scatter map of a spatial variable
    Map,
    /// Mean bias error per climate zone
    BiasBars,
    /// Yearly anomaly lines of the three methods
    Anomaly,
    /// Grouped trend bars of the three methods
    TrendBars,
    /// Shared horizontal color bar
    ColorBar,
}

/// Summary of one drawn panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelReport {
    pub row: usize,
    pub column: usize,
    pub kind: PanelKind,
    /// Bold letter drawn beside the panel, if any
    pub label: Option<char>,
    /// Whether a legend was drawn on the panel
    pub legend: bool,
    /// Markers or bars drawn in the panel
    pub points_drawn: usize,
}

/// Summary of a written figure
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes_written: u64,
    pub panels: Vec<PanelReport>,
}

impl RenderReport {
    /// Panels of a given kind, in row order
    pub fn panels_of(&self, kind: PanelKind) -> impl Iterator<Item = &PanelReport> + '_ {
        self.panels.iter().filter(move |p| p.kind == kind)
    }

    /// Total markers and bars drawn across all panels
    pub fn points_drawn(&self) -> usize {
        self.panels.iter().map(|p| p.points_drawn).sum()
    }
}

/// Resolve the encoder for an output path, before any drawing happens
pub(crate) fn output_format(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path).map_err(|_| PlotError::InvalidParameter {
        param: "output path".to_string(),
        message: format!(
            "Cannot determine image format from '{}'; use a .png, .jpg, .bmp or .tiff extension",
            path.display()
        ),
    })
}

/// Allocate a white RGB pixel buffer for a figure
pub(crate) fn blank_buffer((width, height): (u32, u32)) -> Result<Vec<u8>> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| PlotError::Config {
            message: format!("Figure of {}x{} pixels is too large to allocate", width, height),
        })?;
    Ok(vec![255u8; len])
}

/// Encode a rendered RGB buffer and return the size of the written file
pub(crate) fn encode_figure(
    buffer: Vec<u8>,
    (width, height): (u32, u32),
    path: &Path,
    format: ImageFormat,
) -> Result<u64> {
    let image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| PlotError::Drawing {
        message: format!("Pixel buffer does not match a {}x{} figure", width, height),
    })?;
    image.save_with_format(path, format)?;
    Ok(std::fs::metadata(path)?.len())
}

/// Axis range that includes zero and pads the data by 10%
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if max - min <= f64::EPSILON {
        return -1.0..1.0;
    }

    let pad = (max - min) * 0.1;
    let lower = if min < 0.0 { min - pad } else { 0.0 };
    let upper = if max > 0.0 { max + pad } else { 0.0 };
    lower..upper
}

/// Bar-chart category axis with one tick per climate zone; `trailing` widens
/// the right end for grouped bars drawn to the right of each tick
pub(crate) fn zone_axis(trailing: f64) -> TickedAxis {
    let ticks: Vec<f64> = (0..ZONE_COUNT).map(|i| i as f64).collect();
    TickedAxis::new(-0.5..ZONE_COUNT as f64 - 0.5 + trailing, &ticks)
}

/// Split a line into the runs between non-finite values
pub(crate) fn finite_runs(points: impl IntoIterator<Item = (f64, f64)>) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in points {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Zone name for a bar-chart tick position
pub(crate) fn zone_tick_label(position: f64) -> String {
    let index = position.round();
    if index < 0.0 {
        return String::new();
    }
    ClimateZone::from_index(index as usize)
        .map(|zone| zone.label().to_string())
        .unwrap_or_default()
}

pub(crate) fn rgb(color: [u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

/// Draw a bold panel letter at a pixel offset inside `area`
pub(crate) fn draw_panel_label<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    label: char,
    size: u32,
    pos: (i32, i32),
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let style = TextStyle::from((FONT, size, FontStyle::Bold).into_font()).color(&BLACK);
    area.draw_text(&label.to_string(), &style, pos)
}
