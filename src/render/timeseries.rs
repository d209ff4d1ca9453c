//! Anomaly time-series and trend figure.
//!
//! Left column: yearly anomalies of the three methods per season as dashed,
//! marked lines over 2001-2016. Right column: grouped per-zone trend bars for
//! the same methods. Only the first trend panel carries a legend; every
//! anomaly panel has its own.

use plotters::coord::Shift;
use plotters::element::{DynElement, IntoDynElement};
use plotters::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use super::{
    blank_buffer, draw_panel_label, encode_figure, finite_runs, output_format, padded_range, rgb,
    zone_axis, zone_tick_label, PanelKind, PanelReport, RenderReport, TickedAxis, FONT,
};
use crate::config::RenderConfig;
use crate::data::{
    AnomalySeries, Method, SeasonalAnomalySet, SeasonalTrendSet, Season, ZoneTrends,
    FIRST_YEAR, LAST_YEAR, SEASON_COUNT,
};
use crate::error::Result;
use crate::logging::{
    log_error, log_operation_end, log_operation_start, log_render_stats, log_timed_operation,
};

const YEAR_TICKS: [f64; 3] = [2001.0, 2008.0, 2016.0];
const BAR_WIDTH: f64 = 0.2;
/// Distance between neighbouring bars of a zone group
const BAR_STEP: f64 = BAR_WIDTH + 0.01;
const ANOMALY_AXIS_LABEL: &str = "E anomaly (mm yr⁻¹)";
const TREND_AXIS_LABEL: &str = "E trend (mm yr⁻²)";

/// Line and bar color of a method (matplotlib 'r', 'b', 'g')
fn method_color(method: Method) -> RGBColor {
    match method {
        Method::Pm => rgb([255, 0, 0]),
        Method::Lisss => rgb([0, 0, 255]),
        Method::PmLisss => rgb([0, 128, 0]),
    }
}

/// Render the anomaly lines and zone trend bars to `path`.
///
/// The anomaly series lengths are guaranteed by [`AnomalySeries`], so every
/// series lines up with the 2001-2016 axis.
pub fn render_timeseries_trends(
    anomalies: &SeasonalAnomalySet,
    trends: &SeasonalTrendSet,
    path: &Path,
    config: &RenderConfig,
) -> Result<RenderReport> {
    let start = Instant::now();
    log_operation_start(
        "render_timeseries_trends",
        Some(&format!("path={}", path.display())),
    );

    let result = log_timed_operation("render_timeseries_trends", || {
        render(anomalies, trends, path, config)
    });
    match &result {
        Ok(report) => log_render_stats(
            "timeseries_trends",
            path,
            (report.width, report.height),
            report.panels.len(),
            report.points_drawn(),
            report.bytes_written,
        ),
        Err(e) => log_error(e, "render_timeseries_trends"),
    }
    log_operation_end("render_timeseries_trends", start, result.is_ok());

    result
}

fn render(
    anomalies: &SeasonalAnomalySet,
    trends: &SeasonalTrendSet,
    path: &Path,
    config: &RenderConfig,
) -> Result<RenderReport> {
    config.validate()?;
    let format = output_format(path)?;

    let size = config.timeseries_size.pixels(config.dpi);

    let mut buffer = blank_buffer(size)?;
    let panels = {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        let panels = draw_figure(&root, anomalies, trends, config)?;
        root.present()?;
        panels
    };

    let bytes_written = encode_figure(buffer, size, path, format)?;

    Ok(RenderReport {
        path: path.to_path_buf(),
        width: size.0,
        height: size.1,
        bytes_written,
        panels,
    })
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    anomalies: &SeasonalAnomalySet,
    trends: &SeasonalTrendSet,
    config: &RenderConfig,
) -> Result<Vec<PanelReport>> {
    root.fill(&WHITE)?;

    let (width, _) = root.dim_in_pixel();
    let left_width = config.left_column_width(width);
    let label_offset = config.pt(2.0) as i32;

    let mut panels = Vec::with_capacity(2 * SEASON_COUNT);
    for (row, (area, season)) in root
        .split_evenly((SEASON_COUNT, 1))
        .iter()
        .zip(Season::ALL)
        .enumerate()
    {
        let (line_area, bar_area) = area.split_horizontally(left_width);
        let last_row = row + 1 == SEASON_COUNT;

        let markers = draw_anomalies(&line_area, anomalies.season(season), last_row, config)?;
        draw_panel_label(
            &line_area,
            season.panel_label(),
            config.pt(8.0),
            (label_offset, label_offset),
        )?;
        panels.push(PanelReport {
            row,
            column: 0,
            kind: PanelKind::Anomaly,
            label: Some(season.panel_label()),
            legend: true,
            points_drawn: markers,
        });

        let legend = row == 0;
        let bars = draw_trend_bars(&bar_area, trends.season(season), legend, config)?;
        panels.push(PanelReport {
            row,
            column: 1,
            kind: PanelKind::TrendBars,
            label: None,
            legend,
            points_drawn: bars,
        });

        debug!(
            season = %season,
            markers = markers,
            bars = bars,
            "Drew time-series row"
        );
    }

    Ok(panels)
}

/// Draw the three anomaly lines of one season; returns the number of markers
fn draw_anomalies<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &AnomalySeries,
    with_year_label: bool,
    config: &RenderConfig,
) -> Result<usize> {
    let label_size = config.pt(6.0);
    let line_width = config.pt(0.8);
    let marker_size = config.pt(2.0);

    let y_range = padded_range(
        Method::ALL
            .iter()
            .flat_map(|m| series.series(*m).iter().copied()),
    );
    let x_range = (FIRST_YEAR as f64 - 0.75)..(LAST_YEAR as f64 + 0.75);

    let mut chart = ChartBuilder::on(area)
        .margin_top(config.pt(10.0))
        .margin_right(config.pt(8.0))
        .x_label_area_size(config.pt(16.0))
        .y_label_area_size(config.pt(34.0))
        .build_cartesian_2d(TickedAxis::new(x_range, &YEAR_TICKS), y_range)?;

    let year_label = |year: &f64| format!("{:.0}", year);
    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_label_formatter(&year_label)
            .label_style((FONT, label_size))
            .y_desc(ANOMALY_AXIS_LABEL)
            .axis_desc_style((FONT, label_size));
        if with_year_label {
            mesh.x_desc("Year");
        }
        mesh.draw()?;
    }

    let mut markers = 0;
    for method in Method::ALL {
        let color = method_color(method);
        let line_style = color.stroke_width(line_width);
        // Missing years break the line instead of dropping to the axis
        let runs = finite_runs(
            series
                .points(method)
                .map(|(year, value)| (year as f64, value)),
        );

        chart
            .draw_series(runs.iter().flat_map(|run| {
                DashedLineSeries::new(run.clone(), config.pt(3.0), config.pt(1.5), line_style)
            }))?
            .label(method.label())
            .legend(move |(x, y)| legend_glyph(method, (x, y), line_width, marker_size));

        let points = runs.iter().flatten().copied();
        match method {
            Method::Pm => chart.draw_series(
                points.map(|p| Circle::new(p, marker_size, color.filled())),
            )?,
            Method::Lisss => chart.draw_series(
                points.map(|p| Cross::new(p, marker_size, line_style)),
            )?,
            Method::PmLisss => chart.draw_series(
                points.map(|p| TriangleMarker::new(p, marker_size, color.filled())),
            )?,
        };
        markers += runs.iter().map(Vec::len).sum::<usize>();
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, config.pt(5.0)))
        .background_style(TRANSPARENT)
        .border_style(TRANSPARENT)
        .draw()?;

    Ok(markers)
}

/// Legend entry of a method: a short line with the method's marker on it
fn legend_glyph<'a, DB: DrawingBackend + 'a>(
    method: Method,
    at: (i32, i32),
    line_width: u32,
    marker_size: u32,
) -> DynElement<'a, DB, (i32, i32)> {
    let color = method_color(method);
    let stub = EmptyElement::<(i32, i32), DB>::at(at)
        + PathElement::new(vec![(0, 0), (20, 0)], color.stroke_width(line_width));
    match method {
        Method::Pm => (stub + Circle::new((10, 0), marker_size, color.filled())).into_dyn(),
        Method::Lisss => {
            (stub + Cross::new((10, 0), marker_size, color.stroke_width(line_width))).into_dyn()
        }
        Method::PmLisss => {
            (stub + TriangleMarker::new((10, 0), marker_size, color.filled())).into_dyn()
        }
    }
}

/// Draw the grouped trend bars of one season; returns the number of bars
fn draw_trend_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    trends: &ZoneTrends,
    legend: bool,
    config: &RenderConfig,
) -> Result<usize> {
    let label_size = config.pt(6.0);
    let half = BAR_WIDTH / 2.0;

    let y_range = padded_range(
        Method::ALL
            .iter()
            .flat_map(|m| trends.trends(*m).iter().copied()),
    );

    let mut chart = ChartBuilder::on(area)
        .margin_top(config.pt(10.0))
        .margin_right(config.pt(6.0))
        .x_label_area_size(config.pt(36.0))
        .y_label_area_size(config.pt(30.0))
        .build_cartesian_2d(zone_axis(2.0 * BAR_STEP), y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&|x: &f64| zone_tick_label(*x))
        .x_label_style(
            (FONT, label_size)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style((FONT, label_size))
        .y_desc(TREND_AXIS_LABEL)
        .axis_desc_style((FONT, label_size))
        .draw()?;

    let edge = BLACK.stroke_width(config.pt(0.5));
    let mut bars = 0;
    for (offset, method) in Method::ALL.into_iter().enumerate() {
        let color = method_color(method);
        let shift = offset as f64 * BAR_STEP;
        let rects: Vec<[(f64, f64); 2]> = trends
            .trends(method)
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_finite())
            .map(|(zone, &value)| {
                let center = zone as f64 + shift;
                [(center - half, 0.0), (center + half, value)]
            })
            .collect();

        chart
            .draw_series(rects.iter().map(|r| Rectangle::new(*r, color.filled())))?
            .label(method.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
        chart.draw_series(rects.iter().map(|r| Rectangle::new(*r, edge)))?;
        bars += rects.len();
    }

    if legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((FONT, config.pt(4.0)))
            .background_style(TRANSPARENT)
            .border_style(TRANSPARENT)
            .draw()?;
    }

    Ok(bars)
}
