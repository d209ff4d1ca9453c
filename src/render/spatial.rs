//! Spatial bias figure.
//!
//! Left column: one scatter map per season of the chosen difference variable,
//! colored by the evaporation-difference classes. Right column: mean bias
//! error per climate zone. A single horizontal color bar under the maps
//! explains the classes for all three rows.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use super::{
    blank_buffer, draw_panel_label, encode_figure, output_format, padded_range, rgb, zone_axis,
    zone_tick_label, PanelKind, PanelReport, RenderReport, TickedAxis, FONT,
};
use crate::colormaps::{
    clip_polyline, coastlines, format_latitude, format_longitude, normalize_longitude,
    ClassifiedColormap, Colormap, GLOBAL_EXTENT, LAT_TICKS, LON_TICKS,
};
use crate::config::RenderConfig;
use crate::data::{SeasonalDataset, ZoneBiasVector, SEASON_COUNT};
use crate::error::{PlotError, Result};
use crate::logging::{
    log_error, log_operation_end, log_operation_start, log_render_stats, log_timed_operation,
};

/// Matplotlib's 'm'
const BAR_COLOR: [u8; 3] = [191, 0, 191];
const COASTLINE_COLOR: [u8; 3] = [128, 128, 128];
const BAR_WIDTH: f64 = 0.4;
const BIAS_AXIS_LABEL: &str = "MBE (%)";
const COLORBAR_LABEL: &str = "ΔE (mm d⁻¹)";

/// Render the spatial difference maps and zone bias bars to `path`.
///
/// Fails before drawing anything if the variable is missing from any season,
/// the configuration is invalid, or the path has no known image extension.
pub fn render_spatial_bias(
    dataset: &SeasonalDataset,
    variable: &str,
    bias: &ZoneBiasVector,
    path: &Path,
    config: &RenderConfig,
) -> Result<RenderReport> {
    let start = Instant::now();
    log_operation_start(
        "render_spatial_bias",
        Some(&format!("variable={} path={}", variable, path.display())),
    );

    let result = log_timed_operation("render_spatial_bias", || {
        render(dataset, variable, bias, path, config)
    });
    match &result {
        Ok(report) => log_render_stats(
            "spatial_bias",
            path,
            (report.width, report.height),
            report.panels.len(),
            report.points_drawn(),
            report.bytes_written,
        ),
        Err(e) => log_error(e, "render_spatial_bias"),
    }
    log_operation_end("render_spatial_bias", start, result.is_ok());

    result
}

fn render(
    dataset: &SeasonalDataset,
    variable: &str,
    bias: &ZoneBiasVector,
    path: &Path,
    config: &RenderConfig,
) -> Result<RenderReport> {
    config.validate()?;
    dataset.require_variable(variable)?;
    let format = output_format(path)?;

    let size = config.spatial_size.pixels(config.dpi);
    let colormap = ClassifiedColormap::evaporation_difference();

    let mut buffer = blank_buffer(size)?;
    let panels = {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        let panels = draw_figure(&root, dataset, variable, bias, &colormap, config)?;
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
    dataset: &SeasonalDataset,
    variable: &str,
    bias: &ZoneBiasVector,
    colormap: &ClassifiedColormap,
    config: &RenderConfig,
) -> Result<Vec<PanelReport>> {
    root.fill(&WHITE)?;

    let (width, height) = root.dim_in_pixel();
    let colorbar_height = config.pt(40.0);
    let (grid, strip) = root.split_vertically(height.saturating_sub(colorbar_height));
    let left_width = config.left_column_width(width);
    let label_offset = config.pt(2.0) as i32;

    let mut panels = Vec::with_capacity(2 * SEASON_COUNT + 1);
    for (row, (area, (season, samples))) in grid
        .split_evenly((SEASON_COUNT, 1))
        .iter()
        .zip(dataset.iter())
        .enumerate()
    {
        let (map_area, bar_area) = area.split_horizontally(left_width);

        let values = samples
            .points(variable)
            .ok_or_else(|| PlotError::MissingVariable {
                season: season.to_string(),
                variable: variable.to_string(),
            })?;
        let drawn = draw_map(&map_area, values, colormap, config)?;
        debug!(
            season = %season,
            variable = variable,
            points_drawn = drawn,
            points_total = samples.len(),
            "Drew scatter map"
        );
        panels.push(PanelReport {
            row,
            column: 0,
            kind: PanelKind::Map,
            label: None,
            legend: false,
            points_drawn: drawn,
        });

        let bars = draw_bias_bars(&bar_area, bias, config)?;
        draw_panel_label(
            &bar_area,
            season.panel_label(),
            config.pt(10.0),
            (label_offset, label_offset),
        )?;
        panels.push(PanelReport {
            row,
            column: 1,
            kind: PanelKind::BiasBars,
            label: Some(season.panel_label()),
            legend: false,
            points_drawn: bars,
        });
    }

    let (colorbar_area, _) = strip.split_horizontally(left_width);
    draw_colorbar(&colorbar_area, colormap, config)?;
    panels.push(PanelReport {
        row: SEASON_COUNT,
        column: 0,
        kind: PanelKind::ColorBar,
        label: None,
        legend: false,
        points_drawn: colormap.colors().len(),
    });

    Ok(panels)
}

/// Draw one scatter map; returns the number of markers drawn
fn draw_map<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    values: impl Iterator<Item = (f64, f64, f64)>,
    colormap: &dyn Colormap,
    config: &RenderConfig,
) -> Result<usize> {
    let extent = GLOBAL_EXTENT;
    let label_size = config.pt(7.0);

    let mut chart = ChartBuilder::on(area)
        .margin_top(config.pt(12.0))
        .margin_right(config.pt(8.0))
        .x_label_area_size(config.pt(12.0))
        .y_label_area_size(config.pt(22.0))
        .build_cartesian_2d(
            TickedAxis::new(extent.lon_range(), &LON_TICKS),
            TickedAxis::new(extent.lat_range(), &LAT_TICKS),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&|lon: &f64| format_longitude(*lon))
        .y_label_formatter(&|lat: &f64| format_latitude(*lat))
        .label_style((FONT, label_size))
        .draw()?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [
            (extent.min_lon, extent.max_lat),
            (extent.max_lon, extent.min_lat),
        ],
        BLACK.stroke_width(config.pt(0.5)),
    )))?;

    let coast = rgb(COASTLINE_COLOR);
    chart.draw_series(
        coastlines()
            .flat_map(|outline| clip_polyline(outline, &extent))
            .map(|run| PathElement::new(run, coast.stroke_width(1))),
    )?;

    let points: Vec<(f64, f64, f64)> = values
        .map(|(lon, lat, value)| (normalize_longitude(lon), lat, value))
        .filter(|&(lon, lat, value)| !value.is_nan() && extent.contains(lon, lat))
        .collect();

    let radius = config.pt(config.marker_size_pt);
    chart.draw_series(points.iter().map(|&(lon, lat, value)| {
        let [r, g, b, _] = colormap.map(value);
        Circle::new((lon, lat), radius, RGBColor(r, g, b).filled())
    }))?;

    Ok(points.len())
}

/// Draw the zone bias bars; returns the number of bars drawn
fn draw_bias_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    bias: &ZoneBiasVector,
    config: &RenderConfig,
) -> Result<usize> {
    let label_size = config.pt(8.0);

    let mut chart = ChartBuilder::on(area)
        .margin_top(config.pt(12.0))
        .margin_right(config.pt(6.0))
        .x_label_area_size(config.pt(48.0))
        .y_label_area_size(config.pt(34.0))
        .build_cartesian_2d(zone_axis(0.0), padded_range(bias.values().iter().copied()))?;

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
        .y_desc(BIAS_AXIS_LABEL)
        .axis_desc_style((FONT, label_size))
        .draw()?;

    let half = BAR_WIDTH / 2.0;
    let bar = |i: usize, value: f64| [(i as f64 - half, 0.0), (i as f64 + half, value)];

    // Zones without a finite bias are left empty
    let rects: Vec<[(f64, f64); 2]> = bias
        .iter()
        .enumerate()
        .filter(|(_, (_, value))| value.is_finite())
        .map(|(i, (_, value))| bar(i, value))
        .collect();

    let fill = rgb(BAR_COLOR).filled();
    chart.draw_series(rects.iter().map(|r| Rectangle::new(*r, fill)))?;

    let edge = BLACK.stroke_width(config.pt(0.5));
    chart.draw_series(rects.iter().map(|r| Rectangle::new(*r, edge)))?;

    Ok(rects.len())
}

/// Horizontal color bar with triangular under/over extensions
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    colormap: &ClassifiedColormap,
    config: &RenderConfig,
) -> Result<()> {
    let bounds = colormap.boundaries();
    let first = bounds[0];
    let last = bounds[bounds.len() - 1];
    let extension = (last - first) / 12.0;
    let label_size = config.pt(8.0);

    let mut chart = ChartBuilder::on(area)
        .margin_top(config.pt(6.0))
        .margin_left(config.pt(30.0))
        .margin_right(config.pt(10.0))
        .x_label_area_size(config.pt(24.0))
        .build_cartesian_2d(
            TickedAxis::new((first - extension)..(last + extension), bounds),
            0.0..1.0,
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_label_formatter(&|v: &f64| format!("{:.1}", v))
        .x_desc(COLORBAR_LABEL)
        .label_style((FONT, label_size))
        .axis_desc_style((FONT, label_size))
        .draw()?;

    chart.draw_series(
        bounds
            .windows(2)
            .zip(colormap.colors())
            .map(|(edges, color)| {
                Rectangle::new([(edges[0], 1.0), (edges[1], 0.0)], rgb(*color).filled())
            }),
    )?;

    chart.draw_series([
        Polygon::new(
            vec![(first - extension, 0.5), (first, 1.0), (first, 0.0)],
            rgb(colormap.under_color()).filled(),
        ),
        Polygon::new(
            vec![(last + extension, 0.5), (last, 1.0), (last, 0.0)],
            rgb(colormap.over_color()).filled(),
        ),
    ])?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (first, 1.0),
            (last, 1.0),
            (last + extension, 0.5),
            (last, 0.0),
            (first, 0.0),
            (first - extension, 0.5),
            (first, 1.0),
        ],
        BLACK.stroke_width(config.pt(0.5)),
    )))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SpatialSamples, ZONE_COUNT};

    fn dataset(variable: &str) -> SeasonalDataset {
        let seasons = (0..SEASON_COUNT)
            .map(|s| {
                let lon: Vec<f64> = (0..12).map(|i| -165.0 + 30.0 * i as f64).collect();
                let lat: Vec<f64> = (0..12).map(|i| -50.0 + 10.0 * i as f64).collect();
                let values: Vec<f64> = (0..12).map(|i| -0.5 + 0.2 * (i + s) as f64).collect();
                SpatialSamples::new(lon, lat)
                    .unwrap()
                    .with_variable(variable, values)
                    .unwrap()
            })
            .collect();
        SeasonalDataset::new(seasons).unwrap()
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            dpi: 60,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_all_points_inside_extent_are_drawn() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spatial.png");
        let bias = ZoneBiasVector::new(vec![1.0, -2.0, 3.0, 0.5, 0.0, -1.0]).unwrap();

        let report =
            render_spatial_bias(&dataset("dE"), "dE", &bias, &path, &small_config()).unwrap();

        // Every sample lies between 50S and 60N
        let maps: Vec<_> = report.panels_of(PanelKind::Map).collect();
        assert_eq!(maps.len(), 3);
        for map in maps {
            assert_eq!(map.points_drawn, 12);
        }
    }

    #[test]
    fn test_missing_variable_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spatial.png");
        let bias = ZoneBiasVector::new(vec![0.0; ZONE_COUNT]).unwrap();

        let err =
            render_spatial_bias(&dataset("dE"), "E_PM", &bias, &path, &small_config()).unwrap_err();
        assert!(matches!(err, PlotError::MissingVariable { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_extension_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spatial.figure");
        let bias = ZoneBiasVector::new(vec![0.0; ZONE_COUNT]).unwrap();

        let err =
            render_spatial_bias(&dataset("dE"), "dE", &bias, &path, &small_config()).unwrap_err();
        assert!(matches!(err, PlotError::InvalidParameter { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_out_of_window_and_nan_points_are_not_drawn() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.png");
        let samples = SpatialSamples::new(
            vec![10.0, 200.0, 10.0, 10.0],
            vec![0.0, 0.0, -80.0, 20.0],
        )
        .unwrap()
        .with_variable("dE", vec![0.1, 0.2, 0.3, f64::NAN])
        .unwrap();
        let ds = SeasonalDataset::new(vec![samples.clone(), samples.clone(), samples]).unwrap();
        let bias = ZoneBiasVector::new(vec![0.0; ZONE_COUNT]).unwrap();

        let report = render_spatial_bias(&ds, "dE", &bias, &path, &small_config()).unwrap();

        // 200 E wraps to 160 W and stays; 80 S is cut; NaN is skipped
        for map in report.panels_of(PanelKind::Map) {
            assert_eq!(map.points_drawn, 2);
        }
    }

    #[test]
    fn test_non_finite_bias_leaves_zone_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gaps.png");
        let bias = ZoneBiasVector::new(vec![1.0, f64::NAN, 3.0, f64::INFINITY, 0.0, -1.0]).unwrap();

        let report =
            render_spatial_bias(&dataset("dE"), "dE", &bias, &path, &small_config()).unwrap();

        for bars in report.panels_of(PanelKind::BiasBars) {
            assert_eq!(bars.points_drawn, ZONE_COUNT - 2);
        }
    }

    #[test]
    fn test_oversized_figure_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        let config = RenderConfig {
            dpi: 1200,
            spatial_size: crate::config::FigureSize::new(1e7, 1e7),
            ..RenderConfig::default()
        };
        let bias = ZoneBiasVector::new(vec![0.0; ZONE_COUNT]).unwrap();

        let err = render_spatial_bias(&dataset("dE"), "dE", &bias, &path, &config).unwrap_err();
        assert!(matches!(err, PlotError::Config { .. }));
        assert!(!path.exists());
    }
}
