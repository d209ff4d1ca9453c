//! # evap-plots
//!
//! Publication figures comparing open-water evaporation estimates from the
//! Penman-Monteith (PM) and lake ice surface energy balance (LISSS) methods.
//!
//! The crate consumes pre-computed tables (seasonal point differences, zone
//! mean bias errors, yearly anomalies and zone trends) and renders two fixed
//! 3 x 2 figures, one row per season:
//!
//! - [`render_spatial_bias`]: classified scatter maps beside zone bias bars,
//!   sharing one horizontal color bar.
//! - [`render_timeseries_trends`]: anomaly lines of the three methods beside
//!   grouped zone trend bars.
//!
//! Inputs are validated when they are constructed (see [`data`]), so a
//! malformed table fails with a [`PlotError::DimensionMismatch`] before any
//! pixel is drawn.

pub mod colormaps;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod render;

pub use config::{Config, FigureSize, RenderConfig};
pub use data::{
    AnomalySeries, ClimateZone, Method, Season, SeasonalAnomalySet, SeasonalDataset,
    SeasonalTrendSet, SpatialSamples, ZoneBiasVector, ZoneTrends,
};
pub use error::{PlotError, Result};
pub use logging::{
    generate_render_id, init_tracing, log_error, log_operation_end, log_operation_start,
    log_render_stats, log_timed_operation,
};
pub use render::{
    render_spatial_bias, render_timeseries_trends, PanelKind, PanelReport, RenderReport,
};
