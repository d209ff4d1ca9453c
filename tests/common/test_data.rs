//! Synthetic input tables for the figure tests.

use evap_plots::data::{SEASON_COUNT, YEAR_COUNT, ZONE_COUNT};
use evap_plots::{
    AnomalySeries, Result, SeasonalAnomalySet, SeasonalDataset, SeasonalTrendSet,
    SpatialSamples, ZoneBiasVector, ZoneTrends,
};

/// Name of the difference column in the synthetic spatial tables
pub const DIFF_VARIABLE: &str = "E_diff";

/// Ten points spread over every continent inside the map window
pub const STATIONS: [(f64, f64); 10] = [
    (-100.0, 45.0),
    (-60.0, -10.0),
    (-3.0, 52.0),
    (20.0, 5.0),
    (37.0, -3.0),
    (80.0, 28.0),
    (105.0, 35.0),
    (135.0, -25.0),
    (-150.0, 62.0),
    (170.0, -42.0),
];

/// One seasonal record holding `values` at the synthetic stations
pub fn spatial_samples(values: Vec<f64>) -> Result<SpatialSamples> {
    let (lon, lat): (Vec<f64>, Vec<f64>) = STATIONS.iter().copied().unzip();
    SpatialSamples::new(lon, lat)?.with_variable(DIFF_VARIABLE, values)
}

/// Three seasons whose differences sweep the classified range
pub fn create_seasonal_dataset() -> SeasonalDataset {
    let seasons = (0..SEASON_COUNT)
        .map(|s| {
            let values = (0..STATIONS.len())
                .map(|i| -0.4 + 0.2 * i as f64 + 0.05 * s as f64)
                .collect();
            spatial_samples(values).unwrap()
        })
        .collect();
    SeasonalDataset::new(seasons).unwrap()
}

/// Bias vector with every zone at zero
pub fn zero_bias() -> ZoneBiasVector {
    ZoneBiasVector::new(vec![0.0; ZONE_COUNT]).unwrap()
}

/// Bias vector with both signs present
pub fn mixed_bias() -> ZoneBiasVector {
    ZoneBiasVector::new(vec![-12.5, 3.0, 8.4, -20.1, 15.0, 1.2]).unwrap()
}

fn wave(phase: f64, scale: f64) -> Vec<f64> {
    (0..YEAR_COUNT)
        .map(|i| scale * (i as f64 * 0.7 + phase).sin())
        .collect()
}

/// Anomalies for 2001..=2016 in all three seasons
pub fn create_anomaly_set() -> SeasonalAnomalySet {
    let seasons = (0..SEASON_COUNT)
        .map(|s| {
            let phase = s as f64;
            AnomalySeries::new(
                wave(phase, 0.8),
                wave(phase + 0.5, 1.1),
                wave(phase + 1.0, 0.6),
            )
            .unwrap()
        })
        .collect();
    SeasonalAnomalySet::new(seasons).unwrap()
}

/// Zone trends in all three seasons, mixing positive and negative slopes
pub fn create_trend_set() -> SeasonalTrendSet {
    let seasons = (0..SEASON_COUNT)
        .map(|s| {
            let offset = 0.1 * s as f64;
            ZoneTrends::new(
                vec![0.5, -0.2, 0.8, 1.4, -0.6, 0.3]
                    .into_iter()
                    .map(|v| v + offset)
                    .collect(),
                vec![0.4, 0.1, -0.3, 1.0, 0.2, -0.9],
                vec![0.9, -0.4, 0.6, 1.8, -0.1, 0.0],
            )
            .unwrap()
        })
        .collect();
    SeasonalTrendSet::new(seasons).unwrap()
}
