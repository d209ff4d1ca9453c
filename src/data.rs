//! Input model for the figures.
//!
//! All inputs are validated when they are built, so a value of any of these
//! types is known to have the fixed shape the figure layout relies on: three
//! seasons, six climate zones, three comparison methods and sixteen years.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{PlotError, Result};

/// Number of figure rows (one per season)
pub const SEASON_COUNT: usize = 3;

/// Number of climate zones on the bar-chart axes
pub const ZONE_COUNT: usize = 6;

/// Number of comparison methods in the time-series figure
pub const METHOD_COUNT: usize = 3;

/// First year of the anomaly series
pub const FIRST_YEAR: i32 = 2001;

/// Last year of the anomaly series (inclusive)
pub const LAST_YEAR: i32 = 2016;

/// Number of yearly values in every anomaly series
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Season of a figure row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// The entire open-water period
    Annual,
    Summer,
    Autumn,
}

impl Season {
    /// Seasons in row order
    pub const ALL: [Season; SEASON_COUNT] = [Season::Annual, Season::Summer, Season::Autumn];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Annual => "annual",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }

    /// Bold letter drawn at the corner of the row
    pub fn panel_label(&self) -> char {
        match self {
            Season::Annual => 'a',
            Season::Summer => 'b',
            Season::Autumn => 'c',
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Climate zone used to aggregate bias and trend values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateZone {
    Global,
    Tropical,
    Temperate,
    Arid,
    Cold,
    Polar,
}

impl ClimateZone {
    /// Zones in axis order
    pub const ALL: [ClimateZone; ZONE_COUNT] = [
        ClimateZone::Global,
        ClimateZone::Tropical,
        ClimateZone::Temperate,
        ClimateZone::Arid,
        ClimateZone::Cold,
        ClimateZone::Polar,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClimateZone::Global => "Global",
            ClimateZone::Tropical => "Tropical",
            ClimateZone::Temperate => "Temperate",
            ClimateZone::Arid => "Arid",
            ClimateZone::Cold => "Cold",
            ClimateZone::Polar => "Polar",
        }
    }

    /// Zone at a bar-chart tick position, if any
    pub fn from_index(index: usize) -> Option<ClimateZone> {
        Self::ALL.get(index).copied()
    }
}

/// Evaporation estimation method being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Penman-Monteith
    Pm,
    /// Lake ice surface energy balance
    Lisss,
    /// Penman-Monteith driven by the energy-balance surface temperature
    PmLisss,
}

impl Method {
    /// Methods in drawing order
    pub const ALL: [Method; METHOD_COUNT] = [Method::Pm, Method::Lisss, Method::PmLisss];

    /// Legend label
    pub fn label(&self) -> &'static str {
        match self {
            Method::Pm => "PM",
            Method::Lisss => "LISSS",
            Method::PmLisss => "PM-LISSS",
        }
    }

    fn index(&self) -> usize {
        match self {
            Method::Pm => 0,
            Method::Lisss => 1,
            Method::PmLisss => 2,
        }
    }
}

fn check_len(what: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PlotError::dimension(what, expected, actual));
    }
    Ok(())
}

fn into_seasons<T>(what: &str, records: Vec<T>) -> Result<[T; SEASON_COUNT]> {
    let actual = records.len();
    records
        .try_into()
        .map_err(|_| PlotError::dimension(what, SEASON_COUNT, actual))
}

/// Point samples for one season: coordinates plus named value columns
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialSamples {
    lon: Vec<f64>,
    lat: Vec<f64>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl SpatialSamples {
    /// Create a sample table from coordinate columns
    pub fn new(lon: Vec<f64>, lat: Vec<f64>) -> Result<Self> {
        check_len("latitude column", lon.len(), lat.len())?;
        Ok(Self {
            lon,
            lat,
            columns: BTreeMap::new(),
        })
    }

    /// Add a value column; its length must match the coordinates
    pub fn with_variable(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        check_len(&format!("column '{}'", name), self.lon.len(), values.len())?;
        self.columns.insert(name, values);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.lon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lon.is_empty()
    }

    pub fn variable(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// (lon, lat, value) triples of a named column
    pub fn points<'a>(
        &'a self,
        name: &str,
    ) -> Option<impl Iterator<Item = (f64, f64, f64)> + 'a> {
        let values = self.columns.get(name)?;
        Some(
            self.lon
                .iter()
                .zip(&self.lat)
                .zip(values)
                .map(|((&lon, &lat), &value)| (lon, lat, value)),
        )
    }
}

/// Spatial samples for the three seasons
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalDataset {
    seasons: [SpatialSamples; SEASON_COUNT],
}

impl SeasonalDataset {
    pub fn new(seasons: Vec<SpatialSamples>) -> Result<Self> {
        Ok(Self {
            seasons: into_seasons("seasonal dataset", seasons)?,
        })
    }

    pub fn season(&self, season: Season) -> &SpatialSamples {
        &self.seasons[season as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Season, &SpatialSamples)> + '_ {
        Season::ALL.into_iter().zip(self.seasons.iter())
    }

    /// Ensure every season carries the named column
    pub fn require_variable(&self, variable: &str) -> Result<()> {
        for (season, samples) in self.iter() {
            if samples.variable(variable).is_none() {
                return Err(PlotError::MissingVariable {
                    season: season.to_string(),
                    variable: variable.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Mean bias error per climate zone, in zone axis order
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneBiasVector {
    values: [f64; ZONE_COUNT],
}

impl ZoneBiasVector {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        let actual = values.len();
        let values = values
            .try_into()
            .map_err(|_| PlotError::dimension("zone bias vector", ZONE_COUNT, actual))?;
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64; ZONE_COUNT] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClimateZone, f64)> + '_ {
        ClimateZone::ALL.into_iter().zip(self.values.iter().copied())
    }
}

/// Yearly anomalies of the three methods for one season
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalySeries {
    series: [Vec<f64>; METHOD_COUNT],
}

impl AnomalySeries {
    /// Every series must cover exactly 2001-2016; shorter or longer input is
    /// rejected rather than truncated or padded.
    pub fn new(pm: Vec<f64>, lisss: Vec<f64>, pm_lisss: Vec<f64>) -> Result<Self> {
        let series = [pm, lisss, pm_lisss];
        for (method, values) in Method::ALL.iter().zip(&series) {
            check_len(
                &format!("{} anomaly series", method.label()),
                YEAR_COUNT,
                values.len(),
            )?;
        }
        Ok(Self { series })
    }

    pub fn series(&self, method: Method) -> &[f64] {
        &self.series[method.index()]
    }

    /// (year, value) pairs for one method
    pub fn points(&self, method: Method) -> impl Iterator<Item = (i32, f64)> + '_ {
        (FIRST_YEAR..=LAST_YEAR).zip(self.series(method).iter().copied())
    }
}

/// Anomaly series for the three seasons
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalAnomalySet {
    seasons: [AnomalySeries; SEASON_COUNT],
}

impl SeasonalAnomalySet {
    pub fn new(seasons: Vec<AnomalySeries>) -> Result<Self> {
        Ok(Self {
            seasons: into_seasons("seasonal anomaly set", seasons)?,
        })
    }

    pub fn season(&self, season: Season) -> &AnomalySeries {
        &self.seasons[season as usize]
    }
}

/// Per-zone trend magnitudes of the three methods for one season
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTrends {
    trends: [[f64; ZONE_COUNT]; METHOD_COUNT],
}

impl ZoneTrends {
    pub fn new(pm: Vec<f64>, lisss: Vec<f64>, pm_lisss: Vec<f64>) -> Result<Self> {
        let mut trends = [[0.0; ZONE_COUNT]; METHOD_COUNT];
        for ((method, values), slot) in Method::ALL
            .iter()
            .zip([pm, lisss, pm_lisss])
            .zip(trends.iter_mut())
        {
            check_len(
                &format!("{} zone trends", method.label()),
                ZONE_COUNT,
                values.len(),
            )?;
            slot.copy_from_slice(&values);
        }
        Ok(Self { trends })
    }

    pub fn trends(&self, method: Method) -> &[f64; ZONE_COUNT] {
        &self.trends[method.index()]
    }
}

/// Zone trends for the three seasons
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalTrendSet {
    seasons: [ZoneTrends; SEASON_COUNT],
}

impl SeasonalTrendSet {
    pub fn new(seasons: Vec<ZoneTrends>) -> Result<Self> {
        Ok(Self {
            seasons: into_seasons("seasonal trend set", seasons)?,
        })
    }

    pub fn season(&self, season: Season) -> &ZoneTrends {
        &self.seasons[season as usize]
    }
}
