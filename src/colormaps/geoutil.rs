//! Geographic utility functions for the map panels.
//!
//! The map panels use a plain cylindrical (equirectangular) projection over a
//! fixed window that leaves out Antarctica and the high Arctic.

/// Rectangular longitude/latitude window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapExtent {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

/// Extent of the spatial bias maps
pub const GLOBAL_EXTENT: MapExtent = MapExtent {
    min_lon: -180.0,
    max_lon: 180.0,
    min_lat: -60.0,
    max_lat: 71.0,
};

/// Longitude tick positions on the map panels
pub const LON_TICKS: [f64; 5] = [-120.0, -60.0, 0.0, 60.0, 120.0];

/// Latitude tick positions on the map panels
pub const LAT_TICKS: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];

impl MapExtent {
    /// Whether a point falls inside the window (edges included)
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.min_lon..=self.max_lon).contains(&lon) && (self.min_lat..=self.max_lat).contains(&lat)
    }

    pub fn lon_range(&self) -> std::ops::Range<f64> {
        self.min_lon..self.max_lon
    }

    pub fn lat_range(&self) -> std::ops::Range<f64> {
        self.min_lat..self.max_lat
    }
}

/// Normalize a longitude value to the range [-180, 180)
pub fn normalize_longitude(lon: f64) -> f64 {
    let mut normalized = ((lon + 180.0) % 360.0 + 360.0) % 360.0 - 180.0;

    // Floating-point remainder can land exactly on the open end
    if normalized >= 180.0 {
        normalized -= 360.0;
    }

    normalized
}

/// Clip a segment to the extent (Liang-Barsky); `None` if it lies outside
fn clip_segment(
    p0: (f64, f64),
    p1: (f64, f64),
    extent: &MapExtent,
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, p0.0 - extent.min_lon),
        (dx, extent.max_lon - p0.0),
        (-dy, p0.1 - extent.min_lat),
        (dy, extent.max_lat - p0.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (p0.0 + t0 * dx, p0.1 + t0 * dy),
        (p0.0 + t1 * dx, p0.1 + t1 * dy),
    ))
}

/// Clip a polyline to the extent, splitting it wherever it leaves the window
pub fn clip_polyline(points: &[(f64, f64)], extent: &MapExtent) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for segment in points.windows(2) {
        match clip_segment(segment[0], segment[1], extent) {
            Some((start, end)) => {
                if current.last() != Some(&start) {
                    if current.len() >= 2 {
                        runs.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(start);
                }
                current.push(end);
            }
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }

    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Format a longitude tick: `120W`, `0`, `60E`
pub fn format_longitude(lon: f64) -> String {
    let lon = normalize_longitude(lon);
    let magnitude = lon.abs().round() as i64;
    if magnitude == 0 {
        "0".to_string()
    } else if lon < 0.0 {
        format!("{}W", magnitude)
    } else {
        format!("{}E", magnitude)
    }
}

/// Format a latitude tick: `60S`, `EQ`, `30N`
pub fn format_latitude(lat: f64) -> String {
    let magnitude = lat.abs().round() as i64;
    if magnitude == 0 {
        "EQ".to_string()
    } else if lat < 0.0 {
        format!("{}S", magnitude)
    } else {
        format!("{}N", magnitude)
    }
}
