//! Colormap trait and the classified (listed + boundary) colormap.
//!
//! A classified colormap assigns one flat color per interval between
//! consecutive boundaries, with dedicated colors for values below the first
//! boundary ("under") and at or above the last one ("over").

use crate::error::{PlotError, Result};

/// Fully transparent color used for missing values
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a data value to an RGBA color
    fn map(&self, value: f64) -> [u8; 4];

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Where a value falls relative to the class boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    /// Below the first boundary
    Under,
    /// Inside interval `i`, i.e. `boundaries[i] <= v < boundaries[i + 1]`
    Bin(usize),
    /// At or above the last boundary
    Over,
    /// NaN
    Missing,
}

/// Flat colors over fixed intervals, saturating at both ends
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedColormap {
    name: String,
    colors: Vec<[u8; 3]>,
    boundaries: Vec<f64>,
    under: [u8; 3],
    over: [u8; 3],
}

impl ClassifiedColormap {
    /// Build a classified colormap; there must be exactly one more boundary
    /// than colors and boundaries must be strictly increasing.
    pub fn new(
        name: &str,
        colors: Vec<[u8; 3]>,
        boundaries: Vec<f64>,
        under: [u8; 3],
        over: [u8; 3],
    ) -> Result<Self> {
        if colors.is_empty() {
            return Err(PlotError::InvalidParameter {
                param: "colors".to_string(),
                message: "A classified colormap needs at least one color".to_string(),
            });
        }
        if boundaries.len() != colors.len() + 1 {
            return Err(PlotError::dimension(
                "colormap boundaries",
                colors.len() + 1,
                boundaries.len(),
            ));
        }
        if boundaries.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(PlotError::InvalidParameter {
                param: "boundaries".to_string(),
                message: format!("Boundaries must be strictly increasing: {:?}", boundaries),
            });
        }

        Ok(Self {
            name: name.to_string(),
            colors,
            boundaries,
            under,
            over,
        })
    }

    /// The evaporation-difference scheme: six classes from -0.3 to 1.5 mm/day,
    /// navy below and dark maroon above.
    pub fn evaporation_difference() -> Self {
        Self {
            name: "evaporation_difference".to_string(),
            colors: vec![
                [0x00, 0x99, 0xff],
                [0xff, 0xff, 0x00],
                [0xff, 0xb3, 0x00],
                [0xff, 0x80, 0x00],
                [0xff, 0x00, 0x00],
                [0xb3, 0x00, 0x00],
            ],
            boundaries: vec![-0.3, 0.0, 0.3, 0.6, 0.9, 1.2, 1.5],
            under: [0x00, 0x00, 0x80],
            over: [0x4c, 0x00, 0x00],
        }
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    pub fn under_color(&self) -> [u8; 3] {
        self.under
    }

    pub fn over_color(&self) -> [u8; 3] {
        self.over
    }

    pub fn classify(&self, value: f64) -> ColorClass {
        if value.is_nan() {
            return ColorClass::Missing;
        }
        // Constructor guarantees at least two boundaries
        let first = self.boundaries[0];
        let last = self.boundaries[self.boundaries.len() - 1];
        if value < first {
            return ColorClass::Under;
        }
        if value >= last {
            return ColorClass::Over;
        }
        // Number of boundaries <= value, minus one
        let bin = self.boundaries.partition_point(|b| *b <= value) - 1;
        ColorClass::Bin(bin)
    }

    pub fn class_color(&self, class: ColorClass) -> [u8; 4] {
        let rgb = match class {
            ColorClass::Under => self.under,
            ColorClass::Over => self.over,
            ColorClass::Bin(i) => self.colors[i],
            ColorClass::Missing => return TRANSPARENT,
        };
        [rgb[0], rgb[1], rgb[2], 255]
    }
}

impl Colormap for ClassifiedColormap {
    fn map(&self, value: f64) -> [u8; 4] {
        self.class_color(self.classify(value))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(rgb: [u8; 3]) -> [u8; 4] {
        [rgb[0], rgb[1], rgb[2], 255]
    }

    #[test]
    fn test_saturation() {
        let cmap = ClassifiedColormap::evaporation_difference();
        assert_eq!(cmap.map(-0.31), rgba([0x00, 0x00, 0x80]));
        assert_eq!(cmap.map(-100.0), rgba([0x00, 0x00, 0x80]));
        assert_eq!(cmap.map(1.51), rgba([0x4c, 0x00, 0x00]));
        assert_eq!(cmap.map(f64::INFINITY), rgba([0x4c, 0x00, 0x00]));
    }

    #[test]
    fn test_boundary_values() {
        let cmap = ClassifiedColormap::evaporation_difference();
        assert_eq!(cmap.classify(-0.3), ColorClass::Bin(0));
        assert_eq!(cmap.classify(0.0), ColorClass::Bin(1));
        assert_eq!(cmap.classify(0.15), ColorClass::Bin(1));
        assert_eq!(cmap.classify(1.2), ColorClass::Bin(5));
        assert_eq!(cmap.classify(1.4999), ColorClass::Bin(5));
        // The top boundary itself saturates
        assert_eq!(cmap.classify(1.5), ColorClass::Over);
    }

    #[test]
    fn test_each_bin_has_its_own_color() {
        let cmap = ClassifiedColormap::evaporation_difference();
        let mids = [-0.15, 0.15, 0.45, 0.75, 1.05, 1.35];
        for (i, mid) in mids.iter().enumerate() {
            assert_eq!(cmap.map(*mid), rgba(cmap.colors()[i]));
        }
    }

    #[test]
    fn test_nan_is_transparent() {
        let cmap = ClassifiedColormap::evaporation_difference();
        assert_eq!(cmap.classify(f64::NAN), ColorClass::Missing);
        assert_eq!(cmap.map(f64::NAN), TRANSPARENT);
    }

    #[test]
    fn test_boundary_count_mismatch() {
        let err = ClassifiedColormap::new(
            "bad",
            vec![[0, 0, 0]; 5],
            vec![0.0, 1.0, 2.0],
            [0, 0, 0],
            [255, 255, 255],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PlotError::DimensionMismatch {
                expected: 6,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_unsorted_boundaries() {
        let result = ClassifiedColormap::new(
            "bad",
            vec![[0, 0, 0]; 2],
            vec![0.0, 2.0, 1.0],
            [0, 0, 0],
            [255, 255, 255],
        );
        assert!(matches!(result, Err(PlotError::InvalidParameter { .. })));
    }

    #[test]
    fn test_builtin_scheme_is_valid() {
        let builtin = ClassifiedColormap::evaporation_difference();
        let rebuilt = ClassifiedColormap::new(
            builtin.name(),
            builtin.colors().to_vec(),
            builtin.boundaries().to_vec(),
            builtin.under_color(),
            builtin.over_color(),
        )
        .unwrap();
        assert_eq!(builtin, rebuilt);
    }
}
