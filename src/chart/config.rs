//! Chart configuration: decade counts, grid spacing, stroke weights.

use crate::chart::viewport::Viewport;
use crate::constants::{
    DEFAULT_CURVE_SAMPLES_PER_DECADE, DEFAULT_MAJOR_COLUMNS, DEFAULT_MAJOR_ROWS,
    IMPEDANCE_CURVE_WIDTH, MAJOR_LINE_WIDTH, MINOR_LINE_WIDTH, QUALITY_CURVE_WIDTH,
};
use crate::errors::ChartError;
use crate::grid::GridSpacing;
use crate::math::Scalar;

/// Stroke widths in decade units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeWidths {
    /// Decade grid lines.
    pub major: Scalar,
    /// Sub-decade grid lines.
    pub minor: Scalar,
    /// Impedance magnitude overlay.
    pub impedance_curve: Scalar,
    /// Quality envelope overlay.
    pub quality_curve: Scalar,
}

impl Default for StrokeWidths {
    fn default() -> Self {
        Self {
            major: MAJOR_LINE_WIDTH,
            minor: MINOR_LINE_WIDTH,
            impedance_curve: IMPEDANCE_CURVE_WIDTH,
            quality_curve: QUALITY_CURVE_WIDTH,
        }
    }
}

impl StrokeWidths {
    fn validate(&self) -> Result<(), ChartError> {
        let widths = [
            ("major", self.major),
            ("minor", self.minor),
            ("impedance_curve", self.impedance_curve),
            ("quality_curve", self.quality_curve),
        ];
        for (name, width) in widths {
            if !(width.is_finite() && width > 0.0) {
                return Err(ChartError::config(format!(
                    "stroke width `{name}` must be positive, got {width}"
                )));
            }
        }
        Ok(())
    }
}

/// Everything the chart core needs apart from the overlay network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Frequency decades across.
    pub major_columns: u32,
    /// Resistance decades up.
    pub major_rows: u32,
    /// Sub-division of each decade for the frequency and resistance grids.
    pub spacing: GridSpacing,
    /// Stroke widths.
    pub strokes: StrokeWidths,
    /// Overlay sweep density.
    pub curve_samples_per_decade: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            major_columns: DEFAULT_MAJOR_COLUMNS,
            major_rows: DEFAULT_MAJOR_ROWS,
            spacing: GridSpacing::default(),
            strokes: StrokeWidths::default(),
            curve_samples_per_decade: DEFAULT_CURVE_SAMPLES_PER_DECADE,
        }
    }
}

impl ChartConfig {
    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ChartError> {
        self.viewport()?;
        self.spacing.grid()?;
        self.strokes.validate()?;
        if self.curve_samples_per_decade == 0 {
            return Err(ChartError::config("curve_samples_per_decade must be at least 1"));
        }
        Ok(())
    }

    /// The viewport described by the decade counts.
    pub fn viewport(&self) -> Result<Viewport, ChartError> {
        Viewport::new(self.major_columns, self.major_rows)
    }
}
