//! Log-scaled axis model shared by every line family and the curve sweep.
//!
//! A [`ValueGrid`] divides each decade into `period` sub-divisions placed at
//! fixed log10 offsets. Index `i` lands in decade `floor(i / period)` at
//! offset `offsets[i mod period]`, so indices extend naturally below zero and
//! past the chart edge.

pub mod eseries;

use std::ops::RangeInclusive;

use crate::errors::ChartError;
use crate::math::Scalar;

pub use eseries::{e_series, e_series_offsets, E12, E_SERIES_SIZES};

const FIT_TOLERANCE: Scalar = 1.0e-9;

/// Log-spaced grid of values with `period` sub-divisions per decade.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGrid {
    period: usize,
    offsets: Vec<Scalar>,
    low_extra: i64,
    high_extra: i64,
}

impl ValueGrid {
    /// Creates a grid from explicit log10 offsets.
    ///
    /// Offsets must number exactly `period`, be finite and strictly
    /// increasing, and span less than one decade.
    pub fn new(period: usize, offsets: Vec<Scalar>) -> Result<Self, ChartError> {
        if period == 0 {
            return Err(ChartError::config("grid period must be at least 1"));
        }
        if offsets.len() != period {
            return Err(ChartError::config(format!(
                "grid period {period} does not match {} offsets",
                offsets.len()
            )));
        }
        if offsets.iter().any(|o| !o.is_finite()) {
            return Err(ChartError::config("grid offsets must be finite"));
        }
        if offsets.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ChartError::config("grid offsets must be strictly increasing"));
        }
        if offsets[period - 1] - offsets[0] >= 1.0 {
            return Err(ChartError::config("grid offsets must span less than one decade"));
        }
        Ok(Self { period, offsets, low_extra: 0, high_extra: 0 })
    }

    /// Grid at the leading digits 1 through 9 of every decade.
    #[must_use]
    pub fn digits() -> Self {
        Self {
            period: 9,
            offsets: (1..=9).map(|d| Scalar::from(d).log10()).collect(),
            low_extra: 0,
            high_extra: 0,
        }
    }

    /// Grid with `steps` evenly spaced log offsets per decade.
    pub fn uniform(steps: u32) -> Result<Self, ChartError> {
        if steps == 0 {
            return Err(ChartError::config("uniform grid needs at least one step per decade"));
        }
        let offsets = (0..steps).map(|i| Scalar::from(i) / Scalar::from(steps)).collect();
        Self::new(steps as usize, offsets)
    }

    /// Grid at the preferred values of the E-series with `count` values per decade.
    pub fn from_e_series(count: usize) -> Result<Self, ChartError> {
        Self::new(count, e_series_offsets(count)?)
    }

    /// Copy of this grid with `delta` added to every log offset.
    ///
    /// The frequency grid is the digit grid shifted by `log10(2π)` so that its
    /// values are angular frequencies of whole-digit hertz.
    #[must_use]
    pub fn shifted(&self, delta: Scalar) -> Self {
        Self {
            offsets: self.offsets.iter().map(|o| o + delta).collect(),
            ..self.clone()
        }
    }

    /// Copy of this grid with explicit index-range extensions.
    #[must_use]
    pub fn with_extras(mut self, low_extra: i64, high_extra: i64) -> Self {
        self.low_extra = low_extra;
        self.high_extra = high_extra;
        self
    }

    /// Copy of this grid whose index range covers exactly the indices with
    /// `log_value` in `[0, major_count]`.
    #[must_use]
    pub fn fitted(&self, major_count: u32) -> Self {
        let top = Scalar::from(major_count);

        let mut low = 0_i64;
        if self.log_value(low) >= -FIT_TOLERANCE {
            while self.log_value(low - 1) >= -FIT_TOLERANCE {
                low -= 1;
            }
        } else {
            while self.log_value(low) < -FIT_TOLERANCE {
                low += 1;
            }
        }

        let mut high = self.span(major_count);
        if self.log_value(high) <= top + FIT_TOLERANCE {
            while self.log_value(high + 1) <= top + FIT_TOLERANCE {
                high += 1;
            }
        } else {
            while self.log_value(high) > top + FIT_TOLERANCE {
                high -= 1;
            }
        }

        self.clone().with_extras(low, high - self.span(major_count))
    }

    /// Sub-divisions per decade.
    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }

    /// Log10 offsets within one decade.
    #[must_use]
    pub fn offsets(&self) -> &[Scalar] {
        &self.offsets
    }

    /// Index-range extension below zero.
    #[must_use]
    pub fn low_extra(&self) -> i64 {
        self.low_extra
    }

    /// Index-range extension above `span(major_count)`.
    #[must_use]
    pub fn high_extra(&self) -> i64 {
        self.high_extra
    }

    /// Number of grid steps in `major_count` decades (`nx` or `ny`).
    #[must_use]
    pub fn span(&self, major_count: u32) -> i64 {
        i64::from(major_count) * self.period as i64
    }

    /// Indices from `low_extra` through `span(major_count) + high_extra`.
    #[must_use]
    pub fn index_range(&self, major_count: u32) -> RangeInclusive<i64> {
        self.low_extra..=self.span(major_count) + self.high_extra
    }

    /// `floor(i / period) + offsets[i mod period]`.
    #[must_use]
    pub fn log_value(&self, index: i64) -> Scalar {
        let period = self.period as i64;
        let decade = index.div_euclid(period);
        let minor = index.rem_euclid(period) as usize;
        decade as Scalar + self.offsets[minor]
    }

    /// `10^log_value(index)`.
    #[must_use]
    pub fn value(&self, index: i64) -> Scalar {
        10f64.powf(self.log_value(index))
    }

    /// Decade lines fall on multiples of the period, negative ones included.
    #[must_use]
    pub fn is_major(&self, index: i64) -> bool {
        index.rem_euclid(self.period as i64) == 0
    }
}

/// How the resistance-style grid divides each decade.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridSpacing {
    /// Lines at the digits 1 through 9.
    #[default]
    Digits,
    /// Lines at the preferred values of an E-series (1, 2, 3, 4, 6 or 12 per decade).
    ESeries(usize),
    /// Evenly log-spaced lines.
    Uniform(u32),
}

impl GridSpacing {
    /// Builds the grid this spacing describes.
    pub fn grid(&self) -> Result<ValueGrid, ChartError> {
        match *self {
            Self::Digits => Ok(ValueGrid::digits()),
            Self::ESeries(count) => ValueGrid::from_e_series(count),
            Self::Uniform(steps) => ValueGrid::uniform(steps),
        }
    }
}
