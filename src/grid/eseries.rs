//! IEC 60063 preferred-number series (E1 through E12).
//!
//! The coarser series are every `12 / n`-th entry of E12, which is also how
//! they are usually tabulated.

use crate::errors::ChartError;
use crate::math::Scalar;

/// The E12 series: twelve preferred values per decade.
pub const E12: [Scalar; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// Series sizes derivable from [`E12`].
pub const E_SERIES_SIZES: [usize; 6] = [1, 2, 3, 4, 6, 12];

/// Preferred values of the E-series with `count` values per decade.
pub fn e_series(count: usize) -> Result<Vec<Scalar>, ChartError> {
    if !E_SERIES_SIZES.contains(&count) {
        return Err(ChartError::config(format!(
            "E{count} is not a supported E-series (expected one of {E_SERIES_SIZES:?})"
        )));
    }
    Ok(E12.iter().step_by(E12.len() / count).copied().collect())
}

/// Log10 offsets of [`e_series`], suitable for a [`super::ValueGrid`].
pub fn e_series_offsets(count: usize) -> Result<Vec<Scalar>, ChartError> {
    Ok(e_series(count)?.into_iter().map(Scalar::log10).collect())
}
