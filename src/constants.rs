//! Reference chart dimensions, stroke weights, and unit symbols.
//!
//! ## Reference chart
//!
//! The defaults describe the classic US Letter reactance chart: 8 decades of
//! frequency across, 10 decades of resistance up, 60 points per decade, and
//! line weights given in points divided by 72 (the chart is drawn in decade
//! units, so a 0.8 pt line is `0.8 / 72` of a decade at 72 points per decade).

use std::f64::consts::PI;

/// Frequency decades spanned horizontally by the reference chart.
pub const DEFAULT_MAJOR_COLUMNS: u32 = 8;
/// Resistance decades spanned vertically by the reference chart.
pub const DEFAULT_MAJOR_ROWS: u32 = 10;
/// Curve sampling density (log-uniform steps per decade).
pub const DEFAULT_CURVE_SAMPLES_PER_DECADE: u32 = 100;

/// Stroke width of decade (major) grid lines, in decade units.
pub const MAJOR_LINE_WIDTH: f64 = 0.8 / 72.0;
/// Stroke width of sub-decade (minor) grid lines, in decade units.
pub const MINOR_LINE_WIDTH: f64 = 0.1 / 72.0;
/// Stroke width of the impedance magnitude overlay.
pub const IMPEDANCE_CURVE_WIDTH: f64 = 3.0 / 72.0;
/// Stroke width of the quality envelope overlay.
pub const QUALITY_CURVE_WIDTH: f64 = 1.8 / 72.0;

/// Lower resistance bound of the viewport (Ω).
pub const R_MIN: f64 = 1.0;
/// Lower angular frequency bound of the viewport (rad/s).
pub const OMEGA_MIN: f64 = 1.0;

/// OHM SIGN (U+2126).
pub const OHM_SIGN: &str = "\u{2126}";
/// GREEK SMALL LETTER MU (U+03BC), used for the micro prefix.
pub const MICRO_SIGN: &str = "\u{03bc}";

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Returns the linear frequency in hertz for an angular frequency `omega`.
#[inline]
#[must_use]
pub fn linear_frequency(omega: f64) -> f64 {
    omega / (2.0 * PI)
}
