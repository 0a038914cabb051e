#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Chart-wide defaults, stroke weights and frequency conversions.
pub mod constants;
/// Metric-prefix label formatting.
pub mod units;
/// Scalar, point and transform aliases shared across the crate.
pub mod math;
/// Logarithmic value grids and E-series helpers.
pub mod grid;
/// RLC networks and their frequency response.
pub mod circuits;
/// Chart geometry: viewport, line families, labels and assembly.
pub mod chart;
/// Overlay curve sampling.
pub mod sweep;
/// Drawing sinks (recording and SVG).
pub mod render;
/// CSV export and TOML chart documents.
pub mod io;
/// Error types shared across the crate.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
