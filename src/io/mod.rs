//! Export helpers for sampled curves and chart documents.

pub mod csv;

#[cfg(feature = "toml")]
pub mod document;

pub use csv::write_curve_csv;

#[cfg(feature = "toml")]
pub use document::ChartDocument;
