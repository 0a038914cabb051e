//! Convenience re-exports for building and rendering reactance charts.

pub use crate::chart::{
    map_x, map_y, ChartConfig, Edge, FamilyKind, GridLine, HorizontalAlign, Label, LineFamily,
    ReactanceChart, Segment, StrokeWeight, StrokeWidths, VerticalAlign, Viewport,
};
pub use crate::circuits::{ConnectionKind, Network};
pub use crate::constants::*;
pub use crate::errors::ChartError;
pub use crate::grid::{e_series, GridSpacing, ValueGrid};
pub use crate::io::write_curve_csv;
#[cfg(feature = "toml")]
pub use crate::io::ChartDocument;
pub use crate::math::{decade, point, CScalar, Point, Scalar};
pub use crate::render::{
    stroke_polyline, DrawCommand, DrawingSink, PageLayout, RecordingSink, StrokedPath, SvgSink,
};
pub use crate::sweep::{CurveSample, CurveSampler, OverlayCurves};
pub use crate::units::{format_with_prefix, PrefixTable};
