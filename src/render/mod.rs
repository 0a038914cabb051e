//! Drawing sinks that receive the chart's strokes and labels.
//!
//! The chart speaks in decade units with y pointing up. A sink owns the
//! mapping onto its surface (page size, vertical flip, fonts).

mod recording;
mod svg;

pub use recording::{DrawCommand, RecordingSink, StrokedPath};
pub use svg::{PageLayout, SvgSink};

use crate::chart::label::Label;
use crate::errors::ChartError;
use crate::math::{Point, Scalar};

/// Path-and-text drawing surface.
///
/// Path construction is infallible and buffered; `stroke` and `draw_label`
/// may touch the underlying medium and report IO failures.
pub trait DrawingSink {
    /// What the sink hands back once finalized.
    type Output;

    /// Starts a new sub-path at `p`.
    fn move_to(&mut self, p: Point);

    /// Extends the current sub-path to `p`.
    fn line_to(&mut self, p: Point);

    /// Sets the width used by the next `stroke`.
    fn set_stroke_width(&mut self, width: Scalar);

    /// Strokes and clears the current path.
    fn stroke(&mut self) -> Result<(), ChartError>;

    /// Draws a positioned label.
    fn draw_label(&mut self, label: &Label) -> Result<(), ChartError>;

    /// Finalizes the surface.
    fn finish(self) -> Result<Self::Output, ChartError>;
}

/// Strokes `points` as one connected path of the given width.
///
/// Fewer than two points draw nothing.
pub fn stroke_polyline<S>(sink: &mut S, points: &[Point], width: Scalar) -> Result<(), ChartError>
where
    S: DrawingSink + ?Sized,
{
    let [first, rest @ ..] = points else {
        return Ok(());
    };
    if rest.is_empty() {
        return Ok(());
    }
    sink.move_to(*first);
    for p in rest {
        sink.line_to(*p);
    }
    sink.set_stroke_width(width);
    sink.stroke()
}
