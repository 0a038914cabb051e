//! Chart labels and their placement.

use crate::math::{Point, Scalar};

/// Default distance between a label's anchor and its text, in decades.
pub const LABEL_GAP: Scalar = 0.1;
/// Gap used for capacitance labels hanging off the bottom edge.
pub const BOTTOM_EDGE_GAP: Scalar = 0.2;

/// Horizontal placement of text relative to its anchor, in the text's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Text starts `gap` after the anchor.
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text ends `gap` before the anchor.
    Right,
}

/// Vertical placement of text relative to its anchor, in the text's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// Text top sits `gap` below the anchor.
    Top,
    /// Text is centered on the anchor.
    Middle,
    /// Text bottom sits `gap` above the anchor.
    Bottom,
}

/// A positioned label string.
///
/// `rotation` is counter-clockwise in the y-up chart frame; sinks that flip
/// the vertical axis negate it so text stays upright.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text to draw.
    pub text: String,
    /// Anchor point in chart coordinates.
    pub anchor: Point,
    /// Rotation in radians.
    pub rotation: Scalar,
    /// Horizontal alignment.
    pub h_align: HorizontalAlign,
    /// Vertical alignment.
    pub v_align: VerticalAlign,
    /// Distance from anchor to the aligned text edge, in decades.
    pub gap: Scalar,
}
