//! The four constant-value line families and their shared placement algorithm.
//!
//! Every family follows the same steps: walk a range of grid indices, take
//! the grid value, clip the constant-value line to the viewport, pick a
//! stroke weight, and label decade lines. [`FamilyKind`] supplies the parts
//! that differ.
//!
//! # Diagonal families
//!
//! A constant capacitance satisfies `log R + log ω = -log C` (slope -1); a
//! constant inductance satisfies `log R = log ω + log L` (slope +1). Each
//! such line crosses two edges of the viewport, and which two depends only
//! on how the value compares with two decade thresholds. For the reference
//! 8×10 chart:
//!
//! | family      | value range                    | enters | leaves |
//! |-------------|--------------------------------|--------|--------|
//! | capacitance | `C ≥ 10^-8`                    | left   | bottom |
//! | capacitance | `10^-10 ≤ C < 10^-8`           | left   | right  |
//! | capacitance | `C < 10^-10`                   | top    | right  |
//! | inductance  | `L ≤ 1`                        | bottom | right  |
//! | inductance  | `1 < L ≤ 10^2`                 | left   | right  |
//! | inductance  | `L > 10^2`                     | left   | top    |
//!
//! The entry and exit edges are decided independently, so a chart with more
//! columns than rows gets the fourth (top/bottom) case for free.

use std::f64::consts::FRAC_PI_4;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::chart::config::StrokeWidths;
use crate::chart::label::{HorizontalAlign, Label, VerticalAlign, BOTTOM_EDGE_GAP, LABEL_GAP};
use crate::chart::viewport::{map_x, map_y, Edge, Segment, Viewport, CONTAINMENT_TOLERANCE};
use crate::constants::linear_frequency;
use crate::errors::ChartError;
use crate::grid::ValueGrid;
use crate::math::{at_least, at_most, decade, point, Scalar};
use crate::units::{
    PrefixTable, CAPACITANCE_PREFIXES, FREQUENCY_PREFIXES, INDUCTANCE_PREFIXES,
    RESISTANCE_PREFIXES,
};

/// Which physical quantity a family of lines holds constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    /// Vertical lines of constant frequency.
    Frequency,
    /// Horizontal lines of constant resistance.
    Resistance,
    /// Falling diagonals of constant capacitance.
    Capacitance,
    /// Rising diagonals of constant inductance.
    Inductance,
}

/// Weight class of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeWeight {
    /// Decade line.
    Major,
    /// Sub-decade line.
    Minor,
}

impl StrokeWeight {
    /// Width for this weight from the configured widths.
    #[must_use]
    pub fn width(self, strokes: &StrokeWidths) -> Scalar {
        match self {
            Self::Major => strokes.major,
            Self::Minor => strokes.minor,
        }
    }
}

/// One clipped, weighted, optionally labelled line.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    /// Family the line belongs to.
    pub kind: FamilyKind,
    /// Grid index the value came from.
    pub index: i64,
    /// Physical value held constant (ω in rad/s, Ω, F or H).
    pub value: Scalar,
    /// Visible part of the line.
    pub segment: Segment,
    /// Stroke class.
    pub weight: StrokeWeight,
    /// Label for decade lines whose value has a printable prefix.
    pub label: Option<Label>,
}

impl FamilyKind {
    /// All families, in drawing order.
    pub const ALL: [FamilyKind; 4] = [
        FamilyKind::Frequency,
        FamilyKind::Resistance,
        FamilyKind::Capacitance,
        FamilyKind::Inductance,
    ];

    /// Lower-case family name, used in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Resistance => "resistance",
            Self::Capacitance => "capacitance",
            Self::Inductance => "inductance",
        }
    }

    /// Prefix table for this family's labels.
    #[must_use]
    pub fn prefixes(self) -> &'static PrefixTable {
        match self {
            Self::Frequency => &FREQUENCY_PREFIXES,
            Self::Resistance => &RESISTANCE_PREFIXES,
            Self::Capacitance => &CAPACITANCE_PREFIXES,
            Self::Inductance => &INDUCTANCE_PREFIXES,
        }
    }

    /// Grid indices walked for this family.
    ///
    /// The frequency grid brings its own (fitted) range; the other families
    /// cover every decade a line of their kind can cross.
    #[must_use]
    pub fn indices(self, grid: &ValueGrid, viewport: &Viewport) -> RangeInclusive<i64> {
        let nx = grid.span(viewport.columns());
        let ny = grid.span(viewport.rows());
        match self {
            Self::Frequency => grid.index_range(viewport.columns()),
            Self::Resistance => 0..=ny,
            Self::Capacitance => -(nx + ny)..=0,
            Self::Inductance => -nx..=ny,
        }
    }

    /// Clips the line of constant `value` to the viewport.
    ///
    /// Returns `Ok(None)` when the line misses the viewport entirely.
    pub fn clip(self, viewport: &Viewport, value: Scalar) -> Result<Option<Segment>, ChartError> {
        match self {
            Self::Frequency => clip_frequency(viewport, value),
            Self::Resistance => clip_resistance(viewport, value),
            Self::Capacitance => clip_capacitance(viewport, value),
            Self::Inductance => clip_inductance(viewport, value),
        }
    }

    /// Label text for a line of constant `value`, if it has one.
    #[must_use]
    pub fn label_text(self, value: Scalar) -> Option<String> {
        let shown = match self {
            Self::Frequency => linear_frequency(value),
            _ => value,
        };
        self.prefixes().format(shown)
    }

    /// Positions `text` against the clipped `segment`.
    #[must_use]
    pub fn place_label(self, segment: &Segment, text: String) -> Label {
        match self {
            Self::Frequency => Label {
                text,
                anchor: segment.start,
                rotation: 0.0,
                h_align: HorizontalAlign::Center,
                v_align: VerticalAlign::Top,
                gap: LABEL_GAP,
            },
            Self::Resistance => Label {
                text,
                anchor: segment.start,
                rotation: 0.0,
                h_align: HorizontalAlign::Right,
                v_align: VerticalAlign::Middle,
                gap: LABEL_GAP,
            },
            Self::Capacitance => Label {
                text,
                anchor: segment.end,
                rotation: -FRAC_PI_4,
                h_align: HorizontalAlign::Left,
                v_align: VerticalAlign::Middle,
                gap: if segment.exit == Edge::Bottom { BOTTOM_EDGE_GAP } else { LABEL_GAP },
            },
            Self::Inductance => Label {
                text,
                anchor: segment.end,
                rotation: FRAC_PI_4,
                h_align: HorizontalAlign::Left,
                v_align: VerticalAlign::Middle,
                gap: LABEL_GAP,
            },
        }
    }
}

fn clip_frequency(viewport: &Viewport, omega: Scalar) -> Result<Option<Segment>, ChartError> {
    let x = map_x(omega)?;
    if !(-CONTAINMENT_TOLERANCE..=Scalar::from(viewport.columns()) + CONTAINMENT_TOLERANCE)
        .contains(&x)
    {
        return Ok(None);
    }
    Ok(Some(Segment {
        start: point(x, map_y(viewport.r_min())?),
        end: point(x, map_y(viewport.r_max())?),
        entry: Edge::Bottom,
        exit: Edge::Top,
    }))
}

fn clip_resistance(viewport: &Viewport, ohms: Scalar) -> Result<Option<Segment>, ChartError> {
    let y = map_y(ohms)?;
    if !(-CONTAINMENT_TOLERANCE..=Scalar::from(viewport.rows()) + CONTAINMENT_TOLERANCE)
        .contains(&y)
    {
        return Ok(None);
    }
    Ok(Some(Segment {
        start: point(map_x(viewport.omega_min())?, y),
        end: point(map_x(viewport.omega_max())?, y),
        entry: Edge::Left,
        exit: Edge::Right,
    }))
}

fn clip_capacitance(viewport: &Viewport, farads: Scalar) -> Result<Option<Segment>, ChartError> {
    let columns = i64::from(viewport.columns());
    let rows = i64::from(viewport.rows());
    if !at_least(farads, decade(-(columns + rows))) || !at_most(farads, 1.0) {
        return Ok(None);
    }

    let r_at_left = 1.0 / (farads * viewport.omega_min());
    let r_at_right = 1.0 / (farads * viewport.omega_max());
    let omega_at_bottom = 1.0 / (viewport.r_min() * farads);
    let omega_at_top = 1.0 / (viewport.r_max() * farads);

    let (entry, start) = if farads >= decade(-rows) {
        (Edge::Left, viewport.edge_point(Edge::Left, r_at_left)?)
    } else {
        (Edge::Top, viewport.edge_point(Edge::Top, omega_at_top)?)
    };
    let (exit, end) = if farads >= decade(-columns) {
        (Edge::Bottom, viewport.edge_point(Edge::Bottom, omega_at_bottom)?)
    } else {
        (Edge::Right, viewport.edge_point(Edge::Right, r_at_right)?)
    };
    Ok(Some(Segment { start, end, entry, exit }))
}

fn clip_inductance(viewport: &Viewport, henries: Scalar) -> Result<Option<Segment>, ChartError> {
    let columns = i64::from(viewport.columns());
    let rows = i64::from(viewport.rows());
    if !at_least(henries, decade(-columns)) || !at_most(henries, decade(rows)) {
        return Ok(None);
    }

    let r_at_left = henries * viewport.omega_min();
    let r_at_right = henries * viewport.omega_max();
    let omega_at_bottom = viewport.r_min() / henries;
    let omega_at_top = viewport.r_max() / henries;

    let (entry, start) = if henries <= 1.0 {
        (Edge::Bottom, viewport.edge_point(Edge::Bottom, omega_at_bottom)?)
    } else {
        (Edge::Left, viewport.edge_point(Edge::Left, r_at_left)?)
    };
    let (exit, end) = if henries <= decade(rows - columns) {
        (Edge::Right, viewport.edge_point(Edge::Right, r_at_right)?)
    } else {
        (Edge::Top, viewport.edge_point(Edge::Top, omega_at_top)?)
    };
    Ok(Some(Segment { start, end, entry, exit }))
}

/// A family bound to its grid and viewport.
#[derive(Debug, Clone, Copy)]
pub struct LineFamily<'a> {
    kind: FamilyKind,
    grid: &'a ValueGrid,
    viewport: Viewport,
}

impl<'a> LineFamily<'a> {
    /// Binds `kind` to a grid and viewport.
    #[must_use]
    pub fn new(kind: FamilyKind, grid: &'a ValueGrid, viewport: Viewport) -> Self {
        Self { kind, grid, viewport }
    }

    /// Family kind.
    #[must_use]
    pub fn kind(&self) -> FamilyKind {
        self.kind
    }

    /// Every visible line of the family, in index order.
    pub fn lines(&self) -> Result<Vec<GridLine>, ChartError> {
        let mut lines = Vec::new();
        for index in self.kind.indices(self.grid, &self.viewport) {
            let value = self.grid.value(index);
            let Some(segment) = self.kind.clip(&self.viewport, value)? else {
                continue;
            };
            let major = self.grid.is_major(index);
            let label = if major {
                self.kind
                    .label_text(value)
                    .map(|text| self.kind.place_label(&segment, text))
            } else {
                None
            };
            lines.push(GridLine {
                kind: self.kind,
                index,
                value,
                segment,
                weight: if major { StrokeWeight::Major } else { StrokeWeight::Minor },
                label,
            });
        }
        debug!(
            family = self.kind.name(),
            lines = lines.len(),
            labels = lines.iter().filter(|l| l.label.is_some()).count(),
            "generated line family"
        );
        Ok(lines)
    }
}
