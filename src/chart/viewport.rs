//! The log-log viewport and the mapping from physical values into it.
//!
//! Horizontal coordinates are `log10(ω)` with ω in rad/s, vertical ones are
//! `log10(R)` with R in ohms. The viewport spans `[0, columns] × [0, rows]`.

use crate::constants::{OMEGA_MIN, R_MIN};
use crate::errors::{ensure_positive, ChartError};
use crate::math::{decade, point, Point, Scalar};

/// Tolerance used when checking that computed points lie inside the viewport.
pub const CONTAINMENT_TOLERANCE: Scalar = 1.0e-9;

/// Upper bound on `columns + rows`. The smallest visible capacitance is
/// `10^-(columns + rows)` farads and must stay a normal `f64`.
pub const MAX_TOTAL_DECADES: u32 = 300;

/// Maps an angular frequency to its horizontal coordinate.
pub fn map_x(omega: Scalar) -> Result<Scalar, ChartError> {
    Ok(ensure_positive("angular frequency", omega)?.log10())
}

/// Maps a resistance (or impedance magnitude) to its vertical coordinate.
pub fn map_y(ohms: Scalar) -> Result<Scalar, ChartError> {
    Ok(ensure_positive("resistance", ohms)?.log10())
}

/// One side of the viewport rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `ω = ω_min`.
    Left,
    /// `ω = ω_max`.
    Right,
    /// `R = R_min`.
    Bottom,
    /// `R = R_max`.
    Top,
}

/// A line clipped to the viewport, with the edges it enters and leaves through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
    /// Edge carrying `start`.
    pub entry: Edge,
    /// Edge carrying `end`.
    pub exit: Edge,
}

/// Rectangle of `columns` frequency decades by `rows` resistance decades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    columns: u32,
    rows: u32,
}

impl Viewport {
    /// Creates a viewport; both decade counts must be positive and together
    /// no more than [`MAX_TOTAL_DECADES`].
    pub fn new(columns: u32, rows: u32) -> Result<Self, ChartError> {
        if columns == 0 || rows == 0 {
            return Err(ChartError::config(format!(
                "viewport needs at least one decade each way, got {columns}x{rows}"
            )));
        }
        if columns.saturating_add(rows) > MAX_TOTAL_DECADES {
            return Err(ChartError::config(format!(
                "viewport {columns}x{rows} spans more than {MAX_TOTAL_DECADES} decades"
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Frequency decades across.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Resistance decades up.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Left edge angular frequency (rad/s).
    #[must_use]
    pub fn omega_min(&self) -> Scalar {
        OMEGA_MIN
    }

    /// Right edge angular frequency (rad/s).
    #[must_use]
    pub fn omega_max(&self) -> Scalar {
        OMEGA_MIN * decade(i64::from(self.columns))
    }

    /// Bottom edge resistance (Ω).
    #[must_use]
    pub fn r_min(&self) -> Scalar {
        R_MIN
    }

    /// Top edge resistance (Ω).
    #[must_use]
    pub fn r_max(&self) -> Scalar {
        R_MIN * decade(i64::from(self.rows))
    }

    /// Point on `edge` where the free coordinate equals `value`.
    ///
    /// `value` is a resistance on the left and right edges and an angular
    /// frequency on the bottom and top edges.
    pub fn edge_point(&self, edge: Edge, value: Scalar) -> Result<Point, ChartError> {
        let p = match edge {
            Edge::Left => point(map_x(self.omega_min())?, map_y(value)?),
            Edge::Right => point(map_x(self.omega_max())?, map_y(value)?),
            Edge::Bottom => point(map_x(value)?, map_y(self.r_min())?),
            Edge::Top => point(map_x(value)?, map_y(self.r_max())?),
        };
        Ok(p)
    }

    /// Whether `p` lies within the rectangle, allowing `tolerance` of slack.
    #[must_use]
    pub fn contains(&self, p: &Point, tolerance: Scalar) -> bool {
        let width = Scalar::from(self.columns);
        let height = Scalar::from(self.rows);
        (-tolerance..=width + tolerance).contains(&p.x)
            && (-tolerance..=height + tolerance).contains(&p.y)
    }
}
