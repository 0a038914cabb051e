//! Reactance chart assembly: grids, line families, overlay, and draw order.

pub mod config;
pub mod family;
pub mod label;
pub mod viewport;

pub use config::{ChartConfig, StrokeWidths};
pub use family::{FamilyKind, GridLine, LineFamily, StrokeWeight};
pub use label::{HorizontalAlign, Label, VerticalAlign};
pub use viewport::{
    map_x, map_y, Edge, Segment, Viewport, CONTAINMENT_TOLERANCE, MAX_TOTAL_DECADES,
};

use std::f64::consts::TAU;

use tracing::info;

use crate::circuits::Network;
use crate::errors::ChartError;
use crate::grid::ValueGrid;
use crate::render::{stroke_polyline, DrawingSink};
use crate::sweep::{CurveSampler, OverlayCurves};

/// A validated chart ready to draw.
///
/// Construction checks the configuration (and the overlay, when attached),
/// so drawing never fails on bad input and a rejected chart never touches
/// a sink.
#[derive(Debug, Clone)]
pub struct ReactanceChart {
    config: ChartConfig,
    viewport: Viewport,
    value_grid: ValueGrid,
    frequency_grid: ValueGrid,
    overlay: Option<Network>,
}

impl ReactanceChart {
    /// Builds a chart without an overlay.
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        let viewport = config.viewport()?;
        let value_grid = config.spacing.grid()?;
        let frequency_grid = value_grid.shifted(TAU.log10()).fitted(viewport.columns());
        Ok(Self {
            config,
            viewport,
            value_grid,
            frequency_grid,
            overlay: None,
        })
    }

    /// The default 8×10 chart with the reference series RLC overlay.
    pub fn reference() -> Result<Self, ChartError> {
        Self::new(ChartConfig::default())?.with_overlay(Network::reference_overlay())
    }

    /// Attaches an overlay network after validating its component values.
    pub fn with_overlay(mut self, network: Network) -> Result<Self, ChartError> {
        network.validate()?;
        self.overlay = Some(network);
        Ok(self)
    }

    /// Configuration the chart was built from.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Chart viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Grid used by the resistance, capacitance and inductance families.
    #[must_use]
    pub fn value_grid(&self) -> &ValueGrid {
        &self.value_grid
    }

    /// Angular-frequency grid used by the frequency family.
    #[must_use]
    pub fn frequency_grid(&self) -> &ValueGrid {
        &self.frequency_grid
    }

    /// Attached overlay network, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<&Network> {
        self.overlay.as_ref()
    }

    /// The line family of `kind`, bound to its grid.
    #[must_use]
    pub fn family(&self, kind: FamilyKind) -> LineFamily<'_> {
        let grid = match kind {
            FamilyKind::Frequency => &self.frequency_grid,
            _ => &self.value_grid,
        };
        LineFamily::new(kind, grid, self.viewport)
    }

    /// Every visible line of `kind`.
    pub fn lines(&self, kind: FamilyKind) -> Result<Vec<GridLine>, ChartError> {
        self.family(kind).lines()
    }

    /// Sampled overlay curves, or `None` without an overlay.
    pub fn overlay_curves(&self) -> Result<Option<OverlayCurves>, ChartError> {
        let Some(network) = &self.overlay else {
            return Ok(None);
        };
        let sampler = CurveSampler::new(
            network,
            self.config.curve_samples_per_decade,
            self.viewport.columns(),
        )?;
        sampler.sample().map(Some)
    }

    /// Emits frequency, resistance, capacitance and inductance lines, then
    /// the impedance curve and the quality curve.
    ///
    /// All geometry is computed before the first command, so a failure
    /// here leaves the sink untouched.
    pub fn draw<S>(&self, sink: &mut S) -> Result<(), ChartError>
    where
        S: DrawingSink + ?Sized,
    {
        let families = FamilyKind::ALL
            .into_iter()
            .map(|kind| self.lines(kind))
            .collect::<Result<Vec<_>, _>>()?;
        let curves = self.overlay_curves()?;

        let strokes = &self.config.strokes;
        for line in families.iter().flatten() {
            sink.move_to(line.segment.start);
            sink.line_to(line.segment.end);
            sink.set_stroke_width(line.weight.width(strokes));
            sink.stroke()?;
            if let Some(label) = &line.label {
                sink.draw_label(label)?;
            }
        }
        if let Some(curves) = curves {
            for run in &curves.impedance {
                stroke_polyline(sink, run, strokes.impedance_curve)?;
            }
            for run in &curves.quality {
                stroke_polyline(sink, run, strokes.quality_curve)?;
            }
        }
        Ok(())
    }

    /// Draws into `sink` and finalizes it.
    ///
    /// The sink is finalized even if drawing fails; the drawing error wins.
    pub fn render<S: DrawingSink>(&self, mut sink: S) -> Result<S::Output, ChartError> {
        info!(
            columns = self.viewport.columns(),
            rows = self.viewport.rows(),
            overlay = ?self.overlay.as_ref().map(ToString::to_string),
            "rendering reactance chart"
        );
        let drawn = self.draw(&mut sink);
        let finished = sink.finish();
        drawn?;
        let output = finished?;
        info!("reactance chart complete");
        Ok(output)
    }
}
