//! Frequency sweeps of an overlay network across the chart's horizontal span.

use std::ops::RangeInclusive;

use tracing::{trace, warn};

use crate::chart::viewport::{map_x, map_y};
use crate::circuits::Network;
use crate::errors::ChartError;
use crate::grid::ValueGrid;
use crate::math::{point, CScalar, Point, Scalar};

/// Network response at one swept angular frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Angular frequency ω in rad/s.
    pub omega: Scalar,
    /// Complex impedance at ω.
    pub impedance: CScalar,
    /// Heuristic quality envelope at ω.
    pub quality: Scalar,
}

/// The two overlay curves plus the samples they were built from.
///
/// Each curve is a list of runs: consecutive plottable samples form one
/// polyline, and an unplottable sample ends the current run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayCurves {
    /// Raw samples in sweep order.
    pub samples: Vec<CurveSample>,
    /// `(log10 ω, log10 |Z|)` runs.
    pub impedance: Vec<Vec<Point>>,
    /// `(log10 ω, log10 |quality|)` runs.
    pub quality: Vec<Vec<Point>>,
}

impl OverlayCurves {
    /// Total captured samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Sweeps a network over a log grid of angular frequencies.
#[derive(Debug, Clone)]
pub struct CurveSampler<'a> {
    network: &'a Network,
    grid: ValueGrid,
    indices: RangeInclusive<i64>,
}

impl<'a> CurveSampler<'a> {
    /// Log-uniform sweep with `samples_per_decade` steps from 1 rad/s to
    /// `10^columns` rad/s, endpoints included.
    pub fn new(
        network: &'a Network,
        samples_per_decade: u32,
        columns: u32,
    ) -> Result<Self, ChartError> {
        let grid = ValueGrid::uniform(samples_per_decade)?;
        let indices = 0..=grid.span(columns);
        Ok(Self::with_grid(network, grid, indices))
    }

    /// Sweep over an arbitrary grid and index range.
    #[must_use]
    pub fn with_grid(network: &'a Network, grid: ValueGrid, indices: RangeInclusive<i64>) -> Self {
        Self { network, grid, indices }
    }

    /// Angular frequencies visited by the sweep.
    pub fn omegas(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.indices.clone().map(|i| self.grid.value(i))
    }

    /// Evaluates the network at every swept frequency.
    ///
    /// Samples whose magnitude is zero or not finite (an ideal parallel LC at
    /// resonance, say) are kept in `samples` but split the curve they cannot
    /// be plotted on, so no segment is drawn across the gap.
    pub fn sample(&self) -> Result<OverlayCurves, ChartError> {
        let mut curves = OverlayCurves::default();
        let mut impedance_broken = true;
        let mut quality_broken = true;
        for omega in self.omegas() {
            let impedance = self.network.impedance(omega)?;
            let quality = self.network.quality(omega)?;
            let x = map_x(omega)?;

            match plot_height(impedance.norm()) {
                Some(y) => extend_run(&mut curves.impedance, &mut impedance_broken, point(x, y)),
                None => {
                    warn!(omega, "skipping unplottable impedance sample");
                    impedance_broken = true;
                }
            }
            match plot_height(quality.abs()) {
                Some(y) => extend_run(&mut curves.quality, &mut quality_broken, point(x, y)),
                None => {
                    warn!(omega, "skipping unplottable quality sample");
                    quality_broken = true;
                }
            }
            curves.samples.push(CurveSample { omega, impedance, quality });
        }
        trace!(
            samples = curves.len(),
            impedance_runs = curves.impedance.len(),
            quality_runs = curves.quality.len(),
            "sampled overlay network"
        );
        Ok(curves)
    }
}

fn plot_height(magnitude: Scalar) -> Option<Scalar> {
    map_y(magnitude).ok()
}

fn extend_run(runs: &mut Vec<Vec<Point>>, broken: &mut bool, p: Point) {
    match runs.last_mut() {
        Some(run) if !*broken => run.push(p),
        _ => runs.push(vec![p]),
    }
    *broken = false;
}
