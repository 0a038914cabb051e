use std::fmt;

use num_complex::Complex;

use crate::errors::{ensure_positive, ChartError};
use crate::math::{CScalar, Scalar};

/// Connection topology for a pair of sub-networks.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Series connection (impedances add linearly).
    Series,
    /// Parallel connection (product over sum).
    Parallel,
}

/// Two-terminal network of ideal resistors, inductors and capacitors.
///
/// Leaves carry their value in SI units (Ω, H, F). Joins own their two
/// children, so a network is a plain tree that is immutable once built.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Network {
    /// Ideal resistor (Ω).
    Resistor(Scalar),
    /// Ideal inductor (H).
    Inductor(Scalar),
    /// Ideal capacitor (F).
    Capacitor(Scalar),
    /// Series join.
    Series(Box<Network>, Box<Network>),
    /// Parallel join.
    Parallel(Box<Network>, Box<Network>),
}

impl Network {
    /// Resistor leaf.
    #[must_use]
    pub fn resistor(ohms: Scalar) -> Self {
        Self::Resistor(ohms)
    }

    /// Inductor leaf.
    #[must_use]
    pub fn inductor(henries: Scalar) -> Self {
        Self::Inductor(henries)
    }

    /// Capacitor leaf.
    #[must_use]
    pub fn capacitor(farads: Scalar) -> Self {
        Self::Capacitor(farads)
    }

    /// `a` in series with `b`.
    #[must_use]
    pub fn series(a: Network, b: Network) -> Self {
        Self::Series(Box::new(a), Box::new(b))
    }

    /// `a` in parallel with `b`.
    #[must_use]
    pub fn parallel(a: Network, b: Network) -> Self {
        Self::Parallel(Box::new(a), Box::new(b))
    }

    /// Joins `a` and `b` with the given topology.
    #[must_use]
    pub fn join(kind: ConnectionKind, a: Network, b: Network) -> Self {
        match kind {
            ConnectionKind::Series => Self::series(a, b),
            ConnectionKind::Parallel => Self::parallel(a, b),
        }
    }

    /// Joins every member with the same topology, nesting to the right.
    ///
    /// Returns `None` for an empty member list.
    #[must_use]
    pub fn chain<I>(kind: ConnectionKind, members: I) -> Option<Self>
    where
        I: IntoIterator<Item = Network>,
        I::IntoIter: DoubleEndedIterator,
    {
        members
            .into_iter()
            .rev()
            .reduce(|tail, head| Self::join(kind, head, tail))
    }

    /// The series RLC drawn over the reference chart: 100 mH, 50 Ω and 100 nF.
    #[must_use]
    pub fn reference_overlay() -> Self {
        Self::series(
            Self::inductor(100.0e-3),
            Self::series(Self::resistor(50.0), Self::capacitor(100.0e-9)),
        )
    }

    /// Checks that every component value is strictly positive and finite.
    pub fn validate(&self) -> Result<(), ChartError> {
        match self {
            Self::Resistor(r) => ensure_positive("resistance", *r).map(drop),
            Self::Inductor(l) => ensure_positive("inductance", *l).map(drop),
            Self::Capacitor(c) => ensure_positive("capacitance", *c).map(drop),
            Self::Series(a, b) | Self::Parallel(a, b) => {
                a.validate()?;
                b.validate()
            }
        }
    }

    /// Complex impedance at angular frequency `omega` (rad/s).
    pub fn impedance(&self, omega: Scalar) -> Result<CScalar, ChartError> {
        let omega = ensure_positive("angular frequency", omega)?;
        Ok(self.eval_impedance(omega))
    }

    /// Heuristic magnitude envelope at `omega`.
    ///
    /// Each leaf contributes its own reactance magnitude; series joins keep
    /// the larger child and parallel joins the smaller. This is a rough
    /// bound for overlay purposes, not the true `|Z|`.
    pub fn quality(&self, omega: Scalar) -> Result<Scalar, ChartError> {
        let omega = ensure_positive("angular frequency", omega)?;
        Ok(self.eval_quality(omega))
    }

    /// Number of R/L/C leaves in the tree.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match self {
            Self::Resistor(_) | Self::Inductor(_) | Self::Capacitor(_) => 1,
            Self::Series(a, b) | Self::Parallel(a, b) => a.element_count() + b.element_count(),
        }
    }

    fn eval_impedance(&self, omega: Scalar) -> CScalar {
        match self {
            Self::Resistor(r) => Complex::new(*r, 0.0),
            Self::Inductor(l) => Complex::new(0.0, l * omega),
            Self::Capacitor(c) => Complex::new(0.0, -1.0 / (c * omega)),
            Self::Series(a, b) => a.eval_impedance(omega) + b.eval_impedance(omega),
            Self::Parallel(a, b) => {
                let za = a.eval_impedance(omega);
                let zb = b.eval_impedance(omega);
                za * zb / (za + zb)
            }
        }
    }

    fn eval_quality(&self, omega: Scalar) -> Scalar {
        match self {
            Self::Resistor(r) => *r,
            Self::Inductor(l) => l * omega,
            Self::Capacitor(c) => 1.0 / (c * omega),
            Self::Series(a, b) => a.eval_quality(omega).max(b.eval_quality(omega)),
            Self::Parallel(a, b) => a.eval_quality(omega).min(b.eval_quality(omega)),
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::reference_overlay()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resistor(r) => write!(f, "R({r} \u{2126})"),
            Self::Inductor(l) => write!(f, "L({l} H)"),
            Self::Capacitor(c) => write!(f, "C({c} F)"),
            Self::Series(a, b) => write!(f, "({a} + {b})"),
            Self::Parallel(a, b) => write!(f, "({a} || {b})"),
        }
    }
}
