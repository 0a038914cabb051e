//! Two-terminal RLC networks evaluated for the chart overlay.

/// Series/parallel expression trees of ideal components.
pub mod network;

pub use network::{ConnectionKind, Network};
