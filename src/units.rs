//! Metric-prefix label formatting for the four chart quantities.
//!
//! Each quantity carries a [`PrefixTable`]: an ordered list of descending
//! thresholds. The first threshold met picks the prefix and the scale
//! applied before rounding. A step may also suppress the label entirely,
//! which is how the inductance table hides values of a kilohenry and above.
//!
//! Rounding is half-up on the scaled magnitude (`1.5 kHz` prints as `2kHz`).
//! Thresholds are inclusive with a small relative tolerance, so a decade
//! value computed as `10^-3` that lands a hair below `1e-3` still reads `1mF`
//! rather than `1000µF`.

use crate::constants::{MICRO_SIGN, OHM_SIGN};
use crate::math::{at_least, Scalar};

/// One row of a prefix table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixStep {
    /// Smallest value (inclusive) handled by this step.
    pub threshold: Scalar,
    /// Multiplier applied to the value before rounding.
    pub scale: Scalar,
    /// Prefix text; `None` suppresses the label.
    pub prefix: Option<&'static str>,
}

impl PrefixStep {
    const fn shown(threshold: Scalar, scale: Scalar, prefix: &'static str) -> Self {
        Self { threshold, scale, prefix: Some(prefix) }
    }

    const fn omitted(threshold: Scalar) -> Self {
        Self { threshold, scale: 1.0, prefix: None }
    }
}

/// Descending thresholds plus the unit symbol appended to every label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixTable {
    /// Unit symbol written after the prefix.
    pub unit: &'static str,
    /// Round the raw value to a whole unit before choosing a prefix.
    pub round_to_unit: bool,
    /// Steps in descending threshold order. Values below the last step get no label.
    pub steps: &'static [PrefixStep],
}

/// Frequency labels in hertz. The raw value is rounded to whole hertz first.
pub const FREQUENCY_PREFIXES: PrefixTable = PrefixTable {
    unit: "Hz",
    round_to_unit: true,
    steps: &[
        PrefixStep::shown(1.0e9, 1.0e-9, "G"),
        PrefixStep::shown(1.0e6, 1.0e-6, "M"),
        PrefixStep::shown(1.0e3, 1.0e-3, "k"),
        PrefixStep::shown(1.0, 1.0, ""),
        PrefixStep::shown(0.0, 1.0e3, "m"),
    ],
};

/// Resistance labels in ohms.
pub const RESISTANCE_PREFIXES: PrefixTable = PrefixTable {
    unit: OHM_SIGN,
    round_to_unit: false,
    steps: &[
        PrefixStep::shown(1.0e9, 1.0e-9, "G"),
        PrefixStep::shown(1.0e6, 1.0e-6, "M"),
        PrefixStep::shown(1.0e3, 1.0e-3, "k"),
        PrefixStep::shown(1.0, 1.0, ""),
        PrefixStep::shown(0.0, 1.0e3, "m"),
    ],
};

/// Capacitance labels in farads, down to femtofarads.
pub const CAPACITANCE_PREFIXES: PrefixTable = PrefixTable {
    unit: "F",
    round_to_unit: false,
    steps: &[
        PrefixStep::shown(1.0, 1.0, ""),
        PrefixStep::shown(1.0e-3, 1.0e3, "m"),
        PrefixStep::shown(1.0e-6, 1.0e6, MICRO_SIGN),
        PrefixStep::shown(1.0e-9, 1.0e9, "n"),
        PrefixStep::shown(1.0e-12, 1.0e12, "p"),
        PrefixStep::shown(1.0e-15, 1.0e15, "f"),
    ],
};

/// Inductance labels in henries, from femtohenries up to (but excluding) a kilohenry.
pub const INDUCTANCE_PREFIXES: PrefixTable = PrefixTable {
    unit: "H",
    round_to_unit: false,
    steps: &[
        PrefixStep::omitted(1.0e3),
        PrefixStep::shown(1.0, 1.0, ""),
        PrefixStep::shown(1.0e-3, 1.0e3, "m"),
        PrefixStep::shown(1.0e-6, 1.0e6, MICRO_SIGN),
        PrefixStep::shown(1.0e-9, 1.0e9, "n"),
        PrefixStep::shown(1.0e-12, 1.0e12, "p"),
        PrefixStep::shown(1.0e-15, 1.0e15, "f"),
    ],
};

impl PrefixTable {
    /// Formats `value` with the first prefix whose threshold it meets.
    ///
    /// Returns `None` when the matching step suppresses the label or when the
    /// value falls below every threshold.
    #[must_use]
    pub fn format(&self, value: Scalar) -> Option<String> {
        format_with_prefix(value, self)
    }
}

/// Formats `value` using `table`; see [`PrefixTable::format`].
#[must_use]
pub fn format_with_prefix(value: Scalar, table: &PrefixTable) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let value = if table.round_to_unit { round_half_up(value) } else { value };
    let step = table.steps.iter().find(|step| at_least(value, step.threshold))?;
    let prefix = step.prefix?;
    // `+ 0.0` folds a negative zero into "0".
    let magnitude = round_half_up(value * step.scale) + 0.0;
    Some(format!("{magnitude:.0}{prefix}{}", table.unit))
}

fn round_half_up(value: Scalar) -> Scalar {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_rounds_half_up_into_kilohertz() {
        assert_eq!(FREQUENCY_PREFIXES.format(1500.0).as_deref(), Some("2kHz"));
        assert_eq!(FREQUENCY_PREFIXES.format(1000.0).as_deref(), Some("1kHz"));
        assert_eq!(FREQUENCY_PREFIXES.format(999.4).as_deref(), Some("999Hz"));
        assert_eq!(FREQUENCY_PREFIXES.format(2.5e9).as_deref(), Some("3GHz"));
    }

    #[test]
    fn sub_hertz_frequencies_round_to_zero_millihertz() {
        assert_eq!(FREQUENCY_PREFIXES.format(0.0005).as_deref(), Some("0mHz"));
        assert_eq!(FREQUENCY_PREFIXES.format(0.4).as_deref(), Some("0mHz"));
    }

    #[test]
    fn frequency_rounding_absorbs_two_pi_round_off() {
        let hz = crate::constants::linear_frequency(crate::constants::angular_frequency(1.0e4));
        assert_eq!(FREQUENCY_PREFIXES.format(hz).as_deref(), Some("10kHz"));
    }

    #[test]
    fn resistance_uses_ohm_sign() {
        assert_eq!(RESISTANCE_PREFIXES.format(1.0).as_deref(), Some("1\u{2126}"));
        assert_eq!(RESISTANCE_PREFIXES.format(1.0e5).as_deref(), Some("100k\u{2126}"));
        assert_eq!(RESISTANCE_PREFIXES.format(1.0e10).as_deref(), Some("10G\u{2126}"));
    }

    #[test]
    fn capacitance_handles_decades_computed_in_floating_point() {
        let milli = 10f64.powf(-3.0);
        assert_eq!(CAPACITANCE_PREFIXES.format(milli).as_deref(), Some("1mF"));
        assert_eq!(
            CAPACITANCE_PREFIXES.format(1.0e-4).as_deref(),
            Some("100\u{03bc}F")
        );
        assert_eq!(CAPACITANCE_PREFIXES.format(1.0e-7).as_deref(), Some("100nF"));
        assert_eq!(CAPACITANCE_PREFIXES.format(1.0e-15).as_deref(), Some("1fF"));
        assert_eq!(CAPACITANCE_PREFIXES.format(1.0e-16), None);
    }

    #[test]
    fn inductance_hides_kilohenries_and_below_femto() {
        assert_eq!(INDUCTANCE_PREFIXES.format(1.0e3), None);
        assert_eq!(INDUCTANCE_PREFIXES.format(100.0).as_deref(), Some("100H"));
        assert_eq!(INDUCTANCE_PREFIXES.format(1.0e-8).as_deref(), Some("10nH"));
        assert_eq!(INDUCTANCE_PREFIXES.format(1.0e-18), None);
    }

    #[test]
    fn non_finite_values_have_no_label() {
        assert_eq!(RESISTANCE_PREFIXES.format(Scalar::NAN), None);
        assert_eq!(CAPACITANCE_PREFIXES.format(Scalar::INFINITY), None);
    }
}
