//! CSV export of sampled overlay curves.

use std::io::{self, Write};

use crate::constants::linear_frequency;
use crate::sweep::CurveSample;

/// Writes one row per overlay sample: angular and linear frequency, the
/// complex impedance, its magnitude and the quality envelope.
pub fn write_curve_csv<W: Write>(mut w: W, samples: &[CurveSample]) -> io::Result<()> {
    writeln!(w, "omega,frequency_hz,re_z,im_z,abs_z,quality")?;
    for s in samples {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            s.omega,
            linear_frequency(s.omega),
            s.impedance.re,
            s.impedance.im,
            s.impedance.norm(),
            s.quality,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuits::Network;
    use crate::sweep::CurveSampler;

    #[test]
    fn writes_header_and_one_row_per_sample() {
        let net = Network::resistor(50.0);
        let curves = CurveSampler::new(&net, 2, 1).unwrap().sample().unwrap();
        let mut out = Vec::new();
        write_curve_csv(&mut out, &curves.samples).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "omega,frequency_hz,re_z,im_z,abs_z,quality");
        assert_eq!(lines.len(), 1 + 3);

        let fields: Vec<f64> = lines[3].split(',').map(|f| f.parse().unwrap()).collect();
        assert_relative_eq!(fields[0], 10.0, max_relative = 1.0e-12);
        assert_relative_eq!(fields[1], 10.0 / std::f64::consts::TAU, max_relative = 1.0e-12);
        assert_relative_eq!(fields[2], 50.0);
        assert_relative_eq!(fields[3], 0.0);
        assert_relative_eq!(fields[4], 50.0);
        assert_relative_eq!(fields[5], 50.0);
    }
}
