use reactance_chart::circuits::Network;
use reactance_chart::constants::{angular_frequency, linear_frequency};
use reactance_chart::sweep::CurveSampler;

fn main() -> Result<(), reactance_chart::errors::ChartError> {
    // Series RLC from the reference chart: 100 mH, 50 Ω, 100 nF.
    let net = Network::reference_overlay();
    println!("network: {net}");

    let resonance = 1.0 / (0.1_f64 * 100.0e-9).sqrt();
    println!("resonance: {:.1} Hz", linear_frequency(resonance));

    for hz in [10.0, 100.0, 503.3, 1.0e3, 1.0e4] {
        let omega = angular_frequency(hz);
        let z = net.impedance(omega)?;
        println!(
            "{hz:>8.1} Hz  |Z| = {:.6e}  quality = {:.6e}",
            z.norm(),
            net.quality(omega)?
        );
    }

    // Sparse sweep over the chart's eight decades.
    let curves = CurveSampler::new(&net, 2, 8)?.sample()?;
    println!("omega(rad/s), Z_real(ohm), Z_imag(ohm)");
    for s in &curves.samples {
        println!("{:.6e}, {:.6e}, {:.6e}", s.omega, s.impedance.re, s.impedance.im);
    }
    Ok(())
}
