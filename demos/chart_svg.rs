use std::fs::File;
use std::io::BufWriter;

use reactance_chart::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Six decades wide, E6 spacing, parallel RC overlay in black.
    let config = ChartConfig {
        major_columns: 6,
        spacing: GridSpacing::ESeries(6),
        ..ChartConfig::default()
    };
    let overlay = Network::parallel(Network::resistor(10.0e3), Network::capacitor(1.0e-6));
    let chart = ReactanceChart::new(config)?.with_overlay(overlay)?;

    let layout = PageLayout {
        color: String::from("#000000"),
        ..PageLayout::default()
    };
    let out = BufWriter::new(File::create("reactance_chart_e6.svg")?);
    let sink = SvgSink::new(out, layout, &chart.viewport())?;
    chart.render(sink)?;
    println!("wrote reactance_chart_e6.svg");
    Ok(())
}
