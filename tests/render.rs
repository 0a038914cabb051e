use std::cell::Cell;
use std::rc::Rc;

use reactance_chart::chart::{ChartConfig, FamilyKind, ReactanceChart};
use reactance_chart::circuits::Network;
use reactance_chart::constants::{IMPEDANCE_CURVE_WIDTH, MAJOR_LINE_WIDTH, QUALITY_CURVE_WIDTH};
use reactance_chart::errors::ChartError;
use reactance_chart::render::{DrawCommand, DrawingSink, PageLayout, RecordingSink, SvgSink};

#[test]
fn families_are_drawn_in_order_before_the_curves() {
    let chart = ReactanceChart::reference().unwrap();
    let mut sink = RecordingSink::new();
    chart.draw(&mut sink).unwrap();
    let paths = sink.stroked_paths();

    let mut offset = 0;
    for kind in FamilyKind::ALL {
        let lines = chart.lines(kind).unwrap();
        for (line, path) in lines.iter().zip(&paths[offset..]) {
            assert_eq!(path.points, vec![line.segment.start, line.segment.end]);
        }
        offset += lines.len();
    }
    assert_eq!(paths.len(), offset + 2);

    let impedance = &paths[offset];
    let quality = &paths[offset + 1];
    assert_eq!(impedance.width, IMPEDANCE_CURVE_WIDTH);
    assert_eq!(quality.width, QUALITY_CURVE_WIDTH);
    assert_eq!(impedance.points.len(), 801);
    assert_eq!(quality.points.len(), 801);
}

#[test]
fn labels_follow_their_lines() {
    let chart = ReactanceChart::reference().unwrap();
    let commands = chart.render(RecordingSink::new()).unwrap();

    // Every label comes right after the stroke of the line it names.
    for (i, command) in commands.iter().enumerate() {
        if let DrawCommand::Label(_) = command {
            assert_eq!(commands[i - 1], DrawCommand::Stroke);
            assert_eq!(commands[i - 2], DrawCommand::StrokeWidth(MAJOR_LINE_WIDTH));
        }
    }

    let texts: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Label(label) => Some(label.text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts.first(), Some(&"1Hz"));
    assert!(texts.contains(&"1k\u{2126}"));
    assert!(texts.contains(&"1\u{03bc}F"));
    assert!(texts.contains(&"100mH"));
}

#[test]
fn svg_document_has_one_path_per_stroke() {
    let chart = ReactanceChart::reference().unwrap();
    let sink = SvgSink::new(Vec::new(), PageLayout::default(), &chart.viewport()).unwrap();
    let svg = String::from_utf8(chart.render(sink).unwrap()).unwrap();

    let lines: usize = FamilyKind::ALL
        .iter()
        .map(|kind| chart.lines(*kind).unwrap().len())
        .sum();
    let labels: usize = FamilyKind::ALL
        .iter()
        .map(|kind| chart.lines(*kind).unwrap().iter().filter(|l| l.label.is_some()).count())
        .sum();
    assert_eq!(svg.matches("<path").count(), lines + 2);
    assert_eq!(svg.matches("<text").count(), labels);
    assert!(svg.contains(r#"width="612pt" height="792pt""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn rejected_configuration_never_reaches_the_sink() {
    let config = ChartConfig { major_rows: 0, ..ChartConfig::default() };
    assert!(matches!(ReactanceChart::new(config), Err(ChartError::Configuration(_))));

    let bad = Network::series(Network::resistor(50.0), Network::inductor(f64::NAN));
    let err = ReactanceChart::new(ChartConfig::default())
        .and_then(|chart| chart.with_overlay(bad))
        .unwrap_err();
    assert!(matches!(err, ChartError::Domain { quantity: "inductance", .. }));
}

/// Sink whose strokes fail; records whether it was finalized.
struct FailingSink {
    finished: Rc<Cell<bool>>,
}

impl DrawingSink for FailingSink {
    type Output = ();

    fn move_to(&mut self, _: reactance_chart::math::Point) {}
    fn line_to(&mut self, _: reactance_chart::math::Point) {}
    fn set_stroke_width(&mut self, _: f64) {}

    fn stroke(&mut self) -> Result<(), ChartError> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
    }

    fn draw_label(&mut self, _: &reactance_chart::chart::Label) -> Result<(), ChartError> {
        Ok(())
    }

    fn finish(self) -> Result<(), ChartError> {
        self.finished.set(true);
        Ok(())
    }
}

#[test]
fn sink_is_finalized_even_when_drawing_fails() {
    let chart = ReactanceChart::new(ChartConfig::default()).unwrap();
    let finished = Rc::new(Cell::new(false));
    let sink = FailingSink { finished: Rc::clone(&finished) };
    let err = chart.render(sink).unwrap_err();
    assert!(matches!(err, ChartError::Io(_)));
    assert!(finished.get());
}

#[test]
fn parallel_lc_pole_breaks_the_impedance_stroke() {
    // 10 mH || 10 mF resonates at exactly 100 rad/s, a grid point.
    let overlay = Network::parallel(Network::inductor(1.0e-2), Network::capacitor(1.0e-2));
    let chart = ReactanceChart::new(ChartConfig::default())
        .unwrap()
        .with_overlay(overlay)
        .unwrap();
    let mut sink = RecordingSink::new();
    chart.draw(&mut sink).unwrap();
    let paths = sink.stroked_paths();

    let lines: usize = FamilyKind::ALL
        .iter()
        .map(|kind| chart.lines(*kind).unwrap().len())
        .sum();
    assert_eq!(paths.len(), lines + 3);
    let (left, right) = (&paths[lines], &paths[lines + 1]);
    assert_eq!(left.width, IMPEDANCE_CURVE_WIDTH);
    assert_eq!(right.width, IMPEDANCE_CURVE_WIDTH);
    assert_eq!(left.points.len() + right.points.len(), 800);
    assert!(left.points.iter().all(|p| p.x < 2.0));
    assert!(right.points.iter().all(|p| p.x > 2.0));
    assert_eq!(paths[lines + 2].points.len(), 801);
}
