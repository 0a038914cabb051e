use proptest::prelude::*;
use reactance_chart::chart::{Edge, FamilyKind, Viewport, CONTAINMENT_TOLERANCE};
use reactance_chart::grid::{ValueGrid, E_SERIES_SIZES};
use reactance_chart::math::decade;

fn viewport() -> impl Strategy<Value = Viewport> {
    (1_u32..=12, 1_u32..=12).prop_map(|(c, r)| Viewport::new(c, r).unwrap())
}

fn lies_on(vp: &Viewport, edge: Edge, x: f64, y: f64) -> bool {
    let tol = CONTAINMENT_TOLERANCE;
    match edge {
        Edge::Left => x.abs() <= tol,
        Edge::Right => (x - f64::from(vp.columns())).abs() <= tol,
        Edge::Bottom => y.abs() <= tol,
        Edge::Top => (y - f64::from(vp.rows())).abs() <= tol,
    }
}

proptest! {
    #[test]
    fn capacitance_lines_stay_inside(vp in viewport(), t in 0.0_f64..=1.0) {
        let span = f64::from(vp.columns() + vp.rows());
        let farads = 10f64.powf(-span * t);
        let seg = FamilyKind::Capacitance.clip(&vp, farads).unwrap();
        let seg = seg.expect("every value in range is visible");
        prop_assert!(vp.contains(&seg.start, CONTAINMENT_TOLERANCE));
        prop_assert!(vp.contains(&seg.end, CONTAINMENT_TOLERANCE));
        prop_assert!(lies_on(&vp, seg.entry, seg.start.x, seg.start.y));
        prop_assert!(lies_on(&vp, seg.exit, seg.end.x, seg.end.y));
        prop_assert!(matches!(seg.entry, Edge::Left | Edge::Top));
        prop_assert!(matches!(seg.exit, Edge::Bottom | Edge::Right));
        // Slope -1 in log-log space.
        let dx = seg.end.x - seg.start.x;
        let dy = seg.end.y - seg.start.y;
        prop_assert!((dx + dy).abs() <= 1.0e-9 * (1.0 + dx.abs()));
    }

    #[test]
    fn inductance_lines_stay_inside(vp in viewport(), t in 0.0_f64..=1.0) {
        let low = -f64::from(vp.columns());
        let high = f64::from(vp.rows());
        let henries = 10f64.powf(low + (high - low) * t);
        let seg = FamilyKind::Inductance.clip(&vp, henries).unwrap();
        let seg = seg.expect("every value in range is visible");
        prop_assert!(vp.contains(&seg.start, CONTAINMENT_TOLERANCE));
        prop_assert!(vp.contains(&seg.end, CONTAINMENT_TOLERANCE));
        prop_assert!(lies_on(&vp, seg.entry, seg.start.x, seg.start.y));
        prop_assert!(lies_on(&vp, seg.exit, seg.end.x, seg.end.y));
        prop_assert!(matches!(seg.entry, Edge::Left | Edge::Bottom));
        prop_assert!(matches!(seg.exit, Edge::Right | Edge::Top));
        let dx = seg.end.x - seg.start.x;
        let dy = seg.end.y - seg.start.y;
        prop_assert!((dx - dy).abs() <= 1.0e-9 * (1.0 + dx.abs()));
    }

    #[test]
    fn diagonals_outside_the_range_are_dropped(vp in viewport(), extra in 0.01_f64..5.0) {
        let span = f64::from(vp.columns() + vp.rows());
        let too_big = 10f64.powf(extra);
        let too_small = 10f64.powf(-span - extra);
        prop_assert!(FamilyKind::Capacitance.clip(&vp, too_big).unwrap().is_none());
        prop_assert!(FamilyKind::Capacitance.clip(&vp, too_small).unwrap().is_none());
        let below = 10f64.powf(-f64::from(vp.columns()) - extra);
        let above = 10f64.powf(f64::from(vp.rows()) + extra);
        prop_assert!(FamilyKind::Inductance.clip(&vp, below).unwrap().is_none());
        prop_assert!(FamilyKind::Inductance.clip(&vp, above).unwrap().is_none());
    }

    #[test]
    fn regime_thresholds_are_inclusive(vp in viewport()) {
        let columns = i64::from(vp.columns());
        let rows = i64::from(vp.rows());

        let seg = FamilyKind::Capacitance.clip(&vp, decade(-columns)).unwrap().unwrap();
        prop_assert_eq!(seg.exit, Edge::Bottom);
        let seg = FamilyKind::Capacitance.clip(&vp, decade(-rows)).unwrap().unwrap();
        prop_assert_eq!(seg.entry, Edge::Left);

        let seg = FamilyKind::Inductance.clip(&vp, 1.0).unwrap().unwrap();
        prop_assert_eq!(seg.entry, Edge::Bottom);
        let seg = FamilyKind::Inductance.clip(&vp, decade(rows - columns)).unwrap().unwrap();
        prop_assert_eq!(seg.exit, Edge::Right);
    }

    #[test]
    fn e_series_grids_increase_by_a_decade_per_period(
        size in prop::sample::select(E_SERIES_SIZES.to_vec()),
        start in -40_i64..40,
    ) {
        let grid = ValueGrid::from_e_series(size).unwrap();
        let period = grid.period() as i64;
        for i in start..start + 2 * period {
            prop_assert!(grid.value(i) < grid.value(i + 1));
            let ratio = grid.value(i + period) / grid.value(i);
            prop_assert!((ratio - 10.0).abs() <= 1.0e-9);
            prop_assert_eq!(grid.is_major(i), i.rem_euclid(period) == 0);
        }
    }

    #[test]
    fn uniform_grids_are_log_uniform(steps in 1_u32..200, i in -500_i64..500) {
        let grid = ValueGrid::uniform(steps).unwrap();
        let step = grid.log_value(i + 1) - grid.log_value(i);
        prop_assert!((step - 1.0 / f64::from(steps)).abs() <= 1.0e-9);
    }
}
