//! Integration test: sensitivity to initial conditions.
//!
//! Two curves started 0.01 apart in y, with identical parameters, are
//! stepped independently and must end up far apart.

use lz_core::Point;
use lz_sim::{LorenzCurve, LorenzParams};

#[test]
fn nearby_starts_diverge() {
    let params = LorenzParams::default();
    let mut a = LorenzCurve::new(Point::new(0.0, 20.00, 25.0), params);
    let mut b = LorenzCurve::new(Point::new(0.0, 20.01, 25.0), params);

    let initial_gap = a.state().distance(&b.state());
    assert!(initial_gap < 0.02);

    a.advance_by(10_000).expect("curve a stays finite");
    b.advance_by(10_000).expect("curve b stays finite");

    let gap = a.state().distance(&b.state());
    assert!(gap > 1.0, "separation after 10k steps was only {gap}");
}

#[test]
fn stepping_one_curve_does_not_move_the_other() {
    let params = LorenzParams::default();
    let mut a = LorenzCurve::new(Point::new(0.0, 20.00, 25.0), params);
    let b = LorenzCurve::new(Point::new(0.0, 20.01, 25.0), params);

    a.advance_by(1_000).unwrap();
    assert_eq!(b.state(), Point::new(0.0, 20.01, 25.0));
    assert_eq!(b.step_index(), 0);
}

#[test]
fn replaying_same_start_is_bit_identical() {
    let params = LorenzParams::default();
    let mut a = LorenzCurve::new(Point::new(0.0, 20.0, 12.0), params);
    let mut b = LorenzCurve::new(Point::new(0.0, 20.0, 12.0), params);

    for _ in 0..2_000 {
        let pa = a.advance().expect("curve a stays finite");
        let pb = b.advance().expect("curve b stays finite");
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        assert_eq!(pa.z.to_bits(), pb.z.to_bits());
    }
    assert_eq!(a.step_index(), 2_000);
}

#[test]
fn attractor_stays_bounded_at_reference_step() {
    let mut curve = LorenzCurve::new(Point::new(0.0, 20.0, 12.0), LorenzParams::default());
    for _ in 0..500 {
        let p = curve.advance_by(100).expect("reference run stays finite");
        assert!(p.x.abs() < 50.0 && p.y.abs() < 50.0 && p.z.abs() < 60.0);
    }
    assert_eq!(curve.step_index(), 50_000);
}
