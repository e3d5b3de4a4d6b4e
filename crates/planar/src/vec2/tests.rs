use super::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use proptest::prelude::*;

fn finite_vec() -> impl Strategy<Value = Vec2> {
    (-1.0e3f32..1.0e3, -1.0e3f32..1.0e3).prop_map(|(x, y)| Vec2::new(x, y))
}

fn wide_vec() -> impl Strategy<Value = Vec2> {
    (-1.0e30f32..1.0e30, -1.0e30f32..1.0e30).prop_map(|(x, y)| Vec2::new(x, y))
}

fn nonzero_vec() -> impl Strategy<Value = Vec2> {
    finite_vec().prop_filter("non-degenerate", |v| v.length() > 1e-3)
}

#[test]
fn fill_and_assign() {
    let mut v = Vec2::default();
    v.fill(1.5, -2.0).fill(3.0, 4.0);
    assert_eq!(v, Vec2::new(3.0, 4.0));
    let mut w = Vec2::ZERO;
    w.assign(&v);
    assert_eq!(w, v);
    // self-assignment through a copy is harmless
    let snapshot = w;
    w.assign(&snapshot);
    assert_eq!(w, v);
}

#[test]
fn length_of_3_4_is_5() {
    let v = Vec2::new(3.0, 4.0);
    assert!((v.length() - 5.0).abs() < 1e-6);
    assert!((v.length_sq() - 25.0).abs() < 1e-6);
}

#[test]
fn arithmetic_matches_operators() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(-3.0, 0.5);
    assert_eq!(a.add(b), a + b);
    assert_eq!(a.subtract(b), a - b);
    assert_eq!(a.scale(2.0), a * 2.0);
    assert_eq!(a.scale(2.0), 2.0 * a);
    assert_eq!(-a, Vec2::new(-1.0, -2.0));
    assert!((a.dot(b) - (-2.0)).abs() < 1e-6);

    let mut c = a;
    c += b;
    c -= b;
    c *= 3.0;
    assert!(c.are_equal(Vec2::new(3.0, 6.0)));
}

#[test]
fn normalize_zero_is_non_finite_and_try_normalize_rejects_it() {
    let z = Vec2::ZERO;
    let n = z.normalize();
    assert!(!n.x.is_finite());
    assert!(z.try_normalize(EPSILON).is_none());
    let u = Vec2::new(0.0, 2.0).try_normalize(EPSILON).unwrap();
    assert!(u.are_equal(Vec2::new(0.0, 1.0)));
}

#[test]
fn are_equal_uses_strict_tolerance() {
    let a = Vec2::new(1.0, 1.0);
    assert!(a.are_equal(Vec2::new(1.0 + EPSILON * 0.5, 1.0)));
    assert!(!a.are_equal(Vec2::new(1.0 + EPSILON * 2.0, 1.0)));
    assert!(!a.are_equal(Vec2::new(1.0, 0.9)));
    assert!(a.are_equal_eps(Vec2::new(1.2, 0.9), 0.25));
}

#[test]
fn are_equal_holds_for_large_coordinates() {
    for v in [Vec2::new(4096.0, 0.0), Vec2::new(-5000.0, 1.0e6)] {
        assert!(v.are_equal(v), "{v:?}");
        // zero tolerance: nothing is strictly within 0
        assert!(!v.are_equal_eps(v, 0.0));
    }
}

#[test]
fn rotate_quarter_turn_anticlockwise() {
    let v = Vec2::new(1.0, 0.0).rotate_by(90.0, Vec2::ZERO);
    assert!(v.are_equal(Vec2::new(0.0, 1.0)), "{v:?}");
}

#[test]
fn rotate_about_pivot() {
    // (2,1) around (1,1) by 180° -> (0,1)
    let v = Vec2::new(2.0, 1.0).rotate_by(180.0, Vec2::new(1.0, 1.0));
    assert!(v.are_equal(Vec2::new(0.0, 1.0)), "{v:?}");
    // the pivot itself is fixed
    let c = Vec2::new(-3.0, 7.0);
    assert!(c.rotate_by(33.0, c).are_equal(c));
}

#[test]
fn degrees_between_cases() {
    let x = Vec2::new(1.0, 0.0);
    let y = Vec2::new(0.0, 1.0);
    assert_eq!(x.degrees_between(x), 0.0);
    assert!((x.degrees_between(y) - 90.0).abs() < 1e-3);
    assert!((x.degrees_between(-x) - 180.0).abs() < 1e-3);
    // non-unit inputs
    let d = Vec2::new(3.0, 3.0);
    assert!((x.scale(5.0).degrees_between(d) - 45.0).abs() < 1e-3);
    // a single zero input has no defined angle
    assert!(Vec2::ZERO.degrees_between(x).is_nan());
    assert_eq!(Vec2::ZERO.degrees_between(Vec2::ZERO), 0.0);
}

#[test]
fn degrees_between_never_nan_for_nearly_parallel() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..256 {
        let theta: f32 = rng.gen::<f32>() * std::f32::consts::TAU;
        let a = Vec2::new(theta.cos(), theta.sin());
        let b = a.scale(1.0 + rng.gen_range(0.0..1e-3));
        let deg = a.degrees_between(b);
        assert!(deg.is_finite() && deg < 1.0, "{deg}");
    }
}

#[test]
fn distance_and_midpoint() {
    let a = Vec2::ZERO;
    let b = Vec2::new(4.0, 0.0);
    assert!((a.distance_between(b) - 4.0).abs() < 1e-6);
    assert!((b.distance_between(a) - 4.0).abs() < 1e-6);
    assert!(a.midpoint_between(b).are_equal(Vec2::new(2.0, 0.0)));
    // coincident endpoints
    let p = Vec2::new(1.0, -1.0);
    assert_eq!(p.midpoint_between(p), p);
}

#[test]
fn transform_translation_moves_points() {
    let t = Mat3::translation(3.0, 4.0);
    assert!(Vec2::ZERO.transform(&t).are_equal(Vec2::new(3.0, 4.0)));
    assert!(Vec2::new(1.0, 1.0)
        .transform(&t)
        .are_equal(Vec2::new(4.0, 5.0)));
    assert_eq!(Vec2::new(1.0, 1.0).transform(&t), t * Vec2::new(1.0, 1.0));
}

#[test]
fn transform_coord_divides_by_w() {
    let p = Vec2::new(2.0, 6.0);
    // affine: identical to transform
    let t = Mat3::translation(1.0, -1.0);
    assert_eq!(p.transform_coord(&t), Some(p.transform(&t)));
    // w = 0.5 everywhere
    let h = Mat3::identity().scalar_multiply(0.5);
    let q = p.transform_coord(&h).unwrap();
    assert!(q.are_equal(p), "{q:?}");
    // w = x: (0, y) maps to infinity
    let mut proj = Mat3::identity();
    proj[2] = 1.0;
    proj[8] = 0.0;
    assert!(Vec2::new(0.0, 3.0).transform_coord(&proj).is_none());
    let r = Vec2::new(2.0, 6.0).transform_coord(&proj).unwrap();
    assert!(r.are_equal(Vec2::new(1.0, 3.0)), "{r:?}");
}

#[test]
fn array_and_tuple_conversions() {
    let v: Vec2 = [1.0, 2.0].into();
    let w: Vec2 = (1.0, 2.0).into();
    assert_eq!(v, w);
    let a: [Scalar; 2] = v.into();
    assert_eq!(a, [1.0, 2.0]);
}

proptest! {
    #[test]
    fn length_squared_matches_length(v in finite_vec()) {
        let l = v.length();
        let tol = 1e-4 * v.length_sq().max(1.0);
        prop_assert!((l * l - v.length_sq()).abs() <= tol);
    }

    #[test]
    fn normalized_has_unit_length(v in nonzero_vec()) {
        prop_assert!((v.normalize().length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn are_equal_reflexive_and_symmetric(a in wide_vec(), b in wide_vec()) {
        prop_assert!(a.are_equal(a));
        prop_assert_eq!(a.are_equal(b), b.are_equal(a));
    }

    #[test]
    fn are_equal_symmetric_near_tolerance(
        a in finite_vec(),
        dx in -2.0 * EPSILON..2.0 * EPSILON,
    ) {
        let b = Vec2::new(a.x + dx, a.y);
        prop_assert_eq!(a.are_equal(b), b.are_equal(a));
    }

    #[test]
    fn rotation_preserves_distance_to_pivot(
        v in finite_vec(),
        c in finite_vec(),
        deg in -720.0f32..720.0,
    ) {
        let r = v.rotate_by(deg, c);
        let before = v.distance_between(c);
        let after = r.distance_between(c);
        prop_assert!((before - after).abs() <= 1e-3 * before.max(1.0));
    }

    #[test]
    fn midpoint_is_equidistant(a in finite_vec(), b in finite_vec()) {
        let m = a.midpoint_between(b);
        let da = m.distance_between(a);
        let db = m.distance_between(b);
        prop_assert!((da - db).abs() <= 1e-3 * da.max(1.0));
    }
}
