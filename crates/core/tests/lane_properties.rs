//! Randomized checks of the lane-wise operations against their scalar definitions.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vector_math_core::{
    any_lane_negative, cos, equal, is_finite, lerp, make_finite, nearly_equal,
    round_to_nearest_int, sin, Vec2, Vec3, Vec4, VecN, EPSILON, HALF_PI, PI,
};

const SAMPLES: usize = 2_000;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_vec<const D: usize>(rng: &mut StdRng, range: f32) -> VecN<D> {
    VecN::<D>::from_fn(|_, _| rng.random_range(-range..range))
}

#[test]
fn test_equal_reflexive_and_symmetric() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..SAMPLES {
        let a: Vec4 = random_vec(&mut rng, 1000.0);
        let b: Vec4 = random_vec(&mut rng, 1000.0);
        assert!(equal(a, a));
        assert_eq!(equal(a, b), equal(b, a));
    }

    let mut with_nan = Vec3::new(1.0, 2.0, 3.0);
    with_nan.y = f32::NAN;
    assert!(!equal(with_nan, with_nan));
}

#[test]
fn test_nearly_equal_epsilon_boundary() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let a: Vec2 = random_vec(&mut rng, 1.0);
        let jitter: Vec2 = random_vec(&mut rng, EPSILON * 0.25);
        // |a| < 1 so the ulp is at most EPSILON / 2; the perturbed lanes stay
        // strictly within EPSILON of the originals after rounding.
        assert!(nearly_equal(a, a + jitter), "{a:?} vs {jitter:?}");
    }

    let a = Vec4::new(0.0, 0.0, 0.0, 0.0);
    for lane in 0..4 {
        let mut b = a;
        b[lane] += EPSILON;
        assert!(!nearly_equal(a, b), "lane {lane} at exactly epsilon");
        assert!(!nearly_equal(b, a));
    }
}

#[test]
fn test_round_matches_scalar_and_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let v: Vec4 = random_vec(&mut rng, 1.0e6);
        let rounded = round_to_nearest_int(v);
        for i in 0..4 {
            assert_eq!(rounded[i], v[i].round_ties_even());
            assert_eq!(rounded[i].fract(), 0.0);
        }
        assert!(equal(round_to_nearest_int(rounded), rounded));
    }

    // Every exact tie resolves to the even neighbour
    for n in -50..50 {
        let tie = n as f32 + 0.5;
        let r = round_to_nearest_int(Vec2::new(tie, -tie));
        assert_eq!(r.x % 2.0, 0.0, "{tie} -> {}", r.x);
        assert_eq!(r.y % 2.0, 0.0, "{} -> {}", -tie, r.y);
    }
}

#[test]
fn test_any_lane_negative_matches_lane_scan() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let v: Vec2 = random_vec(&mut rng, 10.0);
        assert_eq!(any_lane_negative(v), v.x < 0.0 || v.y < 0.0);
    }
}

#[test]
fn test_trig_reference_angles() {
    let angles = Vec3::new(0.0, HALF_PI, PI);
    let s = sin(angles);
    let c = cos(angles);
    assert!((s - Vec3::new(0.0, 1.0, 0.0)).amax() < 1e-6);
    assert!((c - Vec3::new(1.0, 0.0, -1.0)).amax() < 1e-6);
}

#[test]
fn test_pythagorean_identity() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..SAMPLES {
        let angles: Vec3 = random_vec(&mut rng, 2.0 * PI);
        let s = sin(angles);
        let c = cos(angles);
        let ones = s.component_mul(&s) + c.component_mul(&c);
        assert!((ones - Vec3::repeat(1.0)).amax() < 1e-5, "{angles:?}");
    }
}

#[test]
fn test_make_finite_always_finite() {
    let specials = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.0, -1.5];
    for &x in &specials {
        for &y in &specials {
            let v = Vec4::new(x, y, 1.0, f32::NAN);
            assert!(is_finite(make_finite(v)));
        }
    }
}

#[test]
fn test_lerp_stays_between_endpoints() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let a: Vec3 = random_vec(&mut rng, 100.0);
        let b: Vec3 = random_vec(&mut rng, 100.0);
        let t: f32 = rng.random_range(0.0..1.0);
        let p = lerp(a, b)(t);
        for i in 0..3 {
            let (lo, hi) = (a[i].min(b[i]), a[i].max(b[i]));
            assert!(p[i] >= lo - 1e-4 && p[i] <= hi + 1e-4);
        }
    }
}
