// Copyright @yucwang 2023

use super::angle::Radian;
use super::constants::{ Float, HALF_PI, PI };

// Rounding can push a normalized dot product slightly outside [-1, 1];
// clamp instead of letting NaN into the renderer.
pub fn acos(val: Float) -> Radian {
    if -1.0 < val {
        if val < 1.0 {
            Radian::new(val.acos())
        } else {
            Radian::new(0.0)
        }
    } else {
        Radian::new(PI)
    }
}

pub fn asin(val: Float) -> Radian {
    if -1.0 < val {
        if val < 1.0 {
            Radian::new(val.asin())
        } else {
            Radian::new(HALF_PI)
        }
    } else {
        Radian::new(-HALF_PI)
    }
}

pub fn sign(val: Float) -> Float {
    if val > 0.0 {
        return 1.0;
    }

    if val < 0.0 {
        return -1.0;
    }

    0.0
}

/// Exact `1 / sqrt(val)`. No domain check: zero gives infinity and
/// negative input gives NaN.
#[inline]
pub fn inv_sqrt(val: Float) -> Float {
    1.0 / val.sqrt()
}

pub fn approx_equals(a: Float, b: Float, tolerance: Float) -> bool {
    (b - a).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acos_clamps() {
        assert_eq!(acos(1.0).value_radians(), 0.0);
        assert_eq!(acos(1.0001).value_radians(), 0.0);
        assert_eq!(acos(42.0).value_radians(), 0.0);
        assert_eq!(acos(-1.0).value_radians(), PI);
        assert_eq!(acos(-7.5).value_radians(), PI);
    }

    #[test]
    fn test_acos_inside_domain() {
        let mut x: Float = -0.999;
        while x < 1.0 {
            assert!((acos(x).value_radians() - x.acos()).abs() < 1e-6);
            x += 0.037;
        }
    }

    #[test]
    fn test_asin_clamps() {
        assert_eq!(asin(1.0).value_radians(), HALF_PI);
        assert_eq!(asin(3.0).value_radians(), HALF_PI);
        assert_eq!(asin(-1.0).value_radians(), -HALF_PI);
        assert_eq!(asin(-1.5).value_radians(), -HALF_PI);
        assert!((asin(0.5).value_radians() - (0.5 as Float).asin()).abs() < 1e-6);
    }

    #[test]
    fn test_nan_falls_through_to_lower_bound() {
        assert_eq!(acos(Float::NAN).value_radians(), PI);
        assert_eq!(asin(Float::NAN).value_radians(), -HALF_PI);
        assert_eq!(sign(Float::NAN), 0.0);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(5.0), 1.0);
        assert_eq!(sign(-3.2), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(1e-30), 1.0);
    }

    #[test]
    fn test_inv_sqrt() {
        assert!((inv_sqrt(4.0) - 0.5).abs() < 1e-6);
        assert!((inv_sqrt(1.0) - 1.0).abs() < 1e-6);
        assert!((inv_sqrt(0.25) - 2.0).abs() < 1e-6);
        assert!(inv_sqrt(0.0).is_infinite());
        assert!(inv_sqrt(-1.0).is_nan());
    }

    #[test]
    fn test_approx_equals() {
        let samples: [(Float, Float, Float); 5] = [
            (1.0, 1.05, 0.1),
            (1.0, 1.5, 0.1),
            (-2.0, 2.0, 4.0),
            (0.3, 0.3, 0.0),
            (1e6, 1e6 + 1.0, 0.5),
        ];

        for &(a, b, t) in samples.iter() {
            assert_eq!(approx_equals(a, b, t), approx_equals(b, a, t));
            assert!(approx_equals(a, a, 0.0));
        }

        assert_eq!(approx_equals(1.0, 1.05, 0.1), true);
        assert_eq!(approx_equals(1.0, 1.5, 0.1), false);
        assert_eq!(approx_equals(1.0, Float::NAN, 1.0), false);
    }

    #[test]
    fn test_deterministic() {
        for &x in [-2.0 as Float, -0.3, 0.0, 0.7, 9.0].iter() {
            assert_eq!(acos(x).value_radians().to_bits(), acos(x).value_radians().to_bits());
            assert_eq!(asin(x).value_radians().to_bits(), asin(x).value_radians().to_bits());
            assert_eq!(sign(x).to_bits(), sign(x).to_bits());
        }
    }
}
