// Copyright @yucwang 2023

//! Polynomial approximations of the trigonometric functions in two tiers.
//!
//! Every (function, tier) pair is a coefficient table, highest degree first,
//! evaluated with Horner's scheme. Valid inputs:
//! - sin, cos: [-pi/2, pi/2]
//! - tan: [-pi/4, pi/4]
//! - asin, acos: [0, 1]
//! - atan: [-1, 1]
//!
//! Outside these ranges the result drifts from the real function. Nothing is
//! checked.

use super::constants::{ Float, HALF_PI };

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tier {
    /// Tier 0: fewer terms.
    Fast,
    /// Tier 1: more terms, close to full f32 precision.
    Precise,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Form {
    /// `poly(x^2)`
    Even,
    /// `x * poly(x^2)`
    Odd,
    /// `sqrt(|1 - x|) * poly(x)`
    Root,
}

#[derive(Debug, Copy, Clone)]
struct Series {
    coeffs: &'static [Float],
    form: Form,
}

impl Series {
    #[inline(always)]
    fn eval(&self, val: Float) -> Float {
        match self.form {
            Form::Even => horner(self.coeffs, val * val),
            Form::Odd => horner(self.coeffs, val * val) * val,
            Form::Root => (1.0 - val).abs().sqrt() * horner(self.coeffs, val),
        }
    }
}

#[inline(always)]
fn horner(coeffs: &[Float], x: Float) -> Float {
    match coeffs.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, c| acc * x + c),
        None => 0.0,
    }
}

const SIN: [Series; 2] = [
    Series { coeffs: &[7.61e-03, -1.6605e-01, 1.0], form: Form::Odd },
    Series {
        coeffs: &[-2.39e-08, 2.7526e-06, -1.98409e-04, 8.3333315e-03, -1.666666664e-01, 1.0],
        form: Form::Odd,
    },
];

const COS: [Series; 2] = [
    Series { coeffs: &[3.705e-02, -4.967e-01, 1.0], form: Form::Even },
    Series {
        coeffs: &[-2.605e-07, 2.47609e-05, -1.3888397e-03, 4.16666418e-02, -4.999999963e-01, 1.0],
        form: Form::Even,
    },
];

const TAN: [Series; 2] = [
    Series { coeffs: &[2.033e-01, 3.1755e-01, 1.0], form: Form::Odd },
    Series {
        coeffs: &[
            9.5168091e-03, 2.900525e-03, 2.45650893e-02, 5.33740603e-02,
            1.333923995e-01, 3.333314036e-01, 1.0,
        ],
        form: Form::Odd,
    },
];

// Shared by asin and acos: asin(x) = pi/2 - acos(x).
const ACOS: [Series; 2] = [
    Series { coeffs: &[-0.0187293, 0.0742610, -0.2121144, 1.5707288], form: Form::Root },
    Series {
        coeffs: &[
            -0.0012624911, 0.0066700901, -0.0170881256, 0.0308918810,
            -0.0501743046, 0.0889789874, -0.2145988016, 1.5707963050,
        ],
        form: Form::Root,
    },
];

const ATAN: [Series; 2] = [
    Series {
        coeffs: &[0.0208351, -0.085133, 0.180141, -0.3302995, 0.999866],
        form: Form::Odd,
    },
    Series {
        coeffs: &[
            0.0028662257, -0.0161657367, 0.0429096138, -0.0752896400,
            0.1065626393, -0.1420889944, 0.1999355085, -0.3333314528, 1.0,
        ],
        form: Form::Odd,
    },
];

#[inline(always)]
fn pick(table: &[Series; 2], tier: Tier) -> &Series {
    match tier {
        Tier::Fast => &table[0],
        Tier::Precise => &table[1],
    }
}

#[inline]
pub fn fast_sin(val: Float, tier: Tier) -> Float {
    pick(&SIN, tier).eval(val)
}

#[inline]
pub fn fast_cos(val: Float, tier: Tier) -> Float {
    pick(&COS, tier).eval(val)
}

#[inline]
pub fn fast_tan(val: Float, tier: Tier) -> Float {
    pick(&TAN, tier).eval(val)
}

#[inline]
pub fn fast_asin(val: Float, tier: Tier) -> Float {
    HALF_PI - pick(&ACOS, tier).eval(val)
}

#[inline]
pub fn fast_acos(val: Float, tier: Tier) -> Float {
    pick(&ACOS, tier).eval(val)
}

#[inline]
pub fn fast_atan(val: Float, tier: Tier) -> Float {
    pick(&ATAN, tier).eval(val)
}

#[inline]
pub fn fast_sin0(val: Float) -> Float {
    fast_sin(val, Tier::Fast)
}

#[inline]
pub fn fast_sin1(val: Float) -> Float {
    fast_sin(val, Tier::Precise)
}

#[inline]
pub fn fast_cos0(val: Float) -> Float {
    fast_cos(val, Tier::Fast)
}

#[inline]
pub fn fast_cos1(val: Float) -> Float {
    fast_cos(val, Tier::Precise)
}

#[inline]
pub fn fast_tan0(val: Float) -> Float {
    fast_tan(val, Tier::Fast)
}

#[inline]
pub fn fast_tan1(val: Float) -> Float {
    fast_tan(val, Tier::Precise)
}

#[inline]
pub fn fast_asin0(val: Float) -> Float {
    fast_asin(val, Tier::Fast)
}

#[inline]
pub fn fast_asin1(val: Float) -> Float {
    fast_asin(val, Tier::Precise)
}

#[inline]
pub fn fast_acos0(val: Float) -> Float {
    fast_acos(val, Tier::Fast)
}

#[inline]
pub fn fast_acos1(val: Float) -> Float {
    fast_acos(val, Tier::Precise)
}

#[inline]
pub fn fast_atan0(val: Float) -> Float {
    fast_atan(val, Tier::Fast)
}

#[inline]
pub fn fast_atan1(val: Float) -> Float {
    fast_atan(val, Tier::Precise)
}
