// Copyright @yucwang 2023

use super::constants::{ Float, DEG2RAD, RAD2DEG };

use std::ops::{ Add, Mul, Neg, Sub };

/// An angle stored in radians. Keeps radians and degrees from being mixed
/// up when passed around as bare floats.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Radian(Float);

/// An angle stored in degrees.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Degree(Float);

impl Radian {
    pub fn new(rad: Float) -> Self {
        Radian(rad)
    }

    pub fn value_radians(&self) -> Float {
        self.0
    }

    pub fn value_degrees(&self) -> Float {
        self.0 * RAD2DEG
    }
}

impl Degree {
    pub fn new(deg: Float) -> Self {
        Degree(deg)
    }

    pub fn value_degrees(&self) -> Float {
        self.0
    }

    pub fn value_radians(&self) -> Float {
        self.0 * DEG2RAD
    }
}

impl From<Degree> for Radian {
    fn from(deg: Degree) -> Self {
        Radian(deg.value_radians())
    }
}

impl From<Radian> for Degree {
    fn from(rad: Radian) -> Self {
        Degree(rad.value_degrees())
    }
}

impl From<Radian> for Float {
    fn from(rad: Radian) -> Self {
        rad.0
    }
}

macro_rules! impl_angle_ops {
    ($t:ident) => {
        impl Add for $t {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                $t(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                $t(self.0 - rhs.0)
            }
        }

        impl Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                $t(-self.0)
            }
        }

        impl Mul<Float> for $t {
            type Output = $t;
            fn mul(self, rhs: Float) -> $t {
                $t(self.0 * rhs)
            }
        }
    };
}

impl_angle_ops!(Radian);
impl_angle_ops!(Degree);
