// Copyright 2020 @TwoCookingMice

pub mod angle;
pub mod constants;
pub mod fast_trig;
pub mod scalar;

pub use angle::{ Degree, Radian };
pub use fast_trig::Tier;
pub use scalar::{ acos, approx_equals, asin, inv_sqrt, sign };
