/* Copyright 2020 @Yuchen Wong */

use nalgebra::{ Vector2, Vector3 };

pub type Float = f32;
pub type Vector2f = Vector2<Float>;
pub type Vector3f = Vector3<Float>;

pub const EPSILON: Float = 1e-4;

pub const POS_INFINITY: Float = Float::INFINITY;
pub const NEG_INFINITY: Float = Float::NEG_INFINITY;
pub const PI: Float = std::f32::consts::PI;
pub const TWO_PI: Float = 2.0 * PI;
pub const HALF_PI: Float = 0.5 * PI;
pub const DEG2RAD: Float = PI / 180.0;
pub const RAD2DEG: Float = 180.0 / PI;
pub const LOG2: Float = std::f32::consts::LN_2;
