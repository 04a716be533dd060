// Copyright @yucwang 2021

pub mod tangent_frame;
