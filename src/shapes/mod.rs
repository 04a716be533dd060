// Copyright @yucwang 2023

pub mod triangle;
pub mod triangle_mesh;
