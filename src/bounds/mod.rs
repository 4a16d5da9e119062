//! Axis-aligned bounds and their derivation from point sets.

mod aabb;

pub use aabb::Aabb2;
