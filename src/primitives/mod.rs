//! Floating-point geometric primitives and operations.

mod circle2;
mod edge2;
mod triangle2;
mod vec2;

pub use circle2::Circle2;
pub use edge2::Edge2;
pub use triangle2::Triangle2;
pub use vec2::{Vec2, EPS};
