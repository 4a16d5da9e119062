//! Drawing triangulation output.
//!
//! Geometry lives in a y-up math space centred on the origin. A [`Drawer`]
//! maps it onto some surface; [`SvgDrawer`] renders to an SVG document with
//! y pointing down and the origin at the top-left corner.

mod svg;

pub use svg::SvgDrawer;

use crate::bounds::Aabb2;
use crate::primitives::{Circle2, Edge2, Triangle2, Vec2};
use num_traits::Float;

/// Anything a [`Drawer`] knows how to draw.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a, F> {
    /// A single point, drawn as a small dot.
    Point(Vec2<F>),
    /// A line segment.
    Edge(Edge2<F>),
    /// A triangle outline.
    Triangle(&'a Triangle2<F>),
    /// A circle outline.
    Circle(Circle2<F>),
    /// A bounding box outline.
    Bounds(Aabb2<F>),
}

/// A drawing surface.
pub trait Drawer<F: Float> {
    /// Draws one entity in the given CSS color.
    fn draw(&mut self, entity: Entity<'_, F>, color: &str);

    /// Draws the outline of every triangle.
    fn draw_triangles(&mut self, triangles: &[Triangle2<F>], color: &str) {
        for tri in triangles {
            self.draw(Entity::Triangle(tri), color);
        }
    }

    /// Draws the circumcircle of every triangle.
    fn draw_circumcircles(&mut self, triangles: &[Triangle2<F>], color: &str) {
        for tri in triangles {
            self.draw(Entity::Circle(tri.circumcircle()), color);
        }
    }

    /// Draws every point.
    fn draw_points(&mut self, points: &[Vec2<F>], color: &str) {
        for &p in points {
            self.draw(Entity::Point(p), color);
        }
    }
}
