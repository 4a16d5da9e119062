//! SVG backend for [`Drawer`].

use super::{Drawer, Entity};
use crate::primitives::Vec2;
use num_traits::Float;
use std::fmt::Write;

/// Radius of a drawn point, in pixels.
const POINT_SIZE: f64 = 2.0;

/// Collects drawn entities into an SVG document of a fixed size.
///
/// Math coordinates are offset by half the surface size and y is flipped,
/// so the origin lands in the middle of the image.
///
/// ```
/// use triangulum::render::{Drawer, Entity, SvgDrawer};
/// use triangulum::Vec2;
///
/// let mut svg = SvgDrawer::new(200.0, 100.0);
/// svg.draw(Entity::Point(Vec2::new(0.0_f64, 0.0)), "#ff0000");
/// let doc = svg.finish();
/// assert!(doc.contains(r##"<circle cx="100" cy="50" r="2" fill="#ff0000"/>"##));
/// ```
#[derive(Debug, Clone)]
pub struct SvgDrawer {
    width: f64,
    height: f64,
    content: String,
}

impl SvgDrawer {
    /// Creates an empty surface of `width × height` pixels.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content: String::new(),
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Maps a math-space position to pixel coordinates.
    pub fn to_pixel<F: Float>(&self, p: Vec2<F>) -> (f64, f64) {
        let x = p.x.to_f64().unwrap_or(f64::NAN);
        let y = p.y.to_f64().unwrap_or(f64::NAN);
        (x + self.width / 2.0, -y + self.height / 2.0)
    }

    fn polygon<F: Float>(&mut self, points: &[Vec2<F>], color: &str) {
        let pts = points
            .iter()
            .map(|&p| {
                let (x, y) = self.to_pixel(p);
                format!("{},{}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.content,
            r#"<polygon points="{}" fill="none" stroke="{}"/>"#,
            pts, color
        );
    }

    /// Returns the finished SVG document.
    pub fn finish(self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">
{content}</svg>
"#,
            w = self.width,
            h = self.height,
            content = self.content
        )
    }
}

impl<F: Float> Drawer<F> for SvgDrawer {
    fn draw(&mut self, entity: Entity<'_, F>, color: &str) {
        match entity {
            Entity::Point(p) => {
                let (x, y) = self.to_pixel(p);
                let _ = writeln!(
                    self.content,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    x, y, POINT_SIZE, color
                );
            }
            Entity::Edge(e) => {
                let (x1, y1) = self.to_pixel(e.a);
                let (x2, y2) = self.to_pixel(e.b);
                let _ = writeln!(
                    self.content,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                    x1, y1, x2, y2, color
                );
            }
            Entity::Triangle(t) => self.polygon(&t.vertices(), color),
            Entity::Circle(c) => {
                let (x, y) = self.to_pixel(c.center);
                let r = c.radius.to_f64().unwrap_or(f64::NAN);
                let _ = writeln!(
                    self.content,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}"/>"#,
                    x, y, r, color
                );
            }
            Entity::Bounds(b) => {
                let (tl, tr, bl, br) = b.corners();
                self.polygon(&[tl, tr, br, bl], color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Aabb2;
    use crate::primitives::{Circle2, Edge2, Triangle2};

    #[test]
    fn test_pixel_transform_flips_y() {
        let svg = SvgDrawer::new(400.0, 300.0);
        assert_eq!(svg.to_pixel(Vec2::new(0.0_f64, 0.0)), (200.0, 150.0));
        assert_eq!(svg.to_pixel(Vec2::new(10.0_f64, 20.0)), (210.0, 130.0));
        assert_eq!(svg.to_pixel(Vec2::new(-200.0_f64, 150.0)), (0.0, 0.0));
    }

    #[test]
    fn test_draws_each_entity() {
        let mut svg = SvgDrawer::new(100.0, 100.0);
        let tri = Triangle2::new(
            Vec2::new(0.0_f64, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        )
        .unwrap();

        svg.draw(Entity::Triangle(&tri), "#000000");
        svg.draw(Entity::Edge(Edge2::new(tri.a(), tri.b())), "red");
        svg.draw(Entity::Circle(Circle2::new(Vec2::new(1.0_f64, 1.0), 5.0)), "blue");
        svg.draw(
            Entity::Bounds(Aabb2::new(Vec2::new(-10.0_f64, -10.0), Vec2::new(10.0, 10.0))),
            "green",
        );

        let doc = svg.finish();
        assert!(doc.starts_with("<?xml"));
        assert!(doc.contains(
            r##"<polygon points="50,50 60,50 50,40" fill="none" stroke="#000000"/>"##
        ));
        assert!(doc.contains(r#"<line x1="50" y1="50" x2="60" y2="50" stroke="red"/>"#));
        assert!(doc.contains(r#"<circle cx="51" cy="49" r="5" fill="none" stroke="blue"/>"#));
        assert!(doc.contains(
            r#"<polygon points="40,40 60,40 60,60 40,60" fill="none" stroke="green"/>"#
        ));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_draw_helpers() {
        let mut svg = SvgDrawer::new(100.0, 100.0);
        let tri = Triangle2::new(
            Vec2::new(0.0_f64, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        )
        .unwrap();

        svg.draw_triangles(&[tri, tri], "black");
        svg.draw_circumcircles(&[tri], "gray");
        svg.draw_points(&tri.vertices(), "red");

        let doc = svg.finish();
        assert_eq!(doc.matches("<polygon").count(), 2);
        assert_eq!(doc.matches(r#"stroke="gray""#).count(), 1);
        assert_eq!(doc.matches(r#"fill="red""#).count(), 3);
    }
}
