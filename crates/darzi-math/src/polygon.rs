//! Closed polygons and the outward seam-allowance offset.

use crate::{Point2, Vec2};

/// A 2D polygon (closed path), vertices in order.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices of the polygon in order.
    pub points: Vec<Point2>,
}

impl Polygon {
    /// Create a new polygon from points.
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Check if the polygon is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Signed area of the polygon.
    /// Positive for counter-clockwise, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.points[i].x * self.points[j].y;
            area -= self.points[j].x * self.points[i].y;
        }
        area / 2.0
    }

    /// Perimeter length.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        let mut length = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            length += (self.points[j] - self.points[i]).norm();
        }
        length
    }

    /// Offset the polygon outward by `distance` using miter joins.
    ///
    /// For each vertex the two adjacent edge normals are averaged and
    /// renormalized to get the miter direction, then scaled by
    /// `distance / dot(avg, n1)` so the offset edges stay parallel to
    /// the originals. The divisor is floored at 0.001 to keep sharp
    /// corners from exploding. Outward only; self-intersection at
    /// concave corners and offsets larger than the shortest edge are
    /// not handled.
    ///
    /// Polygons with fewer than 2 vertices are returned unchanged.
    pub fn offset_outward(&self, distance: f64) -> Self {
        let n = self.points.len();
        if n < 2 {
            return self.clone();
        }

        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let p0 = self.points[(i + n - 1) % n];
            let p1 = self.points[i];
            let p2 = self.points[(i + 1) % n];

            let e1 = normalize_or_zero(p1 - p0);
            let e2 = normalize_or_zero(p2 - p1);

            // Perpendiculars of the adjacent edges. Outward for the
            // clockwise vertex order the renderers use in screen
            // space (y grows downward).
            let n1 = Vec2::new(e1.y, -e1.x);
            let n2 = Vec2::new(e2.y, -e2.x);

            let avg = normalize_or_zero(n1 + n2);
            let scale = distance / avg.dot(&n1).max(0.001);
            out.push(p1 + avg * scale);
        }

        Self::new(out)
    }

    /// SVG path data for the closed polygon (`M .. L .. Z`).
    pub fn to_path_data(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }
        let mut d = format!("M {} {}", self.points[0].x, self.points[0].y);
        for p in &self.points[1..] {
            d.push_str(&format!(" L {} {}", p.x, p.y));
        }
        d.push_str(" Z");
        d
    }
}

/// Normalize a vector, passing zero-length input through unchanged
/// (a degenerate edge contributes no displacement rather than NaN).
fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.norm();
    if len > 0.0 {
        v / len
    } else {
        v
    }
}
