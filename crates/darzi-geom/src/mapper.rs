//! Uniform body-space to drawing-space mapping.

use darzi_math::Point2;

/// A drawing canvas in output units, with interior margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Total canvas width.
    pub width: f64,
    /// Total canvas height.
    pub height: f64,
    /// Left and right margin.
    pub margin_x: f64,
    /// Top margin.
    pub margin_top: f64,
    /// Bottom margin.
    pub margin_bottom: f64,
}

impl Canvas {
    /// The portrait canvas used for the izar construction drawing.
    pub const IZAR: Self = Self {
        width: 400.0,
        height: 800.0,
        margin_x: 40.0,
        margin_top: 40.0,
        margin_bottom: 40.0,
    };

    /// Width available inside the margins.
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin_x
    }

    /// Height available inside the margins.
    pub fn usable_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// Maps body-space points (inches) into drawing space.
///
/// The scale is uniform in x and y so angles and curve shapes carry
/// over unchanged; the drawing is anchored at the canvas margins, not
/// centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    /// Drawing units per body inch.
    pub scale: f64,
    /// X of the mapped body-space origin.
    pub offset_x: f64,
    /// Y of the mapped body-space origin.
    pub offset_y: f64,
}

impl Mapper {
    /// Fit a body-space extent (`body_width` × `body_height`, both
    /// positive) into the canvas's usable area.
    pub fn fit(body_width: f64, body_height: f64, canvas: &Canvas) -> Self {
        let scale = (canvas.usable_width() / body_width).min(canvas.usable_height() / body_height);
        Self {
            scale,
            offset_x: canvas.margin_x,
            offset_y: canvas.margin_top,
        }
    }

    /// Map a body-space point to drawing space.
    pub fn map(&self, p: Point2) -> Point2 {
        Point2::new(self.offset_x + p.x * self.scale, self.offset_y + p.y * self.scale)
    }

    /// Map a body-space length (no offset applied).
    pub fn map_len(&self, len: f64) -> f64 {
        len * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_wide_extent_limited_by_width() {
        let canvas = Canvas::IZAR;
        let m = Mapper::fit(64.0, 38.0, &canvas);
        // usable 320x720; 320/64 = 5 < 720/38
        assert_relative_eq!(m.scale, 5.0);
        assert_eq!(m.offset_x, 40.0);
        assert_eq!(m.offset_y, 40.0);
    }

    #[test]
    fn test_mapped_extent_fits_and_keeps_aspect() {
        let canvas = Canvas::IZAR;
        for (w, h) in [(13.2, 38.0), (50.0, 12.0), (7.0, 7.0)] {
            let m = Mapper::fit(w, h, &canvas);
            let far = m.map(Point2::new(w, h));
            assert!(far.x <= canvas.width - canvas.margin_x + 1e-9);
            assert!(far.y <= canvas.height - canvas.margin_bottom + 1e-9);

            // Uniform scale: mapped box aspect equals the input aspect.
            let near = m.map(Point2::origin());
            let mapped_aspect = (far.x - near.x) / (far.y - near.y);
            assert_relative_eq!(mapped_aspect, w / h, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_map_is_affine_in_each_axis() {
        let m = Mapper {
            scale: 2.0,
            offset_x: 10.0,
            offset_y: 20.0,
        };
        let p = m.map(Point2::new(3.0, 4.0));
        assert_eq!(p, Point2::new(16.0, 28.0));
        assert_eq!(m.map_len(5.0), 10.0);
    }
}
