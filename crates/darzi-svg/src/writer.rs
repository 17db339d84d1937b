//! Low-level SVG element writers.
//!
//! Each function returns one element as a string; the renderers
//! concatenate them into a self-contained document.

use darzi_math::DPI;

/// Attribute list for an element: name/value pairs, written as-is.
pub type Attrs<'a> = [(&'a str, String)];

fn attr_string(attrs: &Attrs) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Open a responsive SVG document with a white background rect.
///
/// Unit heuristic: callers sometimes pass inches (small values) and
/// sometimes pixels (large values). A dimension ≤ 200 is treated as
/// inches and converted at 96 px/in; anything larger is taken to be
/// pixels already. Canvases in the 150–200 inch band are inherently
/// ambiguous under this rule; it is kept as-is for compatibility with
/// existing drafts.
pub fn header(width: f64, height: f64) -> String {
    let wpx = dimension_to_px(width);
    let hpx = dimension_to_px(height);
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {wpx} {hpx}\" \
         width=\"100%\" height=\"100%\" preserveAspectRatio=\"xMidYMid meet\">\
         <rect x=\"0\" y=\"0\" width=\"{wpx}\" height=\"{hpx}\" fill=\"#ffffff\" />"
    )
}

/// Close the SVG document.
pub fn close() -> &'static str {
    "</svg>"
}

/// Apply the header unit heuristic to one dimension, rounding to a
/// whole pixel.
pub fn dimension_to_px(v: f64) -> f64 {
    if v <= 200.0 {
        (v * DPI).round()
    } else {
        v.round()
    }
}

/// A `<rect>` element.
pub fn rect(x: f64, y: f64, w: f64, h: f64, attrs: &Attrs) -> String {
    format!(
        "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" {}/>",
        attr_string(attrs)
    )
}

/// A `<line>` element.
pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, attrs: &Attrs) -> String {
    format!(
        "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" {}/>",
        attr_string(attrs)
    )
}

/// A `<path>` element.
pub fn path(d: &str, attrs: &Attrs) -> String {
    format!("<path d=\"{d}\" {}/>", attr_string(attrs))
}

/// A `<text>` element.
pub fn text(x: f64, y: f64, content: &str, attrs: &Attrs) -> String {
    format!(
        "<text x=\"{x}\" y=\"{y}\" {}>{content}</text>",
        attr_string(attrs)
    )
}

/// Light 1-inch grid over a panel area, drawing-space pixels.
pub fn panel_grid(buf: &mut String, start_x: f64, start_y: f64, panel_w: f64, panel_h: f64) {
    let spacing = DPI;
    let mut gx = start_x;
    while gx <= start_x + panel_w {
        buf.push_str(&line(
            gx,
            start_y,
            gx,
            start_y + panel_h,
            &[("stroke", "#f3f4f6".into()), ("stroke-width", "1".into())],
        ));
        gx += spacing;
    }
    let mut gy = start_y;
    while gy <= start_y + panel_h {
        buf.push_str(&line(
            start_x,
            gy,
            start_x + panel_w,
            gy,
            &[("stroke", "#f3f4f6".into()), ("stroke-width", "1".into())],
        ));
        gy += spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_converts_inches() {
        let svg = header(23.0, 33.0);
        assert!(svg.contains("viewBox=\"0 0 2208 3168\""));
        assert!(svg.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn test_header_passes_pixels_through() {
        let svg = header(2304.0, 3264.0);
        assert!(svg.contains("viewBox=\"0 0 2304 3264\""));
    }

    #[test]
    fn test_dimension_heuristic_boundary() {
        // 200 is still "inches"; 201 is already pixels.
        assert_eq!(dimension_to_px(200.0), 19200.0);
        assert_eq!(dimension_to_px(201.0), 201.0);
    }

    #[test]
    fn test_elements_carry_attributes() {
        let r = rect(1.0, 2.0, 3.0, 4.0, &[("stroke", "#000".into())]);
        assert_eq!(r, "<rect x=\"1\" y=\"2\" width=\"3\" height=\"4\" stroke=\"#000\"/>");

        let l = line(0.0, 0.5, 9.0, 0.5, &[("stroke-width", "2".into())]);
        assert!(l.contains("x2=\"9\""));
        assert!(l.contains("stroke-width=\"2\""));

        let t = text(5.0, 6.0, "Armhole: 8.25\"", &[("font-size", "12".into())]);
        assert!(t.ends_with(">Armhole: 8.25\"</text>"));
    }

    #[test]
    fn test_panel_grid_line_count() {
        let mut buf = String::new();
        // 2x3 inch panel: 3 vertical + 4 horizontal lines.
        panel_grid(&mut buf, 0.0, 0.0, 192.0, 288.0);
        assert_eq!(buf.matches("<line").count(), 7);
    }
}
