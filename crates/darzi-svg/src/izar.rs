//! Izar front-leg construction drawing.

use darzi_geom::{Canvas, IzarGeometry, Mapper};
use darzi_math::Point2;
use darzi_measure::izar::IzarQuantities;

use crate::writer::{self};
use crate::{RenderOptions, SEAM_COLOR};

/// Minimal placeholder emitted when the key izar measurements are not
/// positive: no panel, no grid, no labels.
const ERROR_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 200 200\">\
    <text x=\"10\" y=\"100\" font-size=\"12\" fill=\"red\">Invalid Izar measurements</text>\
    </svg>";

/// Render the izar front-leg draft.
///
/// The construction points are built in body inches, fit onto a
/// 400×800 canvas with a uniform scale, and drawn as: dashed guides
/// (seat line, inner reference, crotch extension), the solid outline
/// in its straight and curved forms, the crotch curve highlighted in
/// red, an optional inch grid, labels, and a wide translucent
/// re-stroke of the curved outline as the seam allowance.
pub fn render_izar(q: &IzarQuantities, opts: &RenderOptions) -> String {
    let Some(g) = IzarGeometry::build(q) else {
        return ERROR_SVG.to_string();
    };

    let canvas = Canvas::IZAR;
    let mapper = Mapper::fit(g.body_width, g.body_height, &canvas);
    let map = |p: Point2| mapper.map(p);

    let a = map(g.waist_outer);
    let b = map(g.hem_outer);
    let c = map(g.waist_inner);
    let d = map(g.hem_inner);
    let e = map(g.seat_outer);
    let f = map(g.seat_inner);
    let gp = map(g.crotch);
    let h = map(g.crotch_drop);
    let j = map(g.ankle_inner);
    let k = map(g.ankle_outer);
    let c1 = map(g.ctrl1);
    let c2 = map(g.ctrl2);

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">",
        canvas.width, canvas.height
    );

    svg.push_str(&writer::rect(
        0.0,
        0.0,
        canvas.width,
        canvas.height,
        &[("fill", "#f9fafb".into())],
    ));

    // Dashed construction guides.
    let dashed = |x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: &str| {
        writer::line(
            x1,
            y1,
            x2,
            y2,
            &[
                ("stroke", stroke.into()),
                ("stroke-width", width.into()),
                ("stroke-dasharray", "4 3".into()),
            ],
        )
    };
    // Seat depth line E–F.
    svg.push_str(&dashed(e.x, e.y, f.x, f.y, "#9ca3af", "1"));
    // Inner reference C–D.
    svg.push_str(&dashed(c.x, c.y, d.x, d.y, "#e5e7eb", "1"));
    // Crotch extension F–G and drop G–H.
    svg.push_str(&dashed(f.x, f.y, gp.x, gp.y, "#6b7280", "1.5"));
    svg.push_str(&dashed(gp.x, gp.y, h.x, h.y, "#e5e7eb", "1"));

    // Solid edges: outer seam, waist edge, outer taper, mori.
    let solid = [("stroke", "#111827".to_string()), ("stroke-width", "2".to_string())];
    svg.push_str(&writer::line(a.x, a.y, b.x, b.y, &solid));
    svg.push_str(&writer::line(a.x, a.y, c.x, c.y, &solid));
    svg.push_str(&writer::line(b.x, b.y, k.x, k.y, &solid));
    svg.push_str(&writer::line(j.x, j.y, k.x, k.y, &solid));

    // Closed outline, straight-seam version.
    let straight_outline = format!(
        "M {} {} L {} {} L {} {} L {} {} L {} {} L {} {} Z",
        a.x, a.y, b.x, b.y, k.x, k.y, j.x, j.y, gp.x, gp.y, c.x, c.y
    );
    let outline_attrs = [
        ("fill", "none".to_string()),
        ("stroke", "#111827".to_string()),
        ("stroke-width", "2".to_string()),
    ];
    svg.push_str(&writer::path(&straight_outline, &outline_attrs));

    // Closed outline with the cubic crotch curve J → G.
    let curved_outline = format!(
        "M {} {} L {} {} L {} {} L {} {} C {} {}, {} {}, {} {} L {} {} Z",
        a.x, a.y, b.x, b.y, k.x, k.y, j.x, j.y, c1.x, c1.y, c2.x, c2.y, gp.x, gp.y, c.x, c.y
    );
    svg.push_str(&writer::path(&curved_outline, &outline_attrs));

    // Crotch curve highlighted for reference.
    let crotch_curve = format!(
        "M {} {} C {} {}, {} {}, {} {}",
        j.x, j.y, c1.x, c1.y, c2.x, c2.y, gp.x, gp.y
    );
    svg.push_str(&writer::path(
        &crotch_curve,
        &[
            ("fill", "none".to_string()),
            ("stroke", "#ef4444".to_string()),
            ("stroke-width", "2".to_string()),
        ],
    ));

    if opts.show_grid {
        // 1-inch grid over the body extent.
        let grid_attrs = [("stroke", "#f3f4f6".to_string()), ("stroke-width", "1".to_string())];
        let mut gx = 0.0;
        while gx <= g.body_width {
            let x = mapper.offset_x + mapper.map_len(gx);
            svg.push_str(&writer::line(
                x,
                mapper.offset_y,
                x,
                mapper.offset_y + mapper.map_len(g.body_height),
                &grid_attrs,
            ));
            gx += 1.0;
        }
        let mut gy = 0.0;
        while gy <= g.body_height {
            let y = mapper.offset_y + mapper.map_len(gy);
            svg.push_str(&writer::line(
                mapper.offset_x,
                y,
                mapper.offset_x + mapper.map_len(g.body_width),
                y,
                &grid_attrs,
            ));
            gy += 1.0;
        }
    }

    svg.push_str(&writer::text(
        canvas.width / 2.0,
        canvas.margin_top - 12.0,
        "IZAR – FRONT LEG (GEOMETRIC)",
        &[
            ("text-anchor", "middle".into()),
            ("font-size", "16".into()),
            ("font-weight", "600".into()),
            ("fill", "#111827".into()),
        ],
    ));

    if opts.show_measurements {
        let label_attrs = [("font-size", "10".to_string()), ("fill", "#4b5563".to_string())];
        let m = &q.measurements;
        svg.push_str(&writer::text(
            a.x + 4.0,
            a.y - 6.0,
            &format!("Waist edge (W) = {}", fmt_in(g.base_width)),
            &label_attrs,
        ));
        svg.push_str(&writer::text(
            e.x + 4.0,
            e.y - 4.0,
            &format!("Seat depth (C) = {}", fmt_in(g.seat_depth)),
            &label_attrs,
        ));
        svg.push_str(&writer::text(
            gp.x + 4.0,
            gp.y - 4.0,
            &format!("Crotch extension (Xc) = {}", fmt_in(g.crotch_extension)),
            &label_attrs,
        ));
        svg.push_str(&writer::text(
            j.x,
            j.y + 14.0,
            &format!(
                "Mori M = {} (Mh = {})",
                fmt_in(m.bottom_width),
                fmt_in(g.half_mori)
            ),
            &label_attrs,
        ));
        svg.push_str(&writer::text(
            canvas.width / 2.0,
            canvas.height - 16.0,
            &format!(
                "L = {}, H = {}, Waist = {}",
                fmt_in(m.full_length),
                fmt_in(m.hip),
                fmt_in(m.waist)
            ),
            &[
                ("text-anchor", "middle".into()),
                ("font-size", "10".into()),
                ("fill", "#6b7280".into()),
            ],
        ));
    }

    if opts.seam_allowance > 0.0 {
        // Wide translucent re-stroke of the curved outline; total
        // extra stroke width is twice the allowance.
        let sa_px = opts.seam_allowance * mapper.scale * 2.0;
        svg.push_str(&format!(
            "<g stroke-opacity=\"0.18\" stroke=\"{SEAM_COLOR}\" fill=\"none\" \
             stroke-linejoin=\"round\" stroke-linecap=\"round\">"
        ));
        svg.push_str(&writer::path(
            &curved_outline,
            &[("stroke-width", format!("{sa_px}"))],
        ));
        svg.push_str("</g>");
    }

    svg.push_str(writer::close());
    svg
}

/// Inch label formatting, one decimal.
fn fmt_in(v: f64) -> String {
    format!("{v:.1} in")
}

#[cfg(test)]
mod tests {
    use super::*;
    use darzi_measure::izar::IzarMeasurements;
    use darzi_measure::Measurements;

    fn reference() -> IzarQuantities {
        IzarQuantities::derive(&IzarMeasurements::normalize(&Measurements::default()))
    }

    #[test]
    fn test_render_reference_draft() {
        let svg = render_izar(&reference(), &RenderOptions::default());
        assert!(svg.contains("viewBox=\"0 0 400 800\""));
        assert!(svg.contains("IZAR – FRONT LEG (GEOMETRIC)"));
        // Straight and curved closed outlines, plus the seam-allowance
        // re-stroke of the curved one.
        assert_eq!(svg.matches(" Z\"").count(), 3);
        assert!(svg.contains("stroke=\"#ef4444\""));
        assert!(svg.contains("stroke-dasharray=\"4 3\""));
    }

    #[test]
    fn test_labels_report_body_units() {
        let svg = render_izar(&reference(), &RenderOptions::default());
        assert!(svg.contains("Seat depth (C) = 9.9 in"));
        assert!(svg.contains("Mori M = 31.3 in (Mh = 15.6 in)"));
        assert!(svg.contains("L = 38.0 in, H = 36.8 in, Waist = 32.0 in"));
    }

    #[test]
    fn test_degenerate_input_yields_error_marker_only() {
        let mut q = reference();
        q.measurements.full_length = 0.0;
        let svg = render_izar(&q, &RenderOptions::default());
        assert!(svg.contains("Invalid Izar measurements"));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("IZAR"));
        assert!(svg.contains("viewBox=\"0 0 200 200\""));
    }

    #[test]
    fn test_seam_restroke_scales_with_allowance() {
        let q = reference();
        let with_sa = render_izar(&q, &RenderOptions::default());
        assert!(with_sa.contains("stroke-opacity=\"0.18\""));

        let without = render_izar(
            &q,
            &RenderOptions {
                seam_allowance: 0.0,
                ..Default::default()
            },
        );
        assert!(!without.contains("stroke-opacity=\"0.18\""));
    }
}
