//! Saya panel renderer.

use darzi_geom::PanelExtent;
use darzi_math::inches_to_px;
use darzi_measure::saya::SayaQuantities;

use crate::writer::{self, panel_grid};
use crate::{RenderOptions, SEAM_COLOR};

/// Render the saya body panel: rectangle, armhole guide, and a cubic
/// collar curve rising above the shoulder line.
pub fn render_saya(q: &SayaQuantities, opts: &RenderOptions) -> String {
    let extent = PanelExtent::saya(q);
    let margin = inches_to_px(0.5);
    let panel_w = inches_to_px(extent.width_in);
    let panel_h = inches_to_px(extent.height_in);

    // Header takes inches here; the panel plus the 0.5 in margins.
    let mut svg = writer::header(extent.width_in + 1.0, extent.height_in + 1.0);

    let start_x = margin;
    let start_y = margin;

    svg.push_str(&writer::rect(
        start_x,
        start_y,
        panel_w,
        panel_h,
        &[("stroke", "#1E3A8A".into()), ("stroke-width", "2".into())],
    ));

    if opts.show_grid {
        panel_grid(&mut svg, start_x, start_y, panel_w, panel_h);
    }

    let armhole_y = start_y + inches_to_px(q.armhole_depth);
    svg.push_str(&writer::line(
        start_x,
        armhole_y,
        start_x + panel_w,
        armhole_y,
        &[("stroke", "#2563EB".into()), ("stroke-width", "1.5".into())],
    ));

    // Collar as a cubic: endpoints 10 px inside the panel edges,
    // controls 0.8 in inward and half the collar depth above.
    let collar_start_x = start_x + 10.0;
    let collar_end_x = start_x + panel_w - 10.0;
    let collar_depth_px = inches_to_px(q.collar_depth);
    let c1x = collar_start_x + inches_to_px(0.8);
    let c1y = start_y - collar_depth_px / 2.0;
    let c2x = collar_end_x - inches_to_px(0.8);
    let c2y = start_y - collar_depth_px / 2.0;
    let collar_d = format!(
        "M {collar_start_x} {start_y} C {c1x} {c1y}, {c2x} {c2y}, {collar_end_x} {start_y}"
    );
    svg.push_str(&writer::path(
        &collar_d,
        &[
            ("stroke", "#3B82F6".into()),
            ("stroke-width", "2".into()),
            ("fill", "none".into()),
        ],
    ));

    if opts.seam_allowance > 0.0 {
        let sa_px = inches_to_px(opts.seam_allowance) * 2.0;
        svg.push_str(&writer::path(
            &collar_d,
            &[
                ("stroke", SEAM_COLOR.into()),
                ("stroke-width", format!("{sa_px}")),
                ("fill", "none".into()),
                ("stroke-opacity", "0.12".into()),
            ],
        ));
    }

    if opts.show_measurements {
        let m = &q.measurements;
        svg.push_str(&writer::text(
            start_x + 20.0,
            start_y - 20.0,
            &format!("Saya • Chest: {}\" Length: {}\"", m.chest, m.full_length),
            &[("font-size", "14".into())],
        ));
        svg.push_str(&writer::text(
            start_x + 10.0,
            armhole_y + 20.0,
            &format!("Armhole: {}\"", q.armhole_depth),
            &[("font-size", "12".into())],
        ));
    }

    svg.push_str(writer::close());
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use darzi_measure::saya::SayaMeasurements;
    use darzi_measure::Measurements;

    fn reference() -> SayaQuantities {
        SayaQuantities::derive(&SayaMeasurements::normalize(&Measurements::default()))
    }

    #[test]
    fn test_header_uses_inch_dimensions() {
        // Panel 23.5 x 43 in, plus 1 in of margins: 24.5 x 44 in.
        let svg = render_saya(&reference(), &RenderOptions::default());
        assert!(svg.contains(&format!("viewBox=\"0 0 {} {}\"", 24.5f64 * 96.0, 44.0 * 96.0)));
    }

    #[test]
    fn test_collar_curve_and_restroke() {
        let svg = render_saya(&reference(), &RenderOptions::default());
        assert_eq!(svg.matches(" C ").count(), 2);
        assert!(svg.contains("Saya • Chest: 38\" Length: 40\""));
        assert!(svg.contains("Armhole: 8.85\""));
    }
}
