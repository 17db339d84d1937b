//! Rida panel renderer.

use darzi_geom::PanelExtent;
use darzi_math::inches_to_px;
use darzi_measure::rida::RidaQuantities;

use crate::writer::{self, panel_grid};
use crate::{RenderOptions, SEAM_COLOR};

/// Render the rida body panel: rectangle, armhole guide, and the
/// front yoke drawn as a semicircular arc.
pub fn render_rida(q: &RidaQuantities, opts: &RenderOptions) -> String {
    let extent = PanelExtent::rida(q);
    let margin = inches_to_px(0.5);
    let panel_w = inches_to_px(extent.width_in);
    let panel_h = inches_to_px(extent.height_in);

    let mut svg = writer::header(extent.width_in + 1.0, extent.height_in + 1.0);

    let start_x = margin;
    let start_y = margin;

    svg.push_str(&writer::rect(
        start_x,
        start_y,
        panel_w,
        panel_h,
        &[("stroke", "#2874A6".into()), ("stroke-width", "2".into())],
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
        &[("stroke", "#1F618D".into()), ("stroke-width", "1.5".into())],
    ));

    // Front yoke arc across the top, 10 px inside each panel edge.
    let yoke_r = inches_to_px(q.front_yoke_depth);
    let yoke_d = format!(
        "M{} {} A{yoke_r} {yoke_r},0,0,1,{} {}",
        start_x + 10.0,
        start_y + yoke_r,
        start_x + panel_w - 10.0,
        start_y + yoke_r
    );
    svg.push_str(&writer::path(
        &yoke_d,
        &[
            ("stroke", "#2980B9".into()),
            ("stroke-width", "2".into()),
            ("fill", "none".into()),
        ],
    ));

    if opts.seam_allowance > 0.0 {
        let sa_px = inches_to_px(opts.seam_allowance) * 2.0;
        svg.push_str(&writer::path(
            &yoke_d,
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
            start_x + 15.0,
            start_y - 15.0,
            &format!(
                "Rida • Chest: {}\" Front Length: {}\"",
                m.chest, m.full_front_length
            ),
            &[("font-size", "14".into())],
        ));
        svg.push_str(&writer::text(
            start_x + panel_w / 2.0,
            armhole_y + 20.0,
            &format!("Armhole Depth: {}\"", q.armhole_depth),
            &[("font-size", "12".into())],
        ));
    }

    svg.push_str(writer::close());
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use darzi_measure::rida::RidaMeasurements;
    use darzi_measure::Measurements;

    fn reference() -> RidaQuantities {
        RidaQuantities::derive(&RidaMeasurements::normalize(&Measurements::default()))
    }

    fn yoke_arc(q: &RidaQuantities) -> String {
        let r = inches_to_px(q.front_yoke_depth);
        format!("A{r} {r},0,0,1,")
    }

    #[test]
    fn test_yoke_arc_present_and_restroked() {
        let q = reference();
        let svg = render_rida(&q, &RenderOptions::default());
        // Radius 2.7 in, emitted for both the outline and the seam
        // allowance re-stroke.
        assert_eq!(svg.matches(&yoke_arc(&q)).count(), 2);
        assert!(svg.contains("Armhole Depth: 7.6\""));
    }

    #[test]
    fn test_no_seam_restroke_when_disabled() {
        let q = reference();
        let opts = RenderOptions {
            seam_allowance: 0.0,
            ..Default::default()
        };
        let svg = render_rida(&q, &opts);
        assert_eq!(svg.matches(&yoke_arc(&q)).count(), 1);
        assert!(!svg.contains(SEAM_COLOR));
    }
}
