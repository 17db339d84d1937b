//! Pehran panel renderer.

use darzi_geom::PanelExtent;
use darzi_math::inches_to_px;
use darzi_measure::pehran::PehranQuantities;

use crate::writer::{self, panel_grid};
use crate::{RenderOptions, SEAM_COLOR};

/// Render the pehran body panel: rectangle, armhole-depth guide, and
/// a quadratic neckline curve. The neckline seam allowance re-strokes
/// the same curve wide and translucent.
pub fn render_pehran(q: &PehranQuantities, opts: &RenderOptions) -> String {
    let extent = PanelExtent::pehran(q);
    let margin = inches_to_px(0.5);
    let panel_w = inches_to_px(extent.width_in);
    let panel_h = inches_to_px(extent.height_in);

    let mut svg = writer::header(panel_w + margin * 2.0, panel_h + margin * 2.0);

    let start_x = margin;
    let start_y = margin;

    svg.push_str(&writer::rect(
        start_x,
        start_y,
        panel_w,
        panel_h,
        &[
            ("stroke", "#8B4513".into()),
            ("stroke-width", "3".into()),
            ("fill", "none".into()),
        ],
    ));

    if opts.show_grid {
        panel_grid(&mut svg, start_x, start_y, panel_w, panel_h);
    }

    // Armhole depth guide.
    let sleeve_y = start_y + inches_to_px(q.armhole_depth);
    svg.push_str(&writer::line(
        start_x,
        sleeve_y,
        start_x + panel_w,
        sleeve_y,
        &[("stroke", "#D2691E".into()), ("stroke-width", "2".into())],
    ));

    // Quadratic neckline, 2 in inside each shoulder edge, dipping to
    // the front neck depth.
    let neck_d = format!(
        "M {} {} Q {} {} {} {}",
        start_x + inches_to_px(2.0),
        start_y,
        start_x + panel_w / 2.0,
        start_y + inches_to_px(q.front_neck_depth),
        start_x + panel_w - inches_to_px(2.0),
        start_y
    );
    svg.push_str(&writer::path(
        &neck_d,
        &[
            ("stroke", "#CD853F".into()),
            ("stroke-width", "3".into()),
            ("fill", "none".into()),
        ],
    ));

    if opts.seam_allowance > 0.0 {
        let sa_px = inches_to_px(opts.seam_allowance) * 2.0;
        svg.push_str(&writer::path(
            &neck_d,
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
            &format!("Pehran • Chest: {}\" Length: {}\"", m.chest, m.full_length),
            &[("font-size", "16".into()), ("fill", "#8B4513".into())],
        ));
    }

    svg.push_str(&writer::text(
        start_x + panel_w / 2.0 - 50.0,
        sleeve_y + 25.0,
        &format!("Armhole: {}\"", q.armhole_depth),
        &[("font-size", "13".into()), ("fill", "#A0522D".into())],
    ));

    svg.push_str(writer::close());
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use darzi_measure::pehran::PehranMeasurements;
    use darzi_measure::Measurements;

    fn reference() -> PehranQuantities {
        PehranQuantities::derive(&PehranMeasurements::normalize(&Measurements::default()))
    }

    #[test]
    fn test_render_has_neckline_and_armhole() {
        let svg = render_pehran(&reference(), &RenderOptions::default());
        assert!(svg.contains(" Q "));
        assert!(svg.contains("Armhole: 9.75\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_neckline_seam_allowance_restrokes_curve() {
        let svg = render_pehran(&reference(), &RenderOptions::default());
        // The same quadratic path appears twice: outline + wide stroke.
        let q_count = svg.matches(" Q ").count();
        assert_eq!(q_count, 2);
        assert!(svg.contains("stroke-opacity=\"0.12\""));
    }

    #[test]
    fn test_armhole_label_always_present() {
        let opts = RenderOptions {
            show_measurements: false,
            ..Default::default()
        };
        let svg = render_pehran(&reference(), &opts);
        assert!(!svg.contains("Pehran •"));
        assert!(svg.contains("Armhole: 9.75\""));
    }
}
