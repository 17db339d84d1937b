//! Jhabla panel renderer.

use darzi_geom::PanelExtent;
use darzi_math::inches_to_px;
use darzi_measure::jhabla::JhablaQuantities;

use crate::writer::{self, panel_grid};
use crate::{RenderOptions, SEAM_COLOR};

/// Render the jhabla body panel: rectangle, armhole guide, and a
/// smooth cubic side-shaping curve down the center.
pub fn render_jhabla(q: &JhablaQuantities, opts: &RenderOptions) -> String {
    let extent = PanelExtent::jhabla(q);
    let margin = inches_to_px(0.4);
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
        &[
            ("stroke", "#FF69B4".into()),
            ("stroke-width", "2".into()),
            ("fill", "none".into()),
        ],
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
        &[("stroke", "#FF1493".into()), ("stroke-width", "1.5".into())],
    ));

    // Cubic shaping curve from 2 in below the top down to the armhole
    // line; the 0.5 / 1.5 in control offsets are visual tuning.
    let sx = start_x + panel_w / 2.0;
    let sy = start_y + inches_to_px(2.0);
    let ex = start_x + panel_w / 2.0;
    let ey = armhole_y;
    let c1x = sx + inches_to_px(0.5);
    let c1y = sy + inches_to_px(1.5);
    let c2x = ex + inches_to_px(0.5);
    let c2y = ey - inches_to_px(1.5);
    let side_d = format!("M {sx} {sy} C {c1x} {c1y}, {c2x} {c2y}, {ex} {ey}");
    svg.push_str(&writer::path(
        &side_d,
        &[
            ("stroke", "#C71585".into()),
            ("stroke-width", "2".into()),
            ("fill", "none".into()),
        ],
    ));

    if opts.seam_allowance > 0.0 {
        let sa_px = inches_to_px(opts.seam_allowance) * 2.0;
        svg.push_str(&writer::path(
            &side_d,
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
            start_x + 10.0,
            start_y - 12.0,
            &format!(
                "Baby Jhabla • Chest: {}\" Length: {}\"",
                m.chest, m.full_length
            ),
            &[("font-size", "13".into())],
        ));
    }

    svg.push_str(&writer::text(
        start_x + 20.0,
        armhole_y + 18.0,
        &format!("Armhole: {}\"", q.armhole_depth),
        &[("font-size", "11".into())],
    ));

    svg.push_str(writer::close());
    svg
}
