//! Kurta panel renderer.

use darzi_geom::PanelExtent;
use darzi_math::{inches_to_px, Point2, Polygon};
use darzi_measure::kurta::KurtaQuantities;

use crate::writer::{self, panel_grid};
use crate::{RenderOptions, SEAM_COLOR};

/// Render the kurta body panel.
///
/// A plain rectangle with center-front and hem guides; the seam
/// allowance is a true outward offset of the panel rectangle.
pub fn render_kurta(q: &KurtaQuantities, opts: &RenderOptions) -> String {
    let extent = PanelExtent::kurta(q);
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
            ("stroke", "#2c3e50".into()),
            ("stroke-width", "2".into()),
            ("fill", "#f8f9fa".into()),
        ],
    ));

    if opts.seam_allowance > 0.0 {
        let sa_px = inches_to_px(opts.seam_allowance);
        let panel = Polygon::new(vec![
            Point2::new(start_x, start_y),
            Point2::new(start_x + panel_w, start_y),
            Point2::new(start_x + panel_w, start_y + panel_h),
            Point2::new(start_x, start_y + panel_h),
        ]);
        let outer = panel.offset_outward(sa_px);
        svg.push_str(&writer::path(
            &outer.to_path_data(),
            &[
                ("fill", "none".into()),
                ("stroke", SEAM_COLOR.into()),
                ("stroke-opacity", "0.14".into()),
                ("stroke-width", format!("{}", sa_px * 2.0)),
            ],
        ));
    }

    if opts.show_grid {
        panel_grid(&mut svg, start_x, start_y, panel_w, panel_h);
    }

    // Center-front fold line and hem line.
    let center_x = start_x + panel_w / 2.0;
    svg.push_str(&writer::line(
        center_x,
        start_y,
        center_x,
        start_y + panel_h,
        &[("stroke", "#64748b".into()), ("stroke-width", "2".into())],
    ));
    let hem_y = start_y + panel_h;
    svg.push_str(&writer::line(
        start_x,
        hem_y,
        start_x + panel_w,
        hem_y,
        &[("stroke", "#64748b".into()), ("stroke-width", "2".into())],
    ));

    if opts.show_measurements {
        let m = &q.measurements;
        svg.push_str(&writer::text(
            start_x + 8.0,
            start_y - 14.0,
            &format!("Kurta • Chest: {}\" Length: {}\"", m.chest, m.full_length),
            &[("font-size", "13".into())],
        ));
    }

    svg.push_str(writer::close());
    svg
}
