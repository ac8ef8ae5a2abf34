//! SVG output for frames.

use super::Frame;
use crate::config::ChartConfig;
use crate::constants::CURSOR_RADIUS;
use crate::shared::fmt::num::coord;

/// Height of the label row below the chart.
const LABEL_ROW_HEIGHT: f64 = 56.0;

/// The chart canvas: the blended path and the cursor dot.
pub fn render_svg(frame: &Frame, config: &ChartConfig) -> String {
    let size = coord(config.size);
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    push_chart(&mut out, frame, config);
    out.push_str("</svg>");
    out
}

/// The chart canvas with the range label row underneath.
pub fn render_document(frame: &Frame, config: &ChartConfig) -> String {
    let width = coord(config.size);
    let height = coord(config.size + LABEL_ROW_HEIGHT);
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    push_chart(&mut out, frame, config);

    let n = frame.labels.len().max(1) as f64;
    let slot = config.size / n;
    let top = config.size + 8.0;
    for (i, label) in frame.labels.iter().enumerate() {
        let cx = slot * (i as f64 + 0.5);
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="40" rx="8" fill="{}"/>"#,
            coord(cx - 28.0),
            coord(top),
            coord(56.0),
            escape_attr(&label.background)
        ));
        out.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="16" font-weight="bold" fill="black">{}</text>"#,
            coord(cx),
            coord(top + 26.0),
            label.label
        ));
    }
    out.push_str("</svg>");
    out
}

fn push_chart(out: &mut String, frame: &Frame, config: &ChartConfig) {
    out.push_str(&format!(
        r#"<path d="{}" fill="transparent" stroke="{}" stroke-width="{}"/>"#,
        frame.d,
        escape_attr(&config.stroke),
        coord(config.stroke_width)
    ));
    if let Some(cursor) = frame.cursor {
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            coord(cursor.x),
            coord(cursor.y),
            coord(CURSOR_RADIUS),
            escape_attr(&config.stroke)
        ));
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
