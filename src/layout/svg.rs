//! Minimal SVG rendering of a layout plan.
//!
//! Symbols are drawn as a tagged box on their wire, enough to read the
//! topology without a full symbol library.

use std::fmt::Write;

use super::{LayoutPlan, Point, Primitive};

/// Pixels per layout unit.
const SCALE: f64 = 40.0;
/// Empty border around the drawing, in layout units.
const MARGIN: f64 = 1.5;
/// Body of a symbol as a fraction of its span.
const BODY_LENGTH: f64 = 0.6;
/// Body thickness in layout units.
const BODY_WIDTH: f64 = 0.5;

/// Render `plan` as a standalone SVG document.
pub fn render_svg(plan: &LayoutPlan) -> Result<String, std::fmt::Error> {
    let bounds = plan.bounds;
    let width = (bounds.width() + 2.0 * MARGIN) * SCALE;
    let height = (bounds.height() + 2.0 * MARGIN) * SCALE;

    // Layout y points up, SVG y points down
    let project = |p: Point| -> (f64, f64) {
        (
            (p.x - bounds.min_x + MARGIN) * SCALE,
            (bounds.max_y - p.y + MARGIN) * SCALE,
        )
    };

    let mut svg = String::new();
    write!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}" font-family="monospace" font-size="12">
  <rect width="100%" height="100%" fill="#ffffff" />
  <g stroke="#1a202c" stroke-width="2" fill="none">
"##,
        width, height, width, height
    )?;

    for primitive in &plan.primitives {
        match primitive {
            Primitive::Wire { start, end } => {
                let (x1, y1) = project(*start);
                let (x2, y2) = project(*end);
                writeln!(
                    svg,
                    "    <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" />",
                    x1, y1, x2, y2
                )?;
            }
            Primitive::Symbol {
                symbol,
                label,
                start,
                end,
                ..
            } => {
                let (x1, y1) = project(*start);
                let (x2, y2) = project(*end);
                writeln!(
                    svg,
                    "    <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" />",
                    x1, y1, x2, y2
                )?;

                let (cx, cy) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
                let span = ((x2 - x1).abs() + (y2 - y1).abs()) * BODY_LENGTH;
                let thick = BODY_WIDTH * SCALE;
                let vertical = (x2 - x1).abs() < (y2 - y1).abs();
                let (w, h) = if vertical { (thick, span) } else { (span, thick) };
                writeln!(
                    svg,
                    "    <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"#ffffff\" />",
                    cx - w / 2.0,
                    cy - h / 2.0,
                    w,
                    h
                )?;
                write_text(&mut svg, cx, cy + 4.0, "middle", symbol.tag())?;

                let (lx, ly, anchor) = if vertical {
                    (cx - thick, cy, "end")
                } else {
                    (cx, cy - thick - 14.0, "middle")
                };
                write_label(&mut svg, lx, ly, anchor, label)?;
            }
            Primitive::IcBox {
                label,
                start,
                end,
                height,
                ..
            } => {
                let (x1, y1) = project(*start);
                let (x2, _) = project(*end);
                let h = height * SCALE;
                writeln!(
                    svg,
                    "    <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"#ffffff\" />",
                    x1.min(x2),
                    y1 - h / 2.0,
                    (x2 - x1).abs(),
                    h
                )?;
                write_label(&mut svg, (x1 + x2) / 2.0, y1 - 4.0, "middle", label)?;
            }
        }
    }

    svg.push_str("  </g>\n</svg>\n");
    Ok(svg)
}

fn write_text(svg: &mut String, x: f64, y: f64, anchor: &str, text: &str) -> std::fmt::Result {
    writeln!(
        svg,
        "    <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{}\" fill=\"#1a202c\" stroke=\"none\">{}</text>",
        x,
        y,
        anchor,
        escape_xml(text)
    )
}

/// Multi-line label, one `tspan` per line.
fn write_label(svg: &mut String, x: f64, y: f64, anchor: &str, label: &str) -> std::fmt::Result {
    write!(
        svg,
        "    <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{}\" fill=\"#2d3748\" stroke=\"none\">",
        x, y, anchor
    )?;
    for (idx, line) in label.lines().enumerate() {
        let dy = if idx == 0 { 0.0 } else { 14.0 };
        write!(
            svg,
            "<tspan x=\"{:.1}\" dy=\"{:.0}\">{}</tspan>",
            x,
            dy,
            escape_xml(line)
        )?;
    }
    svg.push_str("</text>\n");
    Ok(())
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
