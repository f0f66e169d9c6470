//! SVG document surface.
//!
//! Curves up to cubic degree use the native SVG path commands (`L`, `Q`, `C`)
//! and reveal a prefix of the stroke with `pathLength="1"` and a dash array,
//! the same length-normalized mechanism a platform stroke-end property uses.

use casteljau_math::Point2;

use crate::color::Color;
use crate::surface::{stroke_flattened_reveal, DrawSurface, StrokeStyle};

pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Color>,
    elements: Vec<String>,
    path: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            elements: Vec::new(),
            path: String::new(),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Number of drawn elements (strokes and markers).
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize everything drawn so far as a standalone SVG document.
    pub fn to_svg_string(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = num(self.width),
            h = num(self.height)
        );
        if let Some(bg) = self.background {
            svg.push_str(&format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
                bg.to_css_rgb(),
                bg.a
            ));
        }
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn save(&self, path: &std::path::Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_svg_string())
    }
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
        self.path.clear();
    }

    fn move_to(&mut self, p: Point2) {
        self.path.push_str(&format!("M{} {} ", num(p.x), num(p.y)));
    }

    fn line_to(&mut self, p: Point2) {
        self.path.push_str(&format!("L{} {} ", num(p.x), num(p.y)));
    }

    fn stroke_path(&mut self, style: &StrokeStyle) {
        if self.path.is_empty() {
            return;
        }
        let d = std::mem::take(&mut self.path);
        let mut element = format!("<path d=\"{}\" fill=\"none\"{}", d.trim_end(), stroke_attrs(style));
        if style.is_dashed() {
            let dash: Vec<String> = style.dash.iter().map(|&d| num(d)).collect();
            element.push_str(&format!(" stroke-dasharray=\"{}\"", dash.join(" ")));
        }
        element.push_str("/>");
        self.elements.push(element);
    }

    fn fill_circle(&mut self, center: Point2, radius: f64, color: Color) {
        self.elements.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            num(center.x),
            num(center.y),
            num(radius),
            color.to_css_rgb(),
            color.a
        ));
    }

    fn stroke_curve_reveal(&mut self, control_points: &[Point2], reveal: f64, style: &StrokeStyle) {
        // A zero-length dash still paints a round cap
        if reveal.is_nan() || reveal <= 0.0 {
            return;
        }
        let d = match control_points {
            [p0, p1] => format!("M{} {} L{} {}", num(p0.x), num(p0.y), num(p1.x), num(p1.y)),
            [p0, p1, p2] => format!(
                "M{} {} Q{} {} {} {}",
                num(p0.x),
                num(p0.y),
                num(p1.x),
                num(p1.y),
                num(p2.x),
                num(p2.y)
            ),
            [p0, p1, p2, p3] => format!(
                "M{} {} C{} {} {} {} {} {}",
                num(p0.x),
                num(p0.y),
                num(p1.x),
                num(p1.y),
                num(p2.x),
                num(p2.y),
                num(p3.x),
                num(p3.y)
            ),
            _ => return stroke_flattened_reveal(self, control_points, reveal, style),
        };

        let reveal = reveal.clamp(0.0, 1.0);
        self.elements.push(format!(
            "<path d=\"{}\" fill=\"none\"{} pathLength=\"1\" stroke-dasharray=\"{} 1\"/>",
            d,
            stroke_attrs(style),
            num(reveal)
        ));
    }
}

fn stroke_attrs(style: &StrokeStyle) -> String {
    format!(
        " stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"",
        style.color.to_css_rgb(),
        style.color.a,
        num(style.width)
    )
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
