//! SVG serialization of a recorded frame
//!
//! Clip regions become `<clipPath>` definitions wrapping a `<g>` group, so a
//! frame replays in SVG exactly as it was drawn.

use std::fmt::Write;

use super::surface::{FillStyle, LineStyle, Point, RenderCommand, RenderList, TextAnchor};

impl RenderList {
    /// Standalone SVG document for the recorded commands
    pub fn to_svg(&self) -> String {
        let (width, height) = (self.width(), self.height());
        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.2} {height:.2}\" font-family=\"sans-serif\">"
        );

        let mut clip_count = 0usize;
        let mut open_groups = 0usize;
        for command in &self.commands {
            match command {
                RenderCommand::FillRect { rect, style } => {
                    let _ = write!(
                        svg,
                        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"{}/>",
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        fill_attrs(style)
                    );
                }
                RenderCommand::StrokeRect { rect, style } => {
                    let _ = write!(
                        svg,
                        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\"{}/>",
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        stroke_attrs(style)
                    );
                }
                RenderCommand::Line { from, to, style } => {
                    let _ = write!(
                        svg,
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"{}/>",
                        from.x,
                        from.y,
                        to.x,
                        to.y,
                        stroke_attrs(style)
                    );
                }
                RenderCommand::Polyline { points, style } => {
                    let _ = write!(
                        svg,
                        "<path d=\"{}\" fill=\"none\"{}/>",
                        path_data(points),
                        stroke_attrs(style)
                    );
                }
                RenderCommand::Circle {
                    center,
                    radius,
                    style,
                } => {
                    let _ = write!(
                        svg,
                        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"{}/>",
                        center.x,
                        center.y,
                        radius,
                        fill_attrs(style)
                    );
                }
                RenderCommand::Text {
                    position,
                    text,
                    style,
                } => {
                    let anchor = match style.anchor {
                        TextAnchor::Start => "start",
                        TextAnchor::Middle => "middle",
                        TextAnchor::End => "end",
                    };
                    let weight = if style.bold { " font-weight=\"bold\"" } else { "" };
                    let _ = write!(
                        svg,
                        "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.1}\" fill=\"{}\" text-anchor=\"{}\"{}>{}</text>",
                        position.x,
                        position.y,
                        style.size,
                        escape_xml(&style.color),
                        anchor,
                        weight,
                        escape_xml(text)
                    );
                }
                RenderCommand::PushClip { rect } => {
                    clip_count += 1;
                    open_groups += 1;
                    let _ = write!(
                        svg,
                        "<clipPath id=\"clip{clip_count}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath><g clip-path=\"url(#clip{clip_count})\">",
                        rect.x, rect.y, rect.width, rect.height
                    );
                }
                RenderCommand::PopClip => {
                    if open_groups > 0 {
                        open_groups -= 1;
                        svg.push_str("</g>");
                    }
                }
            }
        }

        for _ in 0..open_groups {
            svg.push_str("</g>");
        }
        svg.push_str("</svg>");
        svg
    }
}

fn fill_attrs(style: &FillStyle) -> String {
    if style.alpha >= 1.0 {
        format!(" fill=\"{}\"", escape_xml(&style.color))
    } else {
        format!(
            " fill=\"{}\" fill-opacity=\"{:.2}\"",
            escape_xml(&style.color),
            style.alpha.max(0.0)
        )
    }
}

fn stroke_attrs(style: &LineStyle) -> String {
    let dash = if style.dashed {
        " stroke-dasharray=\"4 3\""
    } else {
        ""
    };
    format!(
        " stroke=\"{}\" stroke-width=\"{:.2}\"{}",
        escape_xml(&style.color),
        style.width,
        dash
    )
}

fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{command} {:.2} {:.2}", point.x, point.y);
    }
    d
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
