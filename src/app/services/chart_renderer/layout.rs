//! Panel geometry
//!
//! Left to right: depth label column, soil strip, then one panel per tracked
//! parameter sharing the remaining width by weight.

use super::surface::{Point, Rect};
use crate::config::ChartConfig;

/// Pixel rectangles for one surface size
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub depth_axis: Rect,
    pub soil_strip: Rect,

    /// Parameter panels in configuration order
    pub panels: Vec<Rect>,
}

impl ChartLayout {
    /// Lay out the columns; `None` when the surface leaves no room to plot
    pub fn compute(width: f64, height: f64, config: &ChartConfig) -> Option<Self> {
        let top = config.top_margin;
        let plot_height = height - config.top_margin - config.bottom_margin;
        if !(width > 0.0 && plot_height > 0.0) {
            return None;
        }

        let depth_axis = Rect::new(0.0, top, config.depth_axis_width, plot_height);
        let soil_strip = Rect::new(
            depth_axis.right(),
            top,
            config.soil_strip_width,
            plot_height,
        );

        let count = config.parameters.len();
        let first_x = soil_strip.right() + config.panel_gap;
        let available = width - first_x - config.panel_gap * count as f64;
        if !(available > 0.0) {
            return None;
        }

        let total_weight: f64 = config.parameters.iter().map(|p| p.weight).sum();
        let mut x = first_x;
        let mut panels = Vec::with_capacity(count);
        for parameter in &config.parameters {
            let panel_width = available * parameter.weight / total_weight;
            panels.push(Rect::new(x, top, panel_width, plot_height));
            x += panel_width + config.panel_gap;
        }

        Some(Self {
            depth_axis,
            soil_strip,
            panels,
        })
    }

    pub fn plot_top(&self) -> f64 {
        self.soil_strip.y
    }

    pub fn plot_bottom(&self) -> f64 {
        self.soil_strip.bottom()
    }

    pub fn plot_height(&self) -> f64 {
        self.soil_strip.height
    }

    /// Region that reacts to pointer input: soil strip through the last panel
    pub fn plot_area(&self) -> Rect {
        let right = self
            .panels
            .last()
            .map_or(self.soil_strip.right(), Rect::right);
        Rect::new(
            self.soil_strip.x,
            self.plot_top(),
            right - self.soil_strip.x,
            self.plot_height(),
        )
    }

    pub fn is_over_plot(&self, x: f64, y: f64) -> bool {
        self.plot_area().contains(Point::new(x, y))
    }
}
