//! Interactive depth chart
//!
//! [`ChartRenderer`] keeps the plotted data ([`PlotData`]) apart from the
//! mutable view state. Input handlers change the view and redraw the whole
//! frame synchronously into the owned [`Surface`].

use tracing::debug;

use super::hover::HoverEvent;
use super::layout::ChartLayout;
use super::plot_data::PlotData;
use super::scale::{format_tick, grid_values, label_precision, nice_step, vertical_divisions};
use super::surface::{FillStyle, LineStyle, Point, Rect, Surface, TextAnchor, TextStyle};
use super::viewport::{DepthTransform, ValueTransform, Viewport};
use crate::app::models::{ColumnDescriptor, FormatRecord, Layer, Row};
use crate::config::ChartConfig;
use crate::constants::chart;
use crate::{Error, Result};

/// Receives a readout on hover and `None` when the pointer leaves the plot
pub type HoverCallback = Box<dyn FnMut(Option<&HoverEvent>)>;

/// Pointer buttons the renderer distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pan gesture parameters captured when the button goes down
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    anchor_y: f64,
    start_min: f64,
    span: f64,
    depth_per_pixel: f64,
}

/// Mutable viewport and interaction state
#[derive(Debug, Clone, PartialEq)]
struct ViewState {
    viewport: Viewport,
    hover_depth: Option<f64>,
    drag: Option<DragState>,
}

impl ViewState {
    fn new(extent: (f64, f64), min_span: f64) -> Self {
        Self {
            viewport: Viewport::new(extent.0, extent.1, min_span),
            hover_depth: None,
            drag: None,
        }
    }
}

/// Multi-panel depth chart bound to one sounding
pub struct ChartRenderer<S: Surface> {
    surface: S,
    config: ChartConfig,
    plot: Option<PlotData>,
    view: ViewState,
    layout: Option<ChartLayout>,
    hover_callback: Option<HoverCallback>,
}

impl<S: Surface> ChartRenderer<S> {
    /// Create a renderer drawing on `surface`; nothing is drawn until data is set
    pub fn new(surface: S, config: ChartConfig) -> Result<Self> {
        config.validate().map_err(|error| match error {
            Error::Configuration { message } => Error::render(message),
            other => other,
        })?;

        let view = ViewState::new((0.0, chart::EMPTY_DEPTH_EXTENT), config.min_view_span);
        let mut renderer = Self {
            surface,
            config,
            plot: None,
            view,
            layout: None,
            hover_callback: None,
        };
        renderer.resize();
        Ok(renderer)
    }

    /// Register the hover listener, replacing any previous one
    pub fn on_hover(&mut self, callback: impl FnMut(Option<&HoverEvent>) + 'static) {
        self.hover_callback = Some(Box::new(callback));
    }

    /// Bind a sounding; resets the viewport to the full depth extent
    pub fn set_data(&mut self, rows: &[Row], columns: &[ColumnDescriptor], layers: &[Layer]) {
        let plot = PlotData::new(rows, columns, layers, &self.config);
        self.view = ViewState::new(plot.depth_extent, self.config.min_view_span);
        self.plot = Some(plot);
        self.redraw();
    }

    /// Bind a parsed and classified record
    pub fn set_record(&mut self, record: &FormatRecord) {
        self.set_data(&record.data, &record.columns, &record.layers);
    }

    /// Re-measure the surface and redraw
    pub fn resize(&mut self) {
        let (width, height) = self.surface.size();
        self.layout = ChartLayout::compute(width, height, &self.config);
        if self.layout.is_none() {
            debug!("Surface {}x{} too small to draw, skipping", width, height);
            return;
        }
        self.redraw();
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(over_plot) = self.layout.as_ref().map(|l| l.is_over_plot(x, y)) else {
            return;
        };

        let panned = self.apply_drag(y);

        if over_plot && self.plot.is_some() {
            if let Some(transform) = self.depth_transform() {
                self.view.hover_depth = Some(transform.to_depth(y));
            }
            self.redraw();
            self.emit_hover();
        } else if self.view.hover_depth.take().is_some() {
            self.redraw();
            self.emit(None);
        } else if panned {
            self.redraw();
        }
    }

    pub fn pointer_leave(&mut self) {
        self.view.drag = None;
        if self.view.hover_depth.take().is_some() {
            self.redraw();
        }
        self.emit(None);
    }

    /// Start a pan gesture with the primary button
    pub fn pointer_down(&mut self, x: f64, y: f64, button: PointerButton) {
        if button != PointerButton::Primary || self.plot.is_none() {
            return;
        }
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        if !layout.is_over_plot(x, y) {
            return;
        }

        let span = self.view.viewport.span();
        self.view.drag = Some(DragState {
            anchor_y: y,
            start_min: self.view.viewport.view_min(),
            span,
            depth_per_pixel: span / layout.plot_height(),
        });
    }

    pub fn pointer_up(&mut self) {
        self.view.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.view.drag.is_some()
    }

    /// Zoom one wheel step around the pointer depth; positive delta zooms out
    pub fn wheel(&mut self, x: f64, y: f64, delta: f64) {
        if delta == 0.0 || !delta.is_finite() || self.plot.is_none() {
            return;
        }
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        if !layout.is_over_plot(x, y) {
            return;
        }
        let Some(transform) = self.depth_transform() else {
            return;
        };

        let anchor = transform.to_depth(y);
        let factor = if delta > 0.0 {
            self.config.wheel_zoom_factor
        } else {
            1.0 / self.config.wheel_zoom_factor
        };
        self.view.viewport.zoom_around(anchor, factor);
        self.redraw();
    }

    pub fn zoom_in(&mut self) {
        self.zoom_center(1.0 / self.config.button_zoom_factor);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_center(self.config.button_zoom_factor);
    }

    /// Show the full depth extent
    pub fn zoom_fit(&mut self) {
        self.view.viewport.fit();
        self.redraw();
    }

    /// Show an explicit depth window
    pub fn set_view_range(&mut self, min: f64, max: f64) {
        self.view.viewport.set_range(min, max);
        self.redraw();
    }

    /// Place the crosshair at a depth as if the pointer were there
    pub fn hover_at_depth(&mut self, depth: f64) {
        if self.plot.is_none() {
            return;
        }
        self.view.hover_depth = Some(depth);
        self.redraw();
        self.emit_hover();
    }

    pub fn viewport(&self) -> &Viewport {
        &self.view.viewport
    }

    pub fn hover_depth(&self) -> Option<f64> {
        self.view.hover_depth
    }

    /// Readout for the current hover depth
    pub fn hover_event(&self) -> Option<HoverEvent> {
        let depth = self.view.hover_depth?;
        let plot = self.plot.as_ref()?;
        let sample = plot.nearest_sample(depth)?;
        Some(HoverEvent::new(depth, sample, plot))
    }

    pub fn plot(&self) -> Option<&PlotData> {
        self.plot.as_ref()
    }

    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn zoom_center(&mut self, factor: f64) {
        let center = self.view.viewport.center();
        self.view.viewport.zoom_around(center, factor);
        self.redraw();
    }

    fn apply_drag(&mut self, y: f64) -> bool {
        let Some(drag) = self.view.drag else {
            return false;
        };
        let delta = (y - drag.anchor_y) * drag.depth_per_pixel;
        self.view.viewport.pan_to(drag.start_min - delta, drag.span);
        true
    }

    fn depth_transform(&self) -> Option<DepthTransform> {
        let layout = self.layout.as_ref()?;
        Some(DepthTransform::new(
            &self.view.viewport,
            layout.plot_top(),
            layout.plot_bottom(),
        ))
    }

    fn emit_hover(&mut self) {
        let event = self.hover_event();
        self.emit(event.as_ref());
    }

    fn emit(&mut self, event: Option<&HoverEvent>) {
        if let Some(callback) = self.hover_callback.as_mut() {
            callback(event);
        }
    }

    /// Re-emit the full frame
    pub fn redraw(&mut self) {
        self.surface.clear();
        let (Some(layout), Some(plot)) = (self.layout.as_ref(), self.plot.as_ref()) else {
            return;
        };

        let (width, height) = self.surface.size();
        let transform =
            DepthTransform::new(&self.view.viewport, layout.plot_top(), layout.plot_bottom());
        let mut frame = Frame {
            surface: &mut self.surface,
            config: &self.config,
            layout,
            plot,
            viewport: &self.view.viewport,
            transform,
        };

        frame
            .surface
            .fill_rect(Rect::new(0.0, 0.0, width, height), &FillStyle::solid(BACKGROUND));
        frame.soil_layers();
        frame.depth_grid();
        frame.value_grid();
        frame.traces();
        frame.titles();
        frame.frames();
        if let Some(depth) = self.view.hover_depth {
            frame.crosshair(depth);
        }
    }
}

const BACKGROUND: &str = "#ffffff";
const FRAME_COLOR: &str = "#9e9e9e";
const MAJOR_GRID_COLOR: &str = "#c4c4c4";
const MINOR_GRID_COLOR: &str = "#ebebeb";
const LABEL_COLOR: &str = "#333333";
const CROSSHAIR_COLOR: &str = "#444444";

/// One frame's drawing context
struct Frame<'a, S: Surface> {
    surface: &'a mut S,
    config: &'a ChartConfig,
    layout: &'a ChartLayout,
    plot: &'a PlotData,
    viewport: &'a Viewport,
    transform: DepthTransform,
}

impl<S: Surface> Frame<'_, S> {
    fn value_transform(&self, index: usize) -> ValueTransform {
        let panel = self.layout.panels[index];
        ValueTransform::new(panel.x, panel.width, self.plot.parameters[index].axis_max)
    }

    /// Soil strip at full tint plus a faint underlay behind the first panel
    fn soil_layers(&mut self) {
        let mut targets = vec![(self.layout.soil_strip, chart::SOIL_STRIP_ALPHA)];
        if let Some(first) = self.layout.panels.first() {
            targets.push((*first, chart::SOIL_UNDERLAY_ALPHA));
        }

        let (top, bottom) = (self.layout.plot_top(), self.layout.plot_bottom());
        for (rect, alpha) in targets {
            self.surface.push_clip(rect);
            for layer in &self.plot.layers {
                let y0 = self.transform.to_pixel(layer.start_depth);
                let y1 = self.transform.to_pixel(layer.end_depth);
                if y1 < top || y0 > bottom {
                    continue;
                }
                self.surface.fill_rect(
                    Rect::new(rect.x, y0, rect.width, (y1 - y0).max(1.0)),
                    &FillStyle::with_alpha(layer.zone.color, alpha),
                );
            }
            self.surface.pop_clip();
        }
    }

    /// Horizontal gridlines with depth labels; whole metres are major lines
    fn depth_grid(&mut self) {
        let (view_min, view_max) = self.viewport.range();
        let step = nice_step(view_max - view_min, self.config.target_grid_steps);
        let precision = label_precision(step);
        let major = LineStyle::new(MAJOR_GRID_COLOR, 1.0);
        let minor = LineStyle::new(MINOR_GRID_COLOR, 0.5);
        let label_style = TextStyle::new(LABEL_COLOR, 10.0, TextAnchor::End);
        let axis = self.layout.depth_axis;

        for depth in grid_values(view_min, view_max, step) {
            let y = self.transform.to_pixel(depth);
            let style = if (depth - depth.round()).abs() < 1e-9 {
                &major
            } else {
                &minor
            };

            for panel in &self.layout.panels {
                self.surface
                    .line(Point::new(panel.x, y), Point::new(panel.right(), y), style);
            }
            self.surface.text(
                Point::new(axis.right() - 6.0, y + 3.5),
                &format!("{:.*}", precision, depth),
                &label_style,
            );
        }
    }

    /// Evenly spaced vertical gridlines per panel
    fn value_grid(&mut self) {
        let style = LineStyle::new(MINOR_GRID_COLOR, 0.5);
        let (top, bottom) = (self.layout.plot_top(), self.layout.plot_bottom());
        for panel in &self.layout.panels {
            let divisions = vertical_divisions(panel.width);
            for i in 1..divisions {
                let x = panel.x + panel.width * i as f64 / divisions as f64;
                self.surface
                    .line(Point::new(x, top), Point::new(x, bottom), &style);
            }
        }
    }

    /// Parameter traces, broken wherever a value is missing
    fn traces(&mut self) {
        for (index, parameter) in self.plot.parameters.iter().enumerate() {
            let panel = self.layout.panels[index];
            let values = self.value_transform(index);
            let style = LineStyle::new(&parameter.color, 1.2);
            let dot = FillStyle::solid(&parameter.color);

            self.surface.push_clip(panel);
            let mut segment: Vec<Point> = Vec::new();
            for sample in &self.plot.samples {
                match sample.values[index] {
                    Some(value) => segment.push(Point::new(
                        values.to_pixel(value),
                        self.transform.to_pixel(sample.depth),
                    )),
                    None => flush_segment(self.surface, &mut segment, &style, &dot),
                }
            }
            flush_segment(self.surface, &mut segment, &style, &dot);
            self.surface.pop_clip();
        }
    }

    /// Panel titles and 0/mid/max tick labels
    fn titles(&mut self) {
        let top = self.layout.plot_top();
        let title_style = TextStyle::new(LABEL_COLOR, 11.0, TextAnchor::Middle).bold();

        let axis = self.layout.depth_axis;
        self.surface.text(
            Point::new(axis.center_x(), top - 20.0),
            "Depth (m)",
            &title_style,
        );

        for (index, parameter) in self.plot.parameters.iter().enumerate() {
            let panel = self.layout.panels[index];
            let title = if parameter.unit.is_empty() {
                parameter.label.clone()
            } else {
                format!("{} ({})", parameter.label, parameter.unit)
            };
            self.surface
                .text(Point::new(panel.center_x(), top - 20.0), &title, &title_style);

            if panel.width < self.config.narrow_panel_width {
                continue;
            }
            let values = self.value_transform(index);
            let ticks = [
                (0.0, TextAnchor::Start),
                (parameter.axis_max / 2.0, TextAnchor::Middle),
                (parameter.axis_max, TextAnchor::End),
            ];
            for (value, anchor) in ticks {
                self.surface.text(
                    Point::new(values.to_pixel(value), top - 5.0),
                    &format_tick(value),
                    &TextStyle::new(LABEL_COLOR, 9.0, anchor),
                );
            }
        }
    }

    fn frames(&mut self) {
        let style = LineStyle::new(FRAME_COLOR, 1.0);
        self.surface.stroke_rect(self.layout.soil_strip, &style);
        for panel in &self.layout.panels {
            self.surface.stroke_rect(*panel, &style);
        }
    }

    /// Crosshair line, depth readout and nearest-sample markers
    fn crosshair(&mut self, depth: f64) {
        let (view_min, view_max) = self.viewport.range();
        if depth < view_min || depth > view_max {
            return;
        }

        let y = self.transform.to_pixel(depth);
        let area = self.layout.plot_area();
        self.surface.line(
            Point::new(area.x, y),
            Point::new(area.right(), y),
            &LineStyle::new(CROSSHAIR_COLOR, 1.0).dashed(),
        );

        let axis = self.layout.depth_axis;
        self.surface.fill_rect(
            Rect::new(axis.x + 2.0, y - 8.0, axis.width - 4.0, 16.0),
            &FillStyle::solid(CROSSHAIR_COLOR),
        );
        self.surface.text(
            Point::new(axis.right() - 6.0, y + 3.5),
            &format!("{:.2}", depth),
            &TextStyle::new(BACKGROUND, 10.0, TextAnchor::End).bold(),
        );

        let Some(sample) = self.plot.nearest_sample(depth) else {
            return;
        };
        let marker_y = self.transform.to_pixel(sample.depth);
        for (index, parameter) in self.plot.parameters.iter().enumerate() {
            let Some(value) = sample.values[index] else {
                continue;
            };
            let panel = self.layout.panels[index];
            let x = self.value_transform(index).to_pixel(value);
            self.surface.push_clip(panel);
            self.surface.circle(
                Point::new(x, marker_y),
                3.5,
                &FillStyle::solid(&parameter.color),
            );
            self.surface.pop_clip();
        }
    }
}

fn flush_segment<S: Surface>(
    surface: &mut S,
    segment: &mut Vec<Point>,
    style: &LineStyle,
    dot: &FillStyle,
) {
    match segment.len() {
        0 => {}
        1 => surface.circle(segment[0], style.width, dot),
        _ => surface.polyline(segment, style),
    }
    segment.clear();
}
