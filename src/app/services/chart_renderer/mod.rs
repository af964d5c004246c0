//! Depth-synchronised multi-panel chart
//!
//! One renderer instance owns one sounding's plot: a depth label column, a
//! soil type strip and one panel per tracked parameter, all sharing a single
//! vertical depth axis. Pan and zoom move a viewport over the full depth
//! extent; the plotted data is never touched after `set_data`.
//!
//! ## Architecture
//!
//! - [`renderer`] - `ChartRenderer`: input handlers and frame drawing
//! - [`viewport`] - Visible depth window and coordinate transforms
//! - [`plot_data`] - Samples, axis maxima and nearest-sample lookup
//! - [`layout`] - Panel rectangles for a surface size
//! - [`scale`] - Nice axis maxima and grid steps
//! - [`surface`] - `Surface` trait and the recording `RenderList`
//! - [`svg`] - SVG serialization of a `RenderList`
//! - [`hover`] - Hover readout delivered to the host
//!
//! ## Usage
//!
//! ```rust
//! use cpt_processor::app::services::chart_renderer::{ChartRenderer, RenderList};
//! use cpt_processor::config::ChartConfig;
//!
//! let surface = RenderList::new(800.0, 600.0);
//! let mut renderer = ChartRenderer::new(surface, ChartConfig::default()).unwrap();
//! renderer.set_data(&[], &[], &[]);
//! renderer.zoom_in();
//! renderer.zoom_fit();
//! assert_eq!(renderer.viewport().range(), (0.0, 10.0));
//! ```

pub mod hover;
pub mod layout;
pub mod plot_data;
pub mod renderer;
pub mod scale;
pub mod surface;
pub mod svg;
pub mod viewport;

#[cfg(test)]
pub mod tests;

pub use hover::HoverEvent;
pub use layout::ChartLayout;
pub use plot_data::{PlotData, PlotParameter, PlotSample};
pub use renderer::{ChartRenderer, HoverCallback, PointerButton};
pub use surface::{
    FillStyle, LineStyle, Point, Rect, RenderCommand, RenderList, Surface, TextAnchor, TextStyle,
};
pub use viewport::{DepthTransform, ValueTransform, Viewport};
