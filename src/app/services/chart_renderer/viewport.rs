//! Visible depth window and the depth ↔ pixel transform
//!
//! The viewport is a sub-range of the full data extent. Pan and zoom only move
//! the window; the transform is rebuilt from it on every redraw.

/// Visible depth range inside the full extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    full_min: f64,
    full_max: f64,
    view_min: f64,
    view_max: f64,
    min_span: f64,
}

impl Viewport {
    /// Viewport showing the whole `[full_min, full_max]` range
    pub fn new(full_min: f64, full_max: f64, min_span: f64) -> Self {
        Self {
            full_min,
            full_max,
            view_min: full_min,
            view_max: full_max,
            min_span,
        }
    }

    pub fn full_range(&self) -> (f64, f64) {
        (self.full_min, self.full_max)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.view_min, self.view_max)
    }

    pub fn view_min(&self) -> f64 {
        self.view_min
    }

    pub fn view_max(&self) -> f64 {
        self.view_max
    }

    pub fn span(&self) -> f64 {
        self.view_max - self.view_min
    }

    pub fn full_span(&self) -> f64 {
        self.full_max - self.full_min
    }

    pub fn center(&self) -> f64 {
        (self.view_min + self.view_max) / 2.0
    }

    /// Reset to the full extent
    pub fn fit(&mut self) {
        self.view_min = self.full_min;
        self.view_max = self.full_max;
    }

    /// Show `[min, max]`, respecting the span floor and the full extent
    pub fn set_range(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let span = self.clamp_span(max - min);
        let center = (min + max) / 2.0;
        self.place(center - span / 2.0, span);
    }

    /// Move the window so it starts at `min`, keeping `span`
    pub fn pan_to(&mut self, min: f64, span: f64) {
        let span = self.clamp_span(span);
        self.place(min, span);
    }

    /// Scale the span by `factor` keeping `anchor` at the same relative position
    ///
    /// Factors below 1 zoom in, above 1 zoom out.
    pub fn zoom_around(&mut self, anchor: f64, factor: f64) {
        let span = self.span();
        if span <= 0.0 || !(factor > 0.0) {
            return;
        }

        let ratio = ((anchor - self.view_min) / span).clamp(0.0, 1.0);
        let new_span = self.clamp_span(span * factor);
        self.place(anchor - ratio * new_span, new_span);
    }

    fn clamp_span(&self, span: f64) -> f64 {
        span.max(self.min_span).min(self.full_span())
    }

    fn place(&mut self, min: f64, span: f64) {
        let min = min.min(self.full_max - span).max(self.full_min);
        self.view_min = min;
        self.view_max = min + span;
        if span >= self.full_span() {
            self.fit();
        }
    }
}

/// Affine map between depth and vertical pixels for the current viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthTransform {
    view_min: f64,
    top: f64,
    scale: f64,
}

impl DepthTransform {
    /// Map `viewport` onto the pixel rows `[top, bottom]`
    pub fn new(viewport: &Viewport, top: f64, bottom: f64) -> Self {
        let span = viewport.span();
        let scale = if span > 0.0 {
            (bottom - top) / span
        } else {
            0.0
        };
        Self {
            view_min: viewport.view_min(),
            top,
            scale,
        }
    }

    pub fn to_pixel(&self, depth: f64) -> f64 {
        self.top + (depth - self.view_min) * self.scale
    }

    pub fn to_depth(&self, y: f64) -> f64 {
        if self.scale == 0.0 {
            return self.view_min;
        }
        self.view_min + (y - self.top) / self.scale
    }

    /// Depth units per pixel
    pub fn depth_per_pixel(&self) -> f64 {
        if self.scale == 0.0 { 0.0 } else { 1.0 / self.scale }
    }
}

/// Linear map from `[0, axis_max]` onto a panel's pixel columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTransform {
    left: f64,
    scale: f64,
}

impl ValueTransform {
    pub fn new(left: f64, width: f64, axis_max: f64) -> Self {
        let scale = if axis_max > 0.0 { width / axis_max } else { 0.0 };
        Self { left, scale }
    }

    /// Pixel column for `value`; values beyond the axis are not clamped
    pub fn to_pixel(&self, value: f64) -> f64 {
        self.left + value * self.scale
    }
}
