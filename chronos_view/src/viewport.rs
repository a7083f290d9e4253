// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use chronos_layout::LayoutItem;
use chronos_model::{Entity, MIN_YEAR};
use kurbo::{Point, Size};

/// Smallest allowed scale, in pixels per year.
///
/// At this zoom the full three-million-year span is about 300 pixels wide.
pub const MIN_ZOOM: f64 = 0.0001;

/// Largest allowed scale, in pixels per year.
pub const MAX_ZOOM: f64 = 20.0;

/// Parameters for [`TimelineViewport::zoom_to_entity`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityFit {
    /// Fraction of the view width the entity's duration should span.
    pub fill_ratio: f64,
    /// Screen row, in pixels from the top of the view, where the entity's lane
    /// should land.
    pub focus_row: f64,
    /// Height of the fixed header between the view top and layout space.
    pub header_offset: f64,
}

impl Default for EntityFit {
    fn default() -> Self {
        Self {
            fill_ratio: 0.9,
            focus_row: 70.0,
            header_offset: 60.0,
        }
    }
}

/// Pan/zoom state of the timeline board.
///
/// `TimelineViewport` tracks a uniform horizontal scale and two offsets. The
/// horizontal offset is unbounded. The vertical offset is a scroll position
/// in layout space and is kept `<= 0` by every method that changes it.
#[derive(Clone, Debug)]
pub struct TimelineViewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_sensitivity: f64,
    fit: EntityFit,
}

impl Default for TimelineViewport {
    fn default() -> Self {
        Self::new(MIN_ZOOM, 0.0, 0.0)
    }
}

impl TimelineViewport {
    /// Creates a viewport with the given state.
    ///
    /// - `scale` is clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    /// - `offset_y` is clamped to `<= 0`.
    /// - Wheel zoom sensitivity is `0.001` per delta unit by default.
    #[must_use]
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale: clamp_scale(scale, MIN_ZOOM, MAX_ZOOM),
            offset_x,
            offset_y: offset_y.min(0.0),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_sensitivity: 0.001,
            fit: EntityFit::default(),
        }
    }

    /// Creates a viewport at `scale` with `year` centred in a view `width`
    /// pixels wide.
    #[must_use]
    pub fn centered_on(year: f64, scale: f64, width: f64) -> Self {
        let mut view = Self::new(scale, 0.0, 0.0);
        view.center_on_year(year, width);
        view
    }

    /// Current scale in pixels per year.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current horizontal offset in pixels.
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Current vertical offset in pixels; never positive.
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Sets the zoom limits.
    ///
    /// The pair is normalized so that `min_zoom <= max_zoom`, and the current
    /// scale is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.scale = clamp_scale(self.scale, min_zoom, max_zoom);
    }

    /// Returns the `(min, max)` zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets how much one unit of wheel delta changes the zoom factor.
    pub fn set_zoom_sensitivity(&mut self, sensitivity: f64) {
        self.zoom_sensitivity = sensitivity;
    }

    /// Sets the parameters used by [`Self::zoom_to_entity`].
    pub fn set_entity_fit(&mut self, fit: EntityFit) {
        self.fit = fit;
    }

    /// Returns the parameters used by [`Self::zoom_to_entity`].
    #[must_use]
    pub fn entity_fit(&self) -> EntityFit {
        self.fit
    }

    /// Sets the scale without moving the offsets, clamping it into range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale, self.min_zoom, self.max_zoom);
    }

    /// Sets both offsets directly. The vertical offset is floored at zero.
    pub fn set_offsets(&mut self, offset_x: f64, offset_y: f64) {
        self.offset_x = offset_x;
        self.offset_y = offset_y.min(0.0);
    }

    /// Scrolls vertically to `offset_y`, floored at zero.
    pub fn scroll_to(&mut self, offset_y: f64) {
        self.offset_y = offset_y.min(0.0);
    }

    /// Converts a world year to a screen x coordinate.
    #[must_use]
    pub fn screen_x(&self, year: f64) -> f64 {
        (year - MIN_YEAR) * self.scale + self.offset_x
    }

    /// Converts a screen x coordinate to a world year.
    #[must_use]
    pub fn year_at(&self, x: f64) -> f64 {
        (x - self.offset_x) / self.scale + MIN_YEAR
    }

    /// Convenience conversion from a `Point`, using its X coordinate.
    #[must_use]
    pub fn year_at_point(&self, pt: Point) -> f64 {
        self.year_at(pt.x)
    }

    /// Converts a duration in years to a width in pixels.
    #[must_use]
    pub fn years_to_pixels(&self, years: f64) -> f64 {
        years * self.scale
    }

    /// Converts a width in pixels to a duration in years.
    #[must_use]
    pub fn pixels_to_years(&self, pixels: f64) -> f64 {
        pixels / self.scale
    }

    /// World years visible in a view `width` pixels wide.
    #[must_use]
    pub fn visible_year_range(&self, width: f64) -> Range<f64> {
        let start = self.year_at(0.0);
        start..start + width / self.scale
    }

    /// Zooms about a cursor position in response to a wheel event.
    ///
    /// The zoom factor is `1 - wheel_delta * sensitivity`, so negative deltas
    /// zoom in. The resulting scale is clamped, and the horizontal offset is
    /// solved so that the world year under `cursor_x` is unchanged.
    pub fn zoom_at_point(&mut self, cursor_x: f64, wheel_delta: f64) {
        let factor = 1.0 - wheel_delta * self.zoom_sensitivity;
        let new_scale = clamp_scale(self.scale * factor, self.min_zoom, self.max_zoom);

        // Years since MIN_YEAR under the cursor; must map back to cursor_x.
        let world = (cursor_x - self.offset_x) / self.scale;
        self.offset_x = cursor_x - world * new_scale;
        self.scale = new_scale;
    }

    /// Pans by a screen-space delta. The vertical offset is floored at zero.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y = (self.offset_y + dy).min(0.0);
    }

    /// Moves the horizontal offset so `year` sits at the centre of a view
    /// `width` pixels wide.
    pub fn center_on_year(&mut self, year: f64, width: f64) {
        self.offset_x = width * 0.5 - (year - MIN_YEAR) * self.scale;
    }

    /// Fits `entity` into a view of `view_size`.
    ///
    /// - The scale makes the entity's duration (at least one year) span
    ///   [`EntityFit::fill_ratio`] of the view width, clamped into range.
    /// - The temporal midpoint is centred horizontally.
    /// - The vertical offset puts the entity's lane at
    ///   [`EntityFit::focus_row`], without ever going above zero.
    pub fn zoom_to_entity(&mut self, entity: &Entity, item: &LayoutItem, view_size: Size) {
        let duration = entity.duration().max(1.0);
        let target = view_size.width * self.fit.fill_ratio / duration;
        self.scale = clamp_scale(target, self.min_zoom, self.max_zoom);

        let center_year = entity.start_year + duration * 0.5;
        self.center_on_year(center_year, view_size.width);

        self.offset_y = (self.fit.focus_row - item.global_y - self.fit.header_offset).min(0.0);
    }

    /// Current zoom as a percentage of the logarithmic zoom range.
    ///
    /// `0.0` at the minimum zoom and `100.0` at the maximum. Display only.
    #[must_use]
    pub fn zoom_percentage(&self) -> f64 {
        let log_min = libm::log(self.min_zoom);
        let log_max = libm::log(self.max_zoom);
        let span = log_max - log_min;
        if span <= 0.0 {
            return 100.0;
        }
        ((libm::log(self.scale) - log_min) / span * 100.0).clamp(0.0, 100.0)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, width: f64) -> ViewportDebugInfo {
        ViewportDebugInfo {
            scale: self.scale,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            visible_years: self.visible_year_range(width),
            zoom_percentage: self.zoom_percentage(),
        }
    }
}

/// Clamps a requested scale, falling back to `min` for NaN.
fn clamp_scale(scale: f64, min: f64, max: f64) -> f64 {
    if scale.is_nan() {
        return min;
    }
    scale.clamp(min, max)
}

/// Debug snapshot of a [`TimelineViewport`] state.
#[derive(Clone, Debug)]
pub struct ViewportDebugInfo {
    /// Pixels per year.
    pub scale: f64,
    /// Horizontal offset in pixels.
    pub offset_x: f64,
    /// Vertical offset in pixels.
    pub offset_y: f64,
    /// Minimum scale.
    pub min_zoom: f64,
    /// Maximum scale.
    pub max_zoom: f64,
    /// World years currently visible.
    pub visible_years: Range<f64>,
    /// Display zoom percentage.
    pub zoom_percentage: f64,
}
