// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Screen metrics and thresholds used when projecting a frame.
///
/// All distances are in screen pixels unless the field name says years.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConfig {
    /// Height of the fixed date header; layout space starts below it.
    pub header_offset: f64,
    /// Height of an entity card.
    pub card_height: f64,
    /// Narrowest on-screen card.
    pub min_card_width: f64,
    /// Widest on-screen card.
    pub max_card_width: f64,
    /// Narrowest raw interval width before the card clamp applies.
    pub min_interval_width: f64,
    /// Lower bound of the horizontal culling buffer, in years.
    pub cull_min_buffer_years: f64,
    /// Horizontal culling buffer expressed in pixels; converted to years at
    /// the current scale and compared against the lower bound.
    pub cull_buffer_pixels: f64,
    /// Vertical culling margin above and below the view.
    pub cull_vertical_margin: f64,
    /// Minimum distance between adjacent grid lines.
    pub min_grid_spacing: f64,
    /// Grid lines further than this outside the view are skipped.
    pub grid_margin: f64,
    /// Minimum horizontal distance between markers on the same level.
    pub marker_spacing: f64,
    /// Vertical distance from a card's top to the first marker level.
    pub marker_base_offset: f64,
    /// Vertical distance between marker levels.
    pub marker_level_height: f64,
    /// Markers further than this outside the view are skipped.
    pub marker_margin: f64,
    /// Characters kept from a description when a marker has no title.
    pub marker_label_chars: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            header_offset: 60.0,
            card_height: 40.0,
            min_card_width: 50.0,
            max_card_width: 10_000.0,
            min_interval_width: 2.0,
            cull_min_buffer_years: 500.0,
            cull_buffer_pixels: 100.0,
            cull_vertical_margin: 50.0,
            min_grid_spacing: 160.0,
            grid_margin: 100.0,
            marker_spacing: 160.0,
            marker_base_offset: 50.0,
            marker_level_height: 60.0,
            marker_margin: 500.0,
            marker_label_chars: 30,
        }
    }
}
