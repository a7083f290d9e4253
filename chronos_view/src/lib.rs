// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronos View: the timeline viewport.
//!
//! [`TimelineViewport`] is a small, headless model of which part of the world
//! timeline is on screen. It holds a scale (pixels per year) and a horizontal
//! and vertical offset, and provides:
//! - Conversion between world years and screen x ([`TimelineViewport::screen_x`],
//!   [`TimelineViewport::year_at`]).
//! - Zoom about a cursor position that keeps the year under the cursor fixed.
//! - Panning with a hard scroll floor: the vertical offset never goes above
//!   zero, so empty space above the first region band is never revealed.
//! - Fitting a single entity into view ([`TimelineViewport::zoom_to_entity`]).
//! - A logarithmic zoom percentage for display.
//!
//! The horizontal transform is anchored at [`MIN_YEAR`](chronos_model::MIN_YEAR):
//! `screen_x(year) = (year - MIN_YEAR) * scale + offset_x`. All arithmetic is
//! `f64` so that sub-pixel precision holds across the full multi-million-year
//! span and the whole zoom range.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronos_view::TimelineViewport;
//!
//! let mut view = TimelineViewport::new(1.0, 0.0, 0.0);
//! assert_eq!(view.year_at(500.0), -2_999_500.0);
//!
//! // Scroll the wheel up (negative delta zooms in) over x = 400.
//! let before = view.year_at(400.0);
//! view.zoom_at_point(400.0, -120.0);
//! assert!((view.year_at(400.0) - before).abs() < 1e-6);
//!
//! // Dragging the board down can never reveal space above the first band.
//! view.pan_by(0.0, 250.0);
//! assert_eq!(view.offset_y(), 0.0);
//! ```
//!
//! Scale is always clamped into `[MIN_ZOOM, MAX_ZOOM]`; out-of-range requests
//! are never an error.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{EntityFit, MAX_ZOOM, MIN_ZOOM, TimelineViewport, ViewportDebugInfo};
