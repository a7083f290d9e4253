// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronos Projection: what to draw for the current viewport.
//!
//! Given a [`Scene`] (entities, their [`Layout`], the view size, and the
//! current selection) and a [`TimelineViewport`], this crate computes the
//! screen-space geometry a renderer needs, and nothing more:
//!
//! - [`visible_items`]: entities whose interval and lane intersect the view
//!   (with generous margins), each with its on-screen shape and style.
//! - [`grid_step`] / [`grid_lines`]: vertical time grid lines from a fixed
//!   ladder of round year increments, never closer than a minimum spacing.
//! - [`sub_event_markers`]: markers for the selected entity's sub-events,
//!   spread over vertical levels so labels do not collide.
//! - [`RenderProjector`]: bundles the above plus projected region bands into
//!   a single [`Frame`].
//!
//! Culling bounds per-frame work by the size of the view rather than the size
//! of the data set or the multi-million-year span. Nothing is cached between
//! frames; every call is a pure function of its inputs.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronos_layout::{LayoutConfig, calculate_layout};
//! use chronos_model::{Entity, EntityType, Language, LocalizedText};
//! use chronos_projection::{ProjectionConfig, RenderProjector, Scene};
//! use chronos_view::TimelineViewport;
//! use kurbo::Size;
//!
//! let entities = [Entity::new(
//!     "troy",
//!     LocalizedText::same("Troy"),
//!     LocalizedText::same("Anatolia"),
//!     -3000.0,
//!     -1180.0,
//!     EntityType::State,
//! )];
//! let layout = calculate_layout(&entities, &LayoutConfig::default());
//! let scene = Scene::new(&entities, &layout, Size::new(1200.0, 800.0), Language::En);
//!
//! let view = TimelineViewport::centered_on(-2000.0, 0.5, 1200.0);
//! let frame = RenderProjector::new(ProjectionConfig::default()).project(&scene, &view);
//!
//! assert_eq!(frame.items.len(), 1);
//! assert!(frame.grid.step * view.scale() >= 160.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod frame;
mod grid;
mod markers;
mod scene;
mod visible;

pub use config::ProjectionConfig;
pub use frame::{Frame, RenderProjector, ScreenBand};
pub use grid::{GRID_STEPS, Grid, GridLine, grid_lines, grid_step};
pub use markers::{MarkerLevels, SubEventMarker, marker_label, sub_event_markers};
pub use scene::Scene;
pub use visible::{VisibleItem, item_rect, visible_items};

// Re-exported for doc links.
#[doc(no_inline)]
pub use chronos_layout::Layout;
#[doc(no_inline)]
pub use chronos_view::TimelineViewport;
