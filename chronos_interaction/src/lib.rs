// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronos Interaction: pointer handling for a timeline board.
//!
//! [`InteractionController`] turns raw pointer input into viewport changes and
//! [`Intent`]s. It never touches the entity list; edits come out as
//! [`Mutation`]s for the owner of the data to apply.
//!
//! Gestures:
//! - Press on empty board and drag: pan. A short press selects the region band
//!   under the pointer.
//! - Press on a card and release without dragging: zoom to the card and select
//!   it.
//! - In edit mode, drag a card's body to move it or one of its edge handles to
//!   resize it. An updated entity is emitted on every move.
//! - Secondary press: open a [`ContextMenu`] at the pointer, holding the year
//!   under it. The menu searches entity names and, in edit mode, creates new
//!   entities.
//! - Wheel: zoom about the pointer.
//!
//! A press counts as a click until the pointer strays more than
//! [`InteractionConfig::click_threshold`] pixels on either axis.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronos_interaction::{Intent, InteractionController, PointerButton};
//! use chronos_layout::{LayoutConfig, RegionId, calculate_layout};
//! use chronos_model::{Entity, EntityType, Language, LocalizedText};
//! use chronos_projection::Scene;
//! use chronos_view::TimelineViewport;
//! use kurbo::{Point, Size};
//!
//! let entities = [Entity::new(
//!     "rome",
//!     LocalizedText::same("Rome"),
//!     LocalizedText::same("Rome"),
//!     -753.0,
//!     476.0,
//!     EntityType::Empire,
//! )];
//! let layout = calculate_layout(&entities, &LayoutConfig::default());
//! let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);
//! let mut view = TimelineViewport::centered_on(0.0, 0.5, 1000.0);
//! let mut controller = InteractionController::default();
//!
//! // A click on the band, away from the card, selects the region.
//! let pos = Point::new(950.0, 100.0);
//! controller.pointer_down(pos, PointerButton::Primary, &view, &scene);
//! let intent = controller.pointer_up(pos, &mut view, &scene);
//! assert_eq!(intent, Some(Intent::SelectRegion(Some(RegionId::Europe))));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod drag;
mod hit;
mod menu;

pub use controller::{
    CursorHint, DragMode, Intent, InteractionConfig, InteractionController, Mutation,
    PointerButton,
};
pub use drag::DragTracker;
pub use hit::{ItemHit, ItemZone, hit_item, hit_region, item_zone};
pub use menu::{ContextMenu, SearchResult, search_entities};
