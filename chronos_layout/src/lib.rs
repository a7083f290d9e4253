// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronos Layout: region bands and lane packing for interval entities.
//!
//! Given the complete entity list, [`calculate_layout`] produces:
//! - one [`LayoutItem`] per entity: its [`RegionId`], a lane index within that
//!   region, and an absolute vertical offset (`global_y`) in unscrolled
//!   layout space;
//! - the list of non-empty [`RegionBand`]s, in fixed region order, each with a
//!   vertical start and height.
//!
//! Region membership comes from [`classify_location`], a total function over
//! the English location text. Within a region, entities are stable-sorted by
//! start year and placed with a first-fit greedy scan over lanes. Lane counts
//! are not minimized; the exact lanes the greedy scan produces are part of
//! the observable contract.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronos_layout::{LayoutConfig, RegionId, calculate_layout};
//! use chronos_model::{Entity, EntityType, LocalizedText};
//!
//! let europe = LocalizedText::same("Europe");
//! let entities = [
//!     Entity::new("a", LocalizedText::same("A"), europe.clone(), 0.0, 100.0, EntityType::State),
//!     Entity::new("b", LocalizedText::same("B"), europe.clone(), 50.0, 150.0, EntityType::State),
//!     Entity::new("c", LocalizedText::same("C"), europe, 300.0, 400.0, EntityType::State),
//! ];
//!
//! let layout = calculate_layout(&entities, &LayoutConfig::default());
//! let lanes: Vec<usize> = ["a", "b", "c"]
//!     .iter()
//!     .map(|id| layout.item(id).unwrap().lane)
//!     .collect();
//! assert_eq!(lanes, [0, 1, 0]);
//!
//! let band = &layout.regions()[0];
//! assert_eq!(band.region, RegionId::Europe);
//! assert_eq!(band.height, 30.0 + 2.0 * 50.0 + 20.0);
//! ```
//!
//! Layout is recomputed wholesale whenever the entity list changes; nothing is
//! cached between calls.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod pack;
mod region;

pub use layout::{
    Layout, LayoutConfig, LayoutItem, RegionBand, RegionGroup, calculate_layout, group_by_region,
};
pub use pack::{Interval, LanePacker, MIN_DURATION};
pub use region::{RegionId, classify_location};
