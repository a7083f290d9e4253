// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronos Model: the data model shared by every Chronos timeline crate.
//!
//! This crate defines what a historical entity _is_ and nothing about where it
//! is drawn. It provides:
//! - [`Entity`] and [`SubEvent`]: interval records on a continuous world-year
//!   axis, with localized text bundles that are opaque to layout code.
//! - [`EntityType`]: a closed enumeration that only affects display styling,
//!   plus the [`EntityStyle`] lookup table in [`style_for`].
//! - Year constants ([`MIN_YEAR`], [`MAX_YEAR`], [`TOTAL_YEARS`]) and
//!   [`format_year`] for human-readable labels across millions of years.
//!
//! Entities are owned by the caller. Higher-level crates (layout, projection,
//! interaction) borrow slices of them and derive everything else.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronos_model::{Entity, EntityType, LocalizedText, format_year};
//!
//! let rome = Entity::new(
//!     "rome",
//!     LocalizedText::new("Roman Empire", "Римская империя"),
//!     LocalizedText::same("Rome"),
//!     -27.0,
//!     476.0,
//!     EntityType::Empire,
//! );
//! assert_eq!(rome.duration(), 503.0);
//! assert_eq!(format_year(rome.start_year), "27 BC");
//! ```
//!
//! Enable the `serde` feature to (de)serialize the model, for example when
//! parsing records returned by an external content generator.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod entity;
mod style;
mod year;

pub use entity::{Entity, EntityId, EntityType, Language, LocalizedText, SubEvent};
pub use style::{EntityStyle, SELECTED_STYLE, style_for};
pub use year::{MAX_YEAR, MIN_YEAR, TOTAL_YEARS, format_year};
