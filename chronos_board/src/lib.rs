// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronos Board: a timeline board that can be driven end to end.
//!
//! The headless Chronos crates each compute one thing from borrowed data.
//! [`Board`] is the owner that ties them together:
//! - an [`EntityStore`] holding the authoritative entity list, with a revision
//!   counter so the layout is recomputed only when the list changes;
//! - a [`TimelineViewport`](chronos_view::TimelineViewport) and an
//!   [`InteractionController`](chronos_interaction::InteractionController),
//!   whose [`Mutation`](chronos_interaction::Mutation)s the board applies;
//! - navigation helpers for a region panel ([`Board::region_groups`],
//!   [`Board::scroll_to_region`], [`Board::select_entity`]);
//! - a content generation boundary with graceful fallbacks (see
//!   [`ContentGenerator`]).
//!
//! Problems the user should hear about (a rejected edit, a failed generation)
//! are queued as [`Notice`]s and logged through the [`log`] facade; install
//! any logger to see them.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronos_board::{Board, BoardConfig};
//! use chronos_interaction::PointerButton;
//! use chronos_model::{Entity, EntityType, LocalizedText};
//! use kurbo::{Size, Vec2};
//!
//! let rome = Entity::new(
//!     "rome",
//!     LocalizedText::new("Roman Empire", "Римская империя"),
//!     LocalizedText::same("Rome"),
//!     -27.0,
//!     476.0,
//!     EntityType::Empire,
//! );
//! let mut board = Board::new(vec![rome], Size::new(1200.0, 800.0), BoardConfig::default());
//! board.select_entity("rome");
//!
//! // Zoomed so the empire spans 90% of the width.
//! let frame = board.frame();
//! assert_eq!(frame.items.len(), 1);
//! assert!((frame.items[0].rect.width() - 1080.0).abs() < 1e-6);
//!
//! // Dragging the card in edit mode moves it.
//! board.set_edit_mode(true);
//! let card = frame.items[0].rect.center();
//! let hundred_years = Vec2::new(100.0 * board.viewport().scale(), 0.0);
//! board.pointer_down(card, PointerButton::Primary);
//! board.pointer_move(card + hundred_years);
//! board.pointer_up(card + hundred_years);
//! assert!((board.store().get("rome").unwrap().start_year - 73.0).abs() < 1e-9);
//! ```

mod board;
mod generation;
mod store;

pub use board::{Board, BoardConfig, Notice, NoticeKind};
pub use generation::{
    ContentGenerator, GenerationError, GenerationOutcome, GenerationRequest, GenerationSchema,
    GenerationTicket,
};
pub use store::{EntityStore, StoreError};
