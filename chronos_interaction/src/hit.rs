// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing against projected cards and region bands.
//!
//! Cards are tested in paint order reversed: the selected card is drawn on
//! top, then later layout items over earlier ones. A hit reports which part of
//! the card was struck so edit gestures can tell resizing from moving.

use chronos_layout::{Layout, RegionId};
use chronos_model::EntityId;
use chronos_projection::{ProjectionConfig, Scene, visible_items};
use chronos_view::TimelineViewport;
use kurbo::{Point, Rect};

/// Part of a card under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemZone {
    /// Within the handle width of the left edge.
    LeftEdge,
    /// The body of the card.
    Body,
    /// Within the handle width of the right edge.
    RightEdge,
}

/// Classifies a pointer x against a card's horizontal extent.
///
/// The left handle wins when both handles overlap on a narrow card.
#[must_use]
pub fn item_zone(rect: Rect, x: f64, handle: f64) -> ItemZone {
    let local = x - rect.x0;
    if local < handle {
        ItemZone::LeftEdge
    } else if local > rect.width() - handle {
        ItemZone::RightEdge
    } else {
        ItemZone::Body
    }
}

/// A card under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemHit {
    /// Index of the entity in [`Scene::entities`].
    pub entity: usize,
    /// Identifier of the entity.
    pub id: EntityId,
    /// On-screen card shape.
    pub rect: Rect,
    /// Part of the card that was struck.
    pub zone: ItemZone,
}

/// Returns the topmost card under `pt`, if any.
#[must_use]
pub fn hit_item(
    scene: &Scene<'_>,
    viewport: &TimelineViewport,
    config: &ProjectionConfig,
    handle: f64,
    pt: Point,
) -> Option<ItemHit> {
    let items = visible_items(scene, viewport, config);
    let selected = items.iter().filter(|item| item.selected);
    let rest = items.iter().rev().filter(|item| !item.selected);
    selected
        .chain(rest)
        .find(|item| item.rect.contains(pt))
        .map(|item| ItemHit {
            entity: item.entity,
            id: item.id.clone(),
            rect: item.rect,
            zone: item_zone(item.rect, pt.x, handle),
        })
}

/// Returns the region band under screen `y`.
///
/// `y` is converted to layout space by removing the vertical offset and the
/// header; band edges are inclusive and the first matching band wins.
#[must_use]
pub fn hit_region(
    layout: &Layout,
    viewport: &TimelineViewport,
    header_offset: f64,
    y: f64,
) -> Option<RegionId> {
    layout
        .region_at(y - viewport.offset_y() - header_offset)
        .map(|band| band.region)
}
