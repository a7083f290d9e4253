// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronos_layout::{Layout, LayoutItem, RegionId};
use chronos_model::{Entity, EntityId, Language};
use kurbo::Size;

/// Borrowed view of everything a frame depends on, apart from the viewport.
///
/// `layout` must have been computed from `entities`; item indices are
/// resolved against that slice.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Entities, in the order the layout was computed from.
    pub entities: &'a [Entity],
    /// Layout of `entities`.
    pub layout: &'a Layout,
    /// Size of the board in pixels.
    pub view_size: Size,
    /// Language for labels and search.
    pub language: Language,
    /// Currently selected entity, if any.
    pub selected_entity: Option<&'a EntityId>,
    /// Currently selected region band, if any.
    pub selected_region: Option<RegionId>,
}

impl<'a> Scene<'a> {
    /// Creates a scene with nothing selected.
    #[must_use]
    pub fn new(
        entities: &'a [Entity],
        layout: &'a Layout,
        view_size: Size,
        language: Language,
    ) -> Self {
        Self {
            entities,
            layout,
            view_size,
            language,
            selected_entity: None,
            selected_region: None,
        }
    }

    /// Sets the selected entity, builder style.
    #[must_use]
    pub fn with_selected_entity(mut self, id: Option<&'a EntityId>) -> Self {
        self.selected_entity = id;
        self
    }

    /// Sets the selected region, builder style.
    #[must_use]
    pub fn with_selected_region(mut self, region: Option<RegionId>) -> Self {
        self.selected_region = region;
        self
    }

    /// Resolves a layout item to its entity.
    #[must_use]
    pub fn entity_of(&self, item: &LayoutItem) -> &'a Entity {
        &self.entities[item.entity]
    }

    /// Looks up an entity and its placement by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<(&'a Entity, &'a LayoutItem)> {
        let item = self.layout.item(id)?;
        self.entities.get(item.entity).map(|e| (e, item))
    }

    /// Returns `true` if `id` is the selected entity.
    #[must_use]
    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected_entity == Some(id)
    }
}
