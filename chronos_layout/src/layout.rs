// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use chronos_model::{Entity, EntityId};
use hashbrown::HashMap;
use peniko::Color;

use crate::pack::LanePacker;
use crate::region::{RegionId, classify_location};

/// Vertical metrics and packing parameters for [`calculate_layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Height of one lane (card plus gap), in pixels.
    pub lane_height: f64,
    /// Space between a band's top edge and its first lane.
    pub padding_top: f64,
    /// Space between a band's last lane and its bottom edge.
    pub padding_bottom: f64,
    /// Fraction of a candidate's own duration added on both sides when
    /// testing it against a lane.
    pub buffer_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lane_height: 50.0,
            padding_top: 30.0,
            padding_bottom: 20.0,
            buffer_ratio: 0.05,
        }
    }
}

/// Placement of one entity.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutItem {
    /// Index of the entity in the slice passed to [`calculate_layout`].
    pub entity: usize,
    /// Identifier of the entity.
    pub id: EntityId,
    /// Owning region band.
    pub region: RegionId,
    /// Lane within the region, `0`-based.
    pub lane: usize,
    /// Absolute vertical offset of the lane in unscrolled layout space.
    pub global_y: f64,
}

/// A non-empty region band.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionBand {
    /// Which region this band shows.
    pub region: RegionId,
    /// Top of the band in unscrolled layout space.
    pub start_y: f64,
    /// Total band height, padding included.
    pub height: f64,
    /// Number of lanes used by the band.
    pub lane_count: usize,
}

impl RegionBand {
    /// Bottom of the band in unscrolled layout space.
    #[must_use]
    pub fn end_y(&self) -> f64 {
        self.start_y + self.height
    }

    /// Returns `true` if `y` lies within the band, both edges included.
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.start_y && y <= self.end_y()
    }

    /// Display name of the band's region.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.region.name()
    }

    /// Display colour of the band's region.
    #[must_use]
    pub fn color(&self) -> Color {
        self.region.color()
    }
}

/// Result of [`calculate_layout`].
#[derive(Clone, Debug, Default)]
pub struct Layout {
    items: Vec<LayoutItem>,
    index: HashMap<EntityId, usize>,
    regions: Vec<RegionBand>,
}

impl Layout {
    /// Looks up the placement of an entity by id.
    ///
    /// If the input contained duplicate ids, the last placed one wins.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&LayoutItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// All placements, in placement order (band order, then start year).
    #[must_use]
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Non-empty region bands, in band order.
    #[must_use]
    pub fn regions(&self) -> &[RegionBand] {
        &self.regions
    }

    /// Returns the band for `region`, if it has any members.
    #[must_use]
    pub fn region(&self, region: RegionId) -> Option<&RegionBand> {
        self.regions.iter().find(|band| band.region == region)
    }

    /// Returns the first band containing the layout-space `y`.
    #[must_use]
    pub fn region_at(&self, y: f64) -> Option<&RegionBand> {
        self.regions.iter().find(|band| band.contains_y(y))
    }

    /// Total height of all bands.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.regions.last().map_or(0.0, RegionBand::end_y)
    }

    /// Returns `true` if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Entities of one region, for navigation listings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionGroup {
    /// The region.
    pub region: RegionId,
    /// Indices into the entity slice, ascending by start year.
    pub entities: Vec<usize>,
}

/// Buckets entity indices by region, each bucket stable-sorted by start year.
fn bucket(entities: &[Entity]) -> [Vec<usize>; 6] {
    let mut buckets: [Vec<usize>; 6] = Default::default();
    for (i, entity) in entities.iter().enumerate() {
        buckets[classify_location(&entity.location) as usize].push(i);
    }
    for bucket in &mut buckets {
        bucket.sort_by(|&a, &b| entities[a].start_year.total_cmp(&entities[b].start_year));
    }
    buckets
}

/// Groups entities by region for navigation listings.
///
/// Only non-empty regions are returned, in band order.
#[must_use]
pub fn group_by_region(entities: &[Entity]) -> Vec<RegionGroup> {
    RegionId::ALL
        .into_iter()
        .zip(bucket(entities))
        .filter(|(_, members)| !members.is_empty())
        .map(|(region, entities)| RegionGroup { region, entities })
        .collect()
}

/// Lays out `entities` into region bands and lanes.
///
/// Deterministic: the same input (values and order) always produces the same
/// lanes and offsets. Regions without members are omitted and consume no
/// vertical space.
#[must_use]
pub fn calculate_layout(entities: &[Entity], config: &LayoutConfig) -> Layout {
    let mut layout = Layout {
        items: Vec::with_capacity(entities.len()),
        index: HashMap::with_capacity(entities.len()),
        regions: Vec::new(),
    };
    let mut cursor_y = 0.0;

    for (region, members) in RegionId::ALL.into_iter().zip(bucket(entities)) {
        if members.is_empty() {
            continue;
        }

        let mut packer = LanePacker::new(config.buffer_ratio);
        for i in members {
            let entity = &entities[i];
            let lane = packer.place(entity.start_year, entity.end_year);
            let global_y = cursor_y + config.padding_top + lane as f64 * config.lane_height;

            layout.index.insert(entity.id.clone(), layout.items.len());
            layout.items.push(LayoutItem {
                entity: i,
                id: entity.id.clone(),
                region,
                lane,
                global_y,
            });
        }

        let lane_count = packer.lane_count();
        let height =
            config.padding_top + lane_count as f64 * config.lane_height + config.padding_bottom;
        layout.regions.push(RegionBand {
            region,
            start_y: cursor_y,
            height,
            lane_count,
        });
        cursor_y += height;
    }

    layout
}

#[cfg(test)]
mod tests {
    use chronos_model::{EntityType, LocalizedText};

    use super::*;

    fn entity(id: &str, location: &str, start: f64, end: f64) -> Entity {
        Entity::new(
            id,
            LocalizedText::same(id),
            LocalizedText::same(location),
            start,
            end,
            EntityType::Culture,
        )
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        let layout = calculate_layout(&[], &LayoutConfig::default());
        assert!(layout.is_empty());
        assert!(layout.regions().is_empty());
        assert_eq!(layout.total_height(), 0.0);
    }

    #[test]
    fn global_y_accounts_for_preceding_bands() {
        let entities = [
            entity("asia", "China", 0.0, 10.0),
            entity("egypt-1", "Egypt", 0.0, 100.0),
            entity("egypt-2", "Egypt", 10.0, 90.0),
        ];
        let layout = calculate_layout(&entities, &LayoutConfig::default());

        let africa = layout.region(RegionId::Africa).unwrap();
        assert_eq!(africa.start_y, 0.0);
        assert_eq!(africa.height, 30.0 + 100.0 + 20.0);

        let asia = layout.region(RegionId::Asia).unwrap();
        assert_eq!(asia.start_y, 150.0);
        assert_eq!(layout.item("asia").unwrap().global_y, 180.0);
        assert_eq!(layout.item("egypt-2").unwrap().global_y, 80.0);
        assert_eq!(layout.total_height(), 250.0);
    }

    #[test]
    fn stable_sort_keeps_input_order_for_equal_starts() {
        let entities = [
            entity("first", "Peru", 0.0, 10.0),
            entity("second", "Peru", 0.0, 10.0),
        ];
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        assert_eq!(layout.item("first").unwrap().lane, 0);
        assert_eq!(layout.item("second").unwrap().lane, 1);
        assert_eq!(layout.items()[0].id.as_str(), "first");
    }

    #[test]
    fn region_at_includes_edges() {
        let entities = [entity("a", "Egypt", 0.0, 1.0), entity("b", "Rome", 0.0, 1.0)];
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        assert_eq!(layout.region_at(0.0).unwrap().region, RegionId::Africa);
        // Shared edge at 100: the earlier band claims it.
        assert_eq!(layout.region_at(100.0).unwrap().region, RegionId::Africa);
        assert_eq!(layout.region_at(100.5).unwrap().region, RegionId::Europe);
        assert!(layout.region_at(-1.0).is_none());
        assert!(layout.region_at(201.0).is_none());
    }

    #[test]
    fn group_by_region_sorts_members() {
        let entities = [
            entity("late", "Greece", 500.0, 600.0),
            entity("early", "Greece", -500.0, 0.0),
            entity("x", "Atlantis", 0.0, 1.0),
        ];
        let groups = group_by_region(&entities);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].region, RegionId::Europe);
        assert_eq!(groups[0].entities, [1, 0]);
        assert_eq!(groups[1].region, RegionId::Global);
    }

    #[test]
    fn custom_metrics_flow_into_heights() {
        let config = LayoutConfig {
            lane_height: 10.0,
            padding_top: 1.0,
            padding_bottom: 2.0,
            buffer_ratio: 0.0,
        };
        let entities = [entity("a", "Japan", 0.0, 100.0), entity("b", "Japan", 100.0, 200.0)];
        let layout = calculate_layout(&entities, &config);
        assert_eq!(layout.item("b").unwrap().lane, 0);
        assert_eq!(layout.regions()[0].height, 13.0);
    }
}
