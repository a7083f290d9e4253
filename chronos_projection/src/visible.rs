// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use chronos_layout::{LayoutItem, RegionId};
use chronos_model::{Entity, EntityId, EntityStyle, style_for};
use chronos_view::TimelineViewport;
use kurbo::Rect;

use crate::{ProjectionConfig, Scene};

/// An entity card that survived culling.
#[derive(Clone, Debug)]
pub struct VisibleItem {
    /// Index of the entity in [`Scene::entities`].
    pub entity: usize,
    /// Identifier of the entity.
    pub id: EntityId,
    /// Owning region.
    pub region: RegionId,
    /// Lane within the region.
    pub lane: usize,
    /// On-screen card shape, after the minimum/maximum width clamp.
    pub rect: Rect,
    /// Width of the interval itself at the current scale, before the card
    /// clamp (but at least [`ProjectionConfig::min_interval_width`]).
    pub interval_width: f64,
    /// Whether this is the selected entity.
    pub selected: bool,
    /// Fill and border colours.
    pub style: EntityStyle,
}

/// Computes the on-screen card shape for an entity.
#[must_use]
pub fn item_rect(
    entity: &Entity,
    item: &LayoutItem,
    viewport: &TimelineViewport,
    config: &ProjectionConfig,
) -> Rect {
    let x = viewport.screen_x(entity.start_year);
    let y = item.global_y + config.header_offset + viewport.offset_y();
    let width = interval_width(entity, viewport, config)
        .clamp(config.min_card_width, config.max_card_width);
    Rect::new(x, y, x + width, y + config.card_height)
}

fn interval_width(entity: &Entity, viewport: &TimelineViewport, config: &ProjectionConfig) -> f64 {
    viewport
        .years_to_pixels(entity.duration())
        .max(config.min_interval_width)
}

/// Returns the cards to draw for the current viewport, in layout order.
///
/// An entity is kept when its `[start_year, end_year]` interval intersects the
/// visible year range widened by `max(cull_min_buffer_years,
/// cull_buffer_pixels / scale)` on both sides, and its card top lies within
/// the view height widened by `cull_vertical_margin`.
#[must_use]
pub fn visible_items(
    scene: &Scene<'_>,
    viewport: &TimelineViewport,
    config: &ProjectionConfig,
) -> Vec<VisibleItem> {
    let years = viewport.visible_year_range(scene.view_size.width);
    let buffer = config
        .cull_min_buffer_years
        .max(config.cull_buffer_pixels / viewport.scale());
    let min_year = years.start - buffer;
    let max_year = years.end + buffer;

    let min_y = -config.cull_vertical_margin;
    let max_y = scene.view_size.height + config.cull_vertical_margin;

    scene
        .layout
        .items()
        .iter()
        .filter_map(|item| {
            let entity = scene.entity_of(item);
            if entity.end_year < min_year || entity.start_year > max_year {
                return None;
            }
            let y = item.global_y + config.header_offset + viewport.offset_y();
            if y < min_y || y > max_y {
                return None;
            }
            let selected = scene.is_selected(&item.id);
            Some(VisibleItem {
                entity: item.entity,
                id: item.id.clone(),
                region: item.region,
                lane: item.lane,
                rect: item_rect(entity, item, viewport, config),
                interval_width: interval_width(entity, viewport, config),
                selected,
                style: style_for(entity.kind, selected),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chronos_layout::{LayoutConfig, calculate_layout};
    use chronos_model::{EntityType, Language, LocalizedText};
    use kurbo::Size;

    use super::*;

    fn entity(id: &str, location: &str, start: f64, end: f64) -> Entity {
        Entity::new(
            id,
            LocalizedText::same(id),
            LocalizedText::same(location),
            start,
            end,
            EntityType::Empire,
        )
    }

    #[test]
    fn culls_far_away_intervals() {
        let entities = [
            entity("near", "Rome", 0.0, 100.0),
            entity("buffered", "Rome", 1_100.0, 1_200.0),
            entity("far", "Rome", 5_000.0, 6_000.0),
            entity("past", "Rome", -9_000.0, -8_000.0),
        ];
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);

        // Years -500..500 visible; buffer is max(500, 100 / 1) = 500.
        let vp = TimelineViewport::centered_on(0.0, 1.0, 1000.0);
        let visible = visible_items(&scene, &vp, &ProjectionConfig::default());
        let ids: Vec<&str> = visible
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, ["near"]);

        // At 0.5 px/year years -1000..1000 are visible, widened to -1500..1500.
        let vp = TimelineViewport::centered_on(0.0, 0.5, 1000.0);
        let visible = visible_items(&scene, &vp, &ProjectionConfig::default());
        let ids: Vec<&str> = visible
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, ["near", "buffered"]);
    }

    #[test]
    fn pixel_buffer_dominates_when_zoomed_out() {
        let entities = [
            entity("inside-buffer", "China", 59_000.0, 59_500.0),
            entity("outside-buffer", "China", 61_000.0, 61_500.0),
        ];
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);

        // Years -50000..50000 visible; buffer is max(500, 100 / 0.01) = 10000.
        let vp = TimelineViewport::centered_on(0.0, 0.01, 1000.0);
        let visible = visible_items(&scene, &vp, &ProjectionConfig::default());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "inside-buffer");
    }

    #[test]
    fn culls_lanes_outside_the_view_height() {
        let entities: Vec<Entity> = (0..20)
            .map(|i| entity(&alloc::format!("e{i}"), "Peru", 0.0, 100.0))
            .collect();
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 300.0), Language::En);
        let vp = TimelineViewport::centered_on(50.0, 1.0, 1000.0);

        let visible = visible_items(&scene, &vp, &ProjectionConfig::default());
        // Card tops at 90, 140, ...; the last allowed top is 350.
        assert_eq!(visible.len(), 6);
        assert!(visible.iter().all(|v| v.rect.y0 <= 350.0));
    }

    #[test]
    fn card_width_is_clamped() {
        let e = entity("e", "Rome", 0.0, 10.0);
        let item = LayoutItem {
            entity: 0,
            id: e.id.clone(),
            region: RegionId::Europe,
            lane: 0,
            global_y: 30.0,
        };
        let config = ProjectionConfig::default();

        let vp = TimelineViewport::new(1.0, 0.0, -10.0);
        let rect = item_rect(&e, &item, &vp, &config);
        assert_eq!(rect.width(), 50.0);
        assert_eq!(rect.y0, 80.0);
        assert_eq!(rect.height(), 40.0);

        let vp = TimelineViewport::new(20.0, 0.0, 0.0);
        let wide = entity("w", "Rome", 0.0, 1000.0);
        assert_eq!(item_rect(&wide, &item, &vp, &config).width(), 10_000.0);
    }

    #[test]
    fn selection_switches_style() {
        let entities = [entity("a", "Rome", 0.0, 100.0)];
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En)
            .with_selected_entity(Some(&entities[0].id));
        let vp = TimelineViewport::centered_on(50.0, 1.0, 1000.0);

        let visible = visible_items(&scene, &vp, &ProjectionConfig::default());
        assert!(visible[0].selected);
        assert_eq!(
            visible[0].style.background.to_rgba8(),
            chronos_model::SELECTED_STYLE.background.to_rgba8()
        );
    }
}
