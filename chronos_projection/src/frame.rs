// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chronos_layout::RegionId;
use chronos_view::TimelineViewport;
use peniko::Color;

use crate::{
    Grid, ProjectionConfig, Scene, SubEventMarker, VisibleItem, grid_lines, sub_event_markers,
    visible_items,
};

/// A region band in screen space.
#[derive(Clone, Debug)]
pub struct ScreenBand {
    /// Region of the band.
    pub region: RegionId,
    /// Screen y of the band's top edge.
    pub top: f64,
    /// Height of the band.
    pub height: f64,
    /// Background colour of the band.
    pub color: Color,
    /// Whether this band is the selected region.
    pub selected: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Cards to draw, in layout order.
    pub items: Vec<VisibleItem>,
    /// Vertical grid and header labels.
    pub grid: Grid,
    /// Sub-event markers of the selected entity, when it is visible.
    pub markers: Vec<SubEventMarker>,
    /// Region bands, top to bottom.
    pub bands: Vec<ScreenBand>,
    /// Zoom level as a percentage of the logarithmic zoom range.
    pub zoom_percentage: f64,
    /// Zoom label, e.g. `"42%"`.
    pub zoom_label: String,
}

/// Turns a [`Scene`] and a [`TimelineViewport`] into a [`Frame`].
#[derive(Clone, Debug, Default)]
pub struct RenderProjector {
    config: ProjectionConfig,
}

impl RenderProjector {
    /// Creates a projector with the given metrics.
    #[must_use]
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Metrics used by this projector.
    #[must_use]
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Projects the scene.
    ///
    /// This is a pure function of its inputs; the same scene and viewport
    /// always yield the same frame.
    #[must_use]
    pub fn project(&self, scene: &Scene<'_>, viewport: &TimelineViewport) -> Frame {
        let config = &self.config;
        let width = scene.view_size.width;

        let items = visible_items(scene, viewport, config);
        let grid = grid_lines(viewport, width, config);

        let markers = items
            .iter()
            .find(|item| item.selected)
            .map(|item| {
                sub_event_markers(
                    &scene.entities[item.entity],
                    item.rect.y0,
                    viewport,
                    width,
                    scene.language,
                    config,
                )
            })
            .unwrap_or_default();

        let bands = scene
            .layout
            .regions()
            .iter()
            .map(|band| ScreenBand {
                region: band.region,
                top: band.start_y + config.header_offset + viewport.offset_y(),
                height: band.height,
                color: band.color(),
                selected: scene.selected_region == Some(band.region),
            })
            .collect();

        let zoom_percentage = viewport.zoom_percentage();
        Frame {
            items,
            grid,
            markers,
            bands,
            zoom_percentage,
            zoom_label: format!("{zoom_percentage:.0}%"),
        }
    }
}
