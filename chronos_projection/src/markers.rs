// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-event markers for the selected entity.
//!
//! Markers hang below their entity's card. To keep labels from colliding,
//! markers are placed left to right and each goes on the lowest level whose
//! previous marker is at least [`ProjectionConfig::marker_spacing`] pixels to
//! its left; otherwise it escalates to the next level. This is the same
//! first-fit scheme the layout engine uses for lanes, applied to screen x.

use alloc::string::String;
use alloc::vec::Vec;

use chronos_model::{Entity, Language, SubEvent};
use chronos_view::TimelineViewport;
use smallvec::SmallVec;

use crate::ProjectionConfig;

/// A positioned sub-event marker.
#[derive(Clone, Debug, PartialEq)]
pub struct SubEventMarker {
    /// Index into [`Entity::events`].
    pub event: usize,
    /// World year of the event.
    pub year: f64,
    /// Screen x of the marker.
    pub x: f64,
    /// Screen y of the marker.
    pub y: f64,
    /// Vertical level, `0` being closest to the card.
    pub level: usize,
    /// Short label.
    pub label: String,
}

/// First-fit level assignment over increasing x positions.
#[derive(Clone, Debug)]
pub struct MarkerLevels {
    tails: SmallVec<[f64; 4]>,
    spacing: f64,
}

impl MarkerLevels {
    /// Creates an empty assignment with the given minimum spacing.
    #[must_use]
    pub fn new(spacing: f64) -> Self {
        Self {
            tails: SmallVec::new(),
            spacing,
        }
    }

    /// Places a marker at `x` and returns its level.
    ///
    /// Positions should be fed in ascending order.
    pub fn place(&mut self, x: f64) -> usize {
        let spacing = self.spacing;
        match self.tails.iter().position(|&tail| x >= tail + spacing) {
            Some(level) => {
                self.tails[level] = x;
                level
            }
            None => {
                self.tails.push(x);
                self.tails.len() - 1
            }
        }
    }

    /// Number of levels in use.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.tails.len()
    }
}

/// Returns the label shown next to a marker.
///
/// The event title when present; otherwise the first sentence of the
/// description, cut to `max_chars` characters and followed by `...`.
#[must_use]
pub fn marker_label(event: &SubEvent, language: Language, max_chars: usize) -> String {
    if let Some(title) = &event.title {
        return String::from(title.get(language));
    }
    let sentence = event
        .description
        .get(language)
        .split('.')
        .next()
        .unwrap_or_default();
    let mut label: String = sentence.chars().take(max_chars).collect();
    label.push_str("...");
    label
}

/// Positions the sub-event markers of `entity`, whose card top is at screen
/// `card_top`, in a view `width` pixels wide.
///
/// Events are visited in ascending year order (stable for equal years).
/// Markers further than [`ProjectionConfig::marker_margin`] outside the view
/// are skipped and do not occupy a level.
#[must_use]
pub fn sub_event_markers(
    entity: &Entity,
    card_top: f64,
    viewport: &TimelineViewport,
    width: f64,
    language: Language,
    config: &ProjectionConfig,
) -> Vec<SubEventMarker> {
    let mut order: Vec<usize> = (0..entity.events.len()).collect();
    order.sort_by(|&a, &b| entity.events[a].year.total_cmp(&entity.events[b].year));

    let mut levels = MarkerLevels::new(config.marker_spacing);
    let mut markers = Vec::with_capacity(order.len());
    for index in order {
        let event = &entity.events[index];
        let x = viewport.screen_x(event.year);
        if x < -config.marker_margin || x > width + config.marker_margin {
            continue;
        }
        let level = levels.place(x);
        markers.push(SubEventMarker {
            event: index,
            year: event.year,
            x,
            y: card_top + config.marker_base_offset + level as f64 * config.marker_level_height,
            level,
            label: marker_label(event, language, config.marker_label_chars),
        });
    }
    markers
}
