// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display styles per [`EntityType`].
//!
//! Styling is a closed lookup: every kind maps to exactly one [`EntityStyle`]
//! and a selected entity always uses [`SELECTED_STYLE`], regardless of kind.

use peniko::Color;

use crate::EntityType;

/// Fill and border colours for an entity shape.
#[derive(Clone, Copy, Debug)]
pub struct EntityStyle {
    /// Shape fill.
    pub background: Color,
    /// Shape outline.
    pub border: Color,
}

const NEUTRAL: EntityStyle = EntityStyle {
    background: Color::from_rgb8(0x57, 0x53, 0x4e),
    border: Color::from_rgb8(0x78, 0x71, 0x6c),
};

/// Style used for the currently selected entity.
pub const SELECTED_STYLE: EntityStyle = EntityStyle {
    background: Color::from_rgb8(0xd4, 0xaf, 0x37),
    border: Color::from_rgb8(0xff, 0xff, 0xff),
};

/// Style lookup table, indexed in [`EntityType::ALL`] order.
const STYLES: [EntityStyle; 7] = [
    // Culture
    EntityStyle {
        background: Color::from_rgb8(0x06, 0x4e, 0x3b),
        border: Color::from_rgb8(0x04, 0x78, 0x57),
    },
    // Civilization
    EntityStyle {
        background: Color::from_rgb8(0x92, 0x40, 0x0e),
        border: Color::from_rgb8(0xd9, 0x77, 0x06),
    },
    // State
    EntityStyle {
        background: Color::from_rgb8(0x7f, 0x1d, 0x1d),
        border: Color::from_rgb8(0xb9, 0x1c, 0x1c),
    },
    // Empire
    EntityStyle {
        background: Color::from_rgb8(0x58, 0x1c, 0x87),
        border: Color::from_rgb8(0x7e, 0x22, 0xce),
    },
    // Kingdom
    EntityStyle {
        background: Color::from_rgb8(0x1e, 0x3a, 0x8a),
        border: Color::from_rgb8(0x1d, 0x4e, 0xd8),
    },
    // Period
    NEUTRAL,
    // Event
    NEUTRAL,
];

/// Returns the display style for an entity of `kind`.
#[must_use]
pub fn style_for(kind: EntityType, selected: bool) -> EntityStyle {
    if selected {
        return SELECTED_STYLE;
    }
    STYLES[kind as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_in_declaration_order() {
        for (index, kind) in EntityType::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, index);
        }
    }

    #[test]
    fn selection_overrides_kind() {
        for kind in EntityType::ALL {
            let style = style_for(kind, true);
            assert_eq!(
                style.background.to_rgba8(),
                SELECTED_STYLE.background.to_rgba8()
            );
        }
    }

    #[test]
    fn periods_and_events_share_the_neutral_style() {
        let period = style_for(EntityType::Period, false);
        let event = style_for(EntityType::Event, false);
        assert_eq!(period.background.to_rgba8(), event.background.to_rgba8());

        let empire = style_for(EntityType::Empire, false);
        assert_ne!(empire.background.to_rgba8(), period.background.to_rgba8());
    }
}
