// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronos_model::LocalizedText;
use peniko::Color;

/// A geographic region band.
///
/// Declaration order is the fixed vertical order of bands on the board and the
/// priority order for keyword matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionId {
    /// Africa, including Egypt.
    Africa,
    /// Mesopotamia, the Levant, Anatolia and Persia.
    MiddleEast,
    /// Europe.
    Europe,
    /// Asia.
    Asia,
    /// North and South America.
    Americas,
    /// Catch-all for locations no other region claims.
    Global,
}

impl RegionId {
    /// Every region in band order.
    pub const ALL: [Self; 6] = [
        Self::Africa,
        Self::MiddleEast,
        Self::Europe,
        Self::Asia,
        Self::Americas,
        Self::Global,
    ];

    /// Display name of the region.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::MiddleEast => "Middle East",
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::Americas => "Americas",
            Self::Global => "Global / Eurasia",
        }
    }

    /// Band colour of the region.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Africa => Color::from_rgb8(0x78, 0x35, 0x0f),
            Self::MiddleEast => Color::from_rgb8(0x71, 0x3f, 0x12),
            Self::Europe => Color::from_rgb8(0x1e, 0x3a, 0x8a),
            Self::Asia => Color::from_rgb8(0x83, 0x18, 0x43),
            Self::Americas => Color::from_rgb8(0x14, 0x53, 0x2d),
            Self::Global => Color::from_rgb8(0x3f, 0x3f, 0x46),
        }
    }

    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Africa => &["africa", "egypt"],
            Self::MiddleEast => &[
                "mesopotamia",
                "levant",
                "anatolia",
                "iraq",
                "sumer",
                "ottoman",
                "persia",
            ],
            Self::Europe => &[
                "europe",
                "rome",
                "greece",
                "crete",
                "spain",
                "france",
                "scandinavia",
                "rus",
            ],
            Self::Asia => &["china", "india", "asia", "mongol", "japan"],
            Self::Americas => &["america", "usa", "mexico", "peru"],
            Self::Global => &[],
        }
    }
}

/// Classifies a free-text location into a [`RegionId`].
///
/// Matching is a case-insensitive substring test of the English text against
/// each region's keywords, in band order; the first region with a hit wins.
/// Anything unmatched lands in [`RegionId::Global`].
#[must_use]
pub fn classify_location(location: &LocalizedText) -> RegionId {
    let loc = location.en.to_lowercase();
    RegionId::ALL
        .into_iter()
        .find(|region| region.keywords().iter().any(|kw| loc.contains(kw)))
        .unwrap_or(RegionId::Global)
}
