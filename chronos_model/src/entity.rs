// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

/// Display language for localized text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// English.
    En,
    /// Russian.
    #[default]
    Ru,
}

/// A text bundle with one string per supported [`Language`].
///
/// The timeline core treats these strings as opaque, with one exception: the
/// English location is used for region classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedText {
    /// English text.
    pub en: String,
    /// Russian text.
    pub ru: String,
}

impl LocalizedText {
    /// Creates a bundle from English and Russian strings.
    #[must_use]
    pub fn new(en: impl Into<String>, ru: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ru: ru.into(),
        }
    }

    /// Creates a bundle that uses the same string for every language.
    #[must_use]
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            en: text.clone(),
            ru: text,
        }
    }

    /// Returns the string for `language`.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }
}

/// Stable, unique identifier of an [`Entity`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(String);

impl EntityId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityId").field(&self.0).finish()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Kind of historical entity.
///
/// The kind only affects display styling (see [`crate::style_for`]); layout
/// and interaction never branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityType {
    /// An archaeological or material culture.
    #[default]
    Culture,
    /// A civilization.
    Civilization,
    /// A state.
    State,
    /// An empire.
    Empire,
    /// A kingdom.
    Kingdom,
    /// A named period.
    Period,
    /// A single event.
    Event,
}

impl EntityType {
    /// All kinds in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Culture,
        Self::Civilization,
        Self::State,
        Self::Empire,
        Self::Kingdom,
        Self::Period,
        Self::Event,
    ];
}

/// A dated point of interest inside an entity's interval.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubEvent {
    /// World year of the event.
    pub year: f64,
    /// Optional short title shown next to the marker.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub title: Option<LocalizedText>,
    /// Longer description.
    pub description: LocalizedText,
}

/// A historical interval placed on the timeline.
///
/// Years are real numbers relative to the present-day epoch; negative values
/// are BC. `start_year <= end_year` is intended, but nothing here enforces it:
/// interactive resizing may invert an entity and downstream code must cope.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Entity {
    /// Unique, stable identifier.
    pub id: EntityId,
    /// Display name.
    pub name: LocalizedText,
    /// Free-form description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: LocalizedText,
    /// Free-form location, classified into a region by the layout engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: LocalizedText,
    /// First year of the interval.
    pub start_year: f64,
    /// Last year of the interval.
    pub end_year: f64,
    /// Styling kind.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: EntityType,
    /// Optional reference link.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub wiki_link: Option<String>,
    /// Key events, in no particular order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<SubEvent>,
}

impl Entity {
    /// Creates an entity with an empty description and no sub-events.
    #[must_use]
    pub fn new(
        id: impl Into<EntityId>,
        name: LocalizedText,
        location: LocalizedText,
        start_year: f64,
        end_year: f64,
        kind: EntityType,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            description: LocalizedText::default(),
            location,
            start_year,
            end_year,
            kind,
            wiki_link: None,
            events: Vec::new(),
        }
    }

    /// Sets the description, builder style.
    #[must_use]
    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    /// Replaces the sub-events, builder style.
    #[must_use]
    pub fn with_events(mut self, events: Vec<SubEvent>) -> Self {
        self.events = events;
        self
    }

    /// Signed length of the interval in years.
    ///
    /// Negative when the entity is inverted.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end_year - self.start_year
    }

    /// Returns `true` if `start_year > end_year`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start_year > self.end_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_text_selects_language() {
        let text = LocalizedText::new("Egypt", "Египет");
        assert_eq!(text.get(Language::En), "Egypt");
        assert_eq!(text.get(Language::Ru), "Египет");

        let same = LocalizedText::same("Unknown");
        assert_eq!(same.get(Language::En), same.get(Language::Ru));
    }

    #[test]
    fn duration_is_signed() {
        let mut e = Entity::new(
            "a",
            LocalizedText::same("A"),
            LocalizedText::same("Europe"),
            100.0,
            40.0,
            EntityType::State,
        );
        assert_eq!(e.duration(), -60.0);
        assert!(e.is_inverted());

        e.end_year = 400.0;
        assert!(!e.is_inverted());
    }

    #[test]
    fn entity_id_borrows_as_str() {
        let id = EntityId::from("egypt-old");
        let as_str: &str = id.borrow();
        assert_eq!(as_str, "egypt-old");
        assert_eq!(alloc::format!("{id}"), "egypt-old");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_records() {
        let json = r#"{
            "id": "sumer",
            "name": { "en": "Sumer", "ru": "Шумер" },
            "location": { "en": "Mesopotamia", "ru": "Месопотамия" },
            "startYear": -4500,
            "endYear": -1900,
            "type": "civilization",
            "events": [
                { "year": -2900, "description": { "en": "Early Dynastic", "ru": "Раннединастический" } }
            ]
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.id.as_str(), "sumer");
        assert_eq!(entity.kind, EntityType::Civilization);
        assert_eq!(entity.start_year, -4500.0);
        assert_eq!(entity.events.len(), 1);
        assert!(entity.events[0].title.is_none());
        assert_eq!(entity.description, LocalizedText::default());
    }
}
