// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use chronos_model::{Entity, EntityId, Language};
use kurbo::Point;

/// An open context menu.
///
/// The menu remembers where it was opened and the year under that point; the
/// year becomes the start of anything created from the menu.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenu {
    /// Screen position the menu is anchored at.
    pub anchor: Point,
    /// Year under the anchor when the menu was opened.
    pub year: f64,
    query: String,
    topic: String,
}

/// One entry in the menu's search results.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Index of the entity in the searched slice.
    pub entity: usize,
    /// Identifier of the entity.
    pub id: EntityId,
    /// Name in the language that was searched.
    pub name: String,
}

impl ContextMenu {
    /// Opens a menu at `anchor` over `year` with empty inputs.
    #[must_use]
    pub fn new(anchor: Point, year: f64) -> Self {
        Self {
            anchor,
            year,
            query: String::new(),
            topic: String::new(),
        }
    }

    /// Current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current "create from topic" text.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Replaces the "create from topic" text.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Searches entity names in `language` for the current query.
    ///
    /// See [`search_entities`].
    #[must_use]
    pub fn results(&self, entities: &[Entity], language: Language, limit: usize) -> Vec<SearchResult> {
        search_entities(entities, &self.query, language, limit)
    }
}

/// Case-insensitive substring search over entity names in `language`.
///
/// Returns at most `limit` matches in entity order. A blank query matches
/// nothing.
#[must_use]
pub fn search_entities(
    entities: &[Entity],
    query: &str,
    language: Language,
    limit: usize,
) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    entities
        .iter()
        .enumerate()
        .filter(|(_, entity)| entity.name.get(language).to_lowercase().contains(&needle))
        .take(limit)
        .map(|(index, entity)| SearchResult {
            entity: index,
            id: entity.id.clone(),
            name: String::from(entity.name.get(language)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use chronos_model::{EntityType, LocalizedText};

    use super::*;

    fn named(id: &str, en: &str, ru: &str) -> Entity {
        Entity::new(
            id,
            LocalizedText::new(en, ru),
            LocalizedText::same("Rome"),
            0.0,
            1.0,
            EntityType::State,
        )
    }

    #[test]
    fn blank_query_finds_nothing() {
        let entities = [named("r", "Rome", "Рим")];
        assert!(search_entities(&entities, "", Language::En, 8).is_empty());
        assert!(search_entities(&entities, "   ", Language::En, 8).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_and_per_language() {
        let entities = [
            named("r", "Roman Empire", "Римская империя"),
            named("b", "Byzantium", "Византия"),
        ];
        let hits = search_entities(&entities, "EMP", Language::En, 8);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "r");
        assert_eq!(hits[0].name, "Roman Empire");

        let hits = search_entities(&entities, "визант", Language::Ru, 8);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entity, 1);
        assert!(search_entities(&entities, "визант", Language::En, 8).is_empty());
    }

    #[test]
    fn results_are_capped() {
        let entities: Vec<Entity> = (0..20)
            .map(|i| named(&format!("k{i}"), &format!("Kingdom {i}"), "Царство"))
            .collect();
        let mut menu = ContextMenu::new(Point::new(10.0, 10.0), -500.0);
        menu.set_query("kingdom");
        let hits = menu.results(&entities, Language::En, 8);
        assert_eq!(hits.len(), 8);
        assert_eq!(hits[7].id.as_str(), "k7");
    }
}
