// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary to an external content generator.
//!
//! The board never talks to a generator directly. It queues
//! [`GenerationRequest`]s; the host runs them however it likes (on another
//! thread, over the network) and hands the raw text back through
//! [`Board::complete_generation`](crate::Board::complete_generation). For
//! synchronous hosts and tests, [`ContentGenerator`] together with
//! [`Board::run_generation`](crate::Board::run_generation) does both steps
//! inline.

use core::fmt;

use chronos_model::{Entity, EntityId, EntityType, Language, LocalizedText, SubEvent, format_year};
use serde::Deserialize;
use thiserror::Error;

/// Identifies one outstanding generation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenerationTicket(pub(crate) u64);

impl fmt::Display for GenerationTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shape of the text a request expects back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationSchema {
    /// A JSON object describing a whole entity, without an id.
    Entity,
    /// Plain prose for one language of an entity's description.
    Description,
    /// A JSON array of sub-events.
    Events,
}

/// A request for generated content.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    /// Ticket to quote when completing the request.
    pub ticket: GenerationTicket,
    /// Instructions for the generator.
    pub prompt: String,
    /// Expected response shape.
    pub schema: GenerationSchema,
}

/// Why generated content could not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The generator could not be reached or refused the request.
    #[error("content generator unavailable: {0}")]
    Unavailable(String),
    /// The generator answered with nothing.
    #[error("content generator returned an empty response")]
    EmptyResponse,
    /// The response did not match the requested schema.
    #[error("generated content is malformed: {0}")]
    Malformed(String),
    /// The ticket does not belong to an outstanding request.
    #[error("unknown generation ticket {0}")]
    UnknownTicket(GenerationTicket),
}

/// A synchronous content generator.
pub trait ContentGenerator {
    /// Produces raw text for `request`, in the shape its schema asks for.
    fn generate(&mut self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// What happened when a request was completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A generated entity was added and selected.
    Created(EntityId),
    /// Generation failed and a placeholder entity was added instead.
    Placeholder(EntityId),
    /// A generated field was written to an existing entity.
    Updated(EntityId),
    /// Generation failed, or the entity is gone; nothing changed.
    Unchanged(EntityId),
}

/// What an outstanding ticket is for.
#[derive(Clone, Debug)]
pub(crate) enum PendingGeneration {
    Entity { topic: String, year: f64 },
    Description { id: EntityId, language: Language },
    Events { id: EntityId },
}

impl PendingGeneration {
    pub(crate) fn schema(&self) -> GenerationSchema {
        match self {
            Self::Entity { .. } => GenerationSchema::Entity,
            Self::Description { .. } => GenerationSchema::Description,
            Self::Events { .. } => GenerationSchema::Events,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedEntity {
    name: LocalizedText,
    #[serde(default)]
    description: LocalizedText,
    #[serde(default)]
    location: LocalizedText,
    start_year: f64,
    end_year: f64,
    #[serde(rename = "type", default)]
    kind: EntityType,
    #[serde(default)]
    events: Vec<SubEvent>,
}

fn non_empty(text: &str) -> Result<&str, GenerationError> {
    let text = text.trim();
    if text.is_empty() {
        Err(GenerationError::EmptyResponse)
    } else {
        Ok(text)
    }
}

fn malformed(err: serde_json::Error) -> GenerationError {
    GenerationError::Malformed(err.to_string())
}

/// Parses a generated entity record and gives it `id`.
pub(crate) fn parse_entity(text: &str, id: EntityId) -> Result<Entity, GenerationError> {
    let record: GeneratedEntity = serde_json::from_str(non_empty(text)?).map_err(malformed)?;
    if !(record.start_year.is_finite() && record.end_year.is_finite()) {
        return Err(GenerationError::Malformed(String::from(
            "start and end years must be finite",
        )));
    }
    Ok(Entity {
        id,
        name: record.name,
        description: record.description,
        location: record.location,
        start_year: record.start_year,
        end_year: record.end_year,
        kind: record.kind,
        wiki_link: None,
        events: record.events,
    })
}

/// Parses a generated list of sub-events.
pub(crate) fn parse_events(text: &str) -> Result<Vec<SubEvent>, GenerationError> {
    serde_json::from_str(non_empty(text)?).map_err(malformed)
}

/// Accepts generated prose, trimmed.
pub(crate) fn parse_description(text: &str) -> Result<String, GenerationError> {
    non_empty(text).map(String::from)
}

pub(crate) fn entity_prompt(topic: &str, year: f64) -> String {
    format!(
        "Create a JSON object for a historical entity (civilization, culture, empire, event, etc.) \
         about \"{topic}\". The user pointed at {}, so prefer something relevant near that time \
         if the topic is ambiguous; otherwise use the topic's actual dates.\n\
         Return JSON with this shape:\n\
         {{\"name\": {{\"en\": string, \"ru\": string}}, \
         \"description\": {{\"en\": string, \"ru\": string}}, \
         \"location\": {{\"en\": string, \"ru\": string}}, \
         \"startYear\": number, \"endYear\": number, \
         \"type\": \"culture\" | \"civilization\" | \"state\" | \"empire\" | \"kingdom\" | \"period\" | \"event\", \
         \"events\": [{{\"year\": number, \"title\": {{\"en\": string, \"ru\": string}}, \
         \"description\": {{\"en\": string, \"ru\": string}}}}]}}\n\
         Years before the common era are negative. Only return the JSON.",
        format_year(year)
    )
}

pub(crate) fn description_prompt(entity: &Entity, language: Language) -> String {
    let language = match language {
        Language::En => "English",
        Language::Ru => "Russian",
    };
    format!(
        "Write a structured historical description of \"{}\" (type: {:?}) in {language}.\n\
         Sections: introduction with dates and location; major characteristics and \
         achievements as 3-4 bullet points; context or hypotheses; legacy and continuity.\n\
         Mark section titles with **double asterisks** and do not use Markdown headers.\n\
         Start year: {}, end year: {}.",
        entity.name.en, entity.kind, entity.start_year, entity.end_year
    )
}

pub(crate) fn events_prompt(entity: &Entity) -> String {
    format!(
        "List 3 to 5 major historical events for \"{}\" between year {} and {}.\n\
         Return strictly a JSON array of objects shaped like \
         {{\"year\": number, \"title\": {{\"en\": string, \"ru\": string}}, \
         \"description\": {{\"en\": string, \"ru\": string}}}}.\n\
         Only return valid JSON.",
        entity.name.en, entity.start_year, entity.end_year
    )
}
