// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::VecDeque;

use chronos_interaction::{
    CursorHint, Intent, InteractionConfig, InteractionController, Mutation, PointerButton,
    SearchResult,
};
use chronos_layout::{
    Layout, LayoutConfig, RegionBand, RegionGroup, RegionId, calculate_layout, group_by_region,
};
use chronos_model::{Entity, EntityId, EntityType, Language, LocalizedText};
use chronos_projection::{Frame, ProjectionConfig, RenderProjector, Scene};
use chronos_view::TimelineViewport;
use hashbrown::HashMap;
use kurbo::{Point, Size};
use log::{debug, warn};

use crate::generation::{
    PendingGeneration, description_prompt, entity_prompt, events_prompt, parse_description,
    parse_entity, parse_events,
};
use crate::{
    ContentGenerator, EntityStore, GenerationError, GenerationOutcome, GenerationRequest,
    GenerationTicket, StoreError,
};

/// Configuration for a [`Board`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardConfig {
    /// Lane and band metrics.
    pub layout: LayoutConfig,
    /// Card, grid and marker metrics.
    pub projection: ProjectionConfig,
    /// Pointer thresholds.
    pub interaction: InteractionConfig,
    /// Scale of the initial view, in pixels per year.
    pub initial_scale: f64,
    /// Year at the centre of the initial view.
    pub initial_year: f64,
    /// Initial display language.
    pub language: Language,
    /// Span added to a manually created entity, in pixels at the current
    /// scale.
    pub new_entity_pixels: f64,
    /// Shortest span of a manually created entity before it is widened to
    /// [`Self::fallback_span`] years.
    pub min_new_span: f64,
    /// Span given to short new entities and generation placeholders, in years.
    pub fallback_span: f64,
    /// Vertical distance between the view top and a band scrolled to.
    pub region_scroll_margin: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            projection: ProjectionConfig::default(),
            interaction: InteractionConfig::default(),
            initial_scale: 0.0005,
            initial_year: -1_500_000.0,
            language: Language::default(),
            new_entity_pixels: 100.0,
            min_new_span: 50.0,
            fallback_span: 100.0,
            region_scroll_margin: 100.0,
        }
    }
}

/// Category of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Generation failed and a placeholder or no change was used instead.
    GenerationFailed,
    /// An edit could not be applied.
    MutationRejected,
}

/// A message the host should surface to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Category.
    pub kind: NoticeKind,
    /// Human-readable text.
    pub message: String,
}

/// A complete timeline board.
///
/// The board owns the entity list and keeps everything derived from it in
/// step: the layout is recomputed whenever the store's revision moves, and the
/// selection is dropped when its entity disappears. Pointer input goes through
/// an [`InteractionController`]; the resulting [`Mutation`]s are applied here.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    store: EntityStore,
    layout: Layout,
    layout_revision: u64,
    viewport: TimelineViewport,
    controller: InteractionController,
    projector: RenderProjector,
    language: Language,
    view_size: Size,
    notices: VecDeque<Notice>,
    queued: Vec<GenerationRequest>,
    pending: HashMap<GenerationTicket, PendingGeneration>,
    next_ticket: u64,
    next_local_id: u64,
}

fn scene<'a>(
    store: &'a EntityStore,
    layout: &'a Layout,
    view_size: Size,
    language: Language,
    selected: Option<&'a EntityId>,
    region: Option<RegionId>,
) -> Scene<'a> {
    Scene::new(store.entities(), layout, view_size, language)
        .with_selected_entity(selected)
        .with_selected_region(region)
}

impl Board {
    /// Creates a board over `entities`, shown in a view of `view_size`.
    #[must_use]
    pub fn new(entities: Vec<Entity>, view_size: Size, config: BoardConfig) -> Self {
        let store = EntityStore::new(entities);
        let layout = calculate_layout(store.entities(), &config.layout);
        let controller = InteractionController::new(config.interaction, config.projection);
        let mut viewport =
            TimelineViewport::centered_on(config.initial_year, config.initial_scale, view_size.width);
        controller.configure_viewport(&mut viewport);
        Self {
            layout_revision: store.revision(),
            store,
            layout,
            viewport,
            controller,
            projector: RenderProjector::new(config.projection),
            language: config.language,
            view_size,
            notices: VecDeque::new(),
            queued: Vec::new(),
            pending: HashMap::new(),
            next_ticket: 0,
            next_local_id: 0,
            config,
        }
    }

    /// Board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The entity list.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> &TimelineViewport {
        &self.viewport
    }

    /// Mutable viewport, for host-driven navigation.
    pub fn viewport_mut(&mut self) -> &mut TimelineViewport {
        &mut self.viewport
    }

    /// The interaction controller.
    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Display language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the display language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Returns `true` when card editing is enabled.
    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.controller.edit_mode()
    }

    /// Enables or disables card editing.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.controller.set_edit_mode(enabled);
    }

    /// Size of the board in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Resizes the board.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// The selected entity, if any.
    #[must_use]
    pub fn selected_entity(&self) -> Option<&Entity> {
        self.controller
            .selected_entity()
            .and_then(|id| self.store.get(id.as_str()))
    }

    /// The selected region band, if any.
    #[must_use]
    pub fn selected_region(&self) -> Option<RegionId> {
        self.controller.selected_region()
    }

    /// Replaces the whole entity list.
    pub fn replace_entities(&mut self, entities: Vec<Entity>) {
        self.store.replace_all(entities);
        let stale = self
            .controller
            .selected_entity()
            .filter(|id| !self.store.contains(id.as_str()))
            .cloned();
        if let Some(id) = stale {
            self.controller.forget_entity(id.as_str());
        }
        self.refresh_layout();
    }

    /// Projects the current state for drawing.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let scene = scene(
            &self.store,
            &self.layout,
            self.view_size,
            self.language,
            self.controller.selected_entity(),
            self.controller.selected_region(),
        );
        self.projector.project(&scene, &self.viewport)
    }

    /// Cursor to show with the pointer at `pos`.
    #[must_use]
    pub fn cursor_hint(&self, pos: Point) -> CursorHint {
        let scene = scene(
            &self.store,
            &self.layout,
            self.view_size,
            self.language,
            self.controller.selected_entity(),
            self.controller.selected_region(),
        );
        self.controller.cursor_hint(pos, &self.viewport, &scene)
    }

    /// Handles a button press.
    pub fn pointer_down(&mut self, pos: Point, button: PointerButton) -> Option<Intent> {
        let selected = self.controller.selected_entity().cloned();
        let scene = scene(
            &self.store,
            &self.layout,
            self.view_size,
            self.language,
            selected.as_ref(),
            self.controller.selected_region(),
        );
        let intent = self
            .controller
            .pointer_down(pos, button, &self.viewport, &scene);
        self.handle(intent)
    }

    /// Handles pointer movement.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Intent> {
        let intent = self.controller.pointer_move(pos, &mut self.viewport);
        self.handle(intent)
    }

    /// Handles a button release.
    pub fn pointer_up(&mut self, pos: Point) -> Option<Intent> {
        let selected = self.controller.selected_entity().cloned();
        let scene = scene(
            &self.store,
            &self.layout,
            self.view_size,
            self.language,
            selected.as_ref(),
            self.controller.selected_region(),
        );
        let intent = self.controller.pointer_up(pos, &mut self.viewport, &scene);
        self.handle(intent)
    }

    /// Handles the pointer leaving the board.
    pub fn pointer_leave(&mut self, pos: Point) -> Option<Intent> {
        let selected = self.controller.selected_entity().cloned();
        let scene = scene(
            &self.store,
            &self.layout,
            self.view_size,
            self.language,
            selected.as_ref(),
            self.controller.selected_region(),
        );
        let intent = self
            .controller
            .pointer_leave(pos, &mut self.viewport, &scene);
        self.handle(intent)
    }

    /// Zooms about the pointer.
    pub fn wheel(&mut self, pos: Point, delta: f64) {
        self.controller.wheel(pos, delta, &mut self.viewport);
    }

    /// Zooms to an entity and selects it, as the navigation panel does.
    pub fn select_entity(&mut self, id: &str) -> Option<Intent> {
        let scene = scene(
            &self.store,
            &self.layout,
            self.view_size,
            self.language,
            None,
            self.controller.selected_region(),
        );
        self.controller
            .select_entity(id, &mut self.viewport, &scene)
    }

    /// Clears the entity selection.
    pub fn clear_selection(&mut self) {
        self.controller.set_selected_entity(None);
    }

    /// Non-empty region bands, top to bottom.
    #[must_use]
    pub fn regions(&self) -> &[RegionBand] {
        self.layout.regions()
    }

    /// Entities grouped by region, for the navigation panel.
    #[must_use]
    pub fn region_groups(&self) -> Vec<RegionGroup> {
        group_by_region(self.store.entities())
    }

    /// Scrolls so that `region`'s band sits just below the view top.
    ///
    /// Returns `false` if the region has no entities.
    pub fn scroll_to_region(&mut self, region: RegionId) -> bool {
        let Some(band) = self.layout.region(region) else {
            return false;
        };
        self.viewport
            .scroll_to(self.config.region_scroll_margin - band.start_y);
        true
    }

    /// Search results for the open context menu.
    #[must_use]
    pub fn search_results(&self) -> Vec<SearchResult> {
        let scene = scene(
            &self.store,
            &self.layout,
            self.view_size,
            self.language,
            None,
            None,
        );
        self.controller.search_results(&scene)
    }

    /// Sets the context menu's search text. Does nothing when it is closed.
    pub fn set_menu_query(&mut self, query: &str) {
        if let Some(menu) = self.controller.menu_mut() {
            menu.set_query(query);
        }
    }

    /// Sets the context menu's topic text. Does nothing when it is closed.
    pub fn set_menu_topic(&mut self, topic: &str) {
        if let Some(menu) = self.controller.menu_mut() {
            menu.set_topic(topic);
        }
    }

    /// Picks a context menu search result.
    pub fn choose_search_result(&mut self, id: &str) -> Option<Intent> {
        let scene = scene(
            &self.store,
            &self.layout,
            self.view_size,
            self.language,
            None,
            self.controller.selected_region(),
        );
        self.controller
            .choose_search_result(id, &mut self.viewport, &scene)
    }

    /// Closes the context menu.
    pub fn close_menu(&mut self) -> Option<Intent> {
        self.controller.close_menu()
    }

    /// "Create" from the context menu (edit mode only).
    pub fn create_at_menu(&mut self) -> Option<Intent> {
        let intent = self.controller.create_at_menu();
        self.handle(intent)
    }

    /// "Create from topic" from the context menu (edit mode only).
    pub fn create_from_topic(&mut self) -> Option<Intent> {
        let intent = self.controller.create_from_topic();
        self.handle(intent)
    }

    /// Deletes an entity (edit mode only).
    pub fn request_delete(&mut self, id: &str) -> Option<Intent> {
        let intent = self.controller.request_delete(id);
        self.handle(intent)
    }

    /// Replaces an entity, e.g. after editing it in a detail form.
    pub fn update_entity(&mut self, entity: Entity) -> Result<(), StoreError> {
        self.store.update(entity)?;
        self.refresh_layout();
        Ok(())
    }

    /// Adds a placeholder entity starting at `year` and selects it.
    ///
    /// The entity spans what is currently
    /// [`BoardConfig::new_entity_pixels`] wide on screen, or
    /// [`BoardConfig::fallback_span`] years when that would be shorter than
    /// [`BoardConfig::min_new_span`].
    pub fn create_entity(&mut self, year: f64) -> EntityId {
        let id = self.fresh_id("new");
        let start_year = year.floor();
        let mut end_year = (year + self.config.new_entity_pixels / self.viewport.scale()).floor();
        if end_year - start_year < self.config.min_new_span {
            end_year = start_year + self.config.fallback_span;
        }
        let entity = Entity::new(
            id.clone(),
            LocalizedText::new("New Entity", "Новый объект"),
            LocalizedText::new("Location", "Локация"),
            start_year,
            end_year,
            EntityType::Culture,
        )
        .with_description(LocalizedText::new("Description...", "Описание..."));
        self.insert_and_select(entity);
        id
    }

    /// Pending notices, oldest first.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Removes and returns all pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    /// Queues generation of a new entity about `topic` near `year`.
    pub fn request_entity_generation(&mut self, topic: &str, year: f64) -> GenerationTicket {
        let prompt = entity_prompt(topic, year);
        self.enqueue(
            PendingGeneration::Entity {
                topic: String::from(topic),
                year,
            },
            prompt,
        )
    }

    /// Queues generation of a description, in the current language, for an
    /// existing entity.
    pub fn request_description(&mut self, id: &str) -> Result<GenerationTicket, StoreError> {
        let entity = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::UnknownId(EntityId::from(id)))?;
        let prompt = description_prompt(entity, self.language);
        let pending = PendingGeneration::Description {
            id: entity.id.clone(),
            language: self.language,
        };
        Ok(self.enqueue(pending, prompt))
    }

    /// Queues generation of additional sub-events for an existing entity.
    pub fn request_events(&mut self, id: &str) -> Result<GenerationTicket, StoreError> {
        let entity = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::UnknownId(EntityId::from(id)))?;
        let prompt = events_prompt(entity);
        let pending = PendingGeneration::Events {
            id: entity.id.clone(),
        };
        Ok(self.enqueue(pending, prompt))
    }

    /// Removes and returns the queued generation requests.
    ///
    /// Each stays outstanding until completed.
    pub fn take_generation_requests(&mut self) -> Vec<GenerationRequest> {
        std::mem::take(&mut self.queued)
    }

    /// Completes an outstanding request with the generator's raw output.
    ///
    /// Failures never propagate: a failed entity becomes a placeholder, a
    /// failed augmentation leaves the entity unchanged, and either way a
    /// [`Notice`] is queued. Only an unknown ticket is an error.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        response: Result<String, GenerationError>,
    ) -> Result<GenerationOutcome, GenerationError> {
        let pending = self
            .pending
            .remove(&ticket)
            .ok_or(GenerationError::UnknownTicket(ticket))?;
        self.queued.retain(|request| request.ticket != ticket);

        let outcome = match pending {
            PendingGeneration::Entity { topic, year } => {
                let id = self.fresh_id("ai");
                match response.and_then(|text| parse_entity(&text, id)) {
                    Ok(entity) => {
                        let start = entity.start_year;
                        let id = entity.id.clone();
                        self.insert_and_select(entity);
                        self.viewport.center_on_year(start, self.view_size.width);
                        GenerationOutcome::Created(id)
                    }
                    Err(err) => {
                        self.generation_failed(ticket, &err, "created an empty card instead");
                        GenerationOutcome::Placeholder(self.create_placeholder(&topic, year))
                    }
                }
            }
            PendingGeneration::Description { id, language } => {
                match response.and_then(|text| parse_description(&text)) {
                    Ok(text) => self.augment(id, |entity| match language {
                        Language::En => entity.description.en = text,
                        Language::Ru => entity.description.ru = text,
                    }),
                    Err(err) => {
                        self.generation_failed(ticket, &err, "description left unchanged");
                        GenerationOutcome::Unchanged(id)
                    }
                }
            }
            PendingGeneration::Events { id } => {
                match response.and_then(|text| parse_events(&text)) {
                    Ok(events) => self.augment(id, |entity| entity.events.extend(events)),
                    Err(err) => {
                        self.generation_failed(ticket, &err, "events left unchanged");
                        GenerationOutcome::Unchanged(id)
                    }
                }
            }
        };
        Ok(outcome)
    }

    /// Runs every queued request through `generator` and completes it.
    pub fn run_generation(&mut self, generator: &mut dyn ContentGenerator) -> Vec<GenerationOutcome> {
        self.take_generation_requests()
            .into_iter()
            .filter_map(|request| {
                let response = generator.generate(&request);
                self.complete_generation(request.ticket, response).ok()
            })
            .collect()
    }

    fn handle(&mut self, intent: Option<Intent>) -> Option<Intent> {
        if let Some(Intent::Mutate(mutation)) = &intent {
            self.apply(mutation.clone());
        }
        intent
    }

    fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::Create { year } => {
                let id = self.create_entity(year);
                debug!("created entity {id} at {year}");
            }
            Mutation::CreateFromTopic { topic, year } => {
                let ticket = self.request_entity_generation(&topic, year);
                debug!("queued generation {ticket} for {topic:?}");
            }
            Mutation::Update(entity) => {
                let id = entity.id.clone();
                match self.store.update(entity) {
                    Ok(()) => debug!("updated entity {id}"),
                    Err(err) => self.rejected(&err),
                }
            }
            Mutation::Delete(id) => match self.store.remove(id.as_str()) {
                Ok(_) => {
                    self.controller.forget_entity(id.as_str());
                    debug!("deleted entity {id}");
                }
                Err(err) => self.rejected(&err),
            },
        }
        self.refresh_layout();
    }

    fn refresh_layout(&mut self) {
        if self.layout_revision == self.store.revision() {
            return;
        }
        self.layout = calculate_layout(self.store.entities(), &self.config.layout);
        self.layout_revision = self.store.revision();
        debug!(
            "layout recomputed: {} entities in {} bands",
            self.layout.items().len(),
            self.layout.regions().len()
        );
    }

    fn enqueue(&mut self, pending: PendingGeneration, prompt: String) -> GenerationTicket {
        self.next_ticket += 1;
        let ticket = GenerationTicket(self.next_ticket);
        self.queued.push(GenerationRequest {
            ticket,
            prompt,
            schema: pending.schema(),
        });
        self.pending.insert(ticket, pending);
        ticket
    }

    fn fresh_id(&mut self, prefix: &str) -> EntityId {
        loop {
            self.next_local_id += 1;
            let id = EntityId::new(format!("{prefix}-{}", self.next_local_id));
            if !self.store.contains(id.as_str()) {
                return id;
            }
        }
    }

    fn insert_and_select(&mut self, entity: Entity) {
        let id = entity.id.clone();
        match self.store.insert(entity) {
            Ok(()) => {
                self.controller.set_selected_entity(Some(id));
                self.refresh_layout();
            }
            Err(err) => self.rejected(&err),
        }
    }

    fn create_placeholder(&mut self, topic: &str, year: f64) -> EntityId {
        let id = self.fresh_id("manual");
        let start_year = year.floor();
        let entity = Entity::new(
            id.clone(),
            LocalizedText::same(topic),
            LocalizedText::new("Unknown", "Неизвестно"),
            start_year,
            start_year + self.config.fallback_span,
            EntityType::Culture,
        )
        .with_description(LocalizedText::new(
            "Auto-created entry (generation failed). Edit details manually.",
            "Автоматически созданная запись (сбой генерации). Заполните детали вручную.",
        ));
        self.insert_and_select(entity);
        id
    }

    fn augment(&mut self, id: EntityId, edit: impl FnOnce(&mut Entity)) -> GenerationOutcome {
        let Some(mut entity) = self.store.get(id.as_str()).cloned() else {
            warn!("generated content for {id} arrived after it was removed");
            return GenerationOutcome::Unchanged(id);
        };
        edit(&mut entity);
        match self.store.update(entity) {
            Ok(()) => {
                self.refresh_layout();
                GenerationOutcome::Updated(id)
            }
            Err(err) => {
                self.rejected(&err);
                GenerationOutcome::Unchanged(id)
            }
        }
    }

    fn generation_failed(&mut self, ticket: GenerationTicket, err: &GenerationError, fallback: &str) {
        warn!("generation {ticket} failed: {err}; {fallback}");
        self.notices.push_back(Notice {
            kind: NoticeKind::GenerationFailed,
            message: format!("Generation failed ({err}); {fallback}."),
        });
    }

    fn rejected(&mut self, err: &StoreError) {
        warn!("edit rejected: {err}");
        self.notices.push_back(Notice {
            kind: NoticeKind::MutationRejected,
            message: err.to_string(),
        });
    }
}
