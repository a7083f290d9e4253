// Copyright 2026 the Chronos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use chronos_layout::RegionId;
use chronos_model::{Entity, EntityId};
use chronos_projection::{ProjectionConfig, Scene};
use chronos_view::{EntityFit, TimelineViewport};
use kurbo::Point;

use crate::{ContextMenu, DragTracker, ItemZone, SearchResult, hit_item, hit_region};

/// Thresholds and metrics for pointer interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Width of the resize handles at either end of a card.
    pub edge_handle_width: f64,
    /// Movement beyond this many pixels on either axis turns a click into a
    /// drag.
    pub click_threshold: f64,
    /// Height of the fixed header above layout space.
    pub header_offset: f64,
    /// Screen row an entity's lane lands on after zoom-to-entity.
    pub focus_row: f64,
    /// Zoom factor change per unit of wheel delta.
    pub zoom_sensitivity: f64,
    /// Maximum number of search results in the context menu.
    pub search_limit: usize,
    /// Fraction of the view width an entity spans after zoom-to-entity.
    pub zoom_fill_ratio: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            edge_handle_width: 15.0,
            click_threshold: 3.0,
            header_offset: 60.0,
            focus_row: 70.0,
            zoom_sensitivity: 0.001,
            search_limit: 8,
            zoom_fill_ratio: 0.9,
        }
    }
}

impl InteractionConfig {
    /// Zoom-to-entity parameters derived from this configuration.
    #[must_use]
    pub fn entity_fit(&self) -> EntityFit {
        EntityFit {
            fill_ratio: self.zoom_fill_ratio,
            focus_row: self.focus_row,
            header_offset: self.header_offset,
        }
    }
}

/// What the current pointer gesture is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    /// No gesture, or a press on a card outside edit mode.
    #[default]
    Idle,
    /// Dragging the board.
    Panning,
    /// Dragging a card, shifting both ends.
    MovingItem,
    /// Dragging a card's left handle.
    ResizingLeft,
    /// Dragging a card's right handle.
    ResizingRight,
}

/// Pointer buttons the controller distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button; opens the context menu.
    Secondary,
}

/// A change to the entity list requested by the user.
///
/// The controller never edits data itself; the owner of the entity list
/// applies these.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    /// Create a placeholder entity starting at `year`.
    Create {
        /// Start year.
        year: f64,
    },
    /// Create an entity about `topic` starting near `year`.
    CreateFromTopic {
        /// Free-form topic text.
        topic: String,
        /// Start year.
        year: f64,
    },
    /// Replace the entity with the same id.
    Update(Entity),
    /// Remove the entity with this id.
    Delete(EntityId),
}

/// Result of an input event, for the host to act on.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Apply a change to the entity list.
    Mutate(Mutation),
    /// An entity was selected and the viewport zoomed to it.
    SelectEntity(EntityId),
    /// A region band was clicked, or empty space below the bands.
    SelectRegion(Option<RegionId>),
    /// The context menu opened.
    ContextMenuOpened {
        /// Screen anchor.
        anchor: Point,
        /// Year under the anchor.
        year: f64,
    },
    /// The context menu closed.
    ContextMenuClosed,
}

/// Cursor the host should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    /// Over empty board.
    Grab,
    /// Panning.
    Grabbing,
    /// Over or dragging a card body in edit mode.
    Move,
    /// Over or dragging a left handle in edit mode.
    ResizeLeft,
    /// Over or dragging a right handle in edit mode.
    ResizeRight,
    /// Over a card outside edit mode.
    Pointer,
}

#[derive(Clone, Debug)]
struct EditTarget {
    entity: Entity,
    start_year: f64,
    end_year: f64,
}

/// Pointer state machine for a timeline board.
///
/// The controller owns the gesture state, the selection and the context menu.
/// It reads the scene, may move the viewport, and reports everything else as
/// [`Intent`]s.
#[derive(Clone, Debug)]
pub struct InteractionController {
    config: InteractionConfig,
    projection: ProjectionConfig,
    mode: DragMode,
    drag: DragTracker,
    pan_origin: (f64, f64),
    pressed: Option<EntityId>,
    target: Option<EditTarget>,
    menu: Option<ContextMenu>,
    edit_mode: bool,
    selected_entity: Option<EntityId>,
    selected_region: Option<RegionId>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(InteractionConfig::default(), ProjectionConfig::default())
    }
}

impl InteractionController {
    /// Creates an idle controller. `projection` must match the one used to
    /// draw, since hit testing uses the same card shapes.
    #[must_use]
    pub fn new(config: InteractionConfig, projection: ProjectionConfig) -> Self {
        Self {
            config,
            projection,
            mode: DragMode::Idle,
            drag: DragTracker::new(config.click_threshold),
            pan_origin: (0.0, 0.0),
            pressed: None,
            target: None,
            menu: None,
            edit_mode: false,
            selected_entity: None,
            selected_region: None,
        }
    }

    /// Interaction configuration.
    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Copies zoom sensitivity and zoom-to-entity metrics into `viewport`.
    pub fn configure_viewport(&self, viewport: &mut TimelineViewport) {
        viewport.set_zoom_sensitivity(self.config.zoom_sensitivity);
        viewport.set_entity_fit(self.config.entity_fit());
    }

    /// Current gesture mode.
    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Returns `true` when card editing is enabled.
    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Enables or disables card editing. Disabling it abandons any edit
    /// gesture in progress.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
        if !enabled && self.target.is_some() {
            self.target = None;
            self.mode = DragMode::Idle;
        }
    }

    /// Selected entity, if any.
    #[must_use]
    pub fn selected_entity(&self) -> Option<&EntityId> {
        self.selected_entity.as_ref()
    }

    /// Selected region band, if any.
    #[must_use]
    pub fn selected_region(&self) -> Option<RegionId> {
        self.selected_region
    }

    /// Replaces the selected entity without moving the viewport.
    pub fn set_selected_entity(&mut self, id: Option<EntityId>) {
        self.selected_entity = id;
    }

    /// Replaces the selected region.
    pub fn set_selected_region(&mut self, region: Option<RegionId>) {
        self.selected_region = region;
    }

    /// Drops every reference to an entity that no longer exists.
    pub fn forget_entity(&mut self, id: &str) {
        if self.selected_entity.as_ref().is_some_and(|s| s.as_str() == id) {
            self.selected_entity = None;
        }
        if self.pressed.as_ref().is_some_and(|p| p.as_str() == id) {
            self.pressed = None;
        }
        if self
            .target
            .as_ref()
            .is_some_and(|t| t.entity.id.as_str() == id)
        {
            self.target = None;
            self.mode = DragMode::Idle;
        }
    }

    /// Open context menu, if any.
    #[must_use]
    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    /// Mutable access to the open context menu, for editing its inputs.
    pub fn menu_mut(&mut self) -> Option<&mut ContextMenu> {
        self.menu.as_mut()
    }

    /// Closes the context menu if it is open.
    pub fn close_menu(&mut self) -> Option<Intent> {
        self.menu.take().map(|_| Intent::ContextMenuClosed)
    }

    /// Handles a button press at `pos`.
    pub fn pointer_down(
        &mut self,
        pos: Point,
        button: PointerButton,
        viewport: &TimelineViewport,
        scene: &Scene<'_>,
    ) -> Option<Intent> {
        if button == PointerButton::Secondary {
            let year = viewport.year_at_point(pos);
            self.menu = Some(ContextMenu::new(pos, year));
            return Some(Intent::ContextMenuOpened { anchor: pos, year });
        }

        let closed = self.close_menu();
        self.drag.start(pos);
        self.pressed = None;
        self.target = None;

        let hit = hit_item(
            scene,
            viewport,
            &self.projection,
            self.config.edge_handle_width,
            pos,
        );
        match hit {
            Some(hit) => {
                if self.edit_mode {
                    self.mode = match hit.zone {
                        ItemZone::LeftEdge => DragMode::ResizingLeft,
                        ItemZone::RightEdge => DragMode::ResizingRight,
                        ItemZone::Body => DragMode::MovingItem,
                    };
                    let entity = scene.entities[hit.entity].clone();
                    self.target = Some(EditTarget {
                        start_year: entity.start_year,
                        end_year: entity.end_year,
                        entity,
                    });
                } else {
                    self.mode = DragMode::Idle;
                }
                self.pressed = Some(hit.id);
            }
            None => {
                self.mode = DragMode::Panning;
                self.pan_origin = (viewport.offset_x(), viewport.offset_y());
            }
        }
        closed
    }

    /// Handles pointer movement to `pos`.
    ///
    /// While panning this moves the viewport; while editing a card it emits an
    /// updated copy of the entity on every move.
    pub fn pointer_move(&mut self, pos: Point, viewport: &mut TimelineViewport) -> Option<Intent> {
        let offset = self.drag.update(pos)?;
        match self.mode {
            DragMode::Idle => None,
            DragMode::Panning => {
                let (x, y) = self.pan_origin;
                viewport.set_offsets(x + offset.x, y + offset.y);
                None
            }
            mode => {
                let target = self.target.as_mut()?;
                let delta = viewport.pixels_to_years(offset.x);
                match mode {
                    DragMode::MovingItem => {
                        target.entity.start_year = target.start_year + delta;
                        target.entity.end_year = target.end_year + delta;
                    }
                    DragMode::ResizingLeft => {
                        target.entity.start_year = target.start_year + delta;
                    }
                    _ => {
                        target.entity.end_year = target.end_year + delta;
                    }
                }
                Some(Intent::Mutate(Mutation::Update(target.entity.clone())))
            }
        }
    }

    /// Handles a button release at `pos`.
    ///
    /// A press and release on a card without dragging zooms to the card and
    /// selects it. The same on empty board selects the region band under the
    /// pointer, or clears the region selection.
    pub fn pointer_up(
        &mut self,
        pos: Point,
        viewport: &mut TimelineViewport,
        scene: &Scene<'_>,
    ) -> Option<Intent> {
        if !self.drag.is_active() {
            return None;
        }
        let clicked = !self.drag.moved();
        let pressed = self.pressed.take();
        let mode = self.mode;
        self.drag.end();
        self.mode = DragMode::Idle;
        self.target = None;

        if !clicked {
            return None;
        }
        if let Some(id) = pressed {
            return self.select_entity(id.as_str(), viewport, scene);
        }
        if mode == DragMode::Panning {
            let region = hit_region(scene.layout, viewport, self.config.header_offset, pos.y);
            self.selected_region = region;
            return Some(Intent::SelectRegion(region));
        }
        None
    }

    /// Handles the pointer leaving the board; behaves as a release at `pos`.
    pub fn pointer_leave(
        &mut self,
        pos: Point,
        viewport: &mut TimelineViewport,
        scene: &Scene<'_>,
    ) -> Option<Intent> {
        self.pointer_up(pos, viewport, scene)
    }

    /// Zooms around the pointer. Gesture state is untouched.
    pub fn wheel(&mut self, pos: Point, delta: f64, viewport: &mut TimelineViewport) {
        viewport.zoom_at_point(pos.x, delta);
    }

    /// Zooms to an entity and selects it.
    ///
    /// Returns `None` when `id` is not in the scene.
    pub fn select_entity(
        &mut self,
        id: &str,
        viewport: &mut TimelineViewport,
        scene: &Scene<'_>,
    ) -> Option<Intent> {
        let (entity, item) = scene.find(id)?;
        viewport.zoom_to_entity(entity, item, scene.view_size);
        self.selected_entity = Some(entity.id.clone());
        Some(Intent::SelectEntity(entity.id.clone()))
    }

    /// Requests deletion of an entity. Only honoured in edit mode.
    pub fn request_delete(&mut self, id: &str) -> Option<Intent> {
        self.edit_mode
            .then(|| Intent::Mutate(Mutation::Delete(EntityId::from(id))))
    }

    /// Search results for the open menu's query.
    #[must_use]
    pub fn search_results(&self, scene: &Scene<'_>) -> Vec<SearchResult> {
        self.menu
            .as_ref()
            .map(|menu| menu.results(scene.entities, scene.language, self.config.search_limit))
            .unwrap_or_default()
    }

    /// Zooms to a search result and selects it, closing the menu.
    pub fn choose_search_result(
        &mut self,
        id: &str,
        viewport: &mut TimelineViewport,
        scene: &Scene<'_>,
    ) -> Option<Intent> {
        self.menu = None;
        self.select_entity(id, viewport, scene)
    }

    /// Requests a placeholder entity at the menu's year and closes the menu.
    ///
    /// Only available in edit mode with the menu open.
    pub fn create_at_menu(&mut self) -> Option<Intent> {
        if !self.edit_mode {
            return None;
        }
        let menu = self.menu.take()?;
        Some(Intent::Mutate(Mutation::Create { year: menu.year }))
    }

    /// Requests an entity about the menu's topic text and closes the menu.
    ///
    /// Only available in edit mode, with the menu open and a non-blank topic.
    pub fn create_from_topic(&mut self) -> Option<Intent> {
        if !self.edit_mode {
            return None;
        }
        let topic = self.menu.as_ref()?.topic().trim();
        if topic.is_empty() {
            return None;
        }
        let topic = String::from(topic);
        let menu = self.menu.take()?;
        Some(Intent::Mutate(Mutation::CreateFromTopic {
            topic,
            year: menu.year,
        }))
    }

    /// Cursor to show with the pointer at `pos`.
    #[must_use]
    pub fn cursor_hint(
        &self,
        pos: Point,
        viewport: &TimelineViewport,
        scene: &Scene<'_>,
    ) -> CursorHint {
        match self.mode {
            DragMode::Panning => CursorHint::Grabbing,
            DragMode::MovingItem => CursorHint::Move,
            DragMode::ResizingLeft => CursorHint::ResizeLeft,
            DragMode::ResizingRight => CursorHint::ResizeRight,
            DragMode::Idle => {
                let hit = hit_item(
                    scene,
                    viewport,
                    &self.projection,
                    self.config.edge_handle_width,
                    pos,
                );
                match hit {
                    None => CursorHint::Grab,
                    Some(_) if !self.edit_mode => CursorHint::Pointer,
                    Some(hit) => match hit.zone {
                        ItemZone::LeftEdge => CursorHint::ResizeLeft,
                        ItemZone::RightEdge => CursorHint::ResizeRight,
                        ItemZone::Body => CursorHint::Move,
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chronos_layout::{LayoutConfig, calculate_layout};
    use chronos_model::{EntityType, Language, LocalizedText, MIN_YEAR};
    use kurbo::Size;

    use super::*;

    fn entities() -> [Entity; 2] {
        [
            Entity::new(
                "rome",
                LocalizedText::same("Rome"),
                LocalizedText::same("Rome"),
                0.0,
                200.0,
                EntityType::Empire,
            ),
            Entity::new(
                "egypt",
                LocalizedText::same("Egypt"),
                LocalizedText::same("Egypt"),
                -3000.0,
                -30.0,
                EntityType::Civilization,
            ),
        ]
    }

    // Year 0 at x = 0, one pixel per year.
    fn viewport() -> TimelineViewport {
        TimelineViewport::new(1.0, MIN_YEAR, 0.0)
    }

    #[test]
    fn short_press_on_empty_board_selects_region() {
        let entities = entities();
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);
        let mut vp = viewport();
        let mut ctl = InteractionController::default();

        // Africa band occupies layout y 0..100, Europe 100..200.
        let pos = Point::new(600.0, 200.0);
        assert_eq!(ctl.pointer_down(pos, PointerButton::Primary, &vp, &scene), None);
        assert_eq!(ctl.mode(), DragMode::Panning);
        ctl.pointer_move(Point::new(602.0, 201.0), &mut vp);
        let intent = ctl.pointer_up(Point::new(602.0, 201.0), &mut vp, &scene);
        assert_eq!(intent, Some(Intent::SelectRegion(Some(RegionId::Europe))));
        assert_eq!(ctl.selected_region(), Some(RegionId::Europe));
        assert_eq!(ctl.mode(), DragMode::Idle);

        ctl.pointer_down(Point::new(600.0, 500.0), PointerButton::Primary, &vp, &scene);
        let intent = ctl.pointer_up(Point::new(600.0, 500.0), &mut vp, &scene);
        assert_eq!(intent, Some(Intent::SelectRegion(None)));
        assert_eq!(ctl.selected_region(), None);
    }

    #[test]
    fn panning_moves_the_viewport_and_floors_y() {
        let entities = entities();
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);
        let mut vp = viewport();
        let mut ctl = InteractionController::default();

        ctl.pointer_down(Point::new(600.0, 300.0), PointerButton::Primary, &vp, &scene);
        ctl.pointer_move(Point::new(650.0, 280.0), &mut vp);
        assert_eq!(vp.offset_x(), MIN_YEAR + 50.0);
        assert_eq!(vp.offset_y(), -20.0);
        ctl.pointer_move(Point::new(650.0, 400.0), &mut vp);
        assert_eq!(vp.offset_y(), 0.0);

        // A drag is not a click.
        assert_eq!(ctl.pointer_up(Point::new(650.0, 400.0), &mut vp, &scene), None);
    }

    #[test]
    fn click_on_card_zooms_and_selects() {
        let entities = entities();
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);
        let mut vp = viewport();
        let mut ctl = InteractionController::default();

        // Rome sits in the Europe band: global y 130, screen y 190.
        let pos = Point::new(100.0, 200.0);
        ctl.pointer_down(pos, PointerButton::Primary, &vp, &scene);
        assert_eq!(ctl.mode(), DragMode::Idle);
        let intent = ctl.pointer_up(pos, &mut vp, &scene);
        assert_eq!(intent, Some(Intent::SelectEntity(EntityId::from("rome"))));
        assert_eq!(ctl.selected_entity().map(EntityId::as_str), Some("rome"));
        assert!((vp.scale() - 4.5).abs() < 1e-12);
        assert_eq!(vp.offset_y(), -120.0);
    }

    #[test]
    fn edit_drags_emit_updates_from_original_bounds() {
        let entities = entities();
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);
        let mut vp = viewport();
        let mut ctl = InteractionController::default();
        ctl.set_edit_mode(true);

        // Body.
        ctl.pointer_down(Point::new(100.0, 200.0), PointerButton::Primary, &vp, &scene);
        assert_eq!(ctl.mode(), DragMode::MovingItem);
        ctl.pointer_move(Point::new(110.0, 200.0), &mut vp);
        let Some(Intent::Mutate(Mutation::Update(moved))) =
            ctl.pointer_move(Point::new(125.0, 200.0), &mut vp)
        else {
            panic!("expected an update");
        };
        assert_eq!((moved.start_year, moved.end_year), (25.0, 225.0));
        assert_eq!(ctl.pointer_up(Point::new(125.0, 200.0), &mut vp, &scene), None);

        // Right handle; resizing may invert the interval.
        ctl.pointer_down(Point::new(195.0, 200.0), PointerButton::Primary, &vp, &scene);
        assert_eq!(ctl.mode(), DragMode::ResizingRight);
        let Some(Intent::Mutate(Mutation::Update(resized))) =
            ctl.pointer_move(Point::new(-105.0, 200.0), &mut vp)
        else {
            panic!("expected an update");
        };
        assert_eq!((resized.start_year, resized.end_year), (0.0, -100.0));
        ctl.pointer_up(Point::new(-105.0, 200.0), &mut vp, &scene);

        // Left handle.
        ctl.pointer_down(Point::new(5.0, 200.0), PointerButton::Primary, &vp, &scene);
        assert_eq!(ctl.mode(), DragMode::ResizingLeft);
    }

    #[test]
    fn secondary_press_opens_menu_and_primary_closes_it() {
        let entities = entities();
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);
        let vp = viewport();
        let mut ctl = InteractionController::default();

        let intent = ctl.pointer_down(Point::new(-40.0, 20.0), PointerButton::Secondary, &vp, &scene);
        assert_eq!(
            intent,
            Some(Intent::ContextMenuOpened {
                anchor: Point::new(-40.0, 20.0),
                year: -40.0
            })
        );
        ctl.menu_mut().unwrap().set_query("eg");
        let results = ctl.search_results(&scene);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "egypt");

        // Creation needs edit mode.
        assert_eq!(ctl.create_at_menu(), None);
        assert!(ctl.menu().is_some());

        let intent = ctl.pointer_down(Point::new(900.0, 500.0), PointerButton::Primary, &vp, &scene);
        assert_eq!(intent, Some(Intent::ContextMenuClosed));
        assert!(ctl.menu().is_none());
    }

    #[test]
    fn menu_creation_in_edit_mode() {
        let entities = entities();
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);
        let vp = viewport();
        let mut ctl = InteractionController::default();
        ctl.set_edit_mode(true);

        ctl.pointer_down(Point::new(300.0, 20.0), PointerButton::Secondary, &vp, &scene);
        assert_eq!(
            ctl.create_at_menu(),
            Some(Intent::Mutate(Mutation::Create { year: 300.0 }))
        );
        assert!(ctl.menu().is_none());

        ctl.pointer_down(Point::new(300.0, 20.0), PointerButton::Secondary, &vp, &scene);
        ctl.menu_mut().unwrap().set_topic("   ");
        assert_eq!(ctl.create_from_topic(), None);
        ctl.menu_mut().unwrap().set_topic("  Hittites ");
        assert_eq!(
            ctl.create_from_topic(),
            Some(Intent::Mutate(Mutation::CreateFromTopic {
                topic: String::from("Hittites"),
                year: 300.0
            }))
        );
    }

    #[test]
    fn delete_requires_edit_mode() {
        let mut ctl = InteractionController::default();
        assert_eq!(ctl.request_delete("rome"), None);
        ctl.set_edit_mode(true);
        assert_eq!(
            ctl.request_delete("rome"),
            Some(Intent::Mutate(Mutation::Delete(EntityId::from("rome"))))
        );
    }

    #[test]
    fn cursor_hints_follow_mode_and_zone() {
        let entities = entities();
        let layout = calculate_layout(&entities, &LayoutConfig::default());
        let scene = Scene::new(&entities, &layout, Size::new(1000.0, 600.0), Language::En);
        let vp = viewport();
        let mut ctl = InteractionController::default();

        let card = Point::new(100.0, 200.0);
        let empty = Point::new(600.0, 500.0);
        assert_eq!(ctl.cursor_hint(card, &vp, &scene), CursorHint::Pointer);
        assert_eq!(ctl.cursor_hint(empty, &vp, &scene), CursorHint::Grab);

        ctl.set_edit_mode(true);
        assert_eq!(ctl.cursor_hint(card, &vp, &scene), CursorHint::Move);
        assert_eq!(
            ctl.cursor_hint(Point::new(2.0, 200.0), &vp, &scene),
            CursorHint::ResizeLeft
        );

        ctl.pointer_down(empty, PointerButton::Primary, &vp, &scene);
        assert_eq!(ctl.cursor_hint(card, &vp, &scene), CursorHint::Grabbing);
    }
}
