//! Modal + image carousel controller.
//!
//! The controller owns the only mutable page state: which project is open and
//! which of its images is displayed. Every transition goes through the
//! methods here, which update the state first and then tell the
//! [`ModalSurface`] what to show.
//!
//! While a project is open the controller holds a [`ScrollLock`]. Dropping
//! the open state (on close, or when the controller itself is dropped)
//! releases it, so background scrolling is restored on every exit path.

mod scroll_lock;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use folio_ui::{CarouselState, Direction, Key, PointerTarget};

use crate::catalog::{ProjectCatalog, ProjectRecord};
use crate::keybindings::{KeyBindings, ModalAction};
use crate::render::{self, CarouselPatch, ModalView};

pub use scroll_lock::ScrollLock;

/// The display side of the modal: the host document, or a test double.
///
/// Methods take `&self` because the surface is shared with the scroll lock.
pub trait ModalSurface {
    /// Fill the modal regions from `view` and make the modal visible.
    fn show_modal(&self, view: &ModalView);
    /// Hide the modal.
    fn hide_modal(&self);
    /// Update main image, counter and active thumbnail after navigation.
    fn patch_carousel(&self, patch: &CarouselPatch);
    /// Enable or suppress scrolling of the page behind the modal.
    fn set_background_scroll(&self, enabled: bool);
}

/// State of one open/close cycle.
enum ModalState<S: ModalSurface> {
    Closed,
    Open(OpenProject<S>),
}

impl<S: ModalSurface> Default for ModalState<S> {
    fn default() -> Self {
        ModalState::Closed
    }
}

struct OpenProject<S: ModalSurface> {
    key: String,
    record: ProjectRecord,
    carousel: CarouselState,
    scroll_lock: ScrollLock<S>,
}

/// Opens, closes and navigates the project modal.
pub struct ModalController<S: ModalSurface> {
    catalog: ProjectCatalog,
    keybindings: KeyBindings,
    surface: Rc<S>,
    state: ModalState<S>,
}

impl<S: ModalSurface> ModalController<S> {
    /// Create a closed controller over `catalog` drawing onto `surface`.
    pub fn new(catalog: ProjectCatalog, surface: Rc<S>) -> Self {
        Self {
            catalog,
            keybindings: KeyBindings::default(),
            surface,
            state: ModalState::Closed,
        }
    }

    pub fn with_keybindings(mut self, keybindings: KeyBindings) -> Self {
        self.keybindings = keybindings;
        self
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Key of the open project.
    pub fn current_key(&self) -> Option<&str> {
        match &self.state {
            ModalState::Open(open) => Some(open.key.as_str()),
            ModalState::Closed => None,
        }
    }

    pub fn current_project(&self) -> Option<&ProjectRecord> {
        match &self.state {
            ModalState::Open(open) => Some(&open.record),
            ModalState::Closed => None,
        }
    }

    /// Index of the displayed image; `0` while closed.
    pub fn current_image_index(&self) -> usize {
        match &self.state {
            ModalState::Open(open) => open.carousel.index(),
            ModalState::Closed => 0,
        }
    }

    /// Open the modal for `key`.
    ///
    /// Unknown keys leave the state untouched and return `false`. Opening a
    /// different project while one is shown replaces it and keeps the
    /// existing scroll lock.
    pub fn open(&mut self, key: &str) -> bool {
        let Some(record) = self.catalog.lookup(key).cloned() else {
            log::debug!("🔍 Ignoring unknown project key '{}'", key);
            return false;
        };

        let scroll_lock = match std::mem::take(&mut self.state) {
            ModalState::Open(previous) => previous.scroll_lock,
            ModalState::Closed => ScrollLock::acquire(Rc::clone(&self.surface)),
        };

        let view = render::render(&record, 0, &self.keybindings);
        self.state = ModalState::Open(OpenProject {
            key: key.to_string(),
            carousel: CarouselState::new(record.images.len()),
            record,
            scroll_lock,
        });
        self.surface.show_modal(&view);
        log::info!("🗂️  Opened project '{}'", key);
        true
    }

    /// Close the modal. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            ModalState::Open(open) => {
                self.surface.hide_modal();
                // Dropping the open state releases the scroll lock.
                drop(open);
                log::info!("🗂️  Closed project modal");
                true
            }
            ModalState::Closed => false,
        }
    }

    /// Show the previous image, wrapping to the last one.
    pub fn previous_image(&mut self) -> bool {
        self.step(Direction::Previous)
    }

    /// Show the next image, wrapping to the first one.
    pub fn next_image(&mut self) -> bool {
        self.step(Direction::Next)
    }

    fn step(&mut self, direction: Direction) -> bool {
        let ModalState::Open(open) = &mut self.state else {
            return false;
        };
        if open.carousel.step(direction).is_none() {
            return false;
        }
        Self::refresh_carousel(&self.surface, open);
        true
    }

    /// Jump straight to image `index` (from a thumbnail).
    ///
    /// Out-of-range indices are rejected without changing state.
    pub fn jump_to_image(&mut self, index: usize) -> bool {
        let ModalState::Open(open) = &mut self.state else {
            return false;
        };
        if !open.carousel.jump_to(index) {
            log::warn!(
                "⚠️  Thumbnail index {} out of range for '{}' ({} images)",
                index,
                open.key,
                open.carousel.len()
            );
            return false;
        }
        Self::refresh_carousel(&self.surface, open);
        true
    }

    fn refresh_carousel(surface: &S, open: &OpenProject<S>) {
        // Single-image carousels have no counter or thumbnails to update.
        if let Some(patch) = render::carousel_patch(&open.record, open.carousel.index()) {
            log::debug!("🎠 {} image {}", open.key, patch.counter);
            surface.patch_carousel(&patch);
        }
    }

    /// Run a bound action.
    pub fn apply(&mut self, action: ModalAction) -> bool {
        match action {
            ModalAction::Close => self.close(),
            ModalAction::PreviousImage => self.previous_image(),
            ModalAction::NextImage => self.next_image(),
        }
    }

    /// Handle a key press. Returns `true` if the key was consumed.
    ///
    /// Bindings are inert while the modal is closed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match self.keybindings.action_for_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Handle a pointer activation on the modal. Only the backdrop closes it.
    pub fn handle_pointer(&mut self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::Backdrop => self.close(),
            PointerTarget::Panel => false,
        }
    }
}
