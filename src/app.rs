//! Portfolio page application state.
//!
//! `PortfolioApp` is the single owner of page state. The display layer turns
//! DOM events into [`Message`]s and acts on the returned [`Update`].

use std::rc::Rc;

use crate::catalog::ProjectCatalog;
use crate::config::SiteConfig;
use crate::contact::{self, PageEffect};
use crate::controller::{ModalController, ModalSurface};
use crate::message::Message;

/// Result of handling one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Nothing happened; let the event take its default course
    Ignored,
    /// State changed; suppress the event's default action
    Handled,
    /// The page must perform an effect outside the modal
    Effect(PageEffect),
}

/// Main portfolio page state.
pub struct PortfolioApp<S: ModalSurface> {
    config: SiteConfig,
    modal: ModalController<S>,
}

impl<S: ModalSurface> PortfolioApp<S> {
    pub fn new(config: SiteConfig, catalog: ProjectCatalog, surface: Rc<S>) -> Self {
        let modal =
            ModalController::new(catalog, surface).with_keybindings(config.keybindings.clone());
        Self { config, modal }
    }

    pub fn modal(&self) -> &ModalController<S> {
        &self.modal
    }

    /// Handle a message and report what the page should do next.
    pub fn update(&mut self, message: Message) -> Update {
        log::trace!("📨 {:?}", message);
        let changed = match message {
            Message::OpenProject(key) => self.modal.open(&key),
            Message::CloseModal => self.modal.close(),
            Message::ModalClicked(target) => self.modal.handle_pointer(target),
            Message::PreviousImage => self.modal.previous_image(),
            Message::NextImage => self.modal.next_image(),
            Message::JumpToImage(index) => self.modal.jump_to_image(index),
            Message::KeyPressed(key) => self.modal.handle_key(key),
            Message::NavigateTo(section) => {
                log::debug!("🧭 Scrolling to section '{}'", section);
                return Update::Effect(PageEffect::ScrollIntoView(section));
            }
            Message::Contact(action) => {
                log::info!("✉️  Contact action {:?}", action);
                return Update::Effect(contact::resolve(action, &self.config.contact));
            }
        };
        if changed {
            Update::Handled
        } else {
            Update::Ignored
        }
    }
}
