//! Page message types.
//!
//! All user events are represented as messages in the Elm architecture style
//! and routed through [`crate::app::PortfolioApp::update`].

use folio_ui::{Key, PointerTarget};

use crate::contact::ContactAction;

/// Messages that can be sent to update page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Project cards
    /// A project card was activated
    OpenProject(String),

    // Modal
    /// Close button activated
    CloseModal,
    /// Click landed on the modal root
    ModalClicked(PointerTarget),

    // Carousel
    /// Previous control activated
    PreviousImage,
    /// Next control activated
    NextImage,
    /// Thumbnail activated
    JumpToImage(usize),

    // Keyboard
    /// Key pressed anywhere on the page
    KeyPressed(Key),

    // Navigation
    /// Nav link to an in-page section activated
    NavigateTo(String),

    // Contact
    /// Contact button activated
    Contact(ContactAction),
}
