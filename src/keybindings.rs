//! Keybindings for the project modal.
//!
//! Keys only act while the modal is open; the controller checks its own
//! state before consulting this table.

use folio_ui::Key;
use serde::{Deserialize, Serialize};

/// Something a key can do to the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Close the modal
    Close,
    /// Show the previous image
    PreviousImage,
    /// Show the next image
    NextImage,
}

/// Keybinding configuration for the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Hotkey to close the modal
    pub close: Key,
    /// Hotkey for the previous image
    pub previous_image: Key,
    /// Hotkey for the next image
    pub next_image: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            close: Key::Escape,
            previous_image: Key::ArrowLeft,
            next_image: Key::ArrowRight,
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the action that corresponds to a key press, if any.
    pub fn action_for_key(&self, key: Key) -> Option<ModalAction> {
        if key == self.close {
            Some(ModalAction::Close)
        } else if key == self.previous_image {
            Some(ModalAction::PreviousImage)
        } else if key == self.next_image {
            Some(ModalAction::NextImage)
        } else {
            None
        }
    }
}
