//! folio_ui - display-independent building blocks for the portfolio page
//!
//! This crate provides the input event vocabulary, a small structured markup
//! tree with HTML serialization, and stateful widget models (the carousel)
//! that can be driven and tested without a browser.

mod element;
mod event;
pub mod widgets;

pub use element::{
    button, div, escape_html, h3, img, li, p, span, text, ul, Element, Fragment, Node,
};
pub use event::{Key, PointerTarget};
pub use widgets::{CarouselState, Direction};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::{button, div, h3, img, li, p, span, text, ul, Element, Fragment, Node};
    pub use crate::event::{Key, PointerTarget};
    pub use crate::widgets::{CarouselState, Direction};
}
