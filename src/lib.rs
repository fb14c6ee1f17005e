//! Folio - portfolio page behaviour
//!
//! Project showcase modal with an image carousel, plus the small page
//! behaviours around it (section scrolling, reveal animations, contact
//! buttons). The state machine and rendering are plain Rust and run on any
//! target; the browser binding is compiled for WASM only.

pub mod app;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod contact;
pub mod controller;
pub mod keybindings;
pub mod message;
pub mod page;
pub mod render;

pub use app::{PortfolioApp, Update};
pub use catalog::{CatalogError, ProjectCatalog, ProjectMeta, ProjectRecord};
pub use config::{ConfigError, SiteConfig};
pub use controller::{ModalController, ModalSurface, ScrollLock};
pub use render::{render, CarouselPatch, ModalView};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
