//! WASM entry point and host document wiring.
//!
//! The page owns exactly one [`PortfolioApp`], kept in a thread-local and
//! borrowed for the duration of a single event.

mod error;
mod events;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState, Window};

use crate::app::{PortfolioApp, Update};
use crate::catalog::ProjectCatalog;
use crate::config::SiteConfig;
use crate::constants::ids;
use crate::message::Message;

pub use error::DomError;
pub use surface::DomSurface;

thread_local! {
    static APP: RefCell<Option<PortfolioApp<DomSurface>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::error_1(&format!("Failed to initialize logging: {}", e).into());
    }

    if let Err(e) = boot() {
        web_sys::console::error_1(&format!("Portfolio failed to start: {}", e).into());
    }
}

/// Open the modal for `key` from page script (e.g. inline handlers).
#[wasm_bindgen(js_name = openProjectModal)]
pub fn open_project_modal(key: &str) {
    dispatch(Message::OpenProject(key.to_string()));
}

/// Close the modal from page script.
#[wasm_bindgen(js_name = closeProjectModal)]
pub fn close_project_modal() {
    dispatch(Message::CloseModal);
}

fn boot() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    if let Some(body) = document.body() {
        body.class_list().add_1(crate::constants::classes::LOADING)?;
    }

    if document.ready_state() == DocumentReadyState::Loading {
        let on_ready = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = init() {
                log::error!("Portfolio initialization failed: {}", e);
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget(); // Leak the closure to keep it alive
        Ok(())
    } else {
        init()
    }
}

fn init() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let config = load_config(&document);
    log::set_max_level(config.log_level.to_level_filter());
    let catalog = load_catalog(&document);

    let surface = Rc::new(DomSurface::from_document(document.clone())?);
    APP.with(|app| {
        *app.borrow_mut() = Some(PortfolioApp::new(config.clone(), catalog, surface));
    });

    events::install_click_router(&window, &document)?;
    events::install_keyboard(&document)?;
    events::install_image_fallback(&document)?;
    events::install_header_scroll(&window, &document, config.header_shadow.clone())?;
    events::schedule_reveal(&window, config.reveal.clone())?;
    events::install_loaded_marker(&window, &document)?;

    log::info!("🎨 Portfolio loaded successfully!");
    log::info!("💼 Built for {} - {}", config.owner, config.tagline);
    Ok(())
}

/// Read the embedded site configuration, falling back to defaults.
fn load_config(document: &Document) -> SiteConfig {
    let Some(json) = embedded_json(document, ids::SITE_CONFIG) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid site configuration: {}", e);
            SiteConfig::default()
        }
    }
}

/// Read an embedded project catalog, falling back to the built-in one.
fn load_catalog(document: &Document) -> ProjectCatalog {
    let Some(json) = embedded_json(document, ids::PROJECT_CATALOG) else {
        return ProjectCatalog::builtin();
    };
    ProjectCatalog::from_json(&json).unwrap_or_else(|e| {
        log::warn!("Ignoring invalid embedded catalog: {}", e);
        ProjectCatalog::builtin()
    })
}

fn embedded_json(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Route a message to the page state.
pub(crate) fn dispatch(message: Message) -> Update {
    APP.with(|app| match app.borrow_mut().as_mut() {
        Some(app) => app.update(message),
        None => {
            log::debug!("Portfolio not initialized, dropping {:?}", message);
            Update::Ignored
        }
    })
}

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}
