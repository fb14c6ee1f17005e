//! DOM event listeners.
//!
//! Listeners translate browser events into [`Message`]s, hand them to
//! [`dispatch`] and carry out whatever [`Update`] comes back. Clicks use a
//! single delegated listener on the document so markup rendered into the
//! modal later needs no extra wiring.

use folio_ui::{Key, PointerTarget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use super::{dispatch, error::DomError, window};
use crate::app::Update;
use crate::config::RevealOptions;
use crate::constants::{classes, data_attrs, ids};
use crate::contact::{ContactAction, PageEffect};
use crate::message::Message;
use crate::page::{self, RevealStyle};

/// Attribute on elements that close the modal (e.g. the × button).
const MODAL_CLOSE_ATTR: &str = "data-modal-close";

/// Install the delegated document click listener.
pub fn install_click_router(window: &Window, document: &Document) -> Result<(), DomError> {
    let window = window.clone();
    let document_inner = document.clone();
    let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some(message) = message_for_click(&target) else {
            return;
        };
        let update = dispatch(message);
        finish(&window, &document_inner, &event, update);
    });
    document.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget(); // Leak the closure to keep it alive
    Ok(())
}

/// Map a clicked element to a message, innermost control first.
fn message_for_click(target: &Element) -> Option<Message> {
    if target.id() == ids::MODAL {
        return Some(Message::ModalClicked(PointerTarget::Backdrop));
    }

    if closest(target, &format!("[{}]", MODAL_CLOSE_ATTR)).is_some() {
        return Some(Message::CloseModal);
    }

    if let Some(control) = closest(target, &format!("[{}]", data_attrs::CAROUSEL)) {
        return match control.get_attribute(data_attrs::CAROUSEL).as_deref() {
            Some("prev") => Some(Message::PreviousImage),
            Some("next") => Some(Message::NextImage),
            other => {
                log::debug!("Unknown carousel control {:?}", other);
                None
            }
        };
    }

    if let Some(thumb) = closest(target, &format!(".{}", classes::CAROUSEL_THUMBNAIL)) {
        let index = thumb
            .get_attribute(data_attrs::INDEX)
            .and_then(|value| value.parse::<usize>().ok())?;
        return Some(Message::JumpToImage(index));
    }

    if let Some(card) = closest(target, &format!("[{}]", data_attrs::PROJECT)) {
        return card
            .get_attribute(data_attrs::PROJECT)
            .map(Message::OpenProject);
    }

    if let Some(button) = closest(target, &format!("[{}]", data_attrs::CONTACT)) {
        return button
            .get_attribute(data_attrs::CONTACT)
            .and_then(|value| ContactAction::from_attr(&value))
            .map(Message::Contact);
    }

    if let Some(link) = closest(target, "a.nav-link") {
        let href = link.get_attribute("href")?;
        return page::section_target(&href).map(|id| Message::NavigateTo(id.to_string()));
    }

    if closest(target, &format!("#{}", ids::MODAL)).is_some() {
        return Some(Message::ModalClicked(PointerTarget::Panel));
    }

    None
}

fn closest(target: &Element, selector: &str) -> Option<Element> {
    target.closest(selector).ok().flatten()
}

/// Install the global keyboard listener.
pub fn install_keyboard(document: &Document) -> Result<(), DomError> {
    let document_inner = document.clone();
    let onkeydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key = Key::from_dom_key(&event.key());
        let update = dispatch(Message::KeyPressed(key));
        if let Ok(window) = window() {
            finish(&window, &document_inner, &event, update);
        }
    });
    document.add_event_listener_with_callback("keydown", onkeydown.as_ref().unchecked_ref())?;
    onkeydown.forget(); // Leak the closure to keep it alive
    Ok(())
}

/// Act on the result of a dispatched message.
fn finish(window: &Window, document: &Document, event: &Event, update: Update) {
    match update {
        Update::Ignored => {}
        Update::Handled => event.prevent_default(),
        Update::Effect(effect) => {
            event.prevent_default();
            if let Err(e) = perform(window, document, effect) {
                log::warn!("Page effect failed: {}", e);
            }
        }
    }
}

fn perform(window: &Window, document: &Document, effect: PageEffect) -> Result<(), DomError> {
    match effect {
        PageEffect::OpenUrl(url) => {
            window.open_with_url(&url)?;
        }
        PageEffect::Notice(text) => window.alert_with_message(&text)?,
        PageEffect::ScrollIntoView(id) => match document.get_element_by_id(&id) {
            Some(section) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => log::debug!("No section #{} to scroll to", id),
        },
    }
    Ok(())
}

/// Swap broken images for the inline placeholder.
///
/// `error` does not bubble, so this listens in the capture phase to also
/// cover images rendered into the modal after startup.
pub fn install_image_fallback(document: &Document) -> Result<(), DomError> {
    let onerror = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(image) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };
        if let Some((src, alt)) = page::image_fallback(&image.src()) {
            log::warn!("🖼️  Image failed to load: {}", image.src());
            image.set_src(src);
            image.set_alt(alt);
        }
    });
    document.add_event_listener_with_callback_and_bool(
        "error",
        onerror.as_ref().unchecked_ref(),
        true,
    )?;
    onerror.forget(); // Leak the closure to keep it alive
    Ok(())
}

/// Toggle the header shadow as the page scrolls.
pub fn install_header_scroll(
    window: &Window,
    document: &Document,
    shadow: String,
) -> Result<(), DomError> {
    let Some(header) = document
        .query_selector(".header")?
        .and_then(|h| h.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No .header element, skipping scroll shadow");
        return Ok(());
    };

    let window_inner = window.clone();
    let onscroll = Closure::<dyn FnMut()>::new(move || {
        let scroll_top = window_inner.scroll_y().unwrap_or(0.0);
        let value = page::header_shadow(scroll_top, &shadow);
        if let Err(e) = header.style().set_property("box-shadow", value) {
            log::warn!("Failed to set header shadow: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("scroll", onscroll.as_ref().unchecked_ref())?;
    onscroll.forget(); // Leak the closure to keep it alive
    Ok(())
}

/// Attach the reveal observer after a short delay so late markup is included.
pub fn schedule_reveal(window: &Window, options: RevealOptions) -> Result<(), DomError> {
    let delay = options.start_delay_ms;
    let start = Closure::once(move || {
        if let Err(e) = install_reveal(&options) {
            log::warn!("Scroll animations unavailable: {}", e);
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        start.as_ref().unchecked_ref(),
        delay,
    )?;
    start.forget(); // Leak the closure to keep it alive
    Ok(())
}

fn install_reveal(options: &RevealOptions) -> Result<(), DomError> {
    let document = window()?.document().ok_or(DomError::NoDocument)?;

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            let visible = RevealStyle::visible();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(card) = entry.target().dyn_into::<HtmlElement>() {
                    apply_reveal_style(&card, &visible);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    on_intersect.forget(); // Leak the closure to keep it alive

    let hidden = RevealStyle::hidden(options);
    let cards = document.query_selector_all(&options.selector)?;
    for i in 0..cards.length() {
        let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        apply_reveal_style(&card, &hidden);
        observer.observe(&card);
    }
    log::debug!("✨ Observing {} cards for reveal", cards.length());
    Ok(())
}

fn apply_reveal_style(element: &HtmlElement, style: &RevealStyle) {
    let css = element.style();
    let mut result = css
        .set_property("opacity", style.opacity)
        .and_then(|_| css.set_property("transform", &style.transform));
    if let Some(transition) = &style.transition {
        result = result.and_then(|_| css.set_property("transition", transition));
    }
    if let Err(e) = result {
        log::warn!("Failed to apply reveal style: {:?}", e);
    }
}

/// Swap the body `loading` class for `loaded` once the window has loaded.
pub fn install_loaded_marker(window: &Window, document: &Document) -> Result<(), DomError> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let mark_loaded = move || {
        let list = body.class_list();
        if let Err(e) = list
            .remove_1(classes::LOADING)
            .and_then(|_| list.add_1(classes::LOADED))
        {
            log::warn!("Failed to mark page loaded: {:?}", e);
        }
    };

    if document.ready_state() == web_sys::DocumentReadyState::Complete {
        mark_loaded();
        return Ok(());
    }

    let onload = Closure::once(mark_loaded);
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget(); // Leak the closure to keep it alive
    Ok(())
}
