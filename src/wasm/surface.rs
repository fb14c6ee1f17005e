//! Host document implementation of [`ModalSurface`].

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use super::error::DomError;
use crate::constants::{classes, ids};
use crate::controller::ModalSurface;
use crate::render::{CarouselPatch, ModalView};

/// The modal regions of the page.
pub struct DomSurface {
    document: Document,
    modal: HtmlElement,
    title: Element,
    meta: Element,
    body: Element,
    page_body: HtmlElement,
}

impl DomSurface {
    /// Look up the modal regions. Fails if the page lacks any of them.
    pub fn from_document(document: Document) -> Result<Self, DomError> {
        let modal = element(&document, ids::MODAL)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::WrongElementType {
                id: ids::MODAL.to_string(),
                expected: "HtmlElement",
            })?;
        let title = element(&document, ids::MODAL_TITLE)?;
        let meta = element(&document, ids::MODAL_META)?;
        let body = element(&document, ids::MODAL_BODY)?;
        let page_body = document.body().ok_or_else(|| DomError::missing("body"))?;

        Ok(Self {
            document,
            modal,
            title,
            meta,
            body,
            page_body,
        })
    }

    fn set_modal_display(&self, display: &str) {
        if let Err(e) = self.modal.style().set_property("display", display) {
            log::warn!("Failed to set modal display to {}: {:?}", display, e);
        }
    }

    fn main_image(&self) -> Option<HtmlImageElement> {
        self.document
            .get_element_by_id(ids::CAROUSEL_MAIN_IMAGE)?
            .dyn_into::<HtmlImageElement>()
            .ok()
    }
}

fn element(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::missing(id))
}

impl ModalSurface for DomSurface {
    fn show_modal(&self, view: &ModalView) {
        self.title.set_text_content(Some(&view.title));
        self.meta.set_inner_html(&view.meta.to_html());
        self.body.set_inner_html(&view.body.to_html());
        self.set_modal_display("flex");
    }

    fn hide_modal(&self) {
        self.set_modal_display("none");
    }

    fn patch_carousel(&self, patch: &CarouselPatch) {
        if let Some(image) = self.main_image() {
            image.set_src(&patch.image_src);
            image.set_alt(&patch.image_alt);
        }

        if let Some(counter) = self.document.get_element_by_id(ids::CAROUSEL_COUNTER) {
            counter.set_text_content(Some(&patch.counter));
        }

        let selector = format!(".{}", classes::CAROUSEL_THUMBNAIL);
        let thumbnails = match self.body.query_selector_all(&selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Failed to query thumbnails: {:?}", e);
                return;
            }
        };
        for i in 0..thumbnails.length() {
            let Some(thumb) = thumbnails.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let active = i as usize == patch.active_thumbnail;
            if let Err(e) = thumb.class_list().toggle_with_force(classes::ACTIVE, active) {
                log::warn!("Failed to update thumbnail {}: {:?}", i, e);
            }
        }
    }

    fn set_background_scroll(&self, enabled: bool) {
        let overflow = if enabled { "" } else { "hidden" };
        if let Err(e) = self.page_body.style().set_property("overflow", overflow) {
            log::warn!("Failed to set body overflow: {:?}", e);
        }
    }
}
