//! Pure rendering of project records into modal markup.
//!
//! Nothing here touches the DOM. [`render`] produces the full modal view for a
//! freshly opened project and [`carousel_patch`] the three values that change
//! when the user pages through images.

use folio_ui::prelude::*;

use crate::catalog::ProjectRecord;
use crate::constants::{classes, data_attrs, headings, ids};
use crate::keybindings::KeyBindings;

/// Everything the surface needs to show an opened project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// Modal title text
    pub title: String,
    /// Metadata badges, Role / Platform / Tools
    pub meta: Fragment,
    /// Carousel, overview, features and challenges as one unit
    pub body: Fragment,
}

impl ModalView {
    /// Text of each metadata badge in display order.
    pub fn badge_labels(&self) -> Vec<String> {
        self.meta.elements().map(Element::text_content).collect()
    }
}

/// Incremental carousel update after navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselPatch {
    pub image_src: String,
    pub image_alt: String,
    pub counter: String,
    /// Index of the single thumbnail carrying the active marker
    pub active_thumbnail: usize,
}

/// Render the modal for `record` showing image `index`.
///
/// An index past the end is clamped to the last image. Control titles and the
/// navigation hint name the keys in `keys`.
pub fn render(record: &ProjectRecord, index: usize, keys: &KeyBindings) -> ModalView {
    let mut meta = Fragment::new();
    for label in record.meta.badges() {
        meta.push(badge(label));
    }

    let mut body = Fragment::new();
    let carousel = carousel_at(record.images.len(), index);
    if let Some(region) = render_carousel(&record.images, &record.title, &carousel, keys) {
        body.push(region);
    }

    let mut overview = div().class(classes::PROJECT_OVERVIEW).child(
        div()
            .class(classes::PROJECT_OVERVIEW_SECTION)
            .child(h3(headings::OVERVIEW))
            .child(p(record.description.as_str())),
    );
    if let Some(features) = &record.features {
        overview = overview.child(
            div()
                .class(classes::PROJECT_OVERVIEW_SECTION)
                .class(classes::PROJECT_FEATURES)
                .child(h3(headings::FEATURES))
                .child(ul().children(features.iter().map(|f| li(f.as_str())))),
        );
    }
    body.push(overview);

    if let Some(challenges) = &record.challenges {
        body.push(
            div()
                .class(classes::PROJECT_CHALLENGES)
                .child(h3(headings::CHALLENGES))
                .children(challenges.iter().map(|c| p(c.as_str()))),
        );
    }

    ModalView {
        title: record.title.clone(),
        meta,
        body,
    }
}

/// A secondary badge span.
pub fn badge(label: impl Into<String>) -> Element {
    span()
        .class(classes::BADGE)
        .class(classes::BADGE_SECONDARY)
        .text(label)
}

/// Carousel over `len` images positioned at `index`, clamped to the last one.
fn carousel_at(len: usize, index: usize) -> CarouselState {
    let mut carousel = CarouselState::new(len);
    carousel.jump_to(index.min(len.saturating_sub(1)));
    carousel
}

/// Render the carousel region, or `None` when there are no images.
pub fn render_carousel(
    images: &[String],
    title: &str,
    carousel: &CarouselState,
    keys: &KeyBindings,
) -> Option<Element> {
    let first = images.first()?;

    if !carousel.has_navigation() {
        return Some(
            div().class(classes::IMAGE_CAROUSEL).child(
                div().class(classes::CAROUSEL_CONTAINER).child(
                    img(first.as_str(), format!("{} screenshot", title))
                        .class(classes::CAROUSEL_MAIN_IMAGE),
                ),
            ),
        );
    }

    let index = carousel.index();
    let current = images.get(index).unwrap_or(first);

    let container = div()
        .class(classes::CAROUSEL_CONTAINER)
        .child(
            img(current.as_str(), main_image_alt(title, index))
                .id(ids::CAROUSEL_MAIN_IMAGE)
                .class(classes::CAROUSEL_MAIN_IMAGE),
        )
        .child(nav_button(
            classes::CAROUSEL_PREV,
            "prev",
            "‹",
            &format!("Previous image ({})", key_hint(keys.previous_image)),
        ))
        .child(nav_button(
            classes::CAROUSEL_NEXT,
            "next",
            "›",
            &format!("Next image ({})", key_hint(keys.next_image)),
        ))
        .child(
            div()
                .class(classes::CAROUSEL_COUNTER)
                .id(ids::CAROUSEL_COUNTER)
                .text(carousel.position_label()),
        );

    let thumbnails = div()
        .class(classes::CAROUSEL_THUMBNAILS)
        .id(ids::CAROUSEL_THUMBNAILS)
        .children(images.iter().enumerate().map(|(i, src)| {
            button()
                .class(classes::CAROUSEL_THUMBNAIL)
                .class_if(classes::ACTIVE, i == index)
                .attr(data_attrs::INDEX, i.to_string())
                .child(img(src.as_str(), format!("{} thumbnail {}", title, i + 1)))
        }));

    Some(
        div()
            .class(classes::IMAGE_CAROUSEL)
            .child(container)
            .child(thumbnails)
            .child(div().class(classes::CAROUSEL_HINT).text(navigation_hint(keys))),
    )
}

fn nav_button(class: &str, action: &str, glyph: &str, title: &str) -> Element {
    button()
        .class(classes::CAROUSEL_NAV)
        .class(class)
        .attr(data_attrs::CAROUSEL, action)
        .attr("title", title)
        .text(glyph)
}

fn is_arrow(key: Key) -> bool {
    matches!(
        key,
        Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown
    )
}

/// Tooltip suffix naming a key, e.g. `"← Arrow key"` or `"H key"`.
fn key_hint(key: Key) -> String {
    if is_arrow(key) {
        format!("{} Arrow key", key.label())
    } else {
        format!("{} key", key.label())
    }
}

/// Hint shown under the thumbnails, e.g. `"Use ← → arrow keys to navigate"`.
fn navigation_hint(keys: &KeyBindings) -> String {
    let kind = if is_arrow(keys.previous_image) && is_arrow(keys.next_image) {
        "arrow keys"
    } else {
        "keys"
    };
    format!(
        "Use {} {} {} to navigate",
        keys.previous_image.label(),
        keys.next_image.label(),
        kind
    )
}

fn main_image_alt(title: &str, index: usize) -> String {
    format!("{} screenshot {}", title, index + 1)
}

/// The update for a multi-image carousel, or `None` when there are no
/// navigation controls to update (fewer than two images).
pub fn carousel_patch(record: &ProjectRecord, index: usize) -> Option<CarouselPatch> {
    let carousel = carousel_at(record.images.len(), index);
    if !carousel.has_navigation() {
        return None;
    }
    let index = carousel.index();
    Some(CarouselPatch {
        image_src: record.images.get(index)?.clone(),
        image_alt: main_image_alt(&record.title, index),
        counter: carousel.position_label(),
        active_thumbnail: index,
    })
}
