//! Contact buttons.
//!
//! Each action resolves to a page effect against the configured targets; the
//! display layer performs it.

use crate::config::ContactLinks;

/// A contact button on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    /// Open a pre-filled email compose window
    Email,
    /// Open the professional profile
    LinkedIn,
    /// Download the resume (or show the placeholder notice)
    Resume,
}

impl ContactAction {
    /// Parse a `data-contact` attribute value.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" | "mail" => Some(ContactAction::Email),
            "linkedin" | "profile" => Some(ContactAction::LinkedIn),
            "resume" | "cv" => Some(ContactAction::Resume),
            _ => None,
        }
    }
}

/// Something the page must do outside the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Open a URL in a new browsing context
    OpenUrl(String),
    /// Show a blocking notice
    Notice(String),
    /// Smooth-scroll the section with this id into view
    ScrollIntoView(String),
}

/// Resolve a contact action against the configured targets.
pub fn resolve(action: ContactAction, links: &ContactLinks) -> PageEffect {
    match action {
        ContactAction::Email => {
            PageEffect::OpenUrl(format!("{}{}", links.compose_url_prefix, links.email))
        }
        ContactAction::LinkedIn => PageEffect::OpenUrl(links.profile_url.clone()),
        ContactAction::Resume => match &links.resume_url {
            Some(url) => PageEffect::OpenUrl(url.clone()),
            None => PageEffect::Notice(links.resume_notice.clone()),
        },
    }
}
