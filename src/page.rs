//! Page-level behaviours outside the modal: section scrolling, header shadow,
//! reveal animation styles and broken image fallback.

use crate::config::RevealOptions;
use crate::constants::{IMAGE_FAILED_ALT, IMAGE_PLACEHOLDER_SRC};

/// Section id a nav link points at (`"#about"` -> `"about"`).
///
/// Links to other pages or bare `#` are not section targets.
pub fn section_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Header box shadow for the current scroll position.
pub fn header_shadow(scroll_top: f64, shadow: &str) -> &str {
    if scroll_top > 0.0 {
        shadow
    } else {
        "none"
    }
}

/// Inline style values for a reveal-animated card.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<String>,
}

impl RevealStyle {
    /// Style applied before the card has been seen.
    pub fn hidden(options: &RevealOptions) -> Self {
        Self {
            opacity: "0",
            transform: format!("translateY({}px)", options.offset_px),
            transition: Some(format!(
                "opacity {0}s ease, transform {0}s ease",
                options.duration_secs
            )),
        }
    }

    /// Style applied once the card intersects the viewport.
    pub fn visible() -> Self {
        Self {
            opacity: "1",
            transform: "translateY(0)".to_string(),
            transition: None,
        }
    }
}

/// Replacement `(src, alt)` for an image that failed to load.
///
/// Returns `None` when the image already shows the placeholder, so a failing
/// placeholder can never loop.
pub fn image_fallback(current_src: &str) -> Option<(&'static str, &'static str)> {
    if current_src == IMAGE_PLACEHOLDER_SRC {
        None
    } else {
        Some((IMAGE_PLACEHOLDER_SRC, IMAGE_FAILED_ALT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_target() {
        assert_eq!(section_target("#projects"), Some("projects"));
        assert_eq!(section_target("#"), None);
        assert_eq!(section_target("/about.html"), None);
        assert_eq!(section_target(""), None);
    }

    #[test]
    fn test_header_shadow() {
        let shadow = "0 2px 20px rgba(0, 0, 0, 0.1)";
        assert_eq!(header_shadow(0.0, shadow), "none");
        assert_eq!(header_shadow(1.0, shadow), shadow);
    }

    #[test]
    fn test_reveal_styles() {
        let hidden = RevealStyle::hidden(&RevealOptions::default());
        assert_eq!(hidden.opacity, "0");
        assert_eq!(hidden.transform, "translateY(20px)");
        assert_eq!(
            hidden.transition.as_deref(),
            Some("opacity 0.6s ease, transform 0.6s ease")
        );
        let visible = RevealStyle::visible();
        assert_eq!(visible.opacity, "1");
        assert_eq!(visible.transform, "translateY(0)");
    }

    #[test]
    fn test_image_fallback_does_not_loop() {
        let (src, alt) = image_fallback("images/missing.png").expect("fallback");
        assert_eq!(src, IMAGE_PLACEHOLDER_SRC);
        assert_eq!(alt, IMAGE_FAILED_ALT);
        assert!(image_fallback(IMAGE_PLACEHOLDER_SRC).is_none());
    }
}
