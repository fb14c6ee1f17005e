//! Global constants for the portfolio page

/// Element ids of the host document regions the modal writes into.
pub mod ids {
    /// Modal root, toggled between hidden and flex display
    pub const MODAL: &str = "projectModal";
    /// Modal title text
    pub const MODAL_TITLE: &str = "modalTitle";
    /// Metadata badge list
    pub const MODAL_META: &str = "modalMeta";
    /// Body content region
    pub const MODAL_BODY: &str = "modalBody";
    /// Main carousel image (multi-image carousels only)
    pub const CAROUSEL_MAIN_IMAGE: &str = "carouselMainImage";
    /// Position counter
    pub const CAROUSEL_COUNTER: &str = "carouselCounter";
    /// Thumbnail strip
    pub const CAROUSEL_THUMBNAILS: &str = "carouselThumbnails";
    /// Optional embedded JSON site configuration
    pub const SITE_CONFIG: &str = "folio-config";
    /// Optional embedded JSON project catalog
    pub const PROJECT_CATALOG: &str = "folio-projects";
}

/// Class names used by rendered markup and page selectors.
pub mod classes {
    pub const BADGE: &str = "badge";
    pub const BADGE_SECONDARY: &str = "badge-secondary";
    pub const ACTIVE: &str = "active";

    pub const IMAGE_CAROUSEL: &str = "image-carousel";
    pub const CAROUSEL_CONTAINER: &str = "carousel-container";
    pub const CAROUSEL_MAIN_IMAGE: &str = "carousel-main-image";
    pub const CAROUSEL_NAV: &str = "carousel-nav";
    pub const CAROUSEL_PREV: &str = "carousel-prev";
    pub const CAROUSEL_NEXT: &str = "carousel-next";
    pub const CAROUSEL_COUNTER: &str = "carousel-counter";
    pub const CAROUSEL_THUMBNAILS: &str = "carousel-thumbnails";
    pub const CAROUSEL_THUMBNAIL: &str = "carousel-thumbnail";
    pub const CAROUSEL_HINT: &str = "carousel-hint";

    pub const PROJECT_OVERVIEW: &str = "project-overview";
    pub const PROJECT_OVERVIEW_SECTION: &str = "project-overview-section";
    pub const PROJECT_FEATURES: &str = "project-features";
    pub const PROJECT_CHALLENGES: &str = "project-challenges";

    /// Body class while the page is still loading
    pub const LOADING: &str = "loading";
    /// Body class once the window `load` event fired
    pub const LOADED: &str = "loaded";
}

/// Data attributes the page uses to route clicks.
pub mod data_attrs {
    /// Project card trigger, value is a catalog key
    pub const PROJECT: &str = "data-project";
    /// Carousel control, value is `prev` or `next`
    pub const CAROUSEL: &str = "data-carousel";
    /// Thumbnail index
    pub const INDEX: &str = "data-index";
    /// Contact action, value is `email`, `linkedin` or `resume`
    pub const CONTACT: &str = "data-contact";
}

/// Section headings in the modal body.
pub mod headings {
    pub const OVERVIEW: &str = "Project Overview";
    pub const FEATURES: &str = "Key Features";
    pub const CHALLENGES: &str = "Design Challenges & Solutions";
}

/// Inline SVG shown when an image fails to load.
pub const IMAGE_PLACEHOLDER_SRC: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNTAwIiBoZWlnaHQ9IjMwMCIgdmlld0JveD0iMCAwIDUwMCAzMDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSI1MDAiIGhlaWdodD0iMzAwIiBmaWxsPSIjRjNGM0Y1Ii8+CjxwYXRoIGQ9Ik0yNTAgMTUwTDIwMCAxMDBIMzAwTDI1MCAxNTBaIiBmaWxsPSIjRDFENU1COSIvPgo8L3N2Zz4K";

/// Caption for an image that failed to load.
pub const IMAGE_FAILED_ALT: &str = "Image failed to load";
