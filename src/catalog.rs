//! Project catalog.
//!
//! An immutable mapping from catalog key to the record shown in the project
//! modal. The built-in table is constructed once at startup; a page may also
//! embed its own table as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The three metadata badges shown under the modal title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub role: String,
    pub platform: String,
    pub tools: String,
}

impl ProjectMeta {
    pub fn new(role: &str, platform: &str, tools: &str) -> Self {
        Self {
            role: role.to_string(),
            platform: platform.to_string(),
            tools: tools.to_string(),
        }
    }

    /// Badge labels in display order: Role, Platform, Tools.
    pub fn badges(&self) -> [String; 3] {
        [
            format!("Role: {}", self.role),
            format!("Platform: {}", self.platform),
            format!("Tools: {}", self.tools),
        ]
    }
}

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub meta: ProjectMeta,
    pub description: String,
    /// Image paths or URIs in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Key feature bullet points; `None` omits the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Design challenges, one paragraph each; `None` omits the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
}

impl ProjectRecord {
    pub fn new(title: &str, meta: ProjectMeta, description: &str) -> Self {
        Self {
            title: title.to_string(),
            meta,
            description: description.to_string(),
            images: Vec::new(),
            features: None,
            challenges: None,
        }
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = to_strings(images);
        self
    }

    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = Some(to_strings(features));
        self
    }

    pub fn with_challenges(mut self, challenges: &[&str]) -> Self {
        self.challenges = Some(to_strings(challenges));
        self
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Errors that can occur when loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// JSON parsing error
    #[error("Failed to parse project catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Read-only project lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: BTreeMap<String, ProjectRecord>,
}

impl ProjectCatalog {
    /// Build a catalog from `(key, record)` pairs. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ProjectRecord)>,
    {
        Self {
            projects: entries.into_iter().collect(),
        }
    }

    /// Parse a catalog from a JSON object keyed by catalog key.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        log::info!("📚 Loaded project catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// Look up a project. Unknown keys are a normal outcome.
    pub fn lookup(&self, key: &str) -> Option<&ProjectRecord> {
        self.projects.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.projects.contains_key(key)
    }

    /// Catalog keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// The projects showcased on the portfolio page.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("ems".to_string(), ems()),
            ("thesis".to_string(), thesis()),
            ("manual".to_string(), manual()),
            ("spotify".to_string(), spotify()),
        ])
    }
}

fn ems() -> ProjectRecord {
    ProjectRecord::new(
        "Employee Management System (OJT)",
        ProjectMeta::new("UI Designer", "Web & Mobile", "Figma, HTML/CSS"),
        "Designed interface screens for employee records, attendance monitoring, and report generation. Focused on clarity, readable data tables, and responsive behavior for small screens. Collaborated with developers to ensure designs were technically feasible.",
    )
    .with_images(&[
        "images/Login.png",
        "images/Department Dashboard.png",
        "images/Admin Employee Management.png",
        "images/Admin Position Management.png",
        "images/Frame 68.png",
        "images/Android Compact - 2.png",
    ])
    .with_features(&[
        "Clean employee database interface",
        "Attendance tracking dashboard",
        "Report generation system",
        "Mobile-responsive design",
        "Role-based access controls",
    ])
    .with_challenges(&[
        "Designed data-heavy tables to be scannable and not overwhelming for HR staff.",
        "Created mobile layouts that maintained functionality while fitting smaller screens.",
        "Balanced feature accessibility with a clean, professional appearance.",
    ])
}

fn thesis() -> ProjectRecord {
    ProjectRecord::new(
        "Cemetery Information System (Thesis)",
        ProjectMeta::new("UI/UX Designer", "Web", "Figma"),
        "Designed a clean and responsive website layout with dedicated sections for the homepage, about page, and contact page. Focused on presenting information in a clear structure with consistent styling and easy navigation for different users.",
    )
    .with_images(&[
        "images/Hero Section p1.png",
        "images/About page.png",
        "images/Contact page.png",
    ])
    .with_features(&[
        "Hero section with introductory content",
        "About page highlighting background and details",
        "Contact page with form and information",
        "Consistent typography and color scheme",
    ])
    .with_challenges(&[
        "Balanced visual hierarchy to keep text-heavy sections easy to read.",
        "Ensured clear sectioning (Home, About, Contact) for intuitive navigation.",
        "Maintained a professional appearance while keeping the design simple and functional.",
    ])
}

fn manual() -> ProjectRecord {
    ProjectRecord::new(
        "User Manual (Thesis Documentation)",
        ProjectMeta::new("Documentation Designer", "Book/Print", "Figma"),
        "Designed and structured the user manual for the Cemetery Information System, ensuring clear instructions and organized content flow. Focused on making the manual user-friendly for both administrators and visitors, with layouts that support readability in print and digital formats.",
    )
    .with_images(&[
        "images/Screenshot 2025-09-19 233450.png",
        "images/Screenshot 2025-09-19 233849.png",
        "images/Screenshot 2025-09-19 233901.png",
    ])
    .with_features(&[
        "Step-by-step instructions for system navigation",
        "Visual aids and annotated screenshots",
        "Clear typography and layout for readability",
        "Sections divided by user role",
        "Printable and digital-friendly format",
    ])
    .with_challenges(&[
        "Made technical instructions easy to understand for non-technical users.",
        "Kept a long document readable with consistent hierarchy and structure.",
        "Balanced the layout for both digital PDF and printed versions.",
    ])
}

fn spotify() -> ProjectRecord {
    ProjectRecord::new(
        "Spotify Landing Page Design",
        ProjectMeta::new("UI/UX Practice", "Web", "Figma"),
        "Recreated a Spotify-inspired interface to practice UI design fundamentals and consistency. Focused on replicating the structure of Spotify’s music library, including playlists, artists, and the player section, while experimenting with custom colors and styling for a personalized look.",
    )
    .with_images(&["images/Spotify landing page.png"])
    .with_features(&[
        "Sidebar navigation for playlists, artists, and podcasts",
        "Main content area with “Made For You,” “Recently Played,” and curated sections",
        "Music player controls with progress bar",
        "Custom color scheme to differentiate from Spotify’s green branding",
        "Emphasis on spacing, alignment, and component consistency",
    ])
    .with_challenges(&[
        "Practiced recreating a complex UI while maintaining pixel alignment and hierarchy.",
        "Adjusted the color scheme to ensure readability against dark backgrounds.",
        "Focused on consistency of icons, typography, and spacing to mimic a professional product.",
    ])
}
