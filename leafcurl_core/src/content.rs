//! Page content.
//!
//! Everything the landing page prints lives here. [`SiteContent::default`]
//! is the shipped page; `site.toml` may override any field.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOWNLOAD_URL: &str =
    "https://github.com/dlsathvik04/LCVD-flutterapp/releases/download/v0.4.0/app-release.apk";

/// Anchor ids of the page sections.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const SCREENSHOTS: &str = "screenshots";
    pub const FEATURES: &str = "features";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Body of a project card: prose or a bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBody {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailCard {
    pub title: String,
    pub body: CardBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub app_name: String,
    pub logo: String,
    pub tagline: String,
    pub download_url: String,
    pub download_label: String,
    /// QR code pointing at the download; `None` hides the image.
    pub qr_code: Option<String>,
    pub nav_links: Vec<NavLink>,
    pub about_title: String,
    pub project_cards: Vec<DetailCard>,
    pub screenshots_title: String,
    pub screenshots: Vec<String>,
    pub features_title: String,
    pub features: Vec<Feature>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            app_name: "Leaf Curl Virus Detection".into(),
            logo: "logo.png".into(),
            tagline: "Detect plant diseases instantly using AI-powered image analysis".into(),
            download_url: DEFAULT_DOWNLOAD_URL.into(),
            download_label: "Download App".into(),
            qr_code: Some("qr-code.png".into()),
            nav_links: vec![
                NavLink::new("Home", "#home"),
                NavLink::new("About", "#about"),
                NavLink::new("Screenshots", "#screenshots"),
                NavLink::new("Features", "#features"),
            ],
            about_title: "About The Project".into(),
            project_cards: vec![
                DetailCard {
                    title: "Overview".into(),
                    body: CardBody::Text(
                        "Our project aims to help farmers and agricultural experts detect Leaf \
                         Curl Virus disease in plants using artificial intelligence. By leveraging \
                         machine learning and computer vision, we've developed a mobile application \
                         that can analyze leaf images and provide instant disease detection results."
                            .into(),
                    ),
                },
                DetailCard {
                    title: "System Architecture".into(),
                    body: CardBody::Text(
                        "The solution is built as a collection of microservices that interact with \
                         each other, each with well-defined responsibilities. The system uses a \
                         decentralized approach for efficient resource utilization and \
                         cost-effectiveness."
                            .into(),
                    ),
                },
                DetailCard {
                    title: "Technology Stack".into(),
                    body: CardBody::List(vec![
                        "Flutter for cross-platform mobile development".into(),
                        "Python for AI/ML model development".into(),
                        "Node.js for Language Model implementation".into(),
                        "Cloud services for model deployment".into(),
                    ]),
                },
            ],
            screenshots_title: "App Screenshots".into(),
            screenshots: (1..=5).map(|n| format!("pic-{n}.jpg")).collect(),
            features_title: "Key Features".into(),
            features: vec![
                Feature::new(
                    "Instant Detection",
                    "Upload cropped leaf images for accurate and immediate disease detection",
                ),
                Feature::new(
                    "AI Powered Analysis",
                    "Advanced machine learning models trained on extensive datasets for precise detection",
                ),
                Feature::new(
                    "Cross-Platform",
                    "Built with Flutter for seamless experience across Android and iOS devices",
                ),
                Feature::new(
                    "User-Friendly Interface",
                    "Simple and intuitive design for easy navigation and quick results",
                ),
            ],
        }
    }
}

impl SiteContent {
    /// Alt text for the screenshot at `index` (1-based in the text).
    pub fn screenshot_alt(index: usize) -> String {
        format!("App screenshot {}", index + 1)
    }

    /// Every asset filename the page references, in page order.
    pub fn asset_files(&self) -> Vec<&str> {
        let mut files = vec![self.logo.as_str()];
        files.extend(self.qr_code.as_deref());
        files.extend(self.screenshots.iter().map(String::as_str));
        files
    }

    /// Reject content the page cannot render sensibly.
    pub fn validate(&self) -> CoreResult<()> {
        if self.screenshots.is_empty() {
            return Err(CoreError::EmptyCarousel);
        }
        if self.app_name.trim().is_empty() {
            return Err(CoreError::InvalidContent("app_name is empty".into()));
        }
        if !is_external(&self.download_url) {
            return Err(CoreError::InvalidContent(format!(
                "download_url must be an http(s) URL, got {:?}",
                self.download_url
            )));
        }
        for link in &self.nav_links {
            if !(link.href.starts_with('#') || is_external(&link.href)) {
                return Err(CoreError::InvalidContent(format!(
                    "nav link {:?} must point at an in-page anchor or an http(s) URL",
                    link.label
                )));
            }
        }
        Ok(())
    }
}

fn is_external(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}
