use crate::error::{FolioError, Result};
use crate::image::Fit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.yaml";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ContentConfig
// ---------------------------------------------------------------------------

/// Where the content store lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub use_cdn: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_project_id() -> String {
    "a8eevheq".to_string()
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "v2025-10-18".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ---------------------------------------------------------------------------
// ImagesConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_card_quality")]
    pub card_quality: u8,
    #[serde(default = "default_gallery_quality")]
    pub gallery_quality: u8,
    #[serde(default = "default_modal_quality")]
    pub modal_quality: u8,
    #[serde(default)]
    pub fit: Fit,
}

fn default_card_quality() -> u8 {
    80
}

fn default_gallery_quality() -> u8 {
    90
}

fn default_modal_quality() -> u8 {
    95
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            card_quality: default_card_quality(),
            gallery_quality: default_gallery_quality(),
            modal_quality: default_modal_quality(),
            fit: Fit::Max,
        }
    }
}

// ---------------------------------------------------------------------------
// WorkConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkConfig {
    /// Cards per page in the work showcase when the request does not say.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Project names in homepage order. Matching is case-insensitive and
    /// accepts substrings of the project name.
    #[serde(default = "default_display_order")]
    pub display_order: Vec<String>,
}

fn default_page_size() -> usize {
    3
}

fn default_display_order() -> Vec<String> {
    ["Mito Health", "UTickets", "Huli Jaggery Rum", "MyMomentClub", "Jiopay"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            display_order: default_display_order(),
        }
    }
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub duration: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingEntry {
    pub year: u16,
    pub medium: String,
    pub url: String,
    pub title: String,
}

/// Static copy for the chrome, hero, about and contact sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_badges")]
    pub badges: Vec<String>,
    #[serde(default = "default_teaser")]
    pub about_teaser: String,
    #[serde(default = "default_headline")]
    pub about_headline: String,
    #[serde(default = "default_about")]
    pub about: Vec<String>,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_footer_note")]
    pub footer_note: String,
    #[serde(default = "default_social")]
    pub social: Vec<SocialLink>,
    #[serde(default = "default_experience")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default = "default_writing")]
    pub writing: Vec<WritingEntry>,
}

fn default_owner() -> String {
    "Swarna Kadagadkai".to_string()
}

fn default_tagline() -> String {
    "I'm a design engineer determined to build products that understand human behaviour"
        .to_string()
}

fn default_badges() -> Vec<String> {
    vec![
        "MS in Human-Computer Interaction".to_string(),
        "UT Austin".to_string(),
    ]
}

fn default_teaser() -> String {
    "Beyond tech and design, you'll find me at the gym, reading a book or brewing a good old cup of coffee."
        .to_string()
}

fn default_headline() -> String {
    "Austin-based Design Engineer building experiences that transform people & business"
        .to_string()
}

fn default_about() -> Vec<String> {
    vec![
        "I'm currently a graduate student majoring in Human Computer Interaction and UX at UT Austin."
            .to_string(),
        "I started off as a full stack developer at a 0-1 startup in Bangalore, where I developed a \
         fascination to combine technology, human psychology and business."
            .to_string(),
        "To fulfill my burning desire to build products, I co-founded RevOwl, an interactive product \
         demo builder for sales and marketing teams."
            .to_string(),
    ]
}

fn default_contact_email() -> String {
    "contact@swarna.design".to_string()
}

fn default_footer_note() -> String {
    "September 2025".to_string()
}

fn default_social() -> Vec<SocialLink> {
    [
        ("Twitter", "https://x.com/swarnaa_k"),
        ("LinkedIn", "https://www.linkedin.com/in/swarna-kadagadkai/"),
        ("Medium", "https://medium.com/@swarnak"),
        ("Behance", "https://www.behance.net/swarnakadagad"),
    ]
    .iter()
    .map(|(name, url)| SocialLink {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

fn default_experience() -> Vec<ExperienceEntry> {
    [
        ("2024-2025", "UI Engineer at Lloyd's Register"),
        ("2023-2024", "Co-Founder, Design and Engineering at RevOwl"),
        ("2022-2023", "Founding Engineer at SaaSPay Pvt Ltd"),
        ("2020-2022", "Software Development Engineer at SawoLabs Pvt Ltd"),
    ]
    .iter()
    .map(|(duration, title)| ExperienceEntry {
        duration: duration.to_string(),
        title: title.to_string(),
    })
    .collect()
}

fn default_writing() -> Vec<WritingEntry> {
    [
        (
            2025,
            "Substack",
            "https://swarnakadagadkai.substack.com/p/designing-an-ios-app-for-mito-health",
            "Designing an iOS app for Mito Health",
        ),
        (
            2024,
            "Medium",
            "https://medium.com/design-bootcamp/landing-page-design-for-huli-jaggery-rum-1fd34593e18f",
            "Designing a landing page for Huli – India's First Jaggery Rum",
        ),
        (
            2022,
            "Medium",
            "https://medium.com/@swarnak/host-your-flask-app-on-amazon-ecs-part-1-ci-cd-pipeline-36d795ea9dac",
            "Hosting a Flask app on Amazon ECS",
        ),
    ]
    .iter()
    .map(|(year, medium, url, title)| WritingEntry {
        year: *year,
        medium: medium.to_string(),
        url: url.to_string(),
        title: title.to_string(),
    })
    .collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            tagline: default_tagline(),
            badges: default_badges(),
            about_teaser: default_teaser(),
            about_headline: default_headline(),
            about: default_about(),
            contact_email: default_contact_email(),
            footer_note: default_footer_note(),
            social: default_social(),
            experience: default_experience(),
            writing: default_writing(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub work: WorkConfig,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = config_path(root);
        if !path.exists() {
            return Err(FolioError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(FolioError::NotInitialized) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        std::fs::write(config_path(root), data)?;
        Ok(())
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let mut error = |message: String| {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message,
            })
        };

        if self.content.project_id.trim().is_empty() {
            error("content.project_id is empty".to_string());
        }
        if self.content.dataset.trim().is_empty() {
            error("content.dataset is empty".to_string());
        }
        for (name, q) in [
            ("card_quality", self.images.card_quality),
            ("gallery_quality", self.images.gallery_quality),
            ("modal_quality", self.images.modal_quality),
        ] {
            if q > 100 {
                error(format!("images.{name} is {q}; must be 0-100"));
            }
        }
        if self.work.page_size == 0 {
            error("work.page_size must be at least 1".to_string());
        }

        if self.work.display_order.iter().any(|n| n.trim().is_empty()) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "work.display_order has a blank entry; it matches every project"
                    .to_string(),
            });
        }
        if !self.content.api_version.starts_with('v') {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "content.api_version '{}' should look like v2025-10-18",
                    self.content.api_version
                ),
            });
        }
        warnings
    }
}
