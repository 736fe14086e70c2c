use crate::error::{FolioError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Slug
// ---------------------------------------------------------------------------

/// Content-store slug object: `{ "current": "mito-health" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[^/\p{Cc}]+$").expect("static slug regex"))
}

/// Reject slugs that cannot name a single project path segment. Slugs are
/// owned by the content store, so anything else is passed through and the
/// store decides whether the project exists.
pub fn validate_slug(slug: &str) -> Result<()> {
    if !slug_re().is_match(slug) {
        return Err(FolioError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

/// Site path of a project detail page, with the slug percent-encoded.
pub fn project_path(slug: &str) -> String {
    format!("/projects/{}", urlencoding::encode(slug))
}

// ---------------------------------------------------------------------------
// ImageEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetHandle {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// One image in a project slot. The asset is referenced, never owned, and is
/// resolved to a URL only when a page is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub asset: AssetHandle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageEntry {
    pub fn new(reference: impl Into<String>, alt: Option<&str>) -> Self {
        Self {
            asset: AssetHandle {
                reference: reference.into(),
            },
            alt: alt.map(str::to_string),
        }
    }

    pub fn reference(&self) -> &str {
        &self.asset.reference
    }

    /// Alt text of the entry, falling back to `fallback` when the entry has
    /// none or it is blank.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.alt.as_deref() {
            Some(alt) if !alt.trim().is_empty() => alt,
            _ => fallback,
        }
    }
}

// ---------------------------------------------------------------------------
// ImageSlot
// ---------------------------------------------------------------------------

/// Named image slots on a project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSlot {
    Outcome,
    Challenges,
    Solution,
    Ideation,
    UsageResearch,
}

impl ImageSlot {
    pub fn all() -> &'static [ImageSlot] {
        &[
            ImageSlot::Outcome,
            ImageSlot::Challenges,
            ImageSlot::Solution,
            ImageSlot::Ideation,
            ImageSlot::UsageResearch,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageSlot::Outcome => "outcome",
            ImageSlot::Challenges => "challenges",
            ImageSlot::Solution => "solution",
            ImageSlot::Ideation => "ideation",
            ImageSlot::UsageResearch => "usage_research",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageSlot::Outcome => "Outcome",
            ImageSlot::Challenges => "Challenges",
            ImageSlot::Solution => "Solution",
            ImageSlot::Ideation => "Ideation",
            ImageSlot::UsageResearch => "Usage research",
        }
    }
}

impl std::str::FromStr for ImageSlot {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "outcome" => Ok(ImageSlot::Outcome),
            "challenges" => Ok(ImageSlot::Challenges),
            "solution" => Ok(ImageSlot::Solution),
            "ideation" => Ok(ImageSlot::Ideation),
            "usage_research" | "usage-research" => Ok(ImageSlot::UsageResearch),
            _ => Err(FolioError::InvalidImageSlot(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A case-study record as returned by the content store. Only `_id` is
/// guaranteed; every other field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub project_subtitle: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub role: Vec<String>,
    #[serde(default)]
    pub iframe_content: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub outcome_image: Vec<ImageEntry>,
    #[serde(default, rename = "outcomeURL")]
    pub outcome_url: Option<String>,
    #[serde(default)]
    pub problem_statement: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub ideation: Vec<ImageEntry>,
    #[serde(default)]
    pub usage_research: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub usage_research_image: Vec<ImageEntry>,
    #[serde(default)]
    pub usability_testing: Option<String>,
    #[serde(default)]
    pub challenges_content: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub challenges_image: Vec<ImageEntry>,
    #[serde(default)]
    pub solution_content: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub solution_image: Vec<ImageEntry>,
    #[serde(default)]
    pub read_more: Option<String>,
}

/// GROQ projections return `null` for absent arrays.
fn nullable_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Project {
    pub fn slug(&self) -> Option<&str> {
        self.slug
            .as_ref()
            .map(|s| s.current.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Display name, trimmed; empty when the record has none.
    pub fn name(&self) -> &str {
        self.project_name.as_deref().map(str::trim).unwrap_or("")
    }

    /// Label used in navigation: the name, or the slug when unnamed.
    pub fn nav_label(&self) -> &str {
        match self.project_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.slug().unwrap_or(&self.id),
        }
    }

    pub fn images(&self, slot: ImageSlot) -> &[ImageEntry] {
        match slot {
            ImageSlot::Outcome => &self.outcome_image,
            ImageSlot::Challenges => &self.challenges_image,
            ImageSlot::Solution => &self.solution_image,
            ImageSlot::Ideation => &self.ideation,
            ImageSlot::UsageResearch => &self.usage_research_image,
        }
    }

    /// First outcome image, used as the card and hero image.
    pub fn cover(&self) -> Option<&ImageEntry> {
        self.outcome_image
            .first()
            .filter(|img| !img.reference().is_empty())
    }

    /// Reduced record shape served by the listing query.
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            slug: self.slug().map(str::to_string),
            name: self.project_name.clone(),
            subtitle: self.project_subtitle.clone(),
            status: self.status.clone(),
            tags: self.tags.clone(),
            cover: self.cover().map(|c| c.reference().to_string()),
        }
    }
}

/// Flat projection of a project used by listings and the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub status: Option<String>,
    pub tags: Vec<String>,
    pub cover: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_record() {
        let json = r#"{
            "_id": "p1",
            "slug": {"current": "mito-health"},
            "projectName": "Mito Health",
            "tags": null,
            "outcomeImage": [{"asset": {"_ref": "image-abc-10x20-png"}, "alt": "Home"}],
            "outcomeURL": "https://mito.health"
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.slug(), Some("mito-health"));
        assert!(p.tags.is_empty());
        assert!(p.solution_image.is_empty());
        assert_eq!(p.outcome_url.as_deref(), Some("https://mito.health"));
        assert_eq!(p.cover().unwrap().reference(), "image-abc-10x20-png");
        assert_eq!(p.summary().cover.as_deref(), Some("image-abc-10x20-png"));
    }

    #[test]
    fn nav_label_falls_back_to_slug() {
        let p = Project {
            id: "p2".into(),
            slug: Some(Slug {
                current: "utickets".into(),
            }),
            project_name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(p.nav_label(), "utickets");
        assert_eq!(p.name(), "");
    }

    #[test]
    fn alt_falls_back_when_blank() {
        let img = ImageEntry::new("image-a-1x1-jpg", Some(" "));
        assert_eq!(img.alt_or("Gallery image"), "Gallery image");
        let img = ImageEntry::new("image-a-1x1-jpg", Some("Flow"));
        assert_eq!(img.alt_or("Gallery image"), "Flow");
    }

    #[test]
    fn slug_validation() {
        assert!(validate_slug("mito-health").is_ok());
        assert!(validate_slug("a").is_ok());
        assert!(validate_slug("mito_health").is_ok());
        assert!(validate_slug("Mito.Health-v2").is_ok());
        assert!(validate_slug(&"x".repeat(200)).is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("../etc").is_err());
        assert!(validate_slug("a/b").is_err());
        assert!(validate_slug("tab\there").is_err());
    }

    #[test]
    fn project_path_encodes_store_slugs() {
        assert_eq!(project_path("mito-health"), "/projects/mito-health");
        assert_eq!(project_path("mito_health"), "/projects/mito_health");
        assert_eq!(project_path("case study?"), "/projects/case%20study%3F");
    }

    #[test]
    fn unknown_image_slot_is_its_own_error() {
        let err = "hero".parse::<ImageSlot>().unwrap_err();
        assert!(matches!(err, FolioError::InvalidImageSlot(ref s) if s == "hero"));
        assert!(err.to_string().contains("unknown image slot"));
    }

    #[test]
    fn image_slot_parses_both_spellings() {
        assert_eq!(
            "usage-research".parse::<ImageSlot>().unwrap(),
            ImageSlot::UsageResearch
        );
        for slot in ImageSlot::all() {
            assert_eq!(slot.as_str().parse::<ImageSlot>().unwrap(), *slot);
        }
    }
}
