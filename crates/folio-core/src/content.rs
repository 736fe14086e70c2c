//! Read access to the content store.
//!
//! The site issues exactly two queries: every project with the fields a
//! card needs, and one project by slug with the full case-study field set.
//! [`SanityClient`] runs them over HTTP; [`StaticContent`] serves records
//! from memory or from a JSON export for tests and offline preview.

use crate::config::ContentConfig;
use crate::error::{FolioError, Result};
use crate::project::Project;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const PROJECTS_QUERY: &str = r#"*[_type == "project"]{
  _id,
  slug,
  projectName,
  projectSubtitle,
  duration,
  status,
  tags,
  outcomeImage[]{asset, alt},
  outcomeURL,
  challengesContent,
  challengesImage[]{asset, alt},
  solutionContent,
  solutionImage[]{asset, alt},
  readMore,
}"#;

pub const PROJECT_BY_SLUG_QUERY: &str = r#"*[_type == "project" && slug.current == $slug][0]{
  _id,
  slug,
  projectName,
  projectSubtitle,
  duration,
  status,
  tags,
  overview,
  iframeContent,
  role,
  outcome,
  outcomeImage[]{asset, alt},
  outcomeURL,
  challengesContent,
  challengesImage[]{asset, alt},
  solutionContent,
  solutionImage[]{asset, alt},
  readMore,
  team,
  problemStatement,
  ideation,
  usageResearch,
  usabilityTesting,
  usageResearchImage,
}"#;

// ---------------------------------------------------------------------------
// ContentSource
// ---------------------------------------------------------------------------

/// Read-only content repository. Implementations block; async callers run
/// them on the blocking pool.
pub trait ContentSource: Send + Sync {
    fn list_projects(&self) -> Result<Vec<Project>>;

    /// `Ok(None)` when no project has this slug.
    fn project_by_slug(&self, slug: &str) -> Result<Option<Project>>;
}

// ---------------------------------------------------------------------------
// SanityClient
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

pub struct SanityClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl SanityClient {
    pub fn new(config: &ContentConfig) -> Result<Self> {
        let host = if config.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        let base = format!("https://{}.{host}", config.project_id);
        Self::with_base_url(&base, config)
    }

    /// Point the client at an arbitrary origin (mock servers, proxies).
    pub fn with_base_url(base: &str, config: &ContentConfig) -> Result<Self> {
        if config.project_id.trim().is_empty() || config.dataset.trim().is_empty() {
            return Err(FolioError::InvalidConfig(
                "content.project_id and content.dataset are required".to_string(),
            ));
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!(
                "{}/{}/data/query/{}",
                base.trim_end_matches('/'),
                config.api_version,
                config.dataset
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch<T>(&self, query: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.http.get(&self.endpoint).query(&[("query", query)]);
        for (name, value) in params {
            request = request.query(&[(format!("${name}"), value)]);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FolioError::ContentQuery {
                status: status.as_u16(),
                body,
            });
        }
        let parsed: QueryResponse<T> = response.json()?;
        Ok(parsed.result)
    }
}

impl ContentSource for SanityClient {
    fn list_projects(&self) -> Result<Vec<Project>> {
        let projects: Option<Vec<Project>> = self.fetch(PROJECTS_QUERY, &[])?;
        let projects = projects.unwrap_or_default();
        tracing::info!(count = projects.len(), "fetched projects");
        Ok(projects)
    }

    fn project_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        // GROQ parameters are JSON-encoded.
        let param = serde_json::to_string(slug)?;
        self.fetch(PROJECT_BY_SLUG_QUERY, &[("slug", param)])
    }
}

// ---------------------------------------------------------------------------
// StaticContent
// ---------------------------------------------------------------------------

/// In-memory content, in store order.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    projects: Vec<Project>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Export {
    Bare(Vec<Project>),
    Envelope { result: Vec<Project> },
}

impl StaticContent {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Load a JSON export: either a bare array of projects or a query
    /// response envelope `{"result": [...]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let projects = match serde_json::from_str::<Export>(data)? {
            Export::Bare(projects) => projects,
            Export::Envelope { result } => result,
        };
        Ok(Self::new(projects))
    }
}

impl ContentSource for StaticContent {
    fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn project_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        Ok(self
            .projects
            .iter()
            .find(|p| p.slug() == Some(slug))
            .cloned())
    }
}
