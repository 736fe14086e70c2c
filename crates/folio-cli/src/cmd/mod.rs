pub mod config;
pub mod project;
pub mod projects;
pub mod serve;

use anyhow::Context;
use folio_core::config::Config;
use folio_core::content::{ContentSource, SanityClient, StaticContent};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the site lives and where its content comes from, after flag and
/// environment overrides.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub content_file: Option<PathBuf>,
}

impl Site {
    /// `folio.yaml` (or defaults when absent) with CLI overrides applied.
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load_or_default(&self.root).context("failed to load config")?;
        if let Some(project_id) = &self.project_id {
            config.content.project_id = project_id.clone();
        }
        if let Some(dataset) = &self.dataset {
            config.content.dataset = dataset.clone();
        }
        Ok(config)
    }

    /// Content source for this invocation: a local JSON export when
    /// `--content-file` is set, the content store otherwise.
    ///
    /// The HTTP client blocks; build it outside any async runtime.
    pub fn content(&self, config: &Config) -> anyhow::Result<Arc<dyn ContentSource>> {
        match &self.content_file {
            Some(path) => {
                let path = if path.is_relative() {
                    self.root.join(path)
                } else {
                    path.clone()
                };
                let content = StaticContent::from_json_file(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok(Arc::new(content))
            }
            None => {
                let client = SanityClient::new(&config.content)?;
                tracing::debug!(endpoint = client.endpoint(), "using content store");
                Ok(Arc::new(client))
            }
        }
    }
}
