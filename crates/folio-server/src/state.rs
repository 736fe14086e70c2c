use folio_core::config::Config;
use folio_core::content::ContentSource;
use folio_core::image::ImageResolver;
use std::sync::Arc;

/// Shared application state passed to all route handlers. Read-only after
/// construction; each request builds its own view state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub content: Arc<dyn ContentSource>,
    pub images: Arc<ImageResolver>,
}

impl AppState {
    pub fn new(config: Config, content: Arc<dyn ContentSource>) -> Self {
        let images = ImageResolver::new(&config.content.project_id, &config.content.dataset);
        Self {
            config: Arc::new(config),
            content,
            images: Arc::new(images),
        }
    }
}
