use crate::error::FolioError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const LOAD_PROJECTS_FAILED: &str = "Failed to load projects";
pub const LOAD_PROJECT_FAILED: &str = "Failed to load project";

// ---------------------------------------------------------------------------
// PageState
// ---------------------------------------------------------------------------

/// Load state of a content-backed view.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Loaded(T),
    /// A listing that legitimately returned nothing.
    Empty,
    /// A detail lookup that found no record.
    NotFound,
    /// The content store failed. Carries the user-facing message.
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> PageState<Vec<T>> {
    /// Listing result: an empty collection is `Empty`, not an error.
    pub fn from_list(result: Result<Vec<T>, FolioError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => PageState::Empty,
            Ok(items) => PageState::Loaded(items),
            Err(e) => {
                tracing::warn!("error fetching projects: {e}");
                PageState::Failed(LOAD_PROJECTS_FAILED.to_string())
            }
        }
    }
}

impl<T> PageState<T> {
    /// Detail result: a missing record is `NotFound`.
    pub fn from_record(result: Result<Option<T>, FolioError>) -> Self {
        match result {
            Ok(Some(record)) => PageState::Loaded(record),
            Ok(None) => PageState::NotFound,
            Err(e) => {
                tracing::warn!("error fetching project: {e}");
                PageState::Failed(LOAD_PROJECT_FAILED.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// FetchTicket / PageController
// ---------------------------------------------------------------------------

/// Handle for one in-flight fetch. Carries the key it was issued for and a
/// cancellation flag shared with the controller.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    key: String,
    cancelled: Arc<AtomicBool>,
}

impl FetchTicket {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Owns the state of one view and decides which fetch results may land.
///
/// Every `begin` supersedes the previous ticket; `teardown` cancels the
/// current one. A completion whose ticket is stale or cancelled is dropped.
#[derive(Debug)]
pub struct PageController<T> {
    state: PageState<T>,
    generation: u64,
    key: Option<String>,
    cancelled: Arc<AtomicBool>,
}

impl<T> Default for PageController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PageController<T> {
    pub fn new() -> Self {
        Self {
            state: PageState::Loading,
            generation: 0,
            key: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    pub fn into_state(mut self) -> PageState<T> {
        std::mem::replace(&mut self.state, PageState::Loading)
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Mount or route-key change: cancel the previous fetch and issue a new
    /// ticket. The view goes back to `Loading`.
    pub fn begin(&mut self, key: impl Into<String>) -> FetchTicket {
        self.cancelled.store(true, Ordering::SeqCst);
        self.cancelled = Arc::new(AtomicBool::new(false));
        self.generation += 1;
        let key = key.into();
        self.key = Some(key.clone());
        self.state = PageState::Loading;
        FetchTicket {
            generation: self.generation,
            key,
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Apply a finished fetch. Returns `false` when the result was dropped.
    pub fn complete(&mut self, ticket: &FetchTicket, state: PageState<T>) -> bool {
        if ticket.is_cancelled() || ticket.generation != self.generation {
            tracing::debug!(key = %ticket.key, "ignoring superseded fetch result");
            return false;
        }
        self.state = state;
        true
    }

    /// The view is going away; any in-flight result must not apply.
    pub fn teardown(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl<T> Drop for PageController<T> {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}
