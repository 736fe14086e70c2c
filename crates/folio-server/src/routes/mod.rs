pub mod api;
pub mod pages;

use folio_core::error::FolioError;

/// Run a content-store call on the blocking pool. A panicked or cancelled
/// task is reported as a transport failure.
pub(crate) async fn blocking<T, F>(f: F) -> Result<T, FolioError>
where
    F: FnOnce() -> Result<T, FolioError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .unwrap_or_else(|e| Err(FolioError::ContentTransport(format!("task join error: {e}"))))
}
