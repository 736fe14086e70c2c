use super::Site;
use anyhow::Context;
use folio_server::AppState;

/// `folio serve`: run the site until interrupted.
pub fn run(site: &Site, port: u16, no_open: bool) -> anyhow::Result<()> {
    let config = site.config()?;
    for w in config.validate() {
        tracing::warn!("config: {}", w.message);
    }

    // The content client must be created and dropped outside the runtime;
    // this handle outlives `block_on`.
    let content = site.content(&config)?;
    let state = AppState::new(config, content.clone());

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .with_context(|| format!("failed to bind port {port}"))?;
        let actual_port = listener.local_addr()?.port();
        println!("folio → http://localhost:{actual_port}");

        tokio::select! {
            res = folio_server::serve_on(state, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    });
    drop(rt);
    drop(content);
    result
}
