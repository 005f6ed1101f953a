use super::Project;
use anyhow::Context;
use assist_server::state::AppState;

pub fn run(project: &Project, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| project.config.server.host.clone());
    let port = port.unwrap_or(project.config.server.port);

    let registry = project.registry()?;
    let log = project.log_store();
    if log
        .ensure_exists()
        .with_context(|| format!("failed to create {}", log.path().display()))?
    {
        tracing::info!(path = %log.path().display(), "created empty accept log");
    }
    let state = AppState::new(registry, log);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("failed to bind {host}:{port}"))?;
        let addr = listener.local_addr()?;

        println!("assist backend → http://{addr}");

        tokio::select! {
            res = assist_server::serve_on(state, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
