use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use website::config::Settings;
use website::database::ActivityStore;
use website::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Config + registry
    let settings = Settings::from_env();
    let store = ActivityStore::seeded();
    info!(
        activities = store.read(|repo| repo.len()),
        build_id = env!("ACTIVITY_SIGNUP_BUILD_ID"),
        "activity registry seeded"
    );

    // 3. App
    let app = web::router(store, &settings.static_dir);

    // 4. Bind, with one fallback port
    let addr = settings.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = settings.fallback_bind_addr();
            warn!(addr = %addr, error = %e, fallback = %fallback, "bind failed, trying fallback");
            tokio::net::TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("could not bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);
    info!("Open http://{}{} to sign up", bound_addr, web::INDEX_PATH);

    axum::serve(listener, app).await?;
    Ok(())
}
