use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use folio::api::{AppState, create_router};
use folio::config::CONFIG;
use folio::search_client::HttpSearchClient;

#[derive(Parser, Debug)]
#[command(version, about = "Portfolio site with a search front page")]
struct Args {
    /// Address to listen on [env: BIND_ADDR]
    #[arg(long)]
    bind: Option<String>,

    /// Base URL of the search service [env: SEARCH_API_URL]
    #[arg(long)]
    search_api_url: Option<String>,

    /// Directory holding resume.pdf and styles.css [env: STATIC_DIR]
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (also picks up log crate records)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let bind = args.bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
    let search_api_url = args
        .search_api_url
        .unwrap_or_else(|| CONFIG.search_api_url.clone());
    let static_dir = args.static_dir.unwrap_or_else(|| CONFIG.static_dir.clone());

    let search = HttpSearchClient::new(&search_api_url, CONFIG.search_timeout)?;
    tracing::info!("search api: {}", search.endpoint());

    let state = AppState::new(Arc::new(search), CONFIG.profile.clone());
    let app = create_router(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
