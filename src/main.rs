use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use zoom_meetings::{
    create_router, AppState, Config, MeetingScheduler, OAuthTokenProvider, ZoomMeetingCreator,
};

#[derive(Parser)]
#[command(name = "zoom-meetings")]
#[command(about = "HTTP backend that books scheduled Zoom meetings", long_about = None)]
struct Args {
    /// Config file (extension optional, file may be absent)
    #[arg(short, long, default_value = "config/zoom-meetings")]
    config: String,

    /// Override the configured listening port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Token endpoint: {}", cfg.zoom.oauth_url);
    info!("API base: {}", cfg.zoom.api_base_url);

    // One connection pool shared by both stages
    let http = reqwest::Client::builder()
        .user_agent(format!("zoom-meetings/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let scheduler = MeetingScheduler::new(
        Arc::new(OAuthTokenProvider::new(http.clone(), &cfg.zoom)),
        Arc::new(ZoomMeetingCreator::new(http, &cfg.zoom.api_base_url)),
    );
    let app = create_router(AppState::new(scheduler));

    let port = args.port.unwrap_or(cfg.service.http.port);
    let addr = format!("{}:{}", cfg.service.http.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
