//! EstateHub API - Real Estate Marketing Platform
//!
//! Backend for a real-estate developer's marketing site: a project catalog
//! with regulatory (RERA) metadata, testimonials, careers, news, lead
//! capture, and an AI concierge chat proxied to a chat-completions API.
//!
//! Storage is selected at startup: set DATABASE_URL for PostgreSQL, or run
//! without it and records live in memory for the process lifetime. Either
//! way a seed routine fills empty catalogs with sample content before the
//! server starts accepting requests.

mod chat;
mod config;
mod error;
mod models;
mod routes;
mod state;
mod storage;

use crate::chat::ChatClient;
use crate::config::Settings;
use crate::routes::create_router;
use crate::state::AppState;
use crate::storage::{seed, MemoryStorage, PostgresStorage, Storage};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🏗️  Starting EstateHub - Real Estate Marketing Platform...");

    // Load configuration
    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    // Select the storage backend
    let storage: Arc<dyn Storage> = match &settings.database {
        Some(db_config) => {
            let store = PostgresStorage::connect(db_config).await?;
            store.ensure_schema().await?;
            info!("✅ PostgreSQL storage ready");
            Arc::new(store)
        }
        None => {
            warn!("⚠️  DATABASE_URL not set, using in-memory storage (records reset on restart)");
            Arc::new(MemoryStorage::new())
        }
    };

    // Ensure baseline sample data exists before serving
    seed::ensure_seed_data(storage.as_ref()).await?;
    info!("🌱 Seed data verified");

    // Chat concierge client
    let chat = ChatClient::new(&settings.chat);
    if !chat.is_configured() {
        warn!("⚠️  OPENAI_API_KEY not set, /api/chat will serve a canned response");
    }

    let state = Arc::new(AppState::new(storage, chat));

    // Build the router
    let app = create_router(state, &settings);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📚 API Endpoints:");
    info!("   GET  /api/projects         - List project catalog");
    info!("   GET  /api/projects/:slug   - Fetch one project");
    info!("   GET  /api/testimonials     - List testimonials");
    info!("   GET  /api/jobs             - List open positions");
    info!("   GET  /api/news             - List news posts");
    info!("   POST /api/leads            - Submit an enquiry");
    info!("   POST /api/chat             - AI concierge chat");
    info!("");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,estatehub_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
