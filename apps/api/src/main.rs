mod config;
mod errors;
mod interview;
mod jobs;
mod llm_client;
mod models;
mod notify;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{mask_secret, Config};
use crate::jobs::store::JobStore;
use crate::llm_client::{LanguageModel, LlmClient};
use crate::notify::mailer::{DisabledMailer, Mailer, SesMailer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "GROQ_API_KEY: {}",
        mask_secret(config.groq_api_key.as_deref())
    );
    info!(
        "Persistence: {} (key {})",
        config.supabase_host(),
        mask_secret(config.supabase_key.as_deref())
    );

    // Language model; every AI endpoint falls back to mock output without one
    let llm: Option<Arc<dyn LanguageModel>> = match &config.groq_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.groq_model.clone());
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        None => {
            warn!("GROQ_API_KEY not set, using mock responses");
            None
        }
    };

    let mailer: Arc<dyn Mailer> = match &config.email_from {
        Some(from) => {
            info!("SES mailer initialized (region: {}, from: {from})", config.aws_region);
            Arc::new(SesMailer::new(&config.aws_region, from.clone()).await)
        }
        None => {
            warn!("EMAIL_FROM not set, notification emails are disabled");
            Arc::new(DisabledMailer)
        }
    };

    let state = AppState {
        llm,
        mailer,
        jobs: JobStore::default(),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
