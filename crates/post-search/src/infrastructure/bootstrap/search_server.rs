// crates/post-search/src/infrastructure/bootstrap/search_server.rs

use crate::application::dispatch_change::DispatchChangeUseCase;
use crate::application::find_post::FindPostUseCase;
use crate::application::ports::ChangeSource;
use crate::application::search_posts::SearchPostsUseCase;
use crate::application::workers::ChangeListener;
use crate::domain::repositories::PostIndex;
use crate::infrastructure::api::http::{SearchState, search_router};
use crate::infrastructure::elasticsearch::ElasticsearchPostIndex;
#[cfg(feature = "kafka")]
use crate::infrastructure::kafka::KafkaChangeSource;
use crate::infrastructure::udp::{UdpChangeSource, UdpConfig};
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::elasticsearch::ElasticContext;
use shared_kernel::infrastructure::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "kafka")]
const DEFAULT_TRANSPORT: &str = "kafka";
#[cfg(not(feature = "kafka"))]
const DEFAULT_TRANSPORT: &str = "udp";

/// Point d'entrée du service : index, listener d'ingestion et API HTTP.
/// Les échecs de démarrage remontent à `main`.
pub async fn run_search_server() -> AppResult<()> {
    // 1. Initialisation des logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!("🚀 Starting Post Search server...");

    // 2. Index (création idempotente)
    let elastic = ElasticContext::builder()?.build()?;
    let index: Arc<dyn PostIndex> = Arc::new(ElasticsearchPostIndex::new(&elastic));
    index.ensure_index_ready().await?;
    tracing::info!("✅ Index '{}' ready on {}", elastic.config().index_name, elastic.url());

    // 3. Signal d'arrêt partagé par le listener et le serveur HTTP
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("🛑 Shutdown signal received, stopping...");
                signal_token.cancel();
            }
            Err(err) => tracing::error!("❌ Unable to listen for shutdown signal: {}", err),
        }
    });

    // 4. Ingestion en tâche de fond
    let source = build_change_source(&shutdown).await?;
    let listener = ChangeListener::new(source, Arc::new(DispatchChangeUseCase::new(index.clone())));
    let listener_token = shutdown.clone();
    let listener_task = tokio::spawn(async move { listener.run(listener_token).await });

    // 5. API de recherche
    let port: u16 = env::parsed_or("PORT", 3001)?;
    let app = search_router(SearchState {
        search: Arc::new(SearchPostsUseCase::new(index.clone())),
        find: Arc::new(FindPostUseCase::new(index)),
    });
    let tcp = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port)))
        .await
        .map_err(|e| AppError::new(ErrorCode::SetupFailed, format!("Cannot bind port {port}: {e}")))?;
    tracing::info!("🔎 Search API listening on http://0.0.0.0:{}", port);

    let http_token = shutdown.clone();
    let served = axum::serve(tcp, app)
        .with_graceful_shutdown(async move { http_token.cancelled().await })
        .await;

    // 6. Le listener termine son dispatch en cours avant de rendre la main
    shutdown.cancel();
    match listener_task.await {
        Ok(report) => tracing::info!(
            "Listener drained: received={}, applied={}, skipped={}",
            report.received,
            report.applied,
            report.skipped
        ),
        Err(e) => tracing::error!("❌ Listener task aborted: {}", e),
    }

    served.map_err(|e| AppError::new(ErrorCode::InternalError, format!("HTTP server error: {e}")))?;
    tracing::info!("👋 Post Search server exited clean");
    Ok(())
}

/// `CHANGE_TRANSPORT` : `kafka` (défaut) ou `udp`
pub async fn build_change_source(shutdown: &CancellationToken) -> AppResult<Arc<dyn ChangeSource>> {
    let transport = env::or_default("CHANGE_TRANSPORT", DEFAULT_TRANSPORT);

    match transport.trim().to_ascii_lowercase().as_str() {
        "udp" => {
            let config = UdpConfig::from_env()?;
            Ok(Arc::new(UdpChangeSource::bind(&config, shutdown.clone()).await?))
        }
        #[cfg(feature = "kafka")]
        "kafka" => Ok(Arc::new(KafkaChangeSource::from_env(shutdown.clone())?)),
        other => Err(AppError::new(
            ErrorCode::SetupFailed,
            format!("Unsupported CHANGE_TRANSPORT '{other}'"),
        )),
    }
}
