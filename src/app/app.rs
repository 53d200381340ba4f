use std::sync::Arc;

use axum::{routing::get, Router};
use tracing::{info, warn};

use crate::config::{AppConfig, ConfigError, CorsConfig, MongoConfig};
use crate::repository::mongo_store::MongoStore;
use crate::repository::Repositories;
use crate::router::donation_router::donation_router;
use crate::router::event_router::event_router;
use crate::router::feedback_router::feedback_router;
use crate::router::message_router::message_router;
use crate::router::stats_router::stats_router;
use crate::router::user_router::user_router;
use crate::service::donation_service::DonationServiceImpl;
use crate::service::event_service::EventServiceImpl;
use crate::service::feedback_service::FeedbackServiceImpl;
use crate::service::message_service::MessageServiceImpl;
use crate::service::stats_service::StatsServiceImpl;
use crate::service::user_service::UserServiceImpl;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("MongoDB error: {0}")]
    Store(#[from] mongodb::error::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
pub struct AppServices {
    pub user_service: Arc<UserServiceImpl>,
    pub event_service: Arc<EventServiceImpl>,
    pub message_service: Arc<MessageServiceImpl>,
    pub donation_service: Arc<DonationServiceImpl>,
    pub feedback_service: Arc<FeedbackServiceImpl>,
    pub stats_service: Arc<StatsServiceImpl>,
}

impl AppServices {
    pub fn new(repos: &Repositories) -> Self {
        AppServices {
            user_service: Arc::new(UserServiceImpl::new(repos.users.clone())),
            event_service: Arc::new(EventServiceImpl::new(
                repos.event_registrations.clone(),
                repos.users.clone(),
            )),
            message_service: Arc::new(MessageServiceImpl::new(repos.messages.clone())),
            donation_service: Arc::new(DonationServiceImpl::new(
                repos.donations.clone(),
                repos.users.clone(),
            )),
            feedback_service: Arc::new(FeedbackServiceImpl::new(repos.feedback.clone())),
            stats_service: Arc::new(StatsServiceImpl::new(
                repos.users.clone(),
                repos.donations.clone(),
            )),
        }
    }
}

/// Every API route under `/api`, plus `/health` and the CORS layer
pub fn create_router(services: &AppServices, cors: &CorsConfig) -> Router {
    let api = Router::new()
        .merge(user_router(services.user_service.clone()))
        .merge(event_router(services.event_service.clone()))
        .merge(message_router(services.message_service.clone()))
        .merge(donation_router(services.donation_service.clone()))
        .merge(feedback_router(services.feedback_service.clone()))
        .merge(stats_router(services.stats_service.clone()));

    Router::new()
        .nest("/api", api)
        .route("/health", get(|| async { "OK" }))
        .layer(cors.layer())
}

pub struct App {
    config: AppConfig,
    router: Router,
    store: MongoStore,
}

impl App {
    pub async fn new() -> Result<Self, AppError> {
        let config = AppConfig::from_env();
        let mongo_config = MongoConfig::from_env()?;
        let cors_config = CorsConfig::from_env();

        let store = MongoStore::connect(&mongo_config).await?;
        let repos = Repositories::mongo(&store);
        let services = AppServices::new(&repos);
        let router = create_router(&services, &cors_config);

        Ok(App { config, router, store })
    }

    pub async fn start(self) -> Result<(), AppError> {
        let addr = self.config.socket_addr()?;
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let served = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        // The store is released even when serving failed
        self.store.shutdown().await;
        info!("Server stopped");
        served.map_err(AppError::from)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
