use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handler::stats_handler::get_stats_handler;
use crate::service::stats_service::StatsServiceImpl;

pub fn stats_router(service: Arc<StatsServiceImpl>) -> Router {
    Router::new()
        .route("/stats", get(get_stats_handler))
        .with_state(service)
}
