use std::sync::Arc;

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};

use crate::service::stats_service::{StatsService, StatsServiceImpl};
use crate::util::error::HandlerError;

pub async fn get_stats_handler(
    State(service): State<Arc<StatsServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let stats = service.get_stats().await?;
    Ok(Json(stats))
}
