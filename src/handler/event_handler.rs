use std::sync::Arc;

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};

use crate::dto::event_dto::EventRegistrationRequest;
use crate::service::event_service::{EventService, EventServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_events_handler(State(service): State<Arc<EventServiceImpl>>) -> impl IntoResponse {
    Json(service.list_events())
}

pub async fn register_event_handler(
    State(service): State<Arc<EventServiceImpl>>,
    Json(payload): Json<EventRegistrationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let response = service.register_for_event(payload).await?;
    Ok(Json(response))
}
