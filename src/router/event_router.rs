use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use crate::handler::event_handler::{list_events_handler, register_event_handler};
use crate::service::event_service::EventServiceImpl;

pub fn event_router(service: Arc<EventServiceImpl>) -> Router {
    Router::new()
        .route("/events", get(list_events_handler))
        .route("/events/register", post(register_event_handler))
        .with_state(service)
}
