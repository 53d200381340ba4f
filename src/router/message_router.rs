use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use crate::handler::message_handler::{list_messages_handler, send_message_handler};
use crate::service::message_service::MessageServiceImpl;

pub fn message_router(service: Arc<MessageServiceImpl>) -> Router {
    Router::new()
        .route("/messages", post(send_message_handler))
        .route("/messages/{id}", get(list_messages_handler))
        .with_state(service)
}
