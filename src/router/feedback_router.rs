use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handler::feedback_handler::create_feedback_handler;
use crate::service::feedback_service::FeedbackServiceImpl;

pub fn feedback_router(service: Arc<FeedbackServiceImpl>) -> Router {
    Router::new()
        .route("/feedback", post(create_feedback_handler))
        .with_state(service)
}
