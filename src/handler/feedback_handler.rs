use std::sync::Arc;

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};

use crate::dto::feedback_dto::CreateFeedbackRequest;
use crate::service::feedback_service::{FeedbackService, FeedbackServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_feedback_handler(
    State(service): State<Arc<FeedbackServiceImpl>>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let feedback = service.create_feedback(payload).await?;
    Ok(Json(feedback))
}
