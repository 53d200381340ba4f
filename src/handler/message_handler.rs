use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
};

use crate::dto::message_dto::{CreateMessageRequest, MessagesQuery};
use crate::service::message_service::{MessageService, MessageServiceImpl};
use crate::util::error::HandlerError;

pub async fn send_message_handler(
    State(service): State<Arc<MessageServiceImpl>>,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let message = service.send_message(payload).await?;
    Ok(Json(message))
}

// Conversation between the path user and `other_user_id`, oldest first
pub async fn list_messages_handler(
    State(service): State<Arc<MessageServiceImpl>>,
    Path(user_id): Path<String>,
    Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let messages = service.list_messages(&user_id, &query.other_user_id).await?;
    Ok(Json(messages))
}
