use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
}

/// Query string of `GET /messages/{user_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesQuery {
    pub other_user_id: String,
}
