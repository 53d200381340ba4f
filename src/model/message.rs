use serde::{Deserialize, Serialize};

use crate::dto::message_dto::CreateMessageRequest;
use crate::util::clock::{new_id, utc_now_iso};

/// A direct message between two users. Never updated once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    pub timestamp: String,
}

impl Message {
    pub fn from_request(request: CreateMessageRequest) -> Self {
        Message {
            id: new_id(),
            sender_id: request.sender_id,
            receiver_id: request.receiver_id,
            message: request.message,
            timestamp: utc_now_iso(),
        }
    }
}
