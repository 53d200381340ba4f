use serde::{Deserialize, Serialize};

use crate::dto::feedback_dto::CreateFeedbackRequest;
use crate::util::clock::{new_id, utc_now_iso};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl Feedback {
    pub fn from_request(request: CreateFeedbackRequest) -> Self {
        Feedback {
            id: new_id(),
            name: request.name,
            email: request.email,
            message: request.message,
            timestamp: utc_now_iso(),
        }
    }
}
