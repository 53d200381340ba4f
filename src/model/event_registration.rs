use serde::{Deserialize, Serialize};

use crate::dto::event_dto::EventRegistrationRequest;
use crate::util::clock::utc_now_iso;

/// One sign-up for an event. Only the store's own key identifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRegistration {
    pub user_id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attend_dinner: bool,
    pub timestamp: String,
}

impl EventRegistration {
    pub fn from_request(request: EventRegistrationRequest) -> Self {
        EventRegistration {
            user_id: request.user_id,
            event_id: request.event_id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            attend_dinner: request.attend_dinner,
            timestamp: utc_now_iso(),
        }
    }
}
