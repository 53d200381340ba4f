use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRegistrationRequest {
    pub user_id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attend_dinner: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRegistrationResponse {
    pub message: String,
    pub success: bool,
}

impl EventRegistrationResponse {
    pub fn successful() -> Self {
        EventRegistrationResponse {
            message: "Registration Successful!".to_string(),
            success: true,
        }
    }
}
