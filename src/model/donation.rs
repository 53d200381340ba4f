use serde::{Deserialize, Serialize};

use crate::dto::donation_dto::CreateDonationRequest;
use crate::util::clock::{new_id, utc_now_iso};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: f64,
    pub purpose: String,
    pub message: Option<String>,
    pub timestamp: String,
}

impl Donation {
    pub fn from_request(request: CreateDonationRequest) -> Self {
        Donation {
            id: new_id(),
            user_id: request.user_id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            amount: request.amount,
            purpose: request.purpose,
            message: request.message,
            timestamp: utc_now_iso(),
        }
    }
}
