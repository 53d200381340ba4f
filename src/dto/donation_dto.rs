use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDonationRequest {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    pub purpose: String,
    pub message: Option<String>,
}
