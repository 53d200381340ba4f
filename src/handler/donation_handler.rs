use std::sync::Arc;

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use validator::Validate;

use crate::dto::donation_dto::CreateDonationRequest;
use crate::service::donation_service::{DonationService, DonationServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_donation_handler(
    State(service): State<Arc<DonationServiceImpl>>,
    Json(payload): Json<CreateDonationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }
    let donation = service.create_donation(payload).await?;
    Ok(Json(donation))
}
