use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handler::donation_handler::create_donation_handler;
use crate::service::donation_service::DonationServiceImpl;

pub fn donation_router(service: Arc<DonationServiceImpl>) -> Router {
    Router::new()
        .route("/donate", post(create_donation_handler))
        .with_state(service)
}
