use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::dto::donation_dto::CreateDonationRequest;
use crate::model::donation::Donation;
use crate::repository::donation_repo::DonationRepository;
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait DonationService: Send + Sync {
    async fn create_donation(&self, request: CreateDonationRequest) -> Result<Donation, ServiceError>;
}

pub struct DonationServiceImpl {
    pub donation_repo: Arc<dyn DonationRepository>,
    pub user_repo: Arc<dyn UserRepository>,
}

impl DonationServiceImpl {
    pub fn new(donation_repo: Arc<dyn DonationRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { donation_repo, user_repo }
    }
}

#[async_trait]
impl DonationService for DonationServiceImpl {
    /// Stores the donation, then appends a copy to the donor's history.
    /// The donation is kept even when `user_id` matches no user.
    #[instrument(skip(self, request), fields(user_id = %request.user_id, amount = request.amount))]
    async fn create_donation(&self, request: CreateDonationRequest) -> Result<Donation, ServiceError> {
        let donation = self.donation_repo.insert(Donation::from_request(request)).await?;
        self.user_repo.push_donation(&donation.user_id, &donation).await?;
        info!(donation_id = %donation.id, "Donation recorded");
        Ok(donation)
    }
}
