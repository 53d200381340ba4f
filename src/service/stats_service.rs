use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::dto::stats_dto::StatsResponse;
use crate::repository::donation_repo::DonationRepository;
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;

/// Reported as is; not derived from the event catalog.
pub const UPCOMING_EVENTS: u64 = 10;

#[async_trait]
pub trait StatsService: Send + Sync {
    async fn get_stats(&self) -> Result<StatsResponse, ServiceError>;
}

pub struct StatsServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
    pub donation_repo: Arc<dyn DonationRepository>,
}

impl StatsServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, donation_repo: Arc<dyn DonationRepository>) -> Self {
        Self { user_repo, donation_repo }
    }
}

#[async_trait]
impl StatsService for StatsServiceImpl {
    #[instrument(skip(self))]
    async fn get_stats(&self) -> Result<StatsResponse, ServiceError> {
        let total_alumni = self.user_repo.count().await?;
        let recent_donations = self.donation_repo.count().await?;
        Ok(StatsResponse {
            total_alumni,
            upcoming_events: UPCOMING_EVENTS,
            recent_donations,
        })
    }
}
