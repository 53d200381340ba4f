use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::dto::feedback_dto::CreateFeedbackRequest;
use crate::model::feedback::Feedback;
use crate::repository::feedback_repo::FeedbackRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait FeedbackService: Send + Sync {
    async fn create_feedback(&self, request: CreateFeedbackRequest) -> Result<Feedback, ServiceError>;
}

pub struct FeedbackServiceImpl {
    pub feedback_repo: Arc<dyn FeedbackRepository>,
}

impl FeedbackServiceImpl {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback_repo }
    }
}

#[async_trait]
impl FeedbackService for FeedbackServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn create_feedback(&self, request: CreateFeedbackRequest) -> Result<Feedback, ServiceError> {
        let feedback = self.feedback_repo.insert(Feedback::from_request(request)).await?;
        info!(feedback_id = %feedback.id, "Feedback received");
        Ok(feedback)
    }
}
