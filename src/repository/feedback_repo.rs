use async_trait::async_trait;
use mongodb::Collection;
use tracing::{error, instrument};

use crate::model::feedback::Feedback;
use crate::repository::mongo_store::MongoStore;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn insert(&self, feedback: Feedback) -> RepositoryResult<Feedback>;
}

pub struct MongoFeedbackRepository {
    collection: Collection<Feedback>,
}

impl MongoFeedbackRepository {
    pub fn new(store: &MongoStore) -> Self {
        MongoFeedbackRepository {
            collection: store.collection::<Feedback>("feedback"),
        }
    }
}

#[async_trait]
impl FeedbackRepository for MongoFeedbackRepository {
    #[instrument(skip(self, feedback), fields(feedback_id = %feedback.id))]
    async fn insert(&self, feedback: Feedback) -> RepositoryResult<Feedback> {
        self.collection
            .insert_one(&feedback, None)
            .await
            .map_err(|e| {
                error!("Failed to store feedback: {}", e);
                e
            })?;
        Ok(feedback)
    }
}
