use async_trait::async_trait;
use mongodb::Collection;
use tracing::{error, info, instrument};

use crate::model::event_registration::EventRegistration;
use crate::repository::mongo_store::MongoStore;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait EventRegistrationRepository: Send + Sync {
    /// Always stores a new record; repeated sign-ups are not deduplicated
    async fn insert(&self, registration: EventRegistration) -> RepositoryResult<EventRegistration>;
}

pub struct MongoEventRegistrationRepository {
    collection: Collection<EventRegistration>,
}

impl MongoEventRegistrationRepository {
    pub fn new(store: &MongoStore) -> Self {
        MongoEventRegistrationRepository {
            collection: store.collection::<EventRegistration>("event_registrations"),
        }
    }
}

#[async_trait]
impl EventRegistrationRepository for MongoEventRegistrationRepository {
    #[instrument(skip(self, registration), fields(user_id = %registration.user_id, event_id = %registration.event_id))]
    async fn insert(&self, registration: EventRegistration) -> RepositoryResult<EventRegistration> {
        self.collection.insert_one(&registration, None).await.map_err(|e| {
            error!("Failed to store event registration: {}", e);
            e
        })?;
        info!("Event registration stored");
        Ok(registration)
    }
}
