pub mod donation_repo;
pub mod event_registration_repo;
pub mod feedback_repo;
pub mod message_repo;
pub mod mongo_store;
pub mod repository_error;
pub mod user_repo;

use std::sync::Arc;

use crate::repository::donation_repo::{DonationRepository, MongoDonationRepository};
use crate::repository::event_registration_repo::{
    EventRegistrationRepository, MongoEventRegistrationRepository,
};
use crate::repository::feedback_repo::{FeedbackRepository, MongoFeedbackRepository};
use crate::repository::message_repo::{MessageRepository, MongoMessageRepository};
use crate::repository::mongo_store::MongoStore;
use crate::repository::user_repo::{MongoUserRepository, UserRepository};

/// Upper bound on documents returned by list queries
pub const LIST_LIMIT: i64 = 1000;

/// Every collection the service reads or writes
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub event_registrations: Arc<dyn EventRegistrationRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub donations: Arc<dyn DonationRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
}

impl Repositories {
    pub fn mongo(store: &MongoStore) -> Self {
        Repositories {
            users: Arc::new(MongoUserRepository::new(store)),
            event_registrations: Arc::new(MongoEventRegistrationRepository::new(store)),
            messages: Arc::new(MongoMessageRepository::new(store)),
            donations: Arc::new(MongoDonationRepository::new(store)),
            feedback: Arc::new(MongoFeedbackRepository::new(store)),
        }
    }
}
