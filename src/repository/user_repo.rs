use async_trait::async_trait;
use bson::doc;
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Collection;
use tracing::{error, info, instrument};

use crate::dto::user_dto::UserUpdate;
use crate::model::donation::Donation;
use crate::model::user::User;
use crate::repository::mongo_store::MongoStore;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> RepositoryResult<User>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    /// Exact match on both email and password
    async fn find_by_credentials(&self, email: &str, password: &str) -> RepositoryResult<Option<User>>;
    /// Applies the present fields of `update`; `NotFound` when no user has `id`
    async fn update_profile(&self, id: &str, update: &UserUpdate) -> RepositoryResult<()>;
    async fn list(&self, limit: i64) -> RepositoryResult<Vec<User>>;
    /// Adds `event_id` to the user's registered events unless already there.
    /// Matching no user is not an error.
    async fn add_registered_event(&self, user_id: &str, event_id: &str) -> RepositoryResult<()>;
    /// Appends a copy of `donation` to the user's history. Matching no user is not an error.
    async fn push_donation(&self, user_id: &str, donation: &Donation) -> RepositoryResult<()>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(store: &MongoStore) -> Self {
        MongoUserRepository {
            collection: store.collection::<User>("users"),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id, email = %user.email))]
    async fn insert(&self, user: User) -> RepositoryResult<User> {
        self.collection.insert_one(&user, None).await.map_err(|e| {
            error!("Failed to insert user: {}", e);
            e
        })?;
        info!("User inserted");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "id": id };
        Ok(self.collection.find_one(filter, None).await?)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email };
        Ok(self.collection.find_one(filter, None).await?)
    }

    #[instrument(skip(self, password))]
    async fn find_by_credentials(&self, email: &str, password: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email, "password": password };
        Ok(self.collection.find_one(filter, None).await?)
    }

    #[instrument(skip(self, update))]
    async fn update_profile(&self, id: &str, update: &UserUpdate) -> RepositoryResult<()> {
        let filter = doc! { "id": id };
        let result = self
            .collection
            .update_one(filter, update.to_set_document(), None)
            .await
            .map_err(|e| {
                error!("Failed to update user: {}", e);
                e
            })?;
        // matched, not modified: re-sending the current values is still a hit
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No user found to update for ID: {}", id)));
        }
        info!("User profile updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> RepositoryResult<Vec<User>> {
        let options = FindOptions::builder().limit(limit).build();
        let mut cursor = self.collection.find(None, options).await?;
        let mut users = Vec::new();
        while let Some(user) = cursor.next().await {
            match user {
                Ok(u) => users.push(u),
                Err(e) => {
                    error!("Failed to deserialize user: {}", e);
                    return Err(e.into());
                }
            }
        }
        info!("Fetched {} users", users.len());
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn add_registered_event(&self, user_id: &str, event_id: &str) -> RepositoryResult<()> {
        let filter = doc! { "id": user_id };
        let update = doc! { "$addToSet": { "registered_events": event_id } };
        let result = self.collection.update_one(filter, update, None).await?;
        if result.matched_count == 0 {
            info!("No user matched for event registration");
        }
        Ok(())
    }

    #[instrument(skip(self, donation), fields(donation_id = %donation.id))]
    async fn push_donation(&self, user_id: &str, donation: &Donation) -> RepositoryResult<()> {
        let filter = doc! { "id": user_id };
        let donation = bson::to_bson(donation)?;
        let update = doc! { "$push": { "donations": donation } };
        let result = self.collection.update_one(filter, update, None).await?;
        if result.matched_count == 0 {
            info!("No user matched for donation history");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.collection.count_documents(None, None).await?)
    }
}
