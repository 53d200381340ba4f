use async_trait::async_trait;
use bson::doc;
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Collection;
use tracing::{error, info, instrument};

use crate::model::message::Message;
use crate::repository::mongo_store::MongoStore;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn insert(&self, message: Message) -> RepositoryResult<Message>;
    /// Messages exchanged between `user_id` and `other_user_id` in either
    /// direction, oldest first
    async fn list_conversation(
        &self,
        user_id: &str,
        other_user_id: &str,
        limit: i64,
    ) -> RepositoryResult<Vec<Message>>;
}

pub struct MongoMessageRepository {
    collection: Collection<Message>,
}

impl MongoMessageRepository {
    pub fn new(store: &MongoStore) -> Self {
        MongoMessageRepository {
            collection: store.collection::<Message>("messages"),
        }
    }
}

#[async_trait]
impl MessageRepository for MongoMessageRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn insert(&self, message: Message) -> RepositoryResult<Message> {
        self.collection.insert_one(&message, None).await.map_err(|e| {
            error!("Failed to store message: {}", e);
            e
        })?;
        Ok(message)
    }

    #[instrument(skip(self))]
    async fn list_conversation(
        &self,
        user_id: &str,
        other_user_id: &str,
        limit: i64,
    ) -> RepositoryResult<Vec<Message>> {
        let filter = doc! {
            "$or": [
                { "sender_id": user_id, "receiver_id": other_user_id },
                { "sender_id": other_user_id, "receiver_id": user_id },
            ]
        };
        let options = FindOptions::builder()
            .sort(doc! { "timestamp": 1 })
            .limit(limit)
            .build();
        let cursor = self.collection.find(filter, options).await?;
        let messages: Vec<Message> = cursor.try_collect().await?;
        info!("Fetched {} messages", messages.len());
        Ok(messages)
    }
}
