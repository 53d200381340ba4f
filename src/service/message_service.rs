use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::dto::message_dto::CreateMessageRequest;
use crate::model::message::Message;
use crate::repository::message_repo::MessageRepository;
use crate::repository::LIST_LIMIT;
use crate::util::error::ServiceError;

#[async_trait]
pub trait MessageService: Send + Sync {
    async fn send_message(&self, request: CreateMessageRequest) -> Result<Message, ServiceError>;
    async fn list_messages(&self, user_id: &str, other_user_id: &str) -> Result<Vec<Message>, ServiceError>;
}

pub struct MessageServiceImpl {
    pub message_repo: Arc<dyn MessageRepository>,
}

impl MessageServiceImpl {
    pub fn new(message_repo: Arc<dyn MessageRepository>) -> Self {
        Self { message_repo }
    }
}

#[async_trait]
impl MessageService for MessageServiceImpl {
    #[instrument(skip(self, request), fields(sender_id = %request.sender_id, receiver_id = %request.receiver_id))]
    async fn send_message(&self, request: CreateMessageRequest) -> Result<Message, ServiceError> {
        let message = self.message_repo.insert(Message::from_request(request)).await?;
        Ok(message)
    }

    #[instrument(skip(self))]
    async fn list_messages(&self, user_id: &str, other_user_id: &str) -> Result<Vec<Message>, ServiceError> {
        let messages = self
            .message_repo
            .list_conversation(user_id, other_user_id, LIST_LIMIT)
            .await?;
        Ok(messages)
    }
}
