use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::dto::event_dto::{EventRegistrationRequest, EventRegistrationResponse};
use crate::model::event::{Event, EVENTS};
use crate::model::event_registration::EventRegistration;
use crate::repository::event_registration_repo::EventRegistrationRepository;
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait EventService: Send + Sync {
    fn list_events(&self) -> &'static [Event];
    async fn register_for_event(
        &self,
        request: EventRegistrationRequest,
    ) -> Result<EventRegistrationResponse, ServiceError>;
}

pub struct EventServiceImpl {
    pub registration_repo: Arc<dyn EventRegistrationRepository>,
    pub user_repo: Arc<dyn UserRepository>,
}

impl EventServiceImpl {
    pub fn new(
        registration_repo: Arc<dyn EventRegistrationRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self { registration_repo, user_repo }
    }
}

#[async_trait]
impl EventService for EventServiceImpl {
    fn list_events(&self) -> &'static [Event] {
        &EVENTS
    }

    /// Neither the event id nor the user id is checked. The registration
    /// record and the user's event set are written by two independent calls.
    #[instrument(skip(self, request), fields(user_id = %request.user_id, event_id = %request.event_id))]
    async fn register_for_event(
        &self,
        request: EventRegistrationRequest,
    ) -> Result<EventRegistrationResponse, ServiceError> {
        let registration = self
            .registration_repo
            .insert(EventRegistration::from_request(request))
            .await?;
        self.user_repo
            .add_registered_event(&registration.user_id, &registration.event_id)
            .await?;
        info!("Event registration completed");
        Ok(EventRegistrationResponse::successful())
    }
}
