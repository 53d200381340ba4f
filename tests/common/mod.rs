#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alumni_network_backend::app::app::{create_router, AppServices};
use alumni_network_backend::config::CorsConfig;
use alumni_network_backend::dto::user_dto::UserUpdate;
use alumni_network_backend::model::donation::Donation;
use alumni_network_backend::model::event_registration::EventRegistration;
use alumni_network_backend::model::feedback::Feedback;
use alumni_network_backend::model::message::Message;
use alumni_network_backend::model::user::User;
use alumni_network_backend::repository::donation_repo::DonationRepository;
use alumni_network_backend::repository::event_registration_repo::EventRegistrationRepository;
use alumni_network_backend::repository::feedback_repo::FeedbackRepository;
use alumni_network_backend::repository::message_repo::MessageRepository;
use alumni_network_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use alumni_network_backend::repository::user_repo::UserRepository;
use alumni_network_backend::repository::Repositories;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryUserRepository {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: User) -> RepositoryResult<User> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_credentials(&self, email: &str, password: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn update_profile(&self, id: &str, update: &UserUpdate) -> RepositoryResult<()> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                for (name, value) in update.present_fields() {
                    let value = value.clone();
                    match name {
                        "full_name" => user.full_name = value,
                        "location" => user.location = value,
                        "company" => user.company = value,
                        "domain" => user.domain = value,
                        "phone" => user.phone = value,
                        "profile_picture" => user.profile_picture = Some(value),
                        other => panic!("unexpected update field {other}"),
                    }
                }
                Ok(())
            }
            None => Err(RepositoryError::not_found(format!("No user found to update for ID: {}", id))),
        }
    }

    async fn list(&self, limit: i64) -> RepositoryResult<Vec<User>> {
        Ok(self.users.lock().unwrap().iter().take(limit as usize).cloned().collect())
    }

    async fn add_registered_event(&self, user_id: &str, event_id: &str) -> RepositoryResult<()> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == user_id) {
            // $addToSet
            if !user.registered_events.iter().any(|e| e == event_id) {
                user.registered_events.push(event_id.to_string());
            }
        }
        Ok(())
    }

    async fn push_donation(&self, user_id: &str, donation: &Donation) -> RepositoryResult<()> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == user_id) {
            user.donations.push(donation.clone());
        }
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryEventRegistrationRepository {
    pub registrations: Mutex<Vec<EventRegistration>>,
}

#[async_trait]
impl EventRegistrationRepository for MemoryEventRegistrationRepository {
    async fn insert(&self, registration: EventRegistration) -> RepositoryResult<EventRegistration> {
        self.registrations.lock().unwrap().push(registration.clone());
        Ok(registration)
    }
}

#[derive(Default)]
pub struct MemoryMessageRepository {
    pub messages: Mutex<Vec<Message>>,
}

#[async_trait]
impl MessageRepository for MemoryMessageRepository {
    async fn insert(&self, message: Message) -> RepositoryResult<Message> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list_conversation(
        &self,
        user_id: &str,
        other_user_id: &str,
        limit: i64,
    ) -> RepositoryResult<Vec<Message>> {
        let mut conversation: Vec<Message> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| {
                (m.sender_id == user_id && m.receiver_id == other_user_id)
                    || (m.sender_id == other_user_id && m.receiver_id == user_id)
            })
            .cloned()
            .collect();
        conversation.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        conversation.truncate(limit as usize);
        Ok(conversation)
    }
}

#[derive(Default)]
pub struct MemoryDonationRepository {
    pub donations: Mutex<Vec<Donation>>,
}

#[async_trait]
impl DonationRepository for MemoryDonationRepository {
    async fn insert(&self, donation: Donation) -> RepositoryResult<Donation> {
        self.donations.lock().unwrap().push(donation.clone());
        Ok(donation)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.donations.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryFeedbackRepository {
    pub feedback: Mutex<Vec<Feedback>>,
}

#[async_trait]
impl FeedbackRepository for MemoryFeedbackRepository {
    async fn insert(&self, feedback: Feedback) -> RepositoryResult<Feedback> {
        self.feedback.lock().unwrap().push(feedback.clone());
        Ok(feedback)
    }
}

/// Router over in-memory collections, with handles for inspecting them
pub struct TestApp {
    pub router: Router,
    pub users: Arc<MemoryUserRepository>,
    pub event_registrations: Arc<MemoryEventRegistrationRepository>,
    pub messages: Arc<MemoryMessageRepository>,
    pub donations: Arc<MemoryDonationRepository>,
    pub feedback: Arc<MemoryFeedbackRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUserRepository::default());
        let event_registrations = Arc::new(MemoryEventRegistrationRepository::default());
        let messages = Arc::new(MemoryMessageRepository::default());
        let donations = Arc::new(MemoryDonationRepository::default());
        let feedback = Arc::new(MemoryFeedbackRepository::default());
        let repos = Repositories {
            users: users.clone(),
            event_registrations: event_registrations.clone(),
            messages: messages.clone(),
            donations: donations.clone(),
            feedback: feedback.clone(),
        };
        let router = create_router(&AppServices::new(&repos), &CorsConfig::default());
        TestApp {
            router,
            users,
            event_registrations,
            messages,
            donations,
            feedback,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    /// Registers a user with the given email and password `TestPass123!`
    pub async fn register(&self, email: &str) -> Value {
        let (status, body) = self.post("/api/register", registration_body(email)).await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        body
    }
}

pub fn registration_body(email: &str) -> Value {
    serde_json::json!({
        "full_name": "Test User Alumni",
        "email": email,
        "password": "TestPass123!",
        "passout_year": 2020,
        "location": "San Francisco, CA",
        "company": "Tech Corp",
        "domain": "Technology",
        "phone": "(555) 123-4567"
    })
}
