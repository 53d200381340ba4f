use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::dto::user_dto::{RegisterRequest, UserUpdate};
use crate::model::user::{User, UserWithoutPassword};
use crate::repository::user_repo::UserRepository;
use crate::repository::LIST_LIMIT;
use crate::util::error::ServiceError;

#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a user; the response still carries the password
    async fn register(&self, request: RegisterRequest) -> Result<User, ServiceError>;
    /// Plain email + password match; returns the stored document as is
    async fn login(&self, email: String, password: String) -> Result<User, ServiceError>;
    async fn get_user(&self, id: &str) -> Result<UserWithoutPassword, ServiceError>;
    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<UserWithoutPassword, ServiceError>;
    async fn list_alumni(&self) -> Result<Vec<UserWithoutPassword>, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn register(&self, request: RegisterRequest) -> Result<User, ServiceError> {
        info!("Registering new user");
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            warn!("Email already registered");
            return Err(ServiceError::Conflict("Email already registered".to_string()));
        }
        let user = User::from_request(request);
        let inserted = self.user_repo.insert(user).await;
        match &inserted {
            Ok(u) => info!(user_id = %u.id, "User registered"),
            Err(e) => error!("Failed to insert user: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: String, password: String) -> Result<User, ServiceError> {
        info!("User login attempt");
        match self.user_repo.find_by_credentials(&email, &password).await? {
            Some(user) => {
                info!(user_id = %user.id, "User logged in");
                Ok(user)
            }
            None => {
                warn!("Invalid credentials");
                Err(ServiceError::Unauthorized("Invalid credentials".to_string()))
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: &str) -> Result<UserWithoutPassword, ServiceError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }

    #[instrument(skip(self, update))]
    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<UserWithoutPassword, ServiceError> {
        // Checked before the lookup, so an empty body is rejected even for unknown ids
        if update.is_empty() {
            return Err(ServiceError::InvalidInput("No fields to update".to_string()));
        }
        self.user_repo
            .update_profile(id, &update)
            .await
            .map_err(|e| match ServiceError::from(e) {
                ServiceError::NotFound(_) => ServiceError::NotFound("User not found".to_string()),
                other => other,
            })?;
        info!("User profile updated");
        self.get_user(id).await
    }

    #[instrument(skip(self))]
    async fn list_alumni(&self) -> Result<Vec<UserWithoutPassword>, ServiceError> {
        let users = self.user_repo.list(LIST_LIMIT).await?;
        Ok(users.into_iter().map(UserWithoutPassword::from).collect())
    }
}
