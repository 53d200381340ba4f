use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};

use crate::dto::user_dto::{LoginRequest, RegisterRequest, UserUpdate};
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;

// Register
pub async fn register_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let user = service.register(payload).await?;
    Ok(Json(user))
}

// Login
pub async fn login_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let user = service.login(payload.email, payload.password).await?;
    Ok(Json(user))
}

pub async fn get_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let user = service.get_user(&user_id).await?;
    Ok(Json(user))
}

pub async fn update_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(user_id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> Result<impl IntoResponse, HandlerError> {
    let user = service.update_user(&user_id, payload).await?;
    Ok(Json(user))
}

pub async fn list_alumni_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let alumni = service.list_alumni().await?;
    Ok(Json(alumni))
}
