use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use crate::handler::user_handler::{
    get_user_handler,
    list_alumni_handler,
    login_handler,
    register_handler,
    update_user_handler,
};
use crate::service::user_service::UserServiceImpl;

pub fn user_router(service: Arc<UserServiceImpl>) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/user/{id}", get(get_user_handler).put(update_user_handler))
        .route("/alumni", get(list_alumni_handler))
        .with_state(service)
}
