pub mod donation_service;
pub mod event_service;
pub mod feedback_service;
pub mod message_service;
pub mod stats_service;
pub mod user_service;
