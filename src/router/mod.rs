pub mod donation_router;
pub mod event_router;
pub mod feedback_router;
pub mod message_router;
pub mod stats_router;
pub mod user_router;
