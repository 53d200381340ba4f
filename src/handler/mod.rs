pub mod donation_handler;
pub mod event_handler;
pub mod feedback_handler;
pub mod message_handler;
pub mod stats_handler;
pub mod user_handler;
