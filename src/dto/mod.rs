pub mod donation_dto;
pub mod event_dto;
pub mod feedback_dto;
pub mod message_dto;
pub mod stats_dto;
pub mod user_dto;
