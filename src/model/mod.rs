pub mod donation;
pub mod event;
pub mod event_registration;
pub mod feedback;
pub mod message;
pub mod user;
