use serde::{Deserialize, Serialize};

use crate::dto::user_dto::RegisterRequest;
use crate::model::donation::Donation;
use crate::util::clock::{new_id, utc_now_iso};

pub const DEFAULT_UNIVERSITY: &str = "Global Horizon University";

/// A registered alumnus as stored in the `users` collection.
///
/// The password is kept in plain text and is part of the register/login
/// responses; every other read goes through [`UserWithoutPassword`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub university: String,
    pub passout_year: i32,
    pub location: String,
    pub company: String,
    pub domain: String,
    pub phone: String,
    pub profile_picture: Option<String>,
    /// Event ids, kept duplicate free
    #[serde(default)]
    pub registered_events: Vec<String>,
    /// Copies of the donations made by this user, in insertion order
    #[serde(default)]
    pub donations: Vec<Donation>,
    pub created_at: String,
}

impl User {
    pub fn from_request(request: RegisterRequest) -> Self {
        User {
            id: new_id(),
            full_name: request.full_name,
            email: request.email,
            password: request.password,
            university: request
                .university
                .unwrap_or_else(|| DEFAULT_UNIVERSITY.to_string()),
            passout_year: request.passout_year,
            location: request.location,
            company: request.company,
            domain: request.domain,
            phone: request.phone,
            profile_picture: request.profile_picture,
            registered_events: Vec::new(),
            donations: Vec::new(),
            created_at: utc_now_iso(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithoutPassword {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub university: String,
    pub passout_year: i32,
    pub location: String,
    pub company: String,
    pub domain: String,
    pub phone: String,
    pub profile_picture: Option<String>,
    pub registered_events: Vec<String>,
    pub donations: Vec<Donation>,
    pub created_at: String,
}

impl From<User> for UserWithoutPassword {
    fn from(user: User) -> Self {
        UserWithoutPassword {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            university: user.university,
            passout_year: user.passout_year,
            location: user.location,
            company: user.company,
            domain: user.domain,
            phone: user.phone,
            profile_picture: user.profile_picture,
            registered_events: user.registered_events,
            donations: user.donations,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            university: None,
            passout_year: 2015,
            location: "London".to_string(),
            company: "Analytical Engines".to_string(),
            domain: "Mathematics".to_string(),
            phone: "555-0100".to_string(),
            profile_picture: None,
        }
    }

    #[test]
    fn test_from_request_defaults() {
        let user = User::from_request(request());
        assert_eq!(user.university, DEFAULT_UNIVERSITY);
        assert!(user.registered_events.is_empty());
        assert!(user.donations.is_empty());
        assert!(!user.id.is_empty());
        assert!(!user.created_at.is_empty());
    }

    #[test]
    fn test_without_password_serialization() {
        let user = User::from_request(request());
        let json = serde_json::to_value(UserWithoutPassword::from(user.clone())).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "ada@example.com");

        let full = serde_json::to_value(user).unwrap();
        assert_eq!(full["password"], "secret");
    }
}
