use bson::{doc, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Falls back to the default institution when absent
    pub university: Option<String>,
    pub passout_year: i32,
    pub location: String,
    pub company: String,
    pub domain: String,
    pub phone: String,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial profile update. Absent and `null` fields are both left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub full_name: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub domain: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
}

impl UserUpdate {
    /// Supplied fields as `(name, value)` pairs, in declaration order
    pub fn present_fields(&self) -> Vec<(&'static str, &String)> {
        [
            ("full_name", &self.full_name),
            ("location", &self.location),
            ("company", &self.company),
            ("domain", &self.domain),
            ("phone", &self.phone),
            ("profile_picture", &self.profile_picture),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// The `$set` body holding only the supplied fields
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        for (name, value) in self.present_fields() {
            set.insert(name, value.as_str());
        }
        doc! { "$set": set }
    }
}
