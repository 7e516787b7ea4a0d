//! Immutable profile records and partial updates.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DrillError, DrillResult};

/// A user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Parse a profile from its JSON object form.
    pub fn from_json(input: &str) -> DrillResult<Self> {
        serde_json::from_str(input).map_err(DrillError::InvalidProfile)
    }
}

/// A partial update; absent fields leave the original value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }
}

/// Shallow-merge `updates` over `profile`, returning a new profile.
///
/// Values are taken as given; a negative age is not rejected.
pub fn update_profile(profile: &Profile, updates: ProfileUpdate) -> Profile {
    debug!(
        name = updates.name.is_some(),
        age = updates.age.is_some(),
        email = updates.email.is_some(),
        "Applying profile update"
    );

    Profile {
        name: updates.name.unwrap_or_else(|| profile.name.clone()),
        age: updates.age.unwrap_or(profile.age),
        email: updates.email.unwrap_or_else(|| profile.email.clone()),
    }
}
