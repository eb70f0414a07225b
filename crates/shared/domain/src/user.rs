//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// Records are created and updated outside this system; the lookup only
/// reads them. `email` is unique in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    /// Profile picture URL, stored as-is and never dereferenced
    pub profile_url: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            profile_url: profile_url.into(),
        }
    }
}

/// User response (wire shape returned to HTTP clients)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// Profile picture URL
    pub profile_url: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            profile_url: user.profile_url,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            profile_url: user.profile_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_camel_case_profile_url() {
        let user = User::new("a@x.com", "Ann", "http://img/ann.png");
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ann",
                "email": "a@x.com",
                "profileUrl": "http://img/ann.png",
            })
        );
    }

    #[test]
    fn response_keeps_every_field() {
        let user = User::new("a@x.com", "Ann", "http://img/ann.png");
        let response = UserResponse::from(user.clone());

        assert_eq!(response.name, user.name);
        assert_eq!(response.email, user.email);
        assert_eq!(response.profile_url, user.profile_url);
    }
}
