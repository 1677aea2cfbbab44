//! Authentication request and response bodies.

use std::fmt;

use bistro::session::User;
use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Account creation request body.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Successful login or registration response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
}

/// Error body returned alongside validation failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use bistro::session::Role;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn debug_output_hides_passwords() {
        let credentials = Credentials::new("jo@example.com", "hunter2");
        let registration = Registration {
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            email: "jo@example.com".to_string(),
            phone: "0600000000".to_string(),
            address: "1 rue de la Paix".to_string(),
            password: "hunter2".to_string(),
        };

        assert!(!format!("{credentials:?}").contains("hunter2"));
        assert!(!format!("{registration:?}").contains("hunter2"));
    }

    #[test]
    fn registration_uses_camel_case_fields() -> TestResult {
        let registration = Registration {
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            email: "jo@example.com".to_string(),
            phone: "0600000000".to_string(),
            address: "1 rue de la Paix".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_value(&registration)?;

        assert_eq!(json["firstName"], "Jo");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["password"], "secret");

        Ok(())
    }

    #[test]
    fn parses_auth_response() -> TestResult {
        let response: AuthResponse = serde_json::from_str(
            r#"{"user":{"_id":"u1","firstName":"Ada","lastName":"L","email":"ada@example.com","role":"admin"}}"#,
        )?;

        assert_eq!(response.user.id.as_str(), "u1");
        assert_eq!(response.user.role, Role::Admin);

        Ok(())
    }
}
