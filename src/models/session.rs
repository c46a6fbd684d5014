//! Session and authentication models

use serde::{Deserialize, Serialize};

/// User role as issued by the server at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "STUDENT")]
    Student,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    /// The wire/storage spelling of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Admin => "ADMIN",
        }
    }

    /// Parse the stored spelling back into a role
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "STUDENT" => Some(Role::Student),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated session: the opaque bearer token plus the role it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

/// Body for `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Payload of a successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub role: Role,
}

impl From<AuthData> for Session {
    fn from(data: AuthData) -> Self {
        Session {
            token: data.token,
            role: data.role,
        }
    }
}
