/**
 * User Model
 *
 * The only entity with invariants: email is unique across all users and the
 * record holds a password hash, never the raw password. Users are created
 * at registration and only read afterwards.
 */

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role carried by a user and echoed in session tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "instructor" => Ok(Self::Instructor),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// User record as persisted
#[derive(Clone)]
pub struct User {
    /// Internal identifier, never placed in tokens
    pub id: Uuid,
    /// Display name
    pub name: Option<String>,
    /// Avatar reference (opaque)
    pub image: Option<String>,
    /// Login handle
    pub user_name: Option<String>,
    /// Unique email address
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Role, `student` for every self-registered account
    pub role: Role,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh student record
    pub fn new_student(
        name: Option<String>,
        image: Option<String>,
        user_name: Option<String>,
        email: String,
        password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            image,
            user_name,
            email,
            password_hash,
            role: Role::Student,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("image", &self.image)
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}
