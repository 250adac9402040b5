use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;
use uuid::Uuid;

use crate::domain::password::validate_password_strength;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserInsert {
    pub email: String,
    pub username: Option<String>,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = 8, message = "Must be at least 8 characters"),
        custom(
            function = "validate_password_strength",
            message = "Must include uppercase, number, and symbol"
        )
    )]
    pub password: String,
}

impl NewUser {
    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        UserInsert {
            email: self.email.clone(),
            username: None,
            password_hash,
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct NewUserResponse {
    pub id: Uuid,
    pub message: String,
}
