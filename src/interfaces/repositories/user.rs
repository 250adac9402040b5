use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::user::{User, UserInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxUserRepo,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
}

impl SqlxUserRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxUserRepo { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (email, username, password_hash, is_admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("users_email_key") {
                    return AppError::Conflict("Email already registered".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(id)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
