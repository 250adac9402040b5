use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::inquiry::{Inquiry, NewInquiry},
    errors::AppError,
    repositories::sqlx_repo::SqlxInquiryRepo,
};

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Uuid, AppError>;
    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, AppError>;
    async fn count_inquiries_by_phone(&self, phone: &str) -> Result<i64, AppError>;
    async fn delete_inquiry(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxInquiryRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxInquiryRepo { pool }
    }
}

#[async_trait]
impl InquiryRepository for SqlxInquiryRepo {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO inquiries (
                full_name, governorate, video_type,
                video_duration, expected_price, phone
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&inquiry.full_name)
        .bind(&inquiry.governorate)
        .bind(&inquiry.video_type)
        .bind(inquiry.video_duration)
        .bind(inquiry.expected_price)
        .bind(&inquiry.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, AppError> {
        let inquiries = sqlx::query_as::<_, Inquiry>(
            r#"SELECT * FROM inquiries ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(inquiries)
    }

    async fn count_inquiries_by_phone(&self, phone: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM inquiries WHERE phone = $1"#,
        )
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn delete_inquiry(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM inquiries WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Inquiry not found".into()));
        }

        Ok(())
    }
}
