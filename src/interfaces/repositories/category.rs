use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::category::{Category, NewCategory, UpdateCategoryRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxCategoryRepo,
};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(&self, category: &NewCategory) -> Result<Uuid, AppError>;
    async fn get_category_by_id(&self, id: &Uuid) -> Result<Category, AppError>;
    async fn list_categories(&self) -> Result<Vec<Category>, AppError>;
    async fn update_category(&self, id: &Uuid, category: &UpdateCategoryRequest) -> Result<Category, AppError>;
    async fn delete_category(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxCategoryRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCategoryRepo { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepo {
    async fn create_category(&self, category: &NewCategory) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO categories (name, image_url)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&category.name)
        .bind(&category.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_category_by_id(&self, id: &Uuid) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"SELECT * FROM categories WHERE id = $1"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT * FROM categories ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn update_category(&self, id: &Uuid, category: &UpdateCategoryRequest) -> Result<Category, AppError> {
        // created_at is deliberately left untouched
        let updated = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET
                name = $1,
                image_url = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&category.name)
        .bind(&category.image_url)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_category(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM categories WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Category not found".into()));
        }

        Ok(())
    }
}
