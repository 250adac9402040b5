use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Only the name is validated; the image URL is stored as given.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: String,

    pub image_url: Option<String>,
}

impl NewCategory {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.image_url = self.image_url.and_then(|url| {
            let url = url.trim().to_string();
            if url.is_empty() { None } else { Some(url) }
        });
        self
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: String,

    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

/// Catalog listing entry: a category with its client-side computed
/// project count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: Category,
    pub project_count: usize,
}
