use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::project::{NewProject, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: &NewProject) -> Result<Uuid, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn list_projects_by_category(&self, category_id: &Uuid) -> Result<Vec<Project>, AppError>;
    async fn update_project(&self, id: &Uuid, project: &UpdateProjectRequest) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, project: &NewProject) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO projects (
                brand_name, client_name, project_type, client_country,
                duration, year, video_url, description, software, category_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&project.brand_name)
        .bind(&project.client_name)
        .bind(&project.project_type)
        .bind(&project.client_country)
        .bind(&project.duration)
        .bind(&project.year)
        .bind(&project.video_url)
        .bind(&project.description)
        .bind(&project.software)
        .bind(project.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"SELECT * FROM projects WHERE id = $1"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"SELECT * FROM projects ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_projects_by_category(&self, category_id: &Uuid) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"SELECT * FROM projects WHERE category_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn update_project(&self, id: &Uuid, project: &UpdateProjectRequest) -> Result<Project, AppError> {
        // category_id and created_at are never touched on update
        let updated = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                brand_name = $1,
                client_name = $2,
                project_type = $3,
                client_country = $4,
                duration = $5,
                year = $6,
                video_url = $7,
                description = $8,
                software = $9
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&project.brand_name)
        .bind(&project.client_name)
        .bind(&project.project_type)
        .bind(&project.client_country)
        .bind(&project.duration)
        .bind(&project.year)
        .bind(&project.video_url)
        .bind(&project.description)
        .bind(&project.software)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM projects WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        Ok(())
    }
}
