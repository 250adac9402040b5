use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        category::{
            Category, CategoryCreatedResponse, CategoryWithCount, NewCategory,
            UpdateCategoryRequest,
        },
        project::{NewProject, Project, ProjectCreatedResponse, UpdateProjectRequest},
    },
    errors::AppError,
    repositories::{category::CategoryRepository, project::ProjectRepository},
};

/// The public catalog: categories newest-first, each with its project count.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<CategoryWithCount>,
}

/// One category with the projects that reference it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetailResponse {
    #[serde(flatten)]
    pub category: Category,
    pub projects: Vec<Project>,
}

/// Full dashboard listing: every category with its projects grouped under it.
#[derive(Debug, Serialize)]
pub struct DashboardListingResponse {
    pub categories: Vec<CategoryDetailResponse>,
}

pub struct CatalogHandler<C, P>
where
    C: CategoryRepository,
    P: ProjectRepository,
{
    pub category_repo: C,
    pub project_repo: P,
}

impl<C, P> CatalogHandler<C, P>
where
    C: CategoryRepository,
    P: ProjectRepository,
{
    pub fn new(category_repo: C, project_repo: P) -> Self {
        CatalogHandler { category_repo, project_repo }
    }

    // ── Categories ────────────────────────────────────────────────

    pub async fn create_category(
        &self,
        request: NewCategory,
    ) -> Result<CategoryCreatedResponse, AppError> {
        let request = request.normalized();
        request.validate()?;

        let id = self.category_repo.create_category(&request).await?;

        Ok(CategoryCreatedResponse {
            id,
            message: "Category created".to_string(),
        })
    }

    pub async fn update_category(
        &self,
        id: &Uuid,
        request: UpdateCategoryRequest,
    ) -> Result<Category, AppError> {
        request.validate()?;

        self.category_repo.update_category(id, &request).await
    }

    /// Deletes the category only. Its projects keep their category_id and
    /// become orphans; a category-filtered fetch still returns them.
    pub async fn delete_category(&self, id: &Uuid) -> Result<(), AppError> {
        self.category_repo
            .delete_category(id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Category not found".to_string()),
                _ => e,
            })
    }

    // ── Projects ──────────────────────────────────────────────────

    pub async fn create_project(
        &self,
        request: NewProject,
    ) -> Result<ProjectCreatedResponse, AppError> {
        let request = request.normalized();
        request.validate()?;

        let id = self.project_repo.create_project(&request).await?;

        Ok(ProjectCreatedResponse {
            id,
            message: "Project added".to_string(),
        })
    }

    pub async fn update_project(
        &self,
        id: &Uuid,
        request: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let request = request.normalized();
        request.validate()?;

        self.project_repo.update_project(id, &request).await
    }

    pub async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        self.project_repo
            .delete_project(id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Project not found".to_string()),
                _ => e,
            })
    }

    // ── Views ─────────────────────────────────────────────────────

    /// Public catalog view: both collections are fetched in full and counts
    /// are computed by scanning projects per category. Fine at tens to low
    /// hundreds of records.
    pub async fn get_catalog(&self) -> Result<CatalogResponse, AppError> {
        let categories = self.category_repo.list_categories().await?;
        let projects = self.project_repo.list_projects().await?;

        let categories = categories
            .into_iter()
            .map(|category| {
                let project_count = projects
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .count();
                CategoryWithCount { category, project_count }
            })
            .collect();

        Ok(CatalogResponse { categories })
    }

    /// Detail view for one category: the category plus its projects filtered
    /// by category_id equality.
    pub async fn get_category_detail(&self, id: &Uuid) -> Result<CategoryDetailResponse, AppError> {
        let category = self
            .category_repo
            .get_category_by_id(id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Category not found".to_string()),
                _ => e,
            })?;

        let projects = self.project_repo.list_projects_by_category(id).await?;

        Ok(CategoryDetailResponse { category, projects })
    }

    /// Admin listing: full re-fetch of both collections, projects grouped
    /// under their parent category in memory.
    pub async fn get_dashboard_listing(&self) -> Result<DashboardListingResponse, AppError> {
        let categories = self.category_repo.list_categories().await?;
        let projects = self.project_repo.list_projects().await?;

        let categories = categories
            .into_iter()
            .map(|category| {
                let projects = projects
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .cloned()
                    .collect();
                CategoryDetailResponse { category, projects }
            })
            .collect();

        Ok(DashboardListingResponse { categories })
    }
}
