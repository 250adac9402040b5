use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use videofolio_backend::entities::category::{Category, NewCategory, UpdateCategoryRequest};
use videofolio_backend::entities::project::{NewProject, Project, UpdateProjectRequest};
use videofolio_backend::errors::AppError;
use videofolio_backend::use_cases::catalog::CatalogHandler;

mock! {
    pub CategoryRepo {}

    #[async_trait::async_trait]
    impl videofolio_backend::repositories::category::CategoryRepository for CategoryRepo {
        async fn create_category(&self, category: &NewCategory) -> Result<Uuid, AppError>;
        async fn get_category_by_id(&self, id: &Uuid) -> Result<Category, AppError>;
        async fn list_categories(&self) -> Result<Vec<Category>, AppError>;
        async fn update_category(&self, id: &Uuid, category: &UpdateCategoryRequest) -> Result<Category, AppError>;
        async fn delete_category(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl videofolio_backend::repositories::project::ProjectRepository for ProjectRepo {
        async fn create_project(&self, project: &NewProject) -> Result<Uuid, AppError>;
        async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
        async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn list_projects_by_category(&self, category_id: &Uuid) -> Result<Vec<Project>, AppError>;
        async fn update_project(&self, id: &Uuid, project: &UpdateProjectRequest) -> Result<Project, AppError>;
        async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

fn sample_category(name: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        image_url: None,
        created_at: Utc::now(),
    }
}

fn sample_project(brand: &str, category_id: Uuid) -> Project {
    Project {
        id: Uuid::new_v4(),
        brand_name: brand.to_string(),
        client_name: None,
        project_type: None,
        client_country: None,
        duration: None,
        year: None,
        video_url: None,
        description: None,
        software: vec!["Premiere Pro".to_string()],
        category_id,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn catalog_counts_projects_per_category() {
    let commercials = sample_category("Commercials");
    let reels = sample_category("Reels");

    let projects = vec![
        sample_project("Brand A", commercials.id),
        sample_project("Brand B", commercials.id),
        sample_project("Brand C", reels.id),
    ];

    let mut category_repo = MockCategoryRepo::new();
    let listed = vec![commercials.clone(), reels.clone()];
    category_repo
        .expect_list_categories()
        .returning(move || Ok(listed.clone()));

    let mut project_repo = MockProjectRepo::new();
    project_repo
        .expect_list_projects()
        .returning(move || Ok(projects.clone()));

    let handler = CatalogHandler::new(category_repo, project_repo);

    let catalog = handler.get_catalog().await.unwrap();
    assert_eq!(catalog.categories.len(), 2);
    assert_eq!(catalog.categories[0].project_count, 2);
    assert_eq!(catalog.categories[1].project_count, 1);
}

#[tokio::test]
async fn deleting_a_category_does_not_touch_its_projects() {
    let category_id = Uuid::new_v4();

    let mut category_repo = MockCategoryRepo::new();
    category_repo
        .expect_delete_category()
        .withf(move |id| *id == category_id)
        .returning(|_| Ok(()));

    let mut project_repo = MockProjectRepo::new();
    project_repo.expect_delete_project().times(0);

    let handler = CatalogHandler::new(category_repo, project_repo);
    assert!(handler.delete_category(&category_id).await.is_ok());
}

#[tokio::test]
async fn orphaned_projects_drop_out_of_grouped_views() {
    let kept = sample_category("Kept");
    let orphan = sample_project("Orphan Brand", Uuid::new_v4());
    let attached = sample_project("Attached Brand", kept.id);

    let mut category_repo = MockCategoryRepo::new();
    let listed = vec![kept.clone()];
    category_repo
        .expect_list_categories()
        .returning(move || Ok(listed.clone()));

    let mut project_repo = MockProjectRepo::new();
    let projects = vec![orphan.clone(), attached.clone()];
    project_repo
        .expect_list_projects()
        .returning(move || Ok(projects.clone()));

    let handler = CatalogHandler::new(category_repo, project_repo);

    let listing = handler.get_dashboard_listing().await.unwrap();
    assert_eq!(listing.categories.len(), 1);
    assert_eq!(listing.categories[0].projects.len(), 1);
    assert_eq!(listing.categories[0].projects[0].brand_name, "Attached Brand");
}

#[tokio::test]
async fn category_detail_returns_only_its_projects() {
    let category = sample_category("Documentaries");
    let category_id = category.id;
    let project = sample_project("Doc Brand", category_id);

    let mut category_repo = MockCategoryRepo::new();
    let found = category.clone();
    category_repo
        .expect_get_category_by_id()
        .withf(move |id| *id == category_id)
        .returning(move |_| Ok(found.clone()));

    let mut project_repo = MockProjectRepo::new();
    let in_category = vec![project.clone()];
    project_repo
        .expect_list_projects_by_category()
        .withf(move |id| *id == category_id)
        .returning(move |_| Ok(in_category.clone()));

    let handler = CatalogHandler::new(category_repo, project_repo);

    let detail = handler.get_category_detail(&category_id).await.unwrap();
    assert_eq!(detail.category.id, category_id);
    assert_eq!(detail.projects.len(), 1);
}

#[tokio::test]
async fn missing_category_detail_is_not_found() {
    let mut category_repo = MockCategoryRepo::new();
    category_repo
        .expect_get_category_by_id()
        .returning(|_| Err(AppError::NotFound("Record not found".to_string())));

    let mut project_repo = MockProjectRepo::new();
    project_repo.expect_list_projects_by_category().times(0);

    let handler = CatalogHandler::new(category_repo, project_repo);

    let result = handler.get_category_detail(&Uuid::new_v4()).await;
    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Category not found"),
        _ => panic!("expected NotFound"),
    }
}

#[tokio::test]
async fn project_software_tags_are_deduped_before_storage() {
    let category_id = Uuid::new_v4();

    let mut project_repo = MockProjectRepo::new();
    project_repo
        .expect_create_project()
        .withf(|project| project.software == vec!["Premiere Pro", "After Effects"])
        .returning(|_| Ok(Uuid::new_v4()));

    let handler = CatalogHandler::new(MockCategoryRepo::new(), project_repo);

    let request = NewProject {
        brand_name: "Launch Film".to_string(),
        client_name: None,
        project_type: None,
        client_country: None,
        duration: None,
        year: None,
        video_url: None,
        description: None,
        software: vec![
            " Premiere Pro ".to_string(),
            "After Effects".to_string(),
            "Premiere Pro".to_string(),
            "  ".to_string(),
        ],
        category_id,
    };

    assert!(handler.create_project(request).await.is_ok());
}

#[tokio::test]
async fn blank_category_name_is_rejected() {
    let mut category_repo = MockCategoryRepo::new();
    category_repo.expect_create_category().times(0);

    let handler = CatalogHandler::new(category_repo, MockProjectRepo::new());

    let request = NewCategory {
        name: "   ".to_string(),
        image_url: None,
    };

    let result = handler.create_category(request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
