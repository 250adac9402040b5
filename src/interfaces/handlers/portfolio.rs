use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::{
        category::{NewCategory, UpdateCategoryRequest},
        project::{NewProject, UpdateProjectRequest},
    },
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

// ── Public views ──────────────────────────────────────────────────

#[instrument(skip(state))]
pub async fn get_catalog(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let catalog = state.catalog_handler.get_catalog().await?;
    Ok(HttpResponse::Ok().json(catalog))
}

#[instrument(skip(state))]
pub async fn get_category_detail(
    category_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let detail = state.catalog_handler.get_category_detail(&category_id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

// ── Admin: dashboard listing ──────────────────────────────────────

#[instrument(skip(_claims, state))]
pub async fn get_dashboard_listing(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let listing = state.catalog_handler.get_dashboard_listing().await?;
    Ok(HttpResponse::Ok().json(listing))
}

// ── Admin: categories ─────────────────────────────────────────────

#[instrument(skip(_claims, state, data))]
pub async fn create_category(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewCategory>,
) -> Result<impl Responder, AppError> {
    let response = state.catalog_handler.create_category(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, category_id, state, data))]
pub async fn update_category(
    _claims: AdminClaims,
    category_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<UpdateCategoryRequest>,
) -> Result<impl Responder, AppError> {
    let updated = state
        .catalog_handler
        .update_category(&category_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(_claims, category_id, state))]
pub async fn delete_category(
    _claims: AdminClaims,
    category_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.catalog_handler.delete_category(&category_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ── Admin: projects ───────────────────────────────────────────────

#[instrument(skip(_claims, state, data))]
pub async fn create_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewProject>,
) -> Result<impl Responder, AppError> {
    let response = state.catalog_handler.create_project(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, project_id, state, data))]
pub async fn update_project(
    _claims: AdminClaims,
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let updated = state
        .catalog_handler
        .update_project(&project_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(_claims, project_id, state))]
pub async fn delete_project(
    _claims: AdminClaims,
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.catalog_handler.delete_project(&project_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
