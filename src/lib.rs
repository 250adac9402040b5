use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, events};

use auth::jwt::JwtService;
use events::bus::EventBus;
use repositories::sqlx_repo::{SqlxCategoryRepo, SqlxInquiryRepo, SqlxProjectRepo, SqlxUserRepo};
use use_cases::{auth::AuthHandler, catalog::CatalogHandler, inquiry::InquiryHandler};

pub type AppAuthHandler = AuthHandler<SqlxUserRepo>;
pub type AppCatalogHandler = CatalogHandler<SqlxCategoryRepo, SqlxProjectRepo>;
pub type AppInquiryHandler = InquiryHandler<SqlxInquiryRepo>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub catalog_handler: AppCatalogHandler,
    pub inquiry_handler: AppInquiryHandler,
    pub events: Arc<EventBus>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let events = Arc::new(EventBus::new(config.event_bus_capacity));

        let auth_handler = AuthHandler::new(SqlxUserRepo::new(pool.clone()), jwt_service);
        let catalog_handler = CatalogHandler::new(
            SqlxCategoryRepo::new(pool.clone()),
            SqlxProjectRepo::new(pool.clone()),
        );
        let inquiry_handler = InquiryHandler::new(SqlxInquiryRepo::new(pool), events.clone());

        AppState {
            auth_handler,
            catalog_handler,
            inquiry_handler,
            events,
        }
    }
}
