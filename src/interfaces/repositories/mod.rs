pub mod category;
pub mod inquiry;
pub mod project;
pub mod sqlx_repo;
pub mod user;
