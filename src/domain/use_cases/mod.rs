pub mod auth;
pub mod catalog;
pub mod extractors;
pub mod inquiry;
