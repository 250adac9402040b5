pub mod auth;
pub mod home;
pub mod inquiries;
pub mod json_error;
pub mod portfolio;
pub mod system;
