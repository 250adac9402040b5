pub mod category;
pub mod inquiry;
pub mod project;
pub mod token;
pub mod user;
