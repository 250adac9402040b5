use actix_web::web;

use crate::handlers::home::home;

mod auth;
mod admin;
mod portfolio;
mod inquiries;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(portfolio::config_routes)
            .configure(inquiries::config_routes)
            .configure(auth::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
