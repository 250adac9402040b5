use actix_web::web;

use crate::handlers::inquiries;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/inquiries")
            .route(web::post().to(inquiries::submit_inquiry))
    );
}
