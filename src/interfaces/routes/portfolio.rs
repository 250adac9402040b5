use actix_web::web;

use crate::handlers::portfolio;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/portfolio")
            .service(
                web::resource("/categories")
                    .route(web::get().to(portfolio::get_catalog))
            )
            .service(
                web::resource("/categories/{category_id}")
                    .route(web::get().to(portfolio::get_category_detail))
            )
    );
}
