use actix_web::web;

use crate::handlers::{auth, inquiries, portfolio, system::admin_health_check};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(admin_health_check)
            .service(auth::admin_dashboard)

            .service(
                web::resource("/portfolio")
                    .route(web::get().to(portfolio::get_dashboard_listing))
            )
            .service(
                web::resource("/categories")
                    .route(web::post().to(portfolio::create_category))
            )
            .service(
                web::resource("/categories/{category_id}")
                    .route(web::put().to(portfolio::update_category))
                    .route(web::delete().to(portfolio::delete_category))
            )
            .service(
                web::resource("/projects")
                    .route(web::post().to(portfolio::create_project))
            )
            .service(
                web::resource("/projects/{project_id}")
                    .route(web::put().to(portfolio::update_project))
                    .route(web::delete().to(portfolio::delete_project))
            )

            .service(
                web::resource("/inquiries")
                    .route(web::get().to(inquiries::list_inquiries))
            )
            .service(
                web::resource("/inquiries/stream")
                    .route(web::get().to(inquiries::stream_inquiries))
            )
            .service(
                web::resource("/inquiries/{inquiry_id}")
                    .route(web::delete().to(inquiries::delete_inquiry))
            )
    );
}
