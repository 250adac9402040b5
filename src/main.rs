use actix_cors::Cors;
use actix_web::{http, middleware::NormalizePath, web, App, HttpServer};
use videofolio_backend::{
    db::postgres::create_pool,
    graceful_shutdown::shutdown_signal,
    middlewares::auth::AuthMiddleware,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config, pool));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let allowed_origins = config.cors_origins();
    let worker_count = config.worker_count;

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .max_age(3600);

        if allowed_origins.iter().any(|o| o == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        // AuthMiddleware pins its inner service to a BoxBody response, so it
        // must sit innermost; Cors and NormalizePath rewrap the body outside
        // it, and OPTIONS preflight is answered before auth runs.
        App::new()
            .app_data(app_state.clone())
            .wrap(AuthMiddleware)
            .wrap(cors)
            .wrap(NormalizePath::trim())
            .configure(configure_routes)
    })
    .workers(worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
