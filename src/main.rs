use actix_cors::Cors;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use portfolio_api::{
    db::postgres::{create_pool, lazy_pool},
    graceful_shutdown::shutdown_signal,
    middlewares::auth::AuthResolver,
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

    // The server boots even when the store is down: list endpoints serve
    // the sample collections until it comes back.
    let pool = match create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(
                "Content store unreachable at startup ({}), continuing with a lazy pool",
                e
            );
            match lazy_pool(&config.database_url) {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::error!("Invalid database URL: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::warn!("Skipping migrations, store unavailable: {}", e);
    }

    let app_state = web::Data::new(AppState::new(&config, pool));
    let server_addr = format!("{}:{}", config.host, config.port);
    let cors_origins = config.cors_origins();
    let worker_count = config.worker_count;

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);

        if cors_origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(app_state.clone())
            .wrap(AuthResolver)
            .wrap(cors)
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
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
