pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Config;
pub use db::{create_pool, DbConfig, DbPool};

use application::sales_service::SalesService;
use domain::ports::SalesRepository;
use infrastructure::sales_repo::DieselSalesRepository;
use openapi::ApiDoc;

/// The service shared by all workers. The repository behind it is chosen at
/// construction time.
pub type AppService = SalesService<Arc<dyn SalesRepository>>;

/// Build the service on top of the SQLite pool.
pub fn sqlite_service(pool: DbPool) -> AppService {
    let repo: Arc<dyn SalesRepository> = Arc::new(DieselSalesRepository::new(pool));
    SalesService::new(repo)
}

/// Register the API routes and the OpenAPI docs.
///
/// Segments may be empty so that blank parameters reach the handlers and are
/// rejected with a 400 instead of falling through to the router's 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/count", web::get().to(handlers::orders::count_orders))
        .service(
            web::scope("/orders")
                .route("/{id:[^/]*}", web::get().to(handlers::orders::get_order))
                .route(
                    "/{ordernumber:[^/]*}/{productcode:[^/]*}/{newprice:[^/]*}",
                    web::put().to(handlers::orders::update_price),
                ),
        )
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: AppService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(service);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((host.to_string(), port))?
    .run())
}
