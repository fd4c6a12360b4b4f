use std::io;

use dotenvy::dotenv;
use sales_service::{build_server, create_pool, sqlite_service, Config};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let pool = create_pool(&config.db).map_err(io::Error::other)?;

    log::info!(
        "Starting server at http://{}:{} (database {})",
        config.host,
        config.port,
        config.db.database_url
    );

    build_server(sqlite_service(pool), &config.host, config.port)?.await
}
