mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{MongoUserRepository, UserRepository};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("❌ {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!("🚀 Starting Users Service...");
    log::info!("📊 Database: {}", config.database_name);

    let db = database::MongoDB::connect(&config).await.map_err(|e| {
        log::error!("❌ {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let users: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&db));
    let users = web::Data::from(users);

    let bind_address = config.bind_address();
    log::info!("🌐 Server listening on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/api-doc/", bind_address);
    log::info!("📄 OpenAPI spec at: http://{}/api-docs/openapi.json", bind_address);

    let result = HttpServer::new(move || {
        App::new()
            .app_data(users.clone())
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(&bind_address)?
    .run()
    .await;

    db.shutdown().await;
    result
}
