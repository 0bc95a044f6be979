mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
#[cfg(test)]
mod test_support;
mod validators;

use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;

use crate::config::CONFIG;
use crate::services::TradieService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(io::Error::other)?;

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(io::Error::other)?;
    info!("Connected to MongoDB successfully!");

    // Initialize services
    let tradie_service = TradieService::new(&db);
    tradie_service
        .ensure_indexes()
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    let tradie_service = web::Data::new(tradie_service);

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(tradie_service.clone())
            .app_data(routes::query_config())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
