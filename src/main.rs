use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod models;
mod views;

use config::Config;
use db::Database;

pub struct AppState {
    pub db: Arc<Database>,
    pub templates: tera::Tera,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notepost v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let port = config.port;

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).expect("Failed to initialize database");
    let db = Arc::new(db);

    let templates = views::build_templates().expect("Failed to load templates");

    log::info!("Starting Notepost server on port {}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
                templates: templates.clone(),
            }))
            .wrap(Logger::default())
            .configure(controllers::health::config_routes)
            .configure(controllers::posts::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
