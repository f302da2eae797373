use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use vendas_api::models::config::ServerConfig;
use vendas_api::repository::InMemoryRepository;
use vendas_api::routes;
use vendas_api::storage::LocalImageStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load server configuration: {e}");
            std::process::exit(1);
        }
    };

    let store = LocalImageStore::new(&server_config.upload_dir);
    if let Err(e) = store.ensure_directory() {
        log::error!(
            "Failed to create upload directory {}: {e}",
            store.directory().display()
        );
        std::process::exit(1);
    }

    let repo = InMemoryRepository::new();

    log::info!(
        "Servidor rodando na porta {} (uploads em {})",
        server_config.port,
        store.directory().display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(store.clone()))
            .configure(|cfg| routes::configure(cfg, &store))
    })
    .bind((server_config.address.as_str(), server_config.port))?
    .run()
    .await
}
