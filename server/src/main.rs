mod config;
mod routes;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use config::ServerConfig;
use routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    if let Err(e) = config.validate() {
        log::error!("{}. Build the frontend with `trunk build` first.", e);
        return Err(std::io::Error::other(e.to_string()));
    }

    let frontend_dir = config.frontend_dir.clone();
    let bind_address = config.bind_address();

    log::info!("Serving frontend bundle from {}", frontend_dir.display());
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
