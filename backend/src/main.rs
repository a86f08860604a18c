mod assets;
mod config;

use crate::config::ServerConfig;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url_clone) {
                warn!("Could not open browser at {}: {}", url_clone, err);
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .default_service(web::route().to(assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
