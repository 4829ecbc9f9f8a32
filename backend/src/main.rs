mod config;
mod db;
mod error;
mod services;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if let Err(e) = db::init_schema(&config.database) {
        error!("Cannot prepare database {}: {}", config.database.display(), e);
        return Err(std::io::Error::other(e));
    }
    std::fs::create_dir_all(&config.templates_dir)?;

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!(
        "Server running at {} (database {}, templates {})",
        url,
        config.database.display(),
        config.templates_dir.display()
    );

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .configure(services::configure(config.templates_dir.clone()))
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}
