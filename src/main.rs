use actix_files as fs;
use actix_web::{web, App, HttpServer, middleware};
use env_logger::Env;
use log::info;
use dotenvy::dotenv;
mod markers;
mod routes;
mod settings;
mod templates;
mod views;
use settings::Settings;
use templates::Templates;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let templates = web::Data::new(Templates::from_settings(&settings));
    if settings.debug {
        info!("Watching {} for template changes", settings.template_dir.display());
    }

    info!("Server running at http://{}:{}", settings.host, settings.port);
    let server_settings = settings.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            // Log each incoming request with status, time, and size
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
            .app_data(templates.clone())
            .configure(|cfg| configure(cfg, &server_settings))
            .default_service(web::route().to(routes::not_found))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}

/// Static files under `STATIC_URL` and the markers app.
fn configure(cfg: &mut web::ServiceConfig, settings: &Settings) {
    cfg.service(
        fs::Files::new(settings.static_mount(), &settings.static_dir)
            .prefer_utf8(true)
            .use_etag(true)
            .use_last_modified(true)
    );
    markers::init_routes(cfg);
}
