use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use biz_service::biz_services;
use biz_service::repository::client_repository::ClientRepository;
use common::config::AppConfig;
use log::{LevelFilter, warn};
use std::str::FromStr;
use web_main::handlers;
use web_main::middleware::auth_middleware::AuthMiddleware;
use web_main::result::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // read the configuration file
    let app_state = AppState::new();
    // initialize logging
    init_log(&app_state.config);
    let server = app_state.config.get_server();
    let address_and_port = format!("{}:{}", server.host, server.port);
    warn!("Starting server on {}", address_and_port);

    // make sure the clienti table exists before accepting requests
    let repository = ClientRepository::new(app_state.config.get_database().path);
    repository.init_schema().expect("Failed to initialize database schema");

    let session_key = Key::derive_from(app_state.config.get_sys().session_secret.as_bytes());
    let config = app_state.config.clone();
    let web_state = web::Data::new(app_state.clone());
    HttpServer::new(move || {
        App::new()
            // registration order: Logger outermost, then the session decoder,
            // then the gate that reads it
            .wrap(AuthMiddleware)
            .wrap(SessionMiddleware::new(CookieSessionStore::default(), session_key.clone()))
            .wrap(Logger::default())
            // services
            .configure(|cfg| {
                biz_services::configure(cfg, &config);
            })
            // handlers
            .configure(|cfg| {
                handlers::configure(cfg, web_state.clone());
            })
    })
    .keep_alive(actix_web::http::KeepAlive::Timeout(
        std::time::Duration::from_secs(600),
    ))
    .bind(address_and_port)?
    .run()
    .await
}

pub fn init_log(config: &AppConfig) {
    let mut builder = env_logger::Builder::new();
    let log_level = config.get_sys().log_level;
    builder.filter(None, LevelFilter::from_str(&log_level).unwrap_or(LevelFilter::Info));
    builder.init();
}
