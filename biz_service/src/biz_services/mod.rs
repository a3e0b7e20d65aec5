use crate::biz_services::auth_service::AuthService;
use crate::biz_services::client_service::ClientService;
use actix_web::web;
use common::config::AppConfig;

pub mod auth_service;
pub mod client_service;

pub fn configure(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    let client_service = ClientService::new(config.get_database().path);
    cfg.app_data(web::Data::new(client_service));

    let auth_service = AuthService::new(config.get_auth(), config.get_sys().md5_key);
    cfg.app_data(web::Data::new(auth_service));
}
