use crate::result::AppState;
use actix_web::web;

pub mod auth_handler;
pub mod client_handler;
pub mod pdf_handler;
pub mod signup_handler;
pub mod swagger_handler;
pub mod upload_handler;
pub use auth_handler::*;
pub use client_handler::*;

pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    cfg.app_data(state);
    signup_handler::configure(cfg);
    client_handler::configure(cfg);
    auth_handler::configure(cfg);
    pdf_handler::configure(cfg);
    upload_handler::configure(cfg);
    swagger_handler::configure(cfg);
    // uploaded assets (agency logo) served back to the public pages
    cfg.service(actix_files::Files::new("/static", "./static"));
}
