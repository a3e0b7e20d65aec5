use crate::result::{result, result_error_msg, result_msg};
use actix_session::Session;
use actix_web::{Responder, post, web};
use biz_service::biz_services::auth_service::AuthService;
use common::errors::AppError;
use common::util::common_utils::build_id;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Session entry set on login; the middleware only checks its presence.
pub const SESSION_LOGIN_KEY: &str = "logged_in";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth_login);
    cfg.service(auth_logout);
}

#[derive(Serialize, Deserialize, Debug, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "Nome utente mancante"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password mancante"))]
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login outcome", body = String)
    )
)]
#[post("/auth/login")]
pub async fn auth_login(
    dto: web::Form<LoginDto>,
    session: Session,
    auth_service: web::Data<AuthService>,
) -> Result<impl Responder, AppError> {
    match dto.validate() {
        Ok(_) => {
            if !auth_service.verify(&dto.username, &dto.password) {
                return Ok(web::Json(result_error_msg("Nome utente o password errati")));
            }
            session
                .insert(SESSION_LOGIN_KEY, build_id())
                .map_err(|e| AppError::Internal(e.to_string()))?;
            Ok(web::Json(result_msg("Accesso effettuato")))
        }
        Err(e) => Ok(web::Json(result_error_msg(&e.to_string()))),
    }
}

#[post("/auth/logout")]
async fn auth_logout(session: Session) -> Result<impl Responder, AppError> {
    session.purge();
    Ok(web::Json(result()))
}
