use crate::result::result_msg;
use actix_web::{Responder, post, web};
use biz_service::biz_services::client_service::ClientService;
use biz_service::entitys::client_entity::ClientForm;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(iscrivi_nuovo_cliente);
}

/// Public lead-intake form. The only route that writes without a session;
/// it additionally requires the privacy consent flag.
#[utoipa::path(
    post,
    path = "/iscrivi",
    request_body = ClientForm,
    responses(
        (status = 200, description = "Sign-up accepted", body = String),
        (status = 400, description = "Consent missing or a field failed validation", body = String)
    )
)]
#[post("/iscrivi")]
pub async fn iscrivi_nuovo_cliente(
    form: web::Form<ClientForm>,
    client_service: web::Data<ClientService>,
) -> Result<impl Responder, AppError> {
    client_service.signup(&form)?;
    Ok(web::Json(result_msg("Iscrizione completata con successo! Verrai ricontattato a breve.")))
}
