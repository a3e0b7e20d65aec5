use crate::pdf;
use actix_web::{HttpResponse, get, web};
use biz_service::biz_services::client_service::ClientService;
use common::ClientId;
use common::errors::AppError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(scheda_cliente);
}

/// Client-sheet download. Unknown ids surface as not-found, like every
/// other by-id route.
#[get("/scheda/{id}")]
pub async fn scheda_cliente(
    path: web::Path<ClientId>,
    client_service: web::Data<ClientService>,
) -> Result<HttpResponse, AppError> {
    let cliente = client_service.get(path.into_inner())?;
    let body = pdf::client_sheet_pdf(&cliente)?;
    let file_name = pdf::sheet_file_name(&cliente.record.nome, &cliente.record.cognome);
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(("Content-Disposition", format!("attachment; filename=\"{}\"", file_name)))
        .body(body))
}
