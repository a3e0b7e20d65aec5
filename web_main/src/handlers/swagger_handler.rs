use crate::handlers::{auth_handler, client_handler, signup_handler};
use actix_web::{HttpResponse, Responder, get, web};
use biz_service::biz_services::client_service::{BirthdayOverview, ClientWithBirthday};
use biz_service::entitys::client_entity::{ClientForm, ClientRecord, Sesso, StoredClient};
use utoipa::OpenApi;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[derive(OpenApi)]
#[openapi(
    paths(
        signup_handler::iscrivi_nuovo_cliente,
        client_handler::lista_clienti,
        auth_handler::auth_login,
    ),
    components(schemas(
        ClientForm,
        ClientRecord,
        StoredClient,
        Sesso,
        ClientWithBirthday,
        BirthdayOverview,
        auth_handler::LoginDto,
    )),
    tags(
        (name = "clienti", description = "Client intake and management")
    )
)]
struct ApiDoc;

#[get("/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(ApiDoc::openapi().to_json().unwrap())
}
