use crate::result::{result_data, result_msg};
use actix_web::{Responder, get, post, web};
use biz_service::biz_services::client_service::ClientService;
use biz_service::entitys::client_entity::ClientForm;
use common::ClientId;
use common::errors::AppError;
use common::util::date_util;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(lista_clienti);
    cfg.service(aggiungi_cliente);
    cfg.service(modifica_cliente);
    cfg.service(modifica_cliente_submit);
    cfg.service(elimina_cliente);
}

/// Internal client list, newest first, with birthday countdowns and the
/// "birthdays today" names used by the reminders banner.
#[utoipa::path(
    get,
    path = "/clienti",
    responses(
        (status = 200, description = "Client list with birthday overview", body = String)
    )
)]
#[get("/clienti")]
pub async fn lista_clienti(client_service: web::Data<ClientService>) -> Result<impl Responder, AppError> {
    let overview = client_service.list_with_birthdays(date_util::today())?;
    Ok(web::Json(result_data(overview)))
}

/// Quick add from the internal list page.
#[post("/aggiungi")]
pub async fn aggiungi_cliente(
    form: web::Form<ClientForm>,
    client_service: web::Data<ClientService>,
) -> Result<impl Responder, AppError> {
    client_service.add(&form)?;
    Ok(web::Json(result_msg("Cliente aggiunto con successo!")))
}

/// Loads one record for the edit form.
#[get("/modifica/{id}")]
pub async fn modifica_cliente(
    path: web::Path<ClientId>,
    client_service: web::Data<ClientService>,
) -> Result<impl Responder, AppError> {
    let cliente = client_service.get(path.into_inner())?;
    Ok(web::Json(result_data(cliente)))
}

/// Saves an edit. The submitted form rewrites every column of the row, so
/// the edit page always posts the complete record back.
#[post("/modifica/{id}")]
pub async fn modifica_cliente_submit(
    path: web::Path<ClientId>,
    form: web::Form<ClientForm>,
    client_service: web::Data<ClientService>,
) -> Result<impl Responder, AppError> {
    client_service.update(path.into_inner(), &form)?;
    Ok(web::Json(result_msg("Cliente modificato con successo!")))
}

#[post("/elimina/{id}")]
pub async fn elimina_cliente(
    path: web::Path<ClientId>,
    client_service: web::Data<ClientService>,
) -> Result<impl Responder, AppError> {
    client_service.delete(path.into_inner())?;
    Ok(web::Json(result_msg("Cliente eliminato con successo!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use tempfile::TempDir;

    fn base_form() -> ClientForm {
        ClientForm {
            nome_cliente: "Mario".into(),
            cognome_cliente: "Rossi".into(),
            telefono_cliente: "3331234567".into(),
            metri_quadri: "100".into(),
            prezzo_ricercato: "250000".into(),
            ..ClientForm::default()
        }
    }

    fn temp_service(dir: &TempDir) -> ClientService {
        let service = ClientService::new(dir.path().join("clienti.db"));
        service.dao.init_schema().unwrap();
        service
    }

    #[actix_web::test]
    async fn test_add_edit_delete_cycle() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(temp_service(&dir)))
                .service(aggiungi_cliente)
                .service(modifica_cliente)
                .service(modifica_cliente_submit)
                .service(elimina_cliente),
        )
        .await;

        let req = test::TestRequest::post().uri("/aggiungi").set_form(base_form()).to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let check = ClientService::new(dir.path().join("clienti.db"));
        let id = check.dao.list_all().unwrap()[0].id;

        let req = test::TestRequest::get().uri(&format!("/modifica/{}", id)).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["nome"], "Mario");

        let mut edited = base_form();
        edited.cognome_cliente = "Bianchi".into();
        let req =
            test::TestRequest::post().uri(&format!("/modifica/{}", id)).set_form(edited).to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
        assert_eq!(check.get(id).unwrap().record.cognome, "Bianchi");

        let req = test::TestRequest::post().uri(&format!("/elimina/{}", id)).to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
        assert!(matches!(check.get(id), Err(AppError::NotFound)));
    }

    #[actix_web::test]
    async fn test_edit_of_missing_id_is_404() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new().app_data(web::Data::new(temp_service(&dir))).service(modifica_cliente_submit),
        )
        .await;
        let req = test::TestRequest::post().uri("/modifica/999").set_form(base_form()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_reports_birthdays() {
        let dir = TempDir::new().unwrap();
        let service = temp_service(&dir);
        let mut form = base_form();
        // born today: the list must flag it
        form.data_nascita = date_util::today().format("%Y-%m-%d").to_string();
        service.add(&form).unwrap();

        let app =
            test::init_service(App::new().app_data(web::Data::new(service)).service(lista_clienti)).await;
        let req = test::TestRequest::get().uri("/clienti").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["num_compleanni"], 1);
        assert_eq!(body["data"]["clienti"][0]["compleanno_oggi"], true);
        assert_eq!(body["data"]["clienti"][0]["giorni_mancanti"], 0);
    }
}
