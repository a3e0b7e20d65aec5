use crate::entitys::client_entity::{ClientForm, ClientRecord, StoredClient};
use crate::repository::client_repository::ClientRepository;
use crate::validation::client_rules::validate_client_form;
use chrono::NaiveDate;
use common::ClientId;
use common::errors::AppError;
use common::util::date_util::days_until_anniversary;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utoipa::ToSchema;

/// One list entry with its birthday countdown.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientWithBirthday {
    pub cliente: StoredClient,
    /// Days to the next primary-person birthday; absent when no usable date
    /// is stored.
    pub giorni_mancanti: Option<i64>,
    pub compleanno_oggi: bool,
}

/// Client list enriched for the reminders view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BirthdayOverview {
    pub clienti: Vec<ClientWithBirthday>,
    /// Display names of everyone (clients and beneficiaries) whose birthday
    /// is today.
    pub compleanni_oggi: Vec<String>,
    pub num_compleanni: usize,
}

/// Ties validation and persistence together for every entry point.
///
/// A submission rejected by the rules never reaches the store, and a store
/// error is reported as a storage failure, never as a validation one.
pub struct ClientService {
    pub dao: ClientRepository,
}

impl ClientService {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self { dao: ClientRepository::new(db_path) }
    }

    /// Public sign-up: consent gate first, then the shared add path.
    pub fn signup(&self, form: &ClientForm) -> Result<ClientId, AppError> {
        if form.privacy_accepted.is_empty() {
            return Err(AppError::ConsentMissing);
        }
        self.add(form)
    }

    /// Internal add (quick add and manual add share this path).
    pub fn add(&self, form: &ClientForm) -> Result<ClientId, AppError> {
        validate_client_form(form).map_err(AppError::Validation)?;
        let record = ClientRecord::from_form(form)?;
        self.dao.create(&record)
    }

    /// Edit: validates, then rewrites the full row.
    pub fn update(&self, id: ClientId, form: &ClientForm) -> Result<(), AppError> {
        validate_client_form(form).map_err(AppError::Validation)?;
        let record = ClientRecord::from_form(form)?;
        self.dao.update(id, &record)
    }

    pub fn get(&self, id: ClientId) -> Result<StoredClient, AppError> {
        self.dao.get(id)
    }

    pub fn delete(&self, id: ClientId) -> Result<(), AppError> {
        self.dao.delete(id)
    }

    /// Loads every record and decorates it with birthday countdowns for the
    /// given day, collecting whoever has their birthday today.
    pub fn list_with_birthdays(&self, today: NaiveDate) -> Result<BirthdayOverview, AppError> {
        let mut clienti = Vec::new();
        let mut compleanni_oggi = Vec::new();
        for stored in self.dao.list_all()? {
            let giorni_mancanti = stored.record.data_nascita.map(|d| days_until_anniversary(d, today));
            let compleanno_oggi = giorni_mancanti == Some(0);
            if compleanno_oggi {
                compleanni_oggi.push(format!("{} {} (Cliente)", stored.record.nome, stored.record.cognome));
            }
            let giorni_beneficiario =
                stored.record.data_nascita_beneficiario.map(|d| days_until_anniversary(d, today));
            if giorni_beneficiario == Some(0) {
                compleanni_oggi.push(format!(
                    "{} {} (Beneficiario di {})",
                    stored.record.nome_beneficiario.clone().unwrap_or_default(),
                    stored.record.cognome_beneficiario.clone().unwrap_or_default(),
                    stored.record.nome
                ));
            }
            clienti.push(ClientWithBirthday { cliente: stored, giorni_mancanti, compleanno_oggi });
        }
        let num_compleanni = compleanni_oggi.len();
        Ok(BirthdayOverview { clienti, compleanni_oggi, num_compleanni })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::client_rules::{MSG_METRI_QUADRI, MSG_TELEFONO_CLIENTE};
    use tempfile::TempDir;

    fn temp_service() -> (TempDir, ClientService) {
        let dir = TempDir::new().unwrap();
        let service = ClientService::new(dir.path().join("clienti.db"));
        service.dao.init_schema().unwrap();
        (dir, service)
    }

    fn signup_form() -> ClientForm {
        ClientForm {
            nome_cliente: "Mario".into(),
            cognome_cliente: "Rossi".into(),
            telefono_cliente: "3331234567".into(),
            metri_quadri: "100".into(),
            prezzo_ricercato: "250000".into(),
            richiesta_specifica: "".into(),
            privacy_accepted: "on".into(),
            ..ClientForm::default()
        }
    }

    #[test]
    fn test_signup_creates_a_record() {
        let (_dir, service) = temp_service();
        let id = service.signup(&signup_form()).unwrap();
        let stored = service.get(id).unwrap();
        assert_eq!(stored.record.nome, "Mario");
        assert_eq!(stored.record.metri_quadri, 100);
        assert_eq!(stored.record.prezzo_ricercato, 250_000);
    }

    #[test]
    fn test_signup_without_consent_is_rejected_before_validation() {
        let (_dir, service) = temp_service();
        let mut form = signup_form();
        form.privacy_accepted = "".into();
        // even with an invalid field, the consent message wins on this route
        form.metri_quadri = "10".into();
        assert!(matches!(service.signup(&form), Err(AppError::ConsentMissing)));
        assert!(service.list_with_birthdays(common::util::date_util::today()).unwrap().clienti.is_empty());
    }

    #[test]
    fn test_rejected_submission_never_touches_the_store() {
        let (_dir, service) = temp_service();
        let mut form = signup_form();
        form.metri_quadri = "10".into();
        match service.signup(&form) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MSG_METRI_QUADRI),
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert!(service.dao.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_first_failure_message_surfaces_through_the_service() {
        let (_dir, service) = temp_service();
        let mut form = signup_form();
        form.telefono_cliente = "abc".into();
        form.metri_quadri = "10".into();
        match service.add(&form) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MSG_TELEFONO_CLIENTE),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_storage_failure_is_distinct_from_validation() {
        // valid form, unreachable store: must surface as a storage error
        let service = ClientService::new("/nonexistent-dir/clienti.db");
        assert!(matches!(service.add(&signup_form()), Err(AppError::Sqlite(_))));
    }

    #[test]
    fn test_update_validates_then_rewrites() {
        let (_dir, service) = temp_service();
        let id = service.add(&signup_form()).unwrap();

        let mut form = signup_form();
        form.prezzo_ricercato = "700000".into();
        assert!(matches!(service.update(id, &form), Err(AppError::Validation(_))));

        form.prezzo_ricercato = "300000".into();
        service.update(id, &form).unwrap();
        assert_eq!(service.get(id).unwrap().record.prezzo_ricercato, 300_000);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let (_dir, service) = temp_service();
        assert!(matches!(service.update(7, &signup_form()), Err(AppError::NotFound)));
    }

    #[test]
    fn test_birthday_overview_flags_today() {
        let (_dir, service) = temp_service();
        let today = chrono::NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();

        let mut form = signup_form();
        form.data_nascita = "1980-06-15".into();
        form.nome_beneficiario = "Luigi".into();
        form.cognome_beneficiario = "Verdi".into();
        form.data_nascita_beneficiario = "1990-06-15".into();
        service.add(&form).unwrap();

        let mut later = signup_form();
        later.nome_cliente = "Anna".into();
        later.data_nascita = "1980-06-20".into();
        service.add(&later).unwrap();

        let overview = service.list_with_birthdays(today).unwrap();
        assert_eq!(overview.num_compleanni, 2);
        assert!(overview.compleanni_oggi.contains(&"Mario Rossi (Cliente)".to_string()));
        assert!(overview.compleanni_oggi.contains(&"Luigi Verdi (Beneficiario di Mario)".to_string()));

        // newest first: Anna is listed before Mario
        assert_eq!(overview.clienti[0].cliente.record.nome, "Anna");
        assert_eq!(overview.clienti[0].giorni_mancanti, Some(5));
        assert!(!overview.clienti[0].compleanno_oggi);
        assert!(overview.clienti[1].compleanno_oggi);
    }

    #[test]
    fn test_no_usable_date_yields_no_countdown() {
        let (_dir, service) = temp_service();
        let id = service.add(&signup_form()).unwrap();
        let overview = service.list_with_birthdays(common::util::date_util::today()).unwrap();
        assert_eq!(overview.clienti[0].cliente.id, id);
        assert_eq!(overview.clienti[0].giorni_mancanti, None);
        assert_eq!(overview.num_compleanni, 0);
    }
}
