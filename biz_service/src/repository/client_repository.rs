use crate::entitys::client_entity::{ClientRecord, StoredClient};
use common::ClientId;
use common::errors::AppError;
use once_cell::sync::Lazy;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use std::path::PathBuf;

/// Data columns of the `clienti` table, in schema order.
///
/// Every statement below is rendered from this fixed list; column names are
/// never taken from request input, so callers cannot influence statement
/// structure.
const CLIENT_COLUMNS: [&str; 22] = [
    "nome",
    "cognome",
    "sesso",
    "data_nascita",
    "telefono",
    "email",
    "nome_beneficiario",
    "cognome_beneficiario",
    "sesso_beneficiario",
    "data_nascita_beneficiario",
    "telefono_beneficiario",
    "email_beneficiario",
    "tipologia_immobile",
    "ristrutturato",
    "piano",
    "metri_quadri",
    "classe_energetica",
    "parcheggio",
    "vicinanza_mare",
    "tipo_proprieta",
    "prezzo_ricercato",
    "richiesta_specifica",
];

static INSERT_SQL: Lazy<String> = Lazy::new(|| {
    let placeholders: Vec<String> = (1..=CLIENT_COLUMNS.len()).map(|i| format!("?{}", i)).collect();
    format!("INSERT INTO clienti ({}) VALUES ({})", CLIENT_COLUMNS.join(", "), placeholders.join(", "))
});

static UPDATE_SQL: Lazy<String> = Lazy::new(|| {
    let assignments: Vec<String> =
        CLIENT_COLUMNS.iter().enumerate().map(|(i, col)| format!("{} = ?{}", col, i + 1)).collect();
    format!("UPDATE clienti SET {} WHERE id = ?{}", assignments.join(", "), CLIENT_COLUMNS.len() + 1)
});

static SELECT_SQL: Lazy<String> = Lazy::new(|| format!("SELECT id, {} FROM clienti", CLIENT_COLUMNS.join(", ")));

/// SQLite-backed store for client records.
///
/// A connection is opened per operation and dropped at scope end, so no
/// handle outlives the request being served. Write contention is left to
/// the engine's own locking; a locked store surfaces as a storage error
/// without retry.
pub struct ClientRepository {
    db_path: PathBuf,
}

impl ClientRepository {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self { db_path: db_path.into() }
    }

    fn conn(&self) -> Result<Connection, AppError> {
        Ok(Connection::open(&self.db_path)?)
    }

    pub fn init_schema(&self) -> Result<(), AppError> {
        let conn = self.conn()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS clienti (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nome TEXT,
                cognome TEXT,
                sesso TEXT,
                data_nascita TEXT,
                telefono TEXT,
                email TEXT,
                nome_beneficiario TEXT,
                cognome_beneficiario TEXT,
                sesso_beneficiario TEXT,
                data_nascita_beneficiario TEXT,
                telefono_beneficiario TEXT,
                email_beneficiario TEXT,
                tipologia_immobile TEXT,
                ristrutturato TEXT,
                piano TEXT,
                metri_quadri TEXT,
                classe_energetica TEXT,
                parcheggio TEXT,
                vicinanza_mare TEXT,
                tipo_proprieta TEXT,
                prezzo_ricercato TEXT,
                richiesta_specifica TEXT
            );",
        )?;
        Ok(())
    }

    /// Inserts a record and returns its new id.
    pub fn create(&self, record: &ClientRecord) -> Result<ClientId, AppError> {
        let conn = self.conn()?;
        let row = record.to_row();
        conn.execute(&INSERT_SQL, params_from_iter(row.iter()))?;
        Ok(conn.last_insert_rowid())
    }

    /// All records, newest first (id descending).
    pub fn list_all(&self) -> Result<Vec<StoredClient>, AppError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id DESC", *SELECT_SQL))?;
        let rows = stmt.query_map([], Self::map_client_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn get(&self, id: ClientId) -> Result<StoredClient, AppError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", *SELECT_SQL))?;
        stmt.query_row(params![id], Self::map_client_row).optional()?.ok_or(AppError::NotFound)
    }

    /// Full-row overwrite: every data column is rewritten from `record`,
    /// callers must supply the complete record.
    pub fn update(&self, id: ClientId, record: &ClientRecord) -> Result<(), AppError> {
        let conn = self.conn()?;
        let mut values: Vec<Value> = record.to_row().into_iter().map(Value::from).collect();
        values.push(Value::from(id));
        let changed = conn.execute(&UPDATE_SQL, params_from_iter(values))?;
        if changed == 0 { Err(AppError::NotFound) } else { Ok(()) }
    }

    pub fn delete(&self, id: ClientId) -> Result<(), AppError> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM clienti WHERE id = ?1", params![id])?;
        if changed == 0 { Err(AppError::NotFound) } else { Ok(()) }
    }

    fn map_client_row(row: &Row) -> rusqlite::Result<StoredClient> {
        let id: ClientId = row.get(0)?;
        let mut values: [String; 22] = Default::default();
        for (i, slot) in values.iter_mut().enumerate() {
            // every data column is nullable text
            *slot = row.get::<_, Option<String>>(i + 1)?.unwrap_or_default();
        }
        Ok(StoredClient { id, record: ClientRecord::from_text(values) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitys::client_entity::{ClientForm, Sesso};
    use tempfile::TempDir;

    fn temp_repo() -> (TempDir, ClientRepository) {
        let dir = TempDir::new().unwrap();
        let repo = ClientRepository::new(dir.path().join("clienti.db"));
        repo.init_schema().unwrap();
        (dir, repo)
    }

    fn sample_record(nome: &str) -> ClientRecord {
        let form = ClientForm {
            nome_cliente: nome.into(),
            cognome_cliente: "Rossi".into(),
            sesso_cliente: "M".into(),
            data_nascita: "1980-05-10".into(),
            telefono_cliente: "3331234567".into(),
            metri_quadri: "100".into(),
            prezzo_ricercato: "250000".into(),
            ..ClientForm::default()
        };
        ClientRecord::from_form(&form).unwrap()
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let (_dir, repo) = temp_repo();
        let record = sample_record("Mario");
        let id = repo.create(&record).unwrap();
        let stored = repo.get(id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.record, record);
    }

    #[test]
    fn test_list_is_newest_first() {
        let (_dir, repo) = temp_repo();
        let first = repo.create(&sample_record("Primo")).unwrap();
        let second = repo.create(&sample_record("Secondo")).unwrap();
        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second);
        assert_eq!(all[1].id, first);
        assert_eq!(all[0].record.nome, "Secondo");
    }

    #[test]
    fn test_get_missing_id_is_not_found() {
        let (_dir, repo) = temp_repo();
        assert!(matches!(repo.get(41), Err(AppError::NotFound)));
    }

    #[test]
    fn test_update_overwrites_the_full_row() {
        let (_dir, repo) = temp_repo();
        let id = repo.create(&sample_record("Mario")).unwrap();

        let mut updated = sample_record("Mario");
        updated.telefono = Some("0817654321".into());
        repo.update(id, &updated).unwrap();

        let stored = repo.get(id).unwrap();
        assert_eq!(stored.record.telefono.as_deref(), Some("0817654321"));
        // untouched fields were resupplied and survive unchanged
        assert_eq!(stored.record.nome, "Mario");
        assert_eq!(stored.record.sesso, Sesso::M);
        assert_eq!(stored.record.prezzo_ricercato, 250_000);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let (_dir, repo) = temp_repo();
        assert!(matches!(repo.update(999, &sample_record("Mario")), Err(AppError::NotFound)));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let (_dir, repo) = temp_repo();
        let id = repo.create(&sample_record("Mario")).unwrap();
        repo.delete(id).unwrap();
        assert!(matches!(repo.get(id), Err(AppError::NotFound)));
        assert!(matches!(repo.delete(id), Err(AppError::NotFound)));
    }

    #[test]
    fn test_unreachable_store_is_a_storage_error() {
        let repo = ClientRepository::new("/nonexistent-dir/clienti.db");
        assert!(matches!(repo.list_all(), Err(AppError::Sqlite(_))));
    }
}
