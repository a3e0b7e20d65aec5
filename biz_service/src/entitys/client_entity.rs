use chrono::NaiveDate;
use common::ClientId;
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sex marker as submitted and stored: "M", "F" or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Sesso {
    #[serde(rename = "M")]
    M,
    #[serde(rename = "F")]
    F,
    #[default]
    #[serde(rename = "")]
    NonSpecificato,
}

impl Sesso {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sesso::M => "M",
            Sesso::F => "F",
            Sesso::NonSpecificato => "",
        }
    }
    /// Lenient parse for stored text; anything unrecognized maps to blank.
    pub fn parse(raw: &str) -> Sesso {
        match raw {
            "M" => Sesso::M,
            "F" => Sesso::F,
            _ => Sesso::NonSpecificato,
        }
    }
}

/// Raw client submission, one field per form input, all text.
///
/// Field names match the public and internal form names verbatim; meaning is
/// assigned only by the validation pass, never here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ClientForm {
    #[serde(default)]
    pub nome_cliente: String,
    #[serde(default)]
    pub cognome_cliente: String,
    #[serde(default)]
    pub sesso_cliente: String,
    #[serde(default)]
    pub data_nascita: String,
    #[serde(default)]
    pub telefono_cliente: String,
    #[serde(default)]
    pub email_cliente: String,
    #[serde(default)]
    pub nome_beneficiario: String,
    #[serde(default)]
    pub cognome_beneficiario: String,
    #[serde(default)]
    pub sesso_beneficiario: String,
    #[serde(default)]
    pub data_nascita_beneficiario: String,
    #[serde(default)]
    pub telefono_beneficiario: String,
    #[serde(default)]
    pub email_beneficiario: String,
    #[serde(default)]
    pub tipologia_immobile: String,
    #[serde(default)]
    pub ristrutturato: String,
    #[serde(default)]
    pub piano: String,
    #[serde(default)]
    pub metri_quadri: String,
    #[serde(default)]
    pub classe_energetica: String,
    #[serde(default)]
    pub parcheggio: String,
    #[serde(default)]
    pub vicinanza_mare: String,
    #[serde(default)]
    pub tipo_proprieta: String,
    #[serde(default)]
    pub prezzo_ricercato: String,
    #[serde(default)]
    pub richiesta_specifica: String,
    /// Public sign-up only; never persisted.
    #[serde(default)]
    pub privacy_accepted: String,
}

/// Typed client record at the service boundary.
///
/// The store keeps every column as text; the typed fields here are the only
/// place numeric, date and enum semantics live (see the repository adapter
/// for the text round-trip).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientRecord {
    pub nome: String,
    pub cognome: String,
    pub sesso: Sesso,
    pub data_nascita: Option<NaiveDate>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub nome_beneficiario: Option<String>,
    pub cognome_beneficiario: Option<String>,
    pub sesso_beneficiario: Sesso,
    pub data_nascita_beneficiario: Option<NaiveDate>,
    pub telefono_beneficiario: Option<String>,
    pub email_beneficiario: Option<String>,
    pub tipologia_immobile: String,
    pub ristrutturato: String,
    pub piano: String,
    pub metri_quadri: i64,
    pub classe_energetica: String,
    pub parcheggio: String,
    pub vicinanza_mare: String,
    pub tipo_proprieta: String,
    pub prezzo_ricercato: i64,
    pub richiesta_specifica: String,
}

/// A record as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredClient {
    pub id: ClientId,
    #[serde(flatten)]
    pub record: ClientRecord,
}

fn opt(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

fn opt_date(value: &str) -> Option<NaiveDate> {
    // blank and unparseable text both degrade to "no date"
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn date_text(value: &Option<NaiveDate>) -> String {
    value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

impl ClientRecord {
    /// Builds the typed record from a form that already passed the business
    /// rules. Numeric fields re-parse here; a failure means the caller
    /// skipped validation.
    pub fn from_form(form: &ClientForm) -> Result<ClientRecord, AppError> {
        let metri_quadri = form
            .metri_quadri
            .parse::<i64>()
            .map_err(|_| AppError::Internal(format!("metri_quadri non numerico: {:?}", form.metri_quadri)))?;
        let prezzo_ricercato = form
            .prezzo_ricercato
            .parse::<i64>()
            .map_err(|_| AppError::Internal(format!("prezzo_ricercato non numerico: {:?}", form.prezzo_ricercato)))?;
        Ok(ClientRecord {
            nome: form.nome_cliente.clone(),
            cognome: form.cognome_cliente.clone(),
            sesso: Sesso::parse(&form.sesso_cliente),
            data_nascita: opt_date(&form.data_nascita),
            telefono: opt(&form.telefono_cliente),
            email: opt(&form.email_cliente),
            nome_beneficiario: opt(&form.nome_beneficiario),
            cognome_beneficiario: opt(&form.cognome_beneficiario),
            sesso_beneficiario: Sesso::parse(&form.sesso_beneficiario),
            data_nascita_beneficiario: opt_date(&form.data_nascita_beneficiario),
            telefono_beneficiario: opt(&form.telefono_beneficiario),
            email_beneficiario: opt(&form.email_beneficiario),
            tipologia_immobile: form.tipologia_immobile.clone(),
            ristrutturato: form.ristrutturato.clone(),
            piano: form.piano.clone(),
            metri_quadri,
            classe_energetica: form.classe_energetica.clone(),
            parcheggio: form.parcheggio.clone(),
            vicinanza_mare: form.vicinanza_mare.clone(),
            tipo_proprieta: form.tipo_proprieta.clone(),
            prezzo_ricercato,
            richiesta_specifica: form.richiesta_specifica.clone(),
        })
    }

    /// Text values in `clienti` column order, ready for the storage adapter.
    pub fn to_row(&self) -> [String; 22] {
        [
            self.nome.clone(),
            self.cognome.clone(),
            self.sesso.as_str().to_string(),
            date_text(&self.data_nascita),
            self.telefono.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.nome_beneficiario.clone().unwrap_or_default(),
            self.cognome_beneficiario.clone().unwrap_or_default(),
            self.sesso_beneficiario.as_str().to_string(),
            date_text(&self.data_nascita_beneficiario),
            self.telefono_beneficiario.clone().unwrap_or_default(),
            self.email_beneficiario.clone().unwrap_or_default(),
            self.tipologia_immobile.clone(),
            self.ristrutturato.clone(),
            self.piano.clone(),
            self.metri_quadri.to_string(),
            self.classe_energetica.clone(),
            self.parcheggio.clone(),
            self.vicinanza_mare.clone(),
            self.tipo_proprieta.clone(),
            self.prezzo_ricercato.to_string(),
            self.richiesta_specifica.clone(),
        ]
    }

    /// Rebuilds the typed record from stored text, leniently: the schema is
    /// untyped, so junk left by older writers degrades instead of failing.
    pub fn from_text(values: [String; 22]) -> ClientRecord {
        let [
            nome,
            cognome,
            sesso,
            data_nascita,
            telefono,
            email,
            nome_beneficiario,
            cognome_beneficiario,
            sesso_beneficiario,
            data_nascita_beneficiario,
            telefono_beneficiario,
            email_beneficiario,
            tipologia_immobile,
            ristrutturato,
            piano,
            metri_quadri,
            classe_energetica,
            parcheggio,
            vicinanza_mare,
            tipo_proprieta,
            prezzo_ricercato,
            richiesta_specifica,
        ] = values;
        ClientRecord {
            nome,
            cognome,
            sesso: Sesso::parse(&sesso),
            data_nascita: opt_date(&data_nascita),
            telefono: opt(&telefono),
            email: opt(&email),
            nome_beneficiario: opt(&nome_beneficiario),
            cognome_beneficiario: opt(&cognome_beneficiario),
            sesso_beneficiario: Sesso::parse(&sesso_beneficiario),
            data_nascita_beneficiario: opt_date(&data_nascita_beneficiario),
            telefono_beneficiario: opt(&telefono_beneficiario),
            email_beneficiario: opt(&email_beneficiario),
            tipologia_immobile,
            ristrutturato,
            piano,
            metri_quadri: metri_quadri.parse().unwrap_or_default(),
            classe_energetica,
            parcheggio,
            vicinanza_mare,
            tipo_proprieta,
            prezzo_ricercato: prezzo_ricercato.parse().unwrap_or_default(),
            richiesta_specifica,
        }
    }
}
