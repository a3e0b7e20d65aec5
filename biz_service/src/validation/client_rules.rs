use crate::entitys::client_entity::ClientForm;
use common::util::validate::{
    validate_email_str, validate_max_len, validate_name, validate_number_in_range, validate_phone,
};

// Operator-facing messages, one per rule.
pub const MSG_NOME_CLIENTE: &str = "Il nome cliente deve contenere solo lettere ed essere lungo massimo 15 caratteri.";
pub const MSG_COGNOME_CLIENTE: &str = "Il cognome cliente deve contenere solo lettere ed essere lungo massimo 15 caratteri.";
pub const MSG_TELEFONO_CLIENTE: &str = "Telefono cliente non valido: solo numeri, massimo 10 cifre.";
pub const MSG_NOME_BENEFICIARIO: &str = "Il nome beneficiario non è valido (solo lettere, max 15, o vuoto).";
pub const MSG_COGNOME_BENEFICIARIO: &str = "Il cognome beneficiario non è valido (solo lettere, max 15, o vuoto).";
pub const MSG_TELEFONO_BENEFICIARIO: &str = "Telefono beneficiario non valido (solo numeri, max 10 cifre, o vuoto).";
pub const MSG_EMAIL_BENEFICIARIO: &str = "Email beneficiario non valida!";
pub const MSG_SESSO_BENEFICIARIO: &str = "Sesso beneficiario non valido. Deve essere M, F o vuoto.";
pub const MSG_METRI_QUADRI: &str = "I metri quadri devono essere compresi tra 20 e 400.";
pub const MSG_PREZZO_RICERCATO: &str = "Il prezzo ricercato deve essere compreso tra 20000 e 600000.";
pub const MSG_RICHIESTA_SPECIFICA: &str = "La richiesta specifica può contenere al massimo 300 caratteri.";

pub const METRI_QUADRI_MIN: i64 = 20;
pub const METRI_QUADRI_MAX: i64 = 400;
pub const PREZZO_MIN: i64 = 20_000;
pub const PREZZO_MAX: i64 = 600_000;
pub const RICHIESTA_MAX_LEN: usize = 300;

/// Runs the business rules over a raw submission.
///
/// Short-circuits on the first violated rule and returns its message; rule
/// order is part of the contract (it decides which message the operator
/// sees on a multi-error submission). Beneficiary identity fields are
/// skipped when blank; beneficiary email and sex are always checked, with
/// blank accepted.
pub fn validate_client_form(form: &ClientForm) -> Result<(), String> {
    // primary person, mandatory
    if validate_name(&form.nome_cliente).is_err() {
        return Err(MSG_NOME_CLIENTE.to_string());
    }
    if validate_name(&form.cognome_cliente).is_err() {
        return Err(MSG_COGNOME_CLIENTE.to_string());
    }
    if validate_phone(&form.telefono_cliente).is_err() {
        return Err(MSG_TELEFONO_CLIENTE.to_string());
    }

    // beneficiary, optional when blank
    if !form.nome_beneficiario.is_empty() && validate_name(&form.nome_beneficiario).is_err() {
        return Err(MSG_NOME_BENEFICIARIO.to_string());
    }
    if !form.cognome_beneficiario.is_empty() && validate_name(&form.cognome_beneficiario).is_err() {
        return Err(MSG_COGNOME_BENEFICIARIO.to_string());
    }
    if !form.telefono_beneficiario.is_empty() && validate_phone(&form.telefono_beneficiario).is_err() {
        return Err(MSG_TELEFONO_BENEFICIARIO.to_string());
    }
    if validate_email_str(&form.email_beneficiario).is_err() {
        return Err(MSG_EMAIL_BENEFICIARIO.to_string());
    }
    if !matches!(form.sesso_beneficiario.as_str(), "M" | "F" | "") {
        return Err(MSG_SESSO_BENEFICIARIO.to_string());
    }

    // property request, mandatory
    if validate_number_in_range(&form.metri_quadri, METRI_QUADRI_MIN, METRI_QUADRI_MAX).is_err() {
        return Err(MSG_METRI_QUADRI.to_string());
    }
    if validate_number_in_range(&form.prezzo_ricercato, PREZZO_MIN, PREZZO_MAX).is_err() {
        return Err(MSG_PREZZO_RICERCATO.to_string());
    }
    if validate_max_len(&form.richiesta_specifica, RICHIESTA_MAX_LEN).is_err() {
        return Err(MSG_RICHIESTA_SPECIFICA.to_string());
    }

    Ok(())
}
