use biz_service::entitys::client_entity::StoredClient;
use common::errors::AppError;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

/// Columns printed on the sheet, in row order. The label for each line is
/// derived from the column name; the mapping is fixed here, outside the
/// domain layer.
const SHEET_COLUMNS: [&str; 22] = [
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

fn label(column: &str) -> String {
    let spaced = column.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

// Type1 base fonts cover Latin-1 only; anything outside degrades to '?'
fn pdf_text(text: &str) -> Vec<u8> {
    text.chars().map(|c| if (c as u32) < 256 { c as u8 } else { b'?' }).collect()
}

fn show_text(text: &str) -> Operation {
    Operation::new("Tj", vec![Object::String(pdf_text(text), StringFormat::Literal)])
}

/// Builds the one-page A4 client sheet: full name as title, a section
/// heading, then one label/value line per remaining column.
pub fn client_sheet_pdf(client: &StoredClient) -> Result<Vec<u8>, AppError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
            "F2" => bold_id,
        },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F2".into(), 18.into()]),
        Operation::new("Td", vec![56.into(), 780.into()]),
        show_text(&format!("{} {}", client.record.nome, client.record.cognome)),
        Operation::new("ET", vec![]),
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F2".into(), 13.into()]),
        Operation::new("Td", vec![56.into(), 750.into()]),
        show_text("SCHEDA CLIENTE"),
        Operation::new("ET", vec![]),
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 11.into()]),
        Operation::new("Td", vec![56.into(), 722.into()]),
        Operation::new("TL", vec![15.into()]),
    ];
    let values = client.record.to_row();
    for (column, value) in SHEET_COLUMNS.iter().zip(values.iter()) {
        // name and surname are already in the title
        if *column == "nome" || *column == "cognome" {
            continue;
        }
        operations.push(show_text(&format!("{}: {}", label(column), value)));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let encoded = content.encode().map_err(|e| AppError::Internal(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        // A4 in points
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(buffer)
}

/// Download name `<Nome>_<Cognome>_scheda.pdf`, stripped of characters that
/// are unsafe in file names.
pub fn sheet_file_name(nome: &str, cognome: &str) -> String {
    let full_name = format!("{}_{}", nome, cognome);
    let safe: String =
        full_name.chars().filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_').collect();
    format!("{}_scheda.pdf", safe.trim_end())
}
