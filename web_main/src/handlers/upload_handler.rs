use crate::result::{AppState, result_error_msg, result_msg};
use actix_web::{Responder, post, web};
use common::errors::AppError;
use std::fs;
use std::path::PathBuf;

/// Only vector logos are accepted from the admin page.
const ALLOWED_EXTENSIONS: [&str; 1] = ["svg"];

fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(stem, ext)| !stem.is_empty() && ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collapses everything outside [A-Za-z0-9._-] to '_', which also
/// neutralizes path separators.
fn secure_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_svg);
}

#[post("/upload/{filename}")]
pub async fn upload_svg(
    path: web::Path<String>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let filename = path.into_inner();
    if !allowed_file(&filename) {
        return Ok(web::Json(result_error_msg("Solo file SVG ammessi.")));
    }
    let upload_dir = PathBuf::from(state.config.get_sys().upload_path);
    fs::create_dir_all(&upload_dir).map_err(|e| AppError::FileUpload(e.to_string()))?;
    fs::write(upload_dir.join(secure_filename(&filename)), &body)
        .map_err(|e| AppError::FileUpload(e.to_string()))?;
    Ok(web::Json(result_msg("File caricato con successo!")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_svg_is_allowed() {
        assert!(allowed_file("logo.svg"));
        assert!(allowed_file("logo.SVG"));
        assert!(!allowed_file("logo.png"));
        assert!(!allowed_file("logo"));
        assert!(!allowed_file(".svg"));
    }

    #[test]
    fn test_secure_filename_neutralizes_separators() {
        assert_eq!(secure_filename("logo.svg"), "logo.svg");
        assert_eq!(secure_filename("../../etc/passwd.svg"), ".._.._etc_passwd.svg");
        assert_eq!(secure_filename("logo agenzia.svg"), "logo_agenzia.svg");
    }
}
