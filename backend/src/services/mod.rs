pub mod candidates;
pub mod certificate_templates;

#[cfg(test)]
pub(crate) mod test_support;

use crate::config::PAYLOAD_LIMIT;
use crate::error::ServiceError;
use actix_files::Files;
use actix_web::web;
use std::path::PathBuf;

/// Mount point of the template images, mirrored by the frontend's asset base.
pub const TEMPLATE_ASSETS_PATH: &str = "/certificate-templates";

/// Registers the API scopes, their extractor configs and the template image
/// directory.
pub fn configure(templates_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(json_config())
            .app_data(path_config())
            .service(candidates::configure_routes())
            .service(certificate_templates::configure_routes())
            .service(Files::new(TEMPLATE_ASSETS_PATH, templates_dir));
    }
}

/// JSON bodies up to `PAYLOAD_LIMIT`; unreadable bodies answer 400 with the
/// usual `{"error": ...}` body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(PAYLOAD_LIMIT)
        .error_handler(|err, _req| ServiceError::BadRequest(err.to_string()).into())
}

/// Path segments that do not parse (e.g. a non-numeric id) answer 400.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ServiceError::BadRequest(err.to_string()).into())
}
