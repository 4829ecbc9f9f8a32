use crate::config::ServerConfig;
use crate::db;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::certificate_template::CertificateTemplate;
use std::path::Path;

pub async fn process(config: web::Data<ServerConfig>) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(list_templates(&config.database)?))
}

pub fn list_templates(database: &Path) -> Result<Vec<CertificateTemplate>, ServiceError> {
    let conn = db::open(database)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM certificate_templates ORDER BY id",
        db::TEMPLATE_COLUMNS
    ))?;
    let templates = stmt
        .query_map([], db::template_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(templates)
}
