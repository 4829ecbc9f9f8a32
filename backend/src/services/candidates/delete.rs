use crate::config::ServerConfig;
use crate::db;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use log::info;
use rusqlite::params;
use std::path::Path;

pub async fn process(
    id: web::Path<i64>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    delete_candidate(&config.database, id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn delete_candidate(database: &Path, id: i64) -> Result<(), ServiceError> {
    let conn = db::open(database)?;
    let removed = conn.execute("DELETE FROM candidats WHERE id = ?1", params![id])?;
    if removed == 0 {
        return Err(ServiceError::candidate_not_found(id));
    }
    info!("Deleted candidate {}", id);
    Ok(())
}
