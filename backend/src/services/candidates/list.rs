use crate::config::ServerConfig;
use crate::db;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::candidate::Candidate;
use std::path::Path;

pub async fn process(config: web::Data<ServerConfig>) -> Result<HttpResponse, ServiceError> {
    let candidates = list_candidates(&config.database)?;
    Ok(HttpResponse::Ok().json(candidates))
}

pub fn list_candidates(database: &Path) -> Result<Vec<Candidate>, ServiceError> {
    let conn = db::open(database)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM candidats ORDER BY id",
        db::CANDIDATE_COLUMNS
    ))?;
    let candidates = stmt
        .query_map([], db::candidate_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(candidates)
}
