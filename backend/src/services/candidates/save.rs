use super::get::get_candidate;
use crate::config::ServerConfig;
use crate::db;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::candidate::Candidate;
use common::requests::CandidateRequest;
use log::info;
use rusqlite::params;
use std::path::Path;

pub async fn create(
    payload: web::Json<CandidateRequest>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let candidate = create_candidate(&config.database, &payload)?;
    Ok(HttpResponse::Created().json(candidate))
}

pub async fn update(
    id: web::Path<i64>,
    payload: web::Json<CandidateRequest>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let candidate = update_candidate(&config.database, id.into_inner(), &payload)?;
    Ok(HttpResponse::Ok().json(candidate))
}

pub fn create_candidate(
    database: &Path,
    request: &CandidateRequest,
) -> Result<Candidate, ServiceError> {
    request.validate()?;

    let conn = db::open(database)?;
    conn.execute(
        "INSERT INTO candidats (name, score, date_naissance) VALUES (?1, ?2, ?3)",
        params![request.name.trim(), request.score, request.date_naissance.trim()],
    )?;
    let id = conn.last_insert_rowid();
    info!("Created candidate {} ({})", id, request.name.trim());

    get_candidate(database, id)
}

/// Overwrites name, score and birth date. The printed flag is left alone.
pub fn update_candidate(
    database: &Path,
    id: i64,
    request: &CandidateRequest,
) -> Result<Candidate, ServiceError> {
    request.validate()?;

    let conn = db::open(database)?;
    let changed = conn.execute(
        "UPDATE candidats SET name = ?1, score = ?2, date_naissance = ?3 WHERE id = ?4",
        params![
            request.name.trim(),
            request.score,
            request.date_naissance.trim(),
            id
        ],
    )?;
    if changed == 0 {
        return Err(ServiceError::candidate_not_found(id));
    }
    info!("Updated candidate {}", id);

    get_candidate(database, id)
}
