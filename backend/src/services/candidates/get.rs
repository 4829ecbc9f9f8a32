//! # Candidate Retrieval Service
//!
//! Backs `GET /api/candidats/{id}`, used by the details dialog, and is reused by
//! `save` to return the stored row after a write.

use crate::config::ServerConfig;
use crate::db;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::candidate::Candidate;
use rusqlite::{params, OptionalExtension};
use std::path::Path;

/// # Returns
/// - `200 OK` with the `Candidate` as JSON.
/// - `404 Not Found` when no candidate has this id.
pub async fn process(
    id: web::Path<i64>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let candidate = get_candidate(&config.database, id.into_inner())?;
    Ok(HttpResponse::Ok().json(candidate))
}

pub fn get_candidate(database: &Path, id: i64) -> Result<Candidate, ServiceError> {
    let conn = db::open(database)?;
    conn.query_row(
        &format!("SELECT {} FROM candidats WHERE id = ?1", db::CANDIDATE_COLUMNS),
        params![id],
        db::candidate_from_row,
    )
        .optional()?
        .ok_or_else(|| ServiceError::candidate_not_found(id))
}
