//! # Candidate Service Module
//!
//! CRUD endpoints for candidates under `/api/candidats`.
//!
//! ## Sub-modules:
//! - `list`: all candidates, ordered by id.
//! - `get`: a single candidate by id.
//! - `save`: creation and update from a validated `CandidateRequest`.
//! - `delete`: removal by id.

mod delete;
mod get;
mod list;
mod save;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all candidate endpoints.
const API_PATH: &str = "/api/candidats";

/// Configures and returns the Actix `Scope` for candidate routes.
///
/// # Registered Routes:
///
/// *   **`GET /`** → `list::process`: `200` with every candidate.
/// *   **`POST /`** → `save::create`: `201` with the stored candidate, `400` when
///     the request fails validation.
/// *   **`GET /{id}`** → `get::process`: `200` or `404`.
/// *   **`PUT /{id}`** → `save::update`: `200` with the updated candidate, `400`
///     or `404`.
/// *   **`DELETE /{id}`** → `delete::process`: `204` or `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::create))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(save::update))
        .route("/{id}", delete().to(delete::process))
}
