//! Certificate template catalog under `/api/certificate-templates`.
//!
//! - `GET /` returns every template in upload order.
//! - `POST /` accepts a multipart upload with a `name` text field and a `file`
//!   image field. The image is stored in the templates directory under a
//!   generated name and served back from `/certificate-templates/{file}`.

mod list;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/certificate-templates";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(upload::process))
}
