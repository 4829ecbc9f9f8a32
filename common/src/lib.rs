//! Types and logic shared by the certificate frontend and backend.
//!
//! - `model`: wire records exchanged with the service.
//! - `requests`: typed create/update payloads and their validation.
//! - `certificate`: the selection, composition and print pipeline.

pub mod certificate;
pub mod model;
pub mod requests;
