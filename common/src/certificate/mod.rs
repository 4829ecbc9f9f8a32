//! Certificate selection and print pipeline.
//!
//! The flow is linear:
//! 1. [`asset`] maps the template catalog to [`asset::CertificateOption`]s with
//!    absolute image URLs.
//! 2. [`carousel::SelectionSession`] lets the operator cycle through the options
//!    and confirm one.
//! 3. [`compositor::compose`] overlays the candidate's data on the chosen image.
//! 4. [`print::dispatch`] renders the document on a fresh presentation surface,
//!    waits for the image, prints and marks the candidate as printed.

pub mod asset;
pub mod carousel;
pub mod compositor;
pub mod print;
