pub mod candidate;
pub mod certificate_template;
