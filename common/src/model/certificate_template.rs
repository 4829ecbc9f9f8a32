use serde::{Deserialize, Serialize};

/// A background image a certificate can be printed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateTemplate {
    pub id: i64,
    pub name: String,
    /// Relative asset path, e.g. `certificate-templates/gold.png`. Only the last
    /// segment is used to build the image URL.
    pub template_path: String,
}
