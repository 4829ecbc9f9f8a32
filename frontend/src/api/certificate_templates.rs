use super::{read_json, ApiError, CERTIFICATE_TEMPLATES_PATH};
use common::model::certificate_template::CertificateTemplate;
use gloo_net::http::Request;

pub async fn list() -> Result<Vec<CertificateTemplate>, ApiError> {
    let response = Request::get(CERTIFICATE_TEMPLATES_PATH).send().await?;
    read_json(response).await
}
