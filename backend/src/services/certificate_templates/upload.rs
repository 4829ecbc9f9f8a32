use crate::config::{ServerConfig, PAYLOAD_LIMIT};
use crate::db;
use crate::error::ServiceError;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::certificate_template::CertificateTemplate;
use futures_util::StreamExt;
use image::ImageFormat;
use log::{info, warn};
use rusqlite::params;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Prefix stored in `template_path`; only the file name after it matters to clients.
const TEMPLATE_PATH_PREFIX: &str = "certificate-templates";

pub async fn process(
    payload: Multipart,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let template = upload_template(payload, &config).await?;
    Ok(HttpResponse::Created().json(template))
}

/// Reads the `name` and `file` parts, stores the image and registers it in the
/// catalog. Nothing is kept unless both parts are present, the file is a
/// recognised image and the catalog row was inserted.
pub async fn upload_template(
    mut payload: Multipart,
    config: &ServerConfig,
) -> Result<CertificateTemplate, ServiceError> {
    let mut name: Option<String> = None;
    let mut file: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ServiceError::BadUpload(e.to_string()))?;
        let part = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match part.as_deref() {
            Some("name") => {
                let bytes = read_field(&mut field).await?;
                let text = String::from_utf8(bytes)
                    .map_err(|_| ServiceError::BadUpload("name is not valid UTF-8".into()))?;
                name = Some(text.trim().to_string());
            }
            Some("file") => {
                file = Some(read_field(&mut field).await?);
            }
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ServiceError::BadUpload("missing template name".into()))?;
    let bytes = file.ok_or_else(|| ServiceError::BadUpload("missing template file".into()))?;

    let format = image::guess_format(&bytes)
        .map_err(|_| ServiceError::BadUpload("file is not a supported image".into()))?;
    let file_name = format!("{}.{}", Uuid::new_v4(), extension(format));

    store_image(&config.templates_dir, &file_name, &bytes)?;
    let template = match insert_template(&config.database, &name, &file_name) {
        Ok(template) => template,
        Err(err) => {
            discard_image(&config.templates_dir, &file_name);
            return Err(err);
        }
    };
    info!(
        "Registered certificate template {} ({}) as {}",
        template.id, template.name, file_name
    );
    Ok(template)
}

async fn read_field(field: &mut actix_multipart::Field) -> Result<Vec<u8>, ServiceError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| ServiceError::BadUpload(e.to_string()))?;
        if bytes.len() + chunk.len() > PAYLOAD_LIMIT {
            return Err(ServiceError::BadUpload("file exceeds 10 MB".into()));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn extension(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("img")
}

fn store_image(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<(), ServiceError> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(file_name), bytes)?;
    Ok(())
}

fn discard_image(dir: &Path, file_name: &str) {
    if let Err(e) = fs::remove_file(dir.join(file_name)) {
        warn!("Could not remove unregistered template image {}: {}", file_name, e);
    }
}

fn insert_template(
    database: &Path,
    name: &str,
    file_name: &str,
) -> Result<CertificateTemplate, ServiceError> {
    let template_path = format!("{}/{}", TEMPLATE_PATH_PREFIX, file_name);
    let conn = db::open(database)?;
    conn.execute(
        "INSERT INTO certificate_templates (name, template_path) VALUES (?1, ?2)",
        params![name, template_path],
    )?;
    Ok(CertificateTemplate {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        template_path,
    })
}
