use crate::config::ServerConfig;
use crate::db;
use tempfile::TempDir;

/// A config pointing at a fresh database and templates directory. Keep the
/// returned `TempDir` alive for the duration of the test.
pub fn temp_config() -> (TempDir, ServerConfig) {
    let dir = TempDir::new().unwrap();
    let templates_dir = dir.path().join("certificate-templates");
    std::fs::create_dir_all(&templates_dir).unwrap();
    let config = ServerConfig {
        database: dir.path().join("test.sqlite"),
        templates_dir,
        open_browser: false,
        ..ServerConfig::default()
    };
    db::init_schema(&config.database).unwrap();
    (dir, config)
}

macro_rules! test_app {
    ($config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($config.clone()))
                .configure(crate::services::configure($config.templates_dir.clone())),
        )
        .await
    };
}

pub(crate) use test_app;
