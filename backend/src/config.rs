//! Runtime settings for the certificate service.
//!
//! Everything comes from `CERTIFICATES_*` environment variables with defaults
//! that match the address the frontend resolves template images against.

use log::warn;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "certificates.sqlite";
const DEFAULT_TEMPLATES_DIR: &str = "certificate-templates";

/// Maximum accepted JSON body and template upload size.
pub const PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file holding candidates and the template catalog.
    pub database: PathBuf,
    /// Directory template images are stored in and served from.
    pub templates_dir: PathBuf,
    /// Launch the system browser on the frontend once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: PathBuf::from(DEFAULT_DATABASE),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unparsable values
    /// are logged and replaced by their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("CERTIFICATES_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("CERTIFICATES_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid CERTIFICATES_PORT {:?}", port),
            }
        }
        if let Some(database) = lookup("CERTIFICATES_DB") {
            config.database = PathBuf::from(database);
        }
        if let Some(dir) = lookup("CERTIFICATES_TEMPLATES_DIR") {
            config.templates_dir = PathBuf::from(dir);
        }
        if let Some(open) = lookup("CERTIFICATES_OPEN_BROWSER") {
            match open.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.open_browser = true,
                "0" | "false" | "no" => config.open_browser = false,
                _ => warn!("Ignoring invalid CERTIFICATES_OPEN_BROWSER {:?}", open),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
