//! SQLite access shared by the services.
//!
//! Handlers open their own connection per request through [`open`]; the schema
//! is created once at startup by [`init_schema`].

use common::model::candidate::Candidate;
use common::model::certificate_template::CertificateTemplate;
use rusqlite::{Connection, Row};
use std::path::Path;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS candidats (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        name           TEXT    NOT NULL,
        score          REAL    NOT NULL,
        date_naissance TEXT    NOT NULL,
        is_printed     INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE IF NOT EXISTS certificate_templates (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        name          TEXT NOT NULL,
        template_path TEXT NOT NULL
    );
";

pub const CANDIDATE_COLUMNS: &str = "id, name, score, date_naissance, is_printed";
pub const TEMPLATE_COLUMNS: &str = "id, name, template_path";

pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    Connection::open(path)
}

pub fn init_schema(path: &Path) -> rusqlite::Result<()> {
    open(path)?.execute_batch(SCHEMA)
}

pub fn candidate_from_row(row: &Row<'_>) -> rusqlite::Result<Candidate> {
    Ok(Candidate {
        id: row.get(0)?,
        name: row.get(1)?,
        score: row.get(2)?,
        date_naissance: row.get(3)?,
        is_printed: row.get(4)?,
    })
}

pub fn template_from_row(row: &Row<'_>) -> rusqlite::Result<CertificateTemplate> {
    Ok(CertificateTemplate {
        id: row.get(0)?,
        name: row.get(1)?,
        template_path: row.get(2)?,
    })
}
