use crate::config::{Config, StoreBackend};
use crate::sheets::SheetsWorksheet;
use crate::storage::LocalWorksheet;
use std::collections::HashMap;
use std::path::PathBuf;

/// Column names of the worksheet's header row, in order.
pub const HEADER: [&str; 3] = ["Timestamp", "Mood", "Note"];

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot read credentials from {path}: {reason}")]
    Credentials { path: PathBuf, reason: String },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("Spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),

    #[error("spreadsheet request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("spreadsheet service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("store file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("unexpected worksheet contents: {0}")]
    Schema(String),
}

/// One data row keyed by header name.
pub type Record = HashMap<String, String>;

/// Handle to the first worksheet of the opened spreadsheet.
pub enum Worksheet {
    Sheets(SheetsWorksheet),
    Local(LocalWorksheet),
}

impl Worksheet {
    pub async fn append_row(&self, row: [String; 3]) -> Result<(), StoreError> {
        match self {
            Worksheet::Sheets(ws) => ws.append_row(row).await,
            Worksheet::Local(ws) => ws.append_row(row).await,
        }
    }

    pub async fn get_all_records(&self) -> Result<Vec<Record>, StoreError> {
        let rows = match self {
            Worksheet::Sheets(ws) => ws.get_all_values().await?,
            Worksheet::Local(ws) => ws.get_all_values().await?,
        };
        Ok(records_from_rows(rows))
    }
}

/// Opens the configured store. Authentication happens here, once per call.
pub async fn open_worksheet(
    config: &Config,
    http: &reqwest::Client,
) -> Result<Worksheet, StoreError> {
    match config.backend {
        StoreBackend::Sheets => SheetsWorksheet::open(config, http.clone())
            .await
            .map(Worksheet::Sheets),
        StoreBackend::Local => LocalWorksheet::open(&config.local_path)
            .await
            .map(Worksheet::Local),
    }
}

/// First row is the header; every later row becomes a record. Short rows are
/// padded with empty cells, extra cells past the header are dropped.
pub fn records_from_rows(rows: Vec<Vec<String>>) -> Vec<Record> {
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    rows.map(|row| {
        let mut cells = row.into_iter();
        header
            .iter()
            .map(|name| (name.clone(), cells.next().unwrap_or_default()))
            .collect()
    })
    .collect()
}
