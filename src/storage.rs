use crate::store::{StoreError, HEADER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tokio::{fs, sync::RwLock};
use tracing::info;

/// On-disk form of a worksheet: every row as raw cells, header first.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SheetFile {
    pub rows: Vec<Vec<String>>,
}

/// Worksheet kept in a JSON file. Used for development and tests in place of
/// the remote spreadsheet.
pub struct LocalWorksheet {
    path: PathBuf,
}

/// Guards every touch of a sheet file: seeding and appends write, reads share.
static SHEET_LOCK: OnceLock<RwLock<()>> = OnceLock::new();

fn sheet_lock() -> &'static RwLock<()> {
    SHEET_LOCK.get_or_init(|| RwLock::new(()))
}

impl LocalWorksheet {
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        let _guard = sheet_lock().write().await;
        if fs::try_exists(path).await? {
            info!("opened existing sheet file {}", path.display());
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            let seeded = SheetFile {
                rows: vec![HEADER.iter().map(|h| h.to_string()).collect()],
            };
            persist(path, &seeded).await?;
            info!("created sheet file {}", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub async fn get_all_values(&self) -> Result<Vec<Vec<String>>, StoreError> {
        let _guard = sheet_lock().read().await;
        Ok(load(&self.path).await?.rows)
    }

    pub async fn append_row(&self, row: [String; 3]) -> Result<(), StoreError> {
        let _guard = sheet_lock().write().await;
        let mut sheet = load(&self.path).await?;
        sheet.rows.push(row.into());
        persist(&self.path, &sheet).await
    }
}

async fn load(path: &Path) -> Result<SheetFile, StoreError> {
    let bytes = fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Writes beside the target and renames over it, so readers in other
/// processes never see a half-written file.
async fn persist(path: &Path, sheet: &SheetFile) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(sheet)?;
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);
    fs::write(&staging, payload).await?;
    fs::rename(&staging, path).await?;
    Ok(())
}
