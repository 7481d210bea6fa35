use crate::catalog::Category;
use crate::models::{Dataset, MoodEntry, TIMESTAMP_FORMAT};
use crate::store::{Record, StoreError, Worksheet};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

/// Reads the whole worksheet into a dataset. No caching: callers get a fresh
/// read each time.
pub async fn load_dataset(ws: &Worksheet) -> Result<Dataset, StoreError> {
    let records = ws.get_all_records().await?;
    dataset_from_records(records)
}

pub fn dataset_from_records(records: Vec<Record>) -> Result<Dataset, StoreError> {
    let mut entries = Vec::with_capacity(records.len());
    for (index, mut record) in records.into_iter().enumerate() {
        // Header is sheet row 1, so data starts at row 2.
        let row = index + 2;
        if record.values().all(|value| value.trim().is_empty()) {
            debug!(row, "skipping blank row");
            continue;
        }
        let raw_timestamp = take_column(&mut record, "Timestamp")?;
        let raw_mood = take_column(&mut record, "Mood")?;
        let note = record.remove("Note").unwrap_or_default();

        let timestamp = parse_timestamp(&raw_timestamp).ok_or_else(|| {
            StoreError::Schema(format!("row {row}: unparsable timestamp {raw_timestamp:?}"))
        })?;
        let mood = Category::from_token(&raw_mood);
        if mood == Category::Other {
            warn!(row, mood = %raw_mood, "stored mood is not in the catalog");
        }

        entries.push(MoodEntry {
            timestamp,
            mood,
            note,
        });
    }
    Ok(Dataset::new(entries))
}

fn take_column(record: &mut Record, name: &str) -> Result<String, StoreError> {
    record
        .remove(name)
        .ok_or_else(|| StoreError::Schema(format!("missing column {name:?}")))
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, the `T`-separated form, and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
