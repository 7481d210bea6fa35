use crate::catalog::Category;
use crate::store::HEADER;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub mood: Category,
    pub note: String,
}

/// Every entry in the store, in store order.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub columns: [&'static str; 3],
    pub entries: Vec<MoodEntry>,
}

impl Dataset {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        Self {
            columns: HEADER,
            entries,
        }
    }

    /// Earliest and latest calendar dates present.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.entries.iter().map(|entry| entry.timestamp.date());
        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), date| (min.min(date), max.max(date))))
    }

    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|entry| entry.timestamp.date() == date)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn serialize_timestamp<S: serde::Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub mood: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoggedEntry {
    pub timestamp: String,
    pub mood: String,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct MoodCount {
    pub mood: Category,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct DailyReport {
    pub date: String,
    pub counts: Vec<MoodCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub date: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DailyQuery {
    pub date: Option<String>,
}
