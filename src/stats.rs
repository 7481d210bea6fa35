use crate::catalog::Category;
use crate::models::{DailyReport, Dataset, MoodCount};
use chrono::NaiveDate;

pub const NO_ENTRIES_MESSAGE: &str = "No entries for this date.";
pub const NO_DATA_MESSAGE: &str = "No data yet – log your first mood!";

/// Count per category for one calendar date. Only categories seen that day
/// appear, most frequent first; ties keep first-appearance order.
pub fn daily_counts(dataset: &Dataset, date: NaiveDate) -> Vec<(Category, u64)> {
    let mut counts: Vec<(Category, u64)> = Vec::new();
    for entry in dataset.entries.iter().filter(|e| e.timestamp.date() == date) {
        match counts.iter_mut().find(|(category, _)| *category == entry.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.mood, 1)),
        }
    }
    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Today when today has entries, otherwise the latest date with data.
pub fn default_date(dataset: &Dataset, today: NaiveDate) -> Option<NaiveDate> {
    let (_, max) = dataset.date_bounds()?;
    Some(if dataset.has_date(today) { today } else { max })
}

/// Resolves a requested date: unparsable or absent requests use the default.
/// A valid date outside the data range is kept and simply has no entries.
pub fn pick_date(dataset: &Dataset, requested: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    match requested.and_then(parse_date) {
        Some(date) => Some(date),
        None => default_date(dataset, today),
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn build_report(dataset: &Dataset, date: NaiveDate) -> DailyReport {
    let counts: Vec<MoodCount> = daily_counts(dataset, date)
        .into_iter()
        .map(|(mood, count)| MoodCount { mood, count })
        .collect();
    let message = counts.is_empty().then_some(NO_ENTRIES_MESSAGE);
    DailyReport {
        date: date.to_string(),
        counts,
        message,
    }
}
