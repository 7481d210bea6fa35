use crate::catalog::Mood;
use crate::models::{LoggedEntry, TIMESTAMP_FORMAT};
use crate::store::{StoreError, Worksheet};
use chrono::NaiveDateTime;
use tracing::{info, warn};

pub const MAX_NOTE_WORDS: usize = 50;
pub const MAX_NOTE_CHARS: usize = 250;

/// Why a submission was refused. Nothing is written for any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    UnknownMood,
    NoteTooLong,
    TooManyWords,
}

impl Rejected {
    pub fn message(self) -> &'static str {
        match self {
            Rejected::UnknownMood => "Please pick one of the listed moods.",
            Rejected::NoteTooLong => "Please keep the note under 250 characters.",
            Rejected::TooManyWords => "Please enter ≤ 50 words.",
        }
    }

    /// Query-string form used when redirecting back to the page.
    pub fn code(self) -> &'static str {
        match self {
            Rejected::UnknownMood => "unknown-mood",
            Rejected::NoteTooLong => "note-too-long",
            Rejected::TooManyWords => "too-many-words",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [Rejected::UnknownMood, Rejected::NoteTooLong, Rejected::TooManyWords]
            .into_iter()
            .find(|rejected| rejected.code() == code)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("{}", .0.message())]
    Rejected(Rejected),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Checks a raw submission and returns the mood plus the note as it will be
/// stored (trimmed).
pub fn validate(mood_token: &str, note: &str) -> Result<(Mood, String), Rejected> {
    let mood = Mood::from_token(mood_token).ok_or(Rejected::UnknownMood)?;
    let note = note.trim();
    if note.split_whitespace().count() > MAX_NOTE_WORDS {
        return Err(Rejected::TooManyWords);
    }
    if note.chars().count() > MAX_NOTE_CHARS {
        return Err(Rejected::NoteTooLong);
    }
    Ok((mood, note.to_string()))
}

/// Appends one `[timestamp, token, note]` row for a valid submission.
pub async fn log_entry(
    ws: &Worksheet,
    mood_token: &str,
    note: &str,
    now: NaiveDateTime,
) -> Result<LoggedEntry, LogError> {
    let (mood, note) = validate(mood_token, note).map_err(|rejected| {
        warn!(reason = rejected.code(), "rejected mood submission");
        LogError::Rejected(rejected)
    })?;

    let entry = LoggedEntry {
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        mood: mood.token().to_string(),
        note,
    };
    ws.append_row([entry.timestamp.clone(), entry.mood.clone(), entry.note.clone()])
        .await?;

    info!(mood = %mood, "logged mood");
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::temp_sheet_path;
    use crate::storage::LocalWorksheet;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    async fn fresh_sheet(tag: &str) -> Worksheet {
        let path = temp_sheet_path(tag);
        Worksheet::Local(LocalWorksheet::open(&path).await.unwrap())
    }

    #[tokio::test]
    async fn valid_submission_appends_one_trimmed_row() {
        let ws = fresh_sheet("log_valid").await;
        let entry = log_entry(&ws, "😍 (Happy)", "  great day \n", noon())
            .await
            .unwrap();
        assert_eq!(entry.note, "great day");

        let records = ws.get_all_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Timestamp"], "2024-01-01 12:00:00");
        assert_eq!(records[0]["Mood"], "😍 (Happy)");
        assert_eq!(records[0]["Note"], "great day");
    }

    #[tokio::test]
    async fn blank_note_is_stored_empty() {
        let ws = fresh_sheet("log_blank").await;
        log_entry(&ws, "😴 (Tired)", "   ", noon()).await.unwrap();
        let records = ws.get_all_records().await.unwrap();
        assert_eq!(records[0]["Note"], "");
    }

    #[tokio::test]
    async fn fifty_one_words_writes_nothing() {
        let ws = fresh_sheet("log_long").await;
        let note = vec!["word"; 51].join(" ");
        let err = log_entry(&ws, "😭 (Sad)", &note, noon()).await.unwrap_err();
        assert!(matches!(err, LogError::Rejected(Rejected::TooManyWords)));
        assert_eq!(err.to_string(), "Please enter ≤ 50 words.");
        assert!(ws.get_all_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_mood_writes_nothing() {
        let ws = fresh_sheet("log_unknown").await;
        let err = log_entry(&ws, "Happy", "", noon()).await.unwrap_err();
        assert!(matches!(err, LogError::Rejected(Rejected::UnknownMood)));
        assert!(ws.get_all_records().await.unwrap().is_empty());
    }

    #[test]
    fn word_and_char_limits() {
        let fifty = vec!["ok"; 50].join(" ");
        assert!(validate("😐 (Neutral)", &fifty).is_ok());
        assert_eq!(
            validate("😐 (Neutral)", &"a".repeat(251)),
            Err(Rejected::NoteTooLong)
        );
    }

    #[test]
    fn word_limit_applies_to_short_notes() {
        // 51 words in 101 characters: only the word limit is exceeded.
        let note = vec!["a"; 51].join(" ");
        assert_eq!(note.chars().count(), 101);
        assert_eq!(validate("😐 (Neutral)", &note), Err(Rejected::TooManyWords));
    }

    #[test]
    fn word_limit_wins_when_both_are_exceeded() {
        let note = vec!["longword"; 60].join(" ");
        assert!(note.chars().count() > MAX_NOTE_CHARS);
        assert_eq!(validate("😐 (Neutral)", &note), Err(Rejected::TooManyWords));
    }

    #[test]
    fn rejection_codes_round_trip() {
        for rejected in [Rejected::UnknownMood, Rejected::NoteTooLong, Rejected::TooManyWords] {
            assert_eq!(Rejected::from_code(rejected.code()), Some(rejected));
        }
        assert_eq!(Rejected::from_code("submitted"), None);
    }
}
