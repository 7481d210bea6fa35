use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_SHEET_ID: &str = "173dOImclu9vOzDcBVBIJlivTt3efRYj4_zz3tm2_sUY";
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sheets,
    Local,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend: StoreBackend,
    pub credentials_path: PathBuf,
    pub sheet_id: String,
    pub sheets_api_base: String,
    pub local_path: PathBuf,
    pub http_timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match env::var("MOOD_STORE").as_deref() {
            Err(_) | Ok("sheets") => StoreBackend::Sheets,
            Ok("local") => StoreBackend::Local,
            Ok(other) => {
                return Err(ConfigError::Invalid {
                    name: "MOOD_STORE",
                    expected: "'sheets' or 'local'",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            port: parse_var("PORT", 8080, "a port number")?,
            backend,
            credentials_path: env::var("GSHEETS_CREDS")
                .unwrap_or_else(|_| "credentials.json".into())
                .into(),
            sheet_id: env::var("MOOD_SHEET_ID").unwrap_or_else(|_| DEFAULT_SHEET_ID.into()),
            sheets_api_base: env::var("SHEETS_API_BASE")
                .unwrap_or_else(|_| DEFAULT_SHEETS_API_BASE.into()),
            local_path: env::var("MOOD_STORE_PATH")
                .unwrap_or_else(|_| "data/moods.json".into())
                .into(),
            http_timeout: Duration::from_secs(parse_var("HTTP_TIMEOUT_SECS", 30, "a number")?),
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
        Err(_) => Ok(default),
    }
}
