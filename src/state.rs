use crate::config::Config;
use std::sync::Arc;

/// Shared per-process settings. Holds no data: every request reopens the
/// store and rereads it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}
