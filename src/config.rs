use crate::clock::{Clock, FixedClock, SystemClock};
use crate::storage::resolve_data_path;
use chrono::NaiveDate;
use std::{env, path::PathBuf, sync::Arc};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Pins "today" instead of reading the local clock.
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let today = env::var("APP_TODAY").ok().and_then(|value| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map_err(|err| warn!("ignoring APP_TODAY={value:?}: {err}"))
                .ok()
        });

        Self {
            port,
            data_path: resolve_data_path(),
            today,
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(date) => Arc::new(FixedClock(date)),
            None => Arc::new(SystemClock),
        }
    }
}
