use crate::clock::Clock;
use crate::models::Record;
use crate::rollover::{classify, rollover, RolloverOutcome};
use crate::storage::{load_record, persist_record};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub clock: Arc<dyn Clock>,
    pub record: Arc<Mutex<Record>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, clock: Arc<dyn Clock>, record: Record) -> Self {
        Self {
            data_path,
            clock,
            record: Arc::new(Mutex::new(record)),
        }
    }

    /// Loads the stored record and brings it up to today before anything is served.
    pub async fn open(data_path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        let record = load_record(&data_path).await;
        let state = Self::new(data_path, clock, record);
        state.start_day().await;
        state
    }

    /// Runs the day rollover and persists the result.
    pub async fn start_day(&self) {
        let today = self.clock.today();
        let mut record = self.record.lock().await;

        match classify(&record, today) {
            RolloverOutcome::SameDay => return,
            RolloverOutcome::FirstVisit => info!("first visit, starting on {today}"),
            RolloverOutcome::Archived { date, count } => {
                info!("archived {count} for {date}, starting {today}");
            }
            RolloverOutcome::Reset { date } => {
                info!("nothing to archive for {date}, starting {today}");
            }
        }

        *record = rollover(std::mem::take(&mut *record), today);
        save(&self.data_path, &record).await;
    }
}

/// Write-through save. Failures leave the session running in memory.
pub async fn save(data_path: &Path, record: &Record) {
    if let Err(err) = persist_record(data_path, record).await {
        warn!("state not persisted, continuing in memory: {err}");
    }
}
