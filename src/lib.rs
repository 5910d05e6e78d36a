pub mod app;
pub mod clock;
pub mod config;
pub mod counter;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod rollover;
pub mod snapshot;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use models::Record;
pub use state::AppState;
pub use storage::{load_record, persist_record, resolve_data_path};
