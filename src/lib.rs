pub mod app;
pub mod config;
pub mod counter;
pub mod effects;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod phrases;
pub mod share;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use counter::{CounterStore, ResetConfirmation};
pub use phrases::Phrase;
pub use state::AppState;
pub use storage::{FileSlot, MemorySlot, StorageSlot};
