//! Per-chat bot settings.
//!
//! Settings are kept in memory only and reset on restart.

mod store;
mod types;

pub use store::ChatSettingsStore;
pub use types::ChatSettings;
