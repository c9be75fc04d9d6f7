pub mod add;
pub mod all;
pub mod backup;
pub mod comment;
pub mod config;
pub mod counts;
pub mod init;
pub mod last;
pub mod log;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EventStore;

/// Open (and bootstrap if needed) the log configured in `cfg`.
pub(crate) fn open_store(cfg: &Config) -> AppResult<EventStore> {
    EventStore::open(cfg.log_path())
}
