mod dto;
mod storage_watcher;

pub use dto::StorageWatcherConfig;
pub use storage_watcher::*;
