mod storage_watcher_config;

pub use storage_watcher_config::*;
