use super::Clock;
use time::{OffsetDateTime, UtcOffset};

pub struct SystemClock {
    local_offset: UtcOffset,
}

impl SystemClock {
    ///
    /// Reads the local offset once.
    ///
    /// On unix the offset can only be determined while the process
    /// is single-threaded, so this should be called before any runtime
    /// is started. Falls back to UTC when the offset is unknown.
    ///
    pub fn new() -> Self {
        let local_offset = UtcOffset::current_local_offset().unwrap_or_else(|err| {
            tracing::warn!(%err, "local offset unavailable, using UTC");
            UtcOffset::UTC
        });

        Self { local_offset }
    }

    pub fn with_offset(local_offset: UtcOffset) -> Self {
        Self { local_offset }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn local_offset(&self) -> UtcOffset {
        self.local_offset
    }
}
