use time::{OffsetDateTime, UtcOffset};

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    ///
    /// Current instant
    ///
    fn now(&self) -> OffsetDateTime;

    ///
    /// Offset used to present timestamps to the user
    /// and to read timestamps that carry no offset
    ///
    fn local_offset(&self) -> UtcOffset;
}
