use super::{BookingsRepository, Error};
use crate::dto::input::Booking;
use std::{fs, io::ErrorKind, path::PathBuf};

///
/// Reads bookings from a JSON file holding an array of booking records
///
pub struct BookingsRepositoryImpl {
    path: PathBuf,
}

impl BookingsRepositoryImpl {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookingsRepository for BookingsRepositoryImpl {
    fn find_all(&self) -> Result<Vec<Booking>, Error> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "bookings file not found");
                return Ok(Vec::new());
            }
            Err(err) => return Err(Error::Io(err)),
        };

        let records = serde_json::from_str::<Vec<serde_json::Value>>(&json)?;
        let bookings = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<Booking>(record) {
                Ok(booking) => Some(booking),
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed booking");
                    None
                }
            })
            .collect();

        Ok(bookings)
    }
}
