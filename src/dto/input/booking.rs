use serde::{de::DeserializeOwned, Deserialize, Deserializer};

///
/// Booking record as returned by the booking listing endpoints.
/// Only fields needed for reminders are read, everything else is ignored.
///
/// Fields holding a value of unexpected type (e.g. numeric `startTime` or
/// unpopulated `service` reference) are read as missing.
///
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub service: Option<BookingService>,
    #[serde(default, deserialize_with = "lenient")]
    pub pet: Option<BookingPet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingService {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingPet {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(T::deserialize(value).ok())
}

impl Booking {
    ///
    /// Identity used to tell bookings apart.
    /// Falls back to the raw start time when booking has no id.
    ///
    pub fn identity(&self) -> Option<&str> {
        non_empty(&self.object_id)
            .or_else(|| non_empty(&self.id))
            .or_else(|| non_empty(&self.start_time))
    }

    pub fn service_title(&self) -> Option<&str> {
        self.service
            .as_ref()
            .and_then(|service| non_empty(&service.title))
    }

    pub fn pet_name(&self) -> Option<&str> {
        self.pet.as_ref().and_then(|pet| non_empty(&pet.name))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
