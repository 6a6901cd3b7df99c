use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

///
/// Who should see a notification
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Audience {
    User,
    Provider,
    All,
}

impl Default for Audience {
    fn default() -> Self {
        Self::All
    }
}
