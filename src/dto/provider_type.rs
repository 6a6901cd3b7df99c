use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

///
/// Provider sub-role.
///
/// Groomers are stored as `babysitter`, `groomer` is accepted as an alias.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ProviderType {
    #[strum(to_string = "vet")]
    Vet,

    #[strum(to_string = "shop")]
    Shop,

    #[serde(alias = "groomer")]
    #[strum(to_string = "babysitter", serialize = "groomer")]
    Babysitter,
}
