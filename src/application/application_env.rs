use anyhow::anyhow;
use pet_care_notifier::{auth::Role, dto::ProviderType, popup::PopupPermission};
use std::{path::PathBuf, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub data_directory: PathBuf,
    pub bookings_file: PathBuf,

    pub poll_interval: Duration,
    pub watch_interval: Duration,
    pub role: Role,
    pub provider_type: Option<ProviderType>,
    /// None means default statuses
    pub statuses: Option<Vec<String>>,

    pub popup_permission: PopupPermission,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("PET_CARE_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("PET_CARE_NOTIFIER_LOG_FILENAME")?;
        let data_directory = Self::env_var("PET_CARE_NOTIFIER_DATA_DIRECTORY")?.into();
        let bookings_file = Self::env_var("PET_CARE_NOTIFIER_BOOKINGS_FILE")?.into();
        let poll_interval = Self::env_var("PET_CARE_NOTIFIER_POLL_INTERVAL")?.parse()?;
        let poll_interval = Duration::from_secs(poll_interval);
        let watch_interval = Self::env_var("PET_CARE_NOTIFIER_WATCH_INTERVAL")?.parse()?;
        let watch_interval = Duration::from_millis(watch_interval);
        let role = Self::env_var("PET_CARE_NOTIFIER_ROLE")?
            .parse()
            .map_err(|err| anyhow!("PET_CARE_NOTIFIER_ROLE invalid: {err}"))?;
        let provider_type = Self::optional_env_var("PET_CARE_NOTIFIER_PROVIDER_TYPE")
            .map(|provider_type| provider_type.parse())
            .transpose()
            .map_err(|err| anyhow!("PET_CARE_NOTIFIER_PROVIDER_TYPE invalid: {err}"))?;
        let statuses = Self::optional_env_var("PET_CARE_NOTIFIER_STATUSES")
            .map(|statuses| Self::parse_list(&statuses));
        let popup_permission = Self::env_var("PET_CARE_NOTIFIER_POPUP_PERMISSION")?
            .parse()
            .map_err(|err| anyhow!("PET_CARE_NOTIFIER_POPUP_PERMISSION invalid: {err}"))?;

        if poll_interval.is_zero() {
            anyhow::bail!("PET_CARE_NOTIFIER_POLL_INTERVAL must be greater than 0");
        }
        if watch_interval.is_zero() {
            anyhow::bail!("PET_CARE_NOTIFIER_WATCH_INTERVAL must be greater than 0");
        }

        Ok(Self {
            log_directory,
            log_filename,
            data_directory,
            bookings_file,
            poll_interval,
            watch_interval,
            role,
            provider_type,
            statuses,
            popup_permission,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}
