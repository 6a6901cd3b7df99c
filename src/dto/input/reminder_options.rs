use crate::dto::{Audience, ProviderType};

pub const DEFAULT_REMINDER_STATUSES: [&str; 1] = ["confirmed"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderOptions {
    pub audience: Audience,
    pub provider_type: Option<ProviderType>,
    /// Compared case-insensitively, defaults to [DEFAULT_REMINDER_STATUSES]
    pub statuses: Option<Vec<String>>,
    /// Used when booking has no service title
    pub service_label: Option<String>,
    pub link: Option<String>,
}

impl ReminderOptions {
    pub fn new(audience: Audience) -> Self {
        Self {
            audience,
            ..Default::default()
        }
    }

    pub fn provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_type = Some(provider_type);
        self
    }

    pub fn statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = Some(statuses.into_iter().map(Into::into).collect());
        self
    }

    pub fn service_label(mut self, service_label: impl Into<String>) -> Self {
        self.service_label = Some(service_label.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn accepts_status(&self, status: &str) -> bool {
        match &self.statuses {
            Some(statuses) => statuses
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(status)),
            None => DEFAULT_REMINDER_STATUSES
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(status)),
        }
    }
}
