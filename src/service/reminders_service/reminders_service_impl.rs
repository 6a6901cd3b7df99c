use super::{format_start_time, parse_start_time, ReminderBucket, RemindersService};
use crate::{
    clock::Clock,
    dto::{
        input::{Booking, NewNotification, ReminderOptions},
        NotificationType, ProviderType,
    },
    service::notification_store::NotificationStore,
};
use std::sync::Arc;
use time::{OffsetDateTime, UtcOffset};

pub const REMINDER_TITLE: &str = "Upcoming appointment";

pub struct RemindersServiceImpl {
    notification_store: Arc<dyn NotificationStore>,
    clock: Arc<dyn Clock>,
}

impl RemindersServiceImpl {
    pub fn new(notification_store: Arc<dyn NotificationStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            notification_store,
            clock,
        }
    }

    fn reminder(
        booking: &Booking,
        options: &ReminderOptions,
        now: OffsetDateTime,
        local_offset: UtcOffset,
    ) -> Option<NewNotification> {
        let status = booking.status.as_deref().unwrap_or_default();
        if !options.accepts_status(status) {
            return None;
        }

        let raw_start_time = booking.start_time.as_deref()?;
        let Some(start_time) = parse_start_time(raw_start_time, local_offset) else {
            tracing::trace!(start_time = raw_start_time, "skipping unparseable start time");
            return None;
        };

        let bucket = ReminderBucket::for_lead_time(start_time - now)?;
        let identity = booking.identity()?;

        let service = match (booking.service_title(), &options.service_label) {
            (Some(title), _) => title,
            (None, Some(service_label)) => service_label.as_str(),
            (None, None) => Self::fallback_service_label(options.provider_type),
        };
        let when = format_start_time(start_time, local_offset);
        let message = match booking.pet_name() {
            Some(pet) => format!("{service} for {pet} starts {} ({when}).", bucket.label()),
            None => format!("{service} starts {} ({when}).", bucket.label()),
        };

        Some(NewNotification {
            title: REMINDER_TITLE.to_string(),
            message,
            notification_type: NotificationType::Appointment,
            audience: options.audience,
            provider_type: options.provider_type,
            link: options.link.clone(),
            dedupe_key: Some(Self::dedupe_key(options, identity, bucket)),
            push_to_browser: true,
            ..Default::default()
        })
    }

    fn fallback_service_label(provider_type: Option<ProviderType>) -> &'static str {
        match provider_type {
            Some(ProviderType::Babysitter) => "Grooming appointment",
            Some(ProviderType::Shop) => "Order pickup",
            Some(ProviderType::Vet) | None => "Appointment",
        }
    }

    fn dedupe_key(options: &ReminderOptions, identity: &str, bucket: ReminderBucket) -> String {
        format!(
            "upcoming:{}:{identity}:{}",
            options.audience,
            bucket.minutes()
        )
    }
}

impl RemindersService for RemindersServiceImpl {
    #[tracing::instrument(
        name = "Upcoming reminders",
        skip_all,
        fields(
            audience = %options.audience,
            bookings = bookings.len(),
        )
    )]
    fn generate(&self, bookings: &[Booking], options: &ReminderOptions) -> usize {
        let now = self.clock.now();
        let local_offset = self.clock.local_offset();

        let created = bookings
            .iter()
            .filter_map(|booking| Self::reminder(booking, options, now, local_offset))
            .filter_map(|reminder| self.notification_store.add(reminder))
            .count();

        tracing::debug!(created, "generated reminders");

        created
    }
}
