use super::RemindersPollerConfig;
use crate::{
    dto::input::ReminderOptions, repository::BookingsRepository,
    service::reminders_service::RemindersService,
};
use std::sync::Arc;
use tokio::{
    sync::Notify,
    time::{interval, Interval, MissedTickBehavior},
};

///
/// Periodically generates reminders for the current bookings
///
pub struct RemindersPoller {
    bookings_repository: Arc<dyn BookingsRepository>,
    reminders_service: Arc<dyn RemindersService>,

    interval: Interval,
    options: ReminderOptions,
}

impl RemindersPoller {
    pub fn new(
        config: RemindersPollerConfig,
        bookings_repository: Arc<dyn BookingsRepository>,
        reminders_service: Arc<dyn RemindersService>,
    ) -> Self {
        let mut interval = interval(config.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            bookings_repository,
            reminders_service,
            interval,
            options: config.options,
        }
    }

    ///
    /// Runs one generation pass.
    ///
    /// ### Returns
    /// Number of created reminders
    ///
    pub fn poll(&self) -> usize {
        let bookings = match self.bookings_repository.find_all() {
            Ok(bookings) => bookings,
            Err(err) => {
                tracing::warn!(%err, "cannot read bookings");
                return 0;
            }
        };

        tracing::debug!(count = bookings.len(), "found bookings");

        self.reminders_service.generate(&bookings, &self.options)
    }

    #[tracing::instrument(name = "Reminders Poller", skip_all)]
    pub async fn run(mut self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {},

            // Generate reminders on every tick until closed
            _ = async { loop {
                self.interval.tick().await;

                let created = self.poll();
                if created > 0 {
                    tracing::info!(created, "created reminders");
                }
            }} => {}
        }

        tracing::info!("reminders poller stopped");
    }
}
