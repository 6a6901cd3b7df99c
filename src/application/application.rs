use super::{close, create_state, shutdown_signal, ApplicationEnv};
use pet_care_notifier::clock::SystemClock;

pub async fn run(env: ApplicationEnv, clock: SystemClock) -> anyhow::Result<()> {
    let (state, state_to_close) = create_state(&env, clock)?;

    let unread = state
        .notification_store
        .count_unread(state.notification_filter);
    tracing::info!(role = %env.role, unread, "notifier started");

    let result = shutdown_signal().await;

    close(state_to_close).await;

    result
}
