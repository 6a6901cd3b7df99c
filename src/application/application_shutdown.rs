use super::ApplicationStateToClose;
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

pub async fn close(state: ApplicationStateToClose) {
    stop_task("storage watcher", state.watcher_close_notify, state.watcher_handle).await;
    stop_task("reminders poller", state.poller_close_notify, state.poller_handle).await;

    drop(state.subscription);
}

async fn stop_task(name: &'static str, close_notify: Arc<Notify>, handle: JoinHandle<()>) {
    tracing::info!(name, "stopping task");
    close_notify.notify_one();
    if let Err(err) = handle.await {
        tracing::error!(name, %err, "task failed");
    }
}

///
/// Waits for Ctrl+C or, on unix, SIGTERM.
///
/// ### Errors
/// When signal handlers cannot be installed
///
pub async fn shutdown_signal() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                tracing::info!("received Ctrl+C");
            },
            _ = terminate.recv() => tracing::info!("received SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        tracing::info!("received Ctrl+C");
    }

    tracing::info!("starting shutdown");

    Ok(())
}
