mod application;

use application::ApplicationEnv;
use pet_care_notifier::clock::{Clock, SystemClock};

fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    // Local offset can only be read while the process is single-threaded,
    // the file log writer spawns its own thread
    let clock = SystemClock::new();

    let _guard = application::setup_tracing(&env)?;
    tracing::info!(local_offset = %clock.local_offset(), "starting pet care notifier");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(application::run(env, clock))
}
