use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INIT: Once = Once::new();

const DEFAULT_LOG_DIRECTIVES: &str = "info";

pub fn init_logging() {
    LOGGER_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

        // another subscriber may already be installed (tests, embedding)
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .try_init();
    });
}
