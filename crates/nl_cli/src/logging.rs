use std::str::FromStr;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Unknown names fall back to `INFO`.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::INFO)
}

/// Install the global fmt subscriber once; later calls are no-ops.
pub fn init_logging(level: &str) {
    if !tracing::dispatcher::has_been_set() {
        let level = parse_level(level);
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .init();
        });
    }
}
