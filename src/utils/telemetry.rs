use tracing::Level;

/// Installs a stdout `fmt` subscriber. Does nothing when a global subscriber
/// is already set, so tests may call it repeatedly.
pub fn init_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
