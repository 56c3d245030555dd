use tracing::Level;

/// Initialize the global tracing subscriber, writing compact output to
/// stderr. Safe to call multiple times; subsequent calls are no-ops for the
/// global subscriber.
pub fn init_default(max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
