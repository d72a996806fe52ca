use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (tests, embedding) keeps the subscriber that is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
