use tracing_subscriber::EnvFilter;

/// Install the subscriber for `overlay-scene`. Log lines go to stderr so
/// the draw-list report on stdout stays clean. Without `--debug` only scene
/// totals are logged; with it every accepted or rejected shape shows up and
/// `RUST_LOG` can narrow or widen the filter.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
