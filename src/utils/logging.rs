use env_logger::Env;

/// Route `log` records to stderr. `RUST_LOG` wins over `debug`.
pub(crate) fn init(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let default_filter = format!("{}={level}", env!("CARGO_CRATE_NAME"));
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
