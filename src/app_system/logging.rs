/// Tracing setup
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (from `ROSTER_LOG`,
/// `info` by default) is used.
///
/// ```bash
/// RUST_LOG=debug employee_roster                     # Show debug logs
/// RUST_LOG=warn employee_roster                      # Warnings and errors only
/// RUST_LOG=employee_roster::controller=debug employee_roster
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
