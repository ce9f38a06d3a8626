//! Log setup.

use crate::config::CliConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the log filter: `-v` flags win, then `RUST_LOG`, then the config
/// file, then `warn`.
pub fn filter_directive(config: &CliConfig, verbose: u8) -> Option<String> {
    match verbose {
        0 => None,
        1 => Some("debug".to_string()),
        _ => Some("trace".to_string()),
    }
    .or_else(|| std::env::var("RUST_LOG").ok().filter(|v| !v.is_empty()))
    .or_else(|| config.log_filter.clone())
}

/// Install a stderr subscriber for the rest of the process.
pub fn init(config: &CliConfig, verbose: u8) {
    let directive = filter_directive(config, verbose).unwrap_or_else(|| "warn".to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_wins() {
        let config = CliConfig {
            log_filter: Some("info".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(filter_directive(&config, 1).as_deref(), Some("debug"));
        assert_eq!(filter_directive(&config, 3).as_deref(), Some("trace"));
    }
}
