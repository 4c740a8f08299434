//! Log level parsing and subscriber setup.

use tracing::Level;

/// Parse a `--loglevel` value.
///
/// Accepts level names (`DEBUG`, `info`, `WARNING`, `critical`, ...) or a
/// number where lower means more verbose: below 10 is trace, 10 debug, up to
/// 20 info, up to 30 warn, anything above is error.
pub fn parse_log_level(value: &str) -> Result<Level, String> {
    if let Ok(number) = value.parse::<u32>() {
        return Ok(match number {
            0..=9 => Level::TRACE,
            10 => Level::DEBUG,
            11..=20 => Level::INFO,
            21..=30 => Level::WARN,
            _ => Level::ERROR,
        });
    }

    match value.to_uppercase().as_str() {
        "TRACE" | "NOTSET" => Ok(Level::TRACE),
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARN" | "WARNING" => Ok(Level::WARN),
        "ERROR" | "CRITICAL" | "FATAL" => Ok(Level::ERROR),
        _ => Err(format!("unknown log level: {}", value)),
    }
}

/// Install the fmt subscriber. Logs go to stderr so that tables on stdout
/// stay clean.
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
