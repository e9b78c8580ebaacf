use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Map `-v` counts to a tracing level. Zero keeps logging off.
const fn verbosity_level(count: u8) -> Option<tracing::Level> {
    match count {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Parse the command line, bring up telemetry, and hand back the action for
/// the binary to execute.
///
/// # Errors
///
/// Returns an error if telemetry initialization or argument dispatch fails.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let level = verbosity_level(
        matches
            .get_one::<u8>(commands::logging::ARG_VERBOSITY)
            .copied()
            .unwrap_or(0),
    );

    telemetry::init(level)?;

    dispatch::handler(&matches)
}

#[cfg(test)]
mod tests {
    use super::verbosity_level;

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some(tracing::Level::WARN));
        assert_eq!(verbosity_level(2), Some(tracing::Level::INFO));
        assert_eq!(verbosity_level(3), Some(tracing::Level::DEBUG));
        assert_eq!(verbosity_level(4), Some(tracing::Level::TRACE));
        assert_eq!(verbosity_level(250), Some(tracing::Level::TRACE));
    }
}
