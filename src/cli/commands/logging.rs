use clap::{Arg, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("LINKBIO_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::validator_log_level;
    use clap::{Arg, Command};

    fn parse(level: &str) -> Result<Option<u8>, clap::Error> {
        let matches = Command::new("test")
            .arg(
                Arg::new("level")
                    .long("level")
                    .value_parser(validator_log_level()),
            )
            .try_get_matches_from(vec!["test", "--level", level])?;

        Ok(matches.get_one::<u8>("level").copied())
    }

    #[test]
    fn test_named_levels() -> Result<(), clap::Error> {
        for (level, expected) in [
            ("error", 0_u8),
            ("WARN", 1),
            ("info", 2),
            ("Debug", 3),
            ("trace", 4),
        ] {
            assert_eq!(parse(level)?, Some(expected), "level: {level}");
        }
        Ok(())
    }

    #[test]
    fn test_numeric_levels() -> Result<(), clap::Error> {
        for n in 0..=5_u8 {
            assert_eq!(parse(&n.to_string())?, Some(n));
        }
        assert!(parse("6").is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_level() {
        assert!(parse("verbose").is_err());
    }
}
