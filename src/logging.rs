use flexi_logger::{Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle};
use std::path::Path;

/// Level used when `RUST_LOG` is unset and a log file is given
const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

/// Level used when `RUST_LOG` is unset and only stderr is logged to
const PRINT_LOG_LEVEL: &str = "warn";

/// Starts the logger.  The calendar screen owns the terminal, so when
/// running interactively nothing is logged unless `log_file` is given.  In
/// print mode, warnings and errors also go to stderr.
///
/// The returned handle must be kept alive for as long as logging is wanted.
pub(crate) fn init(
    log_file: Option<&Path>,
    interactive: bool,
) -> Result<Option<LoggerHandle>, FlexiLoggerError> {
    if log_file.is_none() && interactive {
        return Ok(None);
    }
    let mut logger = Logger::try_with_env_or_str(default_level(log_file))?;
    if let Some(path) = log_file {
        logger = logger.log_to_file(FileSpec::try_from(path)?);
        logger = if interactive {
            logger.print_message()
        } else {
            logger.duplicate_to_stderr(Duplicate::Warn)
        };
    }
    logger.start().map(Some)
}

/// The level to log at when `RUST_LOG` does not say otherwise
fn default_level(log_file: Option<&Path>) -> &'static str {
    if log_file.is_some() {
        DEFAULT_LOG_LEVEL
    } else {
        PRINT_LOG_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let expected = if cfg!(debug_assertions) {
            "debug"
        } else {
            "info"
        };
        assert_eq!(default_level(Some(Path::new("escala.log"))), expected);
        assert_eq!(default_level(None), "warn");
    }
}
