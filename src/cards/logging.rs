//! Process logging bootstrap.
//!
//! The library only emits through the `log` facade, as `key=value` event lines.
//! The binary decides whether anything is printed by calling [`init_logging`] once.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Level used when neither `--verbose` nor `RUST_LOG` asks for more.
pub fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Starts a stderr logger. `RUST_LOG` overrides `level`.
///
/// Repeated calls are no-ops. Returns a readable error if the logger cannot start.
pub fn init_logging(level: &str) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_env_or_str(level)
                .map_err(|err| format!("invalid log level `{}`: {}", level, err))?
                .log_to_stderr()
                .start()
                .map_err(|err| format!("failed to start logger: {}", err))
        })
        .map(|_| ())
}
