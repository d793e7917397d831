//! Tracing setup for the `gim` binary.
//!
//! The REPL prints its prompt and command feedback on stdout, so log events
//! are written to stderr and never interleave with a `> ` prompt line. The
//! CLI defaults to `warn`, which keeps an interactive session silent unless
//! `RUST_LOG` or `--log-level` asks for parse and execution traces.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Filter honouring `RUST_LOG` first, then `fallback`
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the stderr subscriber; `level` applies when `RUST_LOG` is unset
///
/// A second call in the same process is ignored.
pub fn init(level: &str) {
    let installed = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if installed.is_ok() {
        tracing::debug!("Logging to stderr at {}", level);
    }
}

/// Debug-level subscriber bound to the test harness output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("gim_core=debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_execute_with_logging() {
        init_test();
        let mut model = crate::Model::default();
        let command = crate::parse_command("add n/Squat w/100 d/01/01/2022").unwrap();
        assert!(command.execute(&mut model).unwrap().mutated);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(DEFAULT_LEVEL);
        init("debug");
    }
}
