//! Tracing setup shared by the server and the capture client.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Targets that follow the requested verbosity. Everything else, sqlx's per-query
/// statements included, stays at `warn`.
const APP_TARGETS: [&str; 3] = ["placeregistry", "capture", "tower_http"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    #[default]
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    /// Maps `-v` counts and `--quiet` from the capture CLI. `--quiet` wins.
    pub fn from_occurrences(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    #[must_use]
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::INFO,
            Self::Verbose => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    fn directives(self) -> String {
        let level = self.level_filter().to_string().to_lowercase();
        APP_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .fold("warn".to_owned(), |acc, directive| acc + "," + &directive)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `verbosity` when set.
/// Calling this more than once is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(?verbosity, "logging initialised");
    }
}
