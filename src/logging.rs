//! Operator-facing log channel.
//!
//! Diagnostics go to stderr through `tracing-subscriber`, keeping stdout
//! free for the rendered page. The filter comes from `USERDECK_LOG`
//! (`EnvFilter` syntax); without it, `--verbose` selects `debug` and the
//! default is `warn`.

use tracing_subscriber::EnvFilter;

use crate::constants::{APP_NAME, ENV_LOG};
use crate::env::Env;

/// Resolve the filter directive from the environment and the verbosity flag.
pub fn filter_directive(env: &Env, verbose: bool) -> String {
    match env.get(ENV_LOG) {
        Some(directive) => directive,
        None if verbose => format!("warn,{APP_NAME}=debug"),
        None => "warn".to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(env: &Env, verbose: bool) {
    let directive = filter_directive(env, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid {ENV_LOG} value {directive:?}: {e}");
        EnvFilter::new("warn")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warn() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(filter_directive(&env, false), "warn");
    }

    #[test]
    fn verbose_enables_crate_debug() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert_eq!(filter_directive(&env, true), "warn,userdeck=debug");
    }

    #[test]
    fn env_directive_wins_over_verbose() {
        let env = Env::mock([("USERDECK_LOG", "trace")]);
        assert_eq!(filter_directive(&env, true), "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let env = Env::mock([("USERDECK_LOG", "not a [valid filter")]);
        init(&env, false);
        init(&env, true);
    }
}
