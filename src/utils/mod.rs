pub mod paths;
pub mod persistence;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "budget_allocator=info";

/// Initializes the global tracing subscriber. `RUST_LOG` wins over `filter`,
/// which wins over the crate default.
pub fn init_tracing(filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directives = select_directives(from_env.as_deref(), filter);

        // Another subscriber may already be installed by the embedding app.
        let _ = fmt().with_env_filter(EnvFilter::new(directives)).try_init();
    });
}

/// First usable directive string among the environment and the config,
/// skipping blank or unparsable ones.
fn select_directives<'a>(from_env: Option<&'a str>, configured: Option<&'a str>) -> &'a str {
    [from_env, configured]
        .into_iter()
        .flatten()
        .find(|directives| !directives.trim().is_empty() && EnvFilter::try_new(directives).is_ok())
        .unwrap_or(DEFAULT_DIRECTIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_beats_config_beats_default() {
        assert_eq!(
            select_directives(Some("budget_allocator=trace"), Some("warn")),
            "budget_allocator=trace"
        );
        assert_eq!(select_directives(None, Some("warn")), "warn");
        assert_eq!(select_directives(None, None), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn blank_or_broken_directives_fall_through() {
        assert_eq!(select_directives(Some("  "), Some("debug")), "debug");
        assert_eq!(
            select_directives(Some("budget_allocator=loud"), Some("error")),
            "error"
        );
        assert_eq!(
            select_directives(Some(""), Some("budget_allocator=loud")),
            DEFAULT_DIRECTIVE
        );
    }
}
