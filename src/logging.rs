//! Logger setup
//!
//! Library code logs through the `log` facade; the binary installs `env_logger`.

use log::LevelFilter;

/// Level for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger, writing to stderr
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .parse_default_env();
    // A logger may already be installed (tests, embedding)
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
