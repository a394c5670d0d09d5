use std::path::PathBuf;

use crate::log::LogLevel;

pub struct Config {
    /// Minimum level printed to the console.
    ///
    /// `RUST_LOG` takes precedence when it is set.
    pub level: LogLevel,
    /// Directory receiving a daily rolling `app.log`. Console only when unset.
    pub log_dir: Option<PathBuf>,
    /// Strips ANSI colors from console output.
    pub no_color: bool,
    /// 0 prints everything, 1 hides headers, 2 prints only results.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_dir: None,
            no_color: false,
            quiet: 0,
        }
    }
}

impl Config {
    /// Maps a `-v` occurrence count onto a console level.
    pub fn level_from_verbosity(verbose: u8) -> LogLevel {
        match verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_console_only_info() {
        let cfg = Config::default();
        assert_eq!(cfg.level, LogLevel::Info);
        assert!(cfg.log_dir.is_none());
        assert!(!cfg.no_color);
        assert_eq!(cfg.quiet, 0);
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(Config::level_from_verbosity(0), LogLevel::Info);
        assert_eq!(Config::level_from_verbosity(1), LogLevel::Debug);
        assert_eq!(Config::level_from_verbosity(2), LogLevel::Trace);
        assert_eq!(Config::level_from_verbosity(9), LogLevel::Trace);
    }
}
