use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Logging to stderr, and to `log_file` when given. stdout is kept for the document.
pub fn app_config(log_file: Option<&Path>, level: LevelFilter) -> anyhow::Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let mut config = Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = log_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        config = config.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    config
        .build(root.build(level))
        .context("Invalid logging configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_only_config() {
        let config = app_config(None, LevelFilter::Info).unwrap();
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.root().level(), LevelFilter::Info);
    }

    #[test]
    fn file_appender_is_added() {
        let path = std::env::temp_dir().join(format!("promdoc-{}.log", std::process::id()));
        let config = app_config(Some(&path), LevelFilter::Debug).unwrap();
        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().appenders(), ["stderr", "file"]);
        let _ = std::fs::remove_file(path);
    }
}
