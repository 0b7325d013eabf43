use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("can't create log files: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),
    #[error("can't install logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Send logs to daily rolling files under `<data_dir>/logs`, and to stdout
/// when `show_std` is set.
///
/// The level comes from `log_level`, then `RUST_LOG` taken as-is, then `info`.
pub fn enable_logging(
    data_dir: &Path,
    log_level: Option<LevelFilter>,
    show_std: bool,
) -> Result<(), LoggingError> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix("slowpay")
        .build(data_dir.join("logs"))?;

    let stdout = std::io::stdout.with_filter(move |_| show_std);

    let directives = filter_directives(log_level, std::env::var("RUST_LOG").ok());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(directives))
        .with_ansi(false)
        .with_writer(stdout.and(appender))
        .finish()
        .try_init()?;
    Ok(())
}

/// An explicit level applies to both crates. `RUST_LOG` is already a full
/// directive string and is passed through untouched.
fn filter_directives(log_level: Option<LevelFilter>, rust_log: Option<String>) -> String {
    match (log_level, rust_log) {
        (Some(level), _) => format!("paycore={level},slowpay={level}"),
        (None, Some(env)) if !env.trim().is_empty() => env,
        (None, _) => "paycore=info,slowpay=info".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        let directives = filter_directives(Some(LevelFilter::DEBUG), Some("paycore=trace".into()));
        assert_eq!(directives.to_lowercase(), "paycore=debug,slowpay=debug");
    }

    #[test]
    fn test_rust_log_used_verbatim() {
        let directives = filter_directives(None, Some("paycore=debug".into()));
        assert_eq!(directives, "paycore=debug");
        let parsed = tracing_subscriber::EnvFilter::try_new(&directives);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(filter_directives(None, None), "paycore=info,slowpay=info");
        assert_eq!(filter_directives(None, Some("  ".into())), "paycore=info,slowpay=info");
    }
}
