// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. It is only turned on by the
//! `-l/--enable-logging` flag, and then it writes to a file so that the terminal output
//! (which is the whole point of this tool) is never mixed with log lines.

use std::{ops::Add, path::PathBuf};

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where log output goes. Stdout is never an option, it belongs to the colored output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WriterConfig {
    #[default]
    None,
    Stderr,
    File(String),
    StderrAndFile(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

/// Instead of having lots of arguments to [`try_initialize_logging_global`], it receives
/// anything that implements [`Into<TracingConfig>`].
///
/// ```no_run
/// use hexterm_cmdr::{TracingConfig, WriterConfig, try_initialize_logging_global};
///
/// let config: TracingConfig = tracing_core::LevelFilter::DEBUG.into();
/// let config = config + WriterConfig::Stderr.into();
/// try_initialize_logging_global(config).ok();
/// ```
pub mod tracing_config_options {
    use super::{Add, DEFAULT_LOG_FILE_NAME, LevelFilter, TracingConfig, WriterConfig};

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances. The more verbose level wins.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances. The `rhs` clobbers `self` where both have a
    /// file name, since it has higher specificity.
    /// - `File("a") + File("b") = File("b")`
    /// - `Stderr + File("b") = StderrAndFile("b")`
    /// - `File("a") + None = File("a")`
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{File, None, Stderr, StderrAndFile};

            match (self, rhs) {
                // No collision merge.
                (None, it) | (it, None) => it,
                (Stderr, Stderr) => Stderr,
                (Stderr, File(f) | StderrAndFile(f))
                | (File(f) | StderrAndFile(f), Stderr) => StderrAndFile(f),

                // Collision (rhs has higher specificity).
                (File(_), File(f)) => File(f),
                (File(_) | StderrAndFile(_), StderrAndFile(f))
                | (StderrAndFile(_), File(f)) => StderrAndFile(f),
            }
        }
    }
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set, can't be unset or changed.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(
    tracing_config: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let layers = try_create_layers(tracing_config.into())?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|err| miette::miette!("Can't set global tracing subscriber: {err}"))
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter for all the layers.
    return_it.push(Box::new(tracing_config.level_filter));

    if let Some(layer) =
        create_stderr_layer(tracing_config.level_filter, &tracing_config.writer_config)
    {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(tracing_config.level_filter, &tracing_config.writer_config)?
    {
        return_it.push(layer);
    }

    Ok(return_it)
}

fn create_stderr_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::Stderr | WriterConfig::StderrAndFile(_) => Some(Box::new(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::File(path) | WriterConfig::StderrAndFile(path) => {
            let file = try_create_file_appender(path)?;
            Ok(Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            )))
        }
        WriterConfig::None | WriterConfig::Stderr => Ok(None),
    }
}

/// The file is never rolled over.
///
/// # Errors
///
/// Returns an error if the path has no file name.
fn try_create_file_appender(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't use {} as a log file name.", path.display())
    })?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_add_writer_configs() {
        let none = WriterConfig::None;
        let stderr = WriterConfig::Stderr;
        let file_a = WriterConfig::File("a.txt".to_string());
        let file_b = WriterConfig::File("b.txt".to_string());
        let both_a = WriterConfig::StderrAndFile("a.txt".to_string());
        let both_b = WriterConfig::StderrAndFile("b.txt".to_string());

        // No collision merge.
        assert_eq!(none.clone() + none.clone(), none);
        assert_eq!(none.clone() + stderr.clone(), stderr);
        assert_eq!(file_a.clone() + none.clone(), file_a);
        assert_eq!(stderr.clone() + file_a.clone(), both_a);
        assert_eq!(file_a.clone() + stderr.clone(), both_a);

        // Collision (rhs has higher specificity).
        assert_eq!(file_a.clone() + file_b.clone(), file_b);
        assert_eq!(both_a.clone() + file_b.clone(), both_b);
        assert_eq!(file_a.clone() + both_b.clone(), both_b);
    }

    #[test]
    fn test_add_tracing_configs() {
        let lhs: TracingConfig = LevelFilter::INFO.into();
        let rhs = TracingConfig {
            level_filter: LevelFilter::TRACE,
            writer_config: WriterConfig::Stderr,
        };
        assert_eq!(
            lhs + rhs,
            TracingConfig {
                level_filter: LevelFilter::TRACE,
                writer_config: WriterConfig::StderrAndFile(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        );
    }

    #[test]
    fn test_layers_for_stderr_only() {
        let layers = try_create_layers(WriterConfig::Stderr.into()).unwrap();
        // Level filter plus the stderr layer.
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn test_layers_for_file() {
        let path = std::env::temp_dir().join("hexterm_log_support_test.log");
        let path = path.to_string_lossy().to_string();
        let layers = try_create_layers(WriterConfig::StderrAndFile(path).into()).unwrap();
        assert_eq!(layers.len(), 3);
    }

    #[test]
    fn test_file_appender_rejects_bad_name() {
        assert!(try_create_file_appender("..").is_err());
    }
}
