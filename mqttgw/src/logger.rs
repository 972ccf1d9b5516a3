use std::fs::OpenOptions;

use slog::{o, Drain, Duplicate, Logger, Never};

use mqttgw_conf::logging::Log;

use crate::Result;

pub use slog_scope::GlobalLoggerGuard;

/// Build the global logger from the `log` settings section and bridge the
/// `log` facade onto it. The returned guard must be kept alive for the
/// lifetime of the process.
pub fn logger_init(cfg: &Log) -> Result<GlobalLoggerGuard> {
    let drain: Box<dyn Drain<Ok = (), Err = Never> + Send> = if cfg.to.console() && cfg.to.file() {
        Box::new(Duplicate(console_drain(), file_drain(&cfg.file)?).ignore_res())
    } else if cfg.to.console() {
        Box::new(console_drain())
    } else if cfg.to.file() {
        Box::new(file_drain(&cfg.file)?)
    } else {
        Box::new(slog::Discard)
    };

    let drain = drain.filter_level(cfg.level.inner()).ignore_res();
    let drain = slog_async::Async::new(drain)
        .chan_size(8192)
        .overflow_strategy(slog_async::OverflowStrategy::DropAndReport)
        .build()
        .fuse();

    let guard = slog_scope::set_global_logger(Logger::root(drain, o!()));
    slog_stdlog::init_with_level(slog_to_log_level(cfg.level.inner()))?;
    Ok(guard)
}

fn console_drain() -> impl Drain<Ok = (), Err = Never> + Send {
    let decorator = slog_term::TermDecorator::new().build();
    slog_term::FullFormat::new(decorator).build().fuse()
}

fn file_drain(filename: &str) -> Result<impl Drain<Ok = (), Err = Never> + Send> {
    let file = OpenOptions::new().create(true).append(true).open(filename)?;
    let decorator = slog_term::PlainDecorator::new(file);
    Ok(slog_term::FullFormat::new(decorator).build().fuse())
}

fn slog_to_log_level(level: slog::Level) -> log::Level {
    match level {
        slog::Level::Trace => log::Level::Trace,
        slog::Level::Debug => log::Level::Debug,
        slog::Level::Info => log::Level::Info,
        slog::Level::Warning => log::Level::Warn,
        slog::Level::Error => log::Level::Error,
        slog::Level::Critical => log::Level::Error,
    }
}
