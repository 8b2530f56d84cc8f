use chrono::{DateTime, Local};
use log::{LevelFilter, Record};
use std::io::{self, Write};

use env_logger::{Builder, Target};

/// Environment variable naming a log file, used when `--log-file` is absent.
pub const LOG_FILE_ENV: &str = "FIREDASH_LOG_FILE";

/// Initialize logging.
///
/// With a log file (from the argument or [`LOG_FILE_ENV`]) every record down
/// to `debug` goes to that file; otherwise `env_logger` writes to stderr,
/// filtered by `RUST_LOG`.
pub fn init_logger(log_file: Option<&str>) {
    let log_file = log_file
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_FILE_ENV).ok())
        .filter(|p| !p.is_empty());

    if let Some(path) = log_file {
        if let Err(err) = init_file_logger(&path) {
            eprintln!("Failed to initialize file logger at '{path}': {err}");
            env_logger::init();
        }
    } else {
        env_logger::init();
    }
}

/// One file-log line: `time LEVEL target file:line - message`.
fn format_record(record: &Record<'_>, now: DateTime<Local>) -> String {
    format!(
        "{} {:<5} {} {}:{} - {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.file().unwrap_or("?"),
        record.line().unwrap_or(0),
        record.args()
    )
}

fn init_file_logger(path: &str) -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", format_record(record, Local::now())))
        .target(Target::Pipe(Box::new(file)))
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .init();

    log::debug!("logging call-note resolution to {path}");

    Ok(())
}
