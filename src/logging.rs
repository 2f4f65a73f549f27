//! Logger setup shared by the binaries.

use env_logger::{Env, Target, WriteStyle};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogSettings {
    /// Default level `debug` instead of `info`
    pub debug: bool,
    /// Append log lines to this file as well as stderr
    pub log_file: Option<PathBuf>,
}

/// Writes every log line to stderr and a file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Open `path` for appending and tee into it.
fn open_tee(path: &Path) -> io::Result<TeeWriter> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(TeeWriter { file })
}

/// Initialise `env_logger`. `RUST_LOG` still wins over the default level.
///
/// A log file that cannot be opened is reported and skipped. Calling this
/// twice is harmless; the second call does nothing.
pub fn init_logging(settings: &LogSettings) {
    let level = if settings.debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level));
    builder.format_timestamp_secs();

    let mut open_error = None;
    if let Some(path) = &settings.log_file {
        match open_tee(path) {
            Ok(tee) => {
                builder
                    .target(Target::Pipe(Box::new(tee)))
                    .write_style(WriteStyle::Never);
            }
            Err(e) => open_error = Some((path.clone(), e)),
        }
    }

    if builder.try_init().is_err() {
        return;
    }
    if let Some((path, e)) = open_error {
        log::warn!("Cannot open log file {}: {}; logging to stderr only", path.display(), e);
    } else if let Some(path) = &settings.log_file {
        log::debug!("Logging to {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_tee_writer_appends_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("squad.log");
        fs::write(&path, "earlier run\n").unwrap();

        let mut tee = open_tee(&path).unwrap();
        writeln!(tee, "[INFO] scored 12 players").unwrap();
        tee.flush().unwrap();
        drop(tee);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "earlier run\n[INFO] scored 12 players\n"
        );
    }

    #[test]
    fn test_unopenable_log_file_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("squad.log");
        assert!(open_tee(&path).is_err());

        init_logging(&LogSettings {
            debug: true,
            log_file: Some(path.clone()),
        });
        // second call is a no-op
        init_logging(&LogSettings::default());
        assert!(!path.exists());
    }
}
