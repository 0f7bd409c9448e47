// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use line_tools_domain::ResultLines;
use line_tools_ports::ReportSink;
use line_tools_shared_kernel::{InfrastructureError, Result};

use crate::results_path::ResultsLocation;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // PID + nanos keeps concurrent runs from sharing a temp name.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = (|| {
            let file = File::create(&tmp)?;
            let mut w = BufWriter::new(file);
            w.write_all(data)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
            drop(w);
            fs::rename(&tmp, path)
        })();
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(&parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

/// Where a [`ResultsFile`] writes.
#[derive(Debug, Clone)]
enum Target {
    Fixed(PathBuf),
    /// Resolved on first publish, so runs without a report touch nothing.
    Deferred { location: ResultsLocation, input: PathBuf },
}

/// [`ReportSink`] that persists the report, one newline-terminated row per line.
#[derive(Debug, Clone)]
pub struct ResultsFile {
    target: Target,
}

impl ResultsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { target: Target::Fixed(path.into()) }
    }

    /// Results file for `input`, placed according to `location`.
    pub fn for_input(location: ResultsLocation, input: impl Into<PathBuf>) -> Self {
        Self { target: Target::Deferred { location, input: input.into() } }
    }

    fn resolve(&mut self) -> Result<PathBuf> {
        let path = match &self.target {
            Target::Fixed(path) => return Ok(path.clone()),
            Target::Deferred { location, input } => location.resolve(input)?,
        };
        self.target = Target::Fixed(path.clone());
        Ok(path)
    }
}

impl ReportSink for ResultsFile {
    fn publish(&mut self, lines: &ResultLines) -> Result<()> {
        let path = self.resolve()?;
        FileWriter::atomic_write(&path, lines.to_text().as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
        log::info!("results written to {}", path.display());
        Ok(())
    }
}
