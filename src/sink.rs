use crate::stat::CpuStat;
use anyhow::{Context, Result};
use csv::{Writer, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

const CSV_FILE_MODE: u32 = 0o644;

/// Append-only csv sink for one monitored pid. Rows pass through the
/// csv writer's buffer, so flush() must run before the process exits.
pub struct CsvSink {
    path: PathBuf,
    writer: Writer<File>,
}

impl CsvSink {
    /// Open (or create) pscpu_<pid>.csv inside folder. An existing file
    /// is appended to, never truncated.
    pub fn open(folder: &Path, pid: u32) -> Result<Self> {
        let path = folder.join(format!("pscpu_{pid}.csv"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .mode(CSV_FILE_MODE)
            .open(&path)
            .with_context(|| format!("error when creating/opening the csv file {}", path.display()))?;

        Ok(Self {
            path,
            writer: WriterBuilder::new().has_headers(false).from_writer(file),
        })
    }

    /// Persist one stat as a csv row and echo the human readable line
    /// to stdout.
    pub fn append(&mut self, stat: &CpuStat) -> Result<()> {
        self.writer
            .write_record(&stat.to_record())
            .with_context(|| format!("error writing to {}", self.path.display()))?;

        println!("{stat}");
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("error flushing {}", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
