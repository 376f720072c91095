//! Default file sink of a logger
//!
//! The sink owns an optional output directory and a lazily opened
//! [`RotatingFileStream`]. Nothing touches the file system until the first
//! line is written; without a directory every write is a no-op.

use super::rotating_file::{FilenamePattern, RotatingFileStream, RotationFrequency};
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{LoggerError, Result};
use crate::core::Appender;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct FileSink {
    output_directory: Option<PathBuf>,
    pattern: FilenamePattern,
    frequency: RotationFrequency,
    clock: Arc<dyn Clock>,
    stream: Option<RotatingFileStream>,
}

impl FileSink {
    /// A relative directory is resolved against the current working
    /// directory here, not at the first write.
    pub fn new(output_directory: Option<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.map(resolve_directory),
            pattern: FilenamePattern::default(),
            frequency: RotationFrequency::Daily,
            clock: Arc::new(SystemClock),
            stream: None,
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: FilenamePattern) -> Self {
        self.pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_frequency(mut self, frequency: RotationFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }

    /// Change the output directory for later writes.
    ///
    /// An already open stream is closed only if the directory changes; the
    /// next write then opens a stream in the new directory. A relative
    /// directory is resolved against the current working directory.
    pub fn set_output_directory(&mut self, directory: Option<PathBuf>) {
        let directory = directory.map(resolve_directory);
        if self.output_directory != directory {
            self.stream = None;
            self.output_directory = directory;
        }
    }

    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Path of the file currently written to, if the stream is open
    pub fn current_path(&self) -> Option<&Path> {
        self.stream.as_ref().map(RotatingFileStream::path)
    }

    /// Open the stream on first use and return it.
    ///
    /// Returns `Ok(None)` when no output directory is configured.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::DirectoryCreation`] if the directory cannot be
    /// created (an existing directory is fine), or a file error if the log
    /// file cannot be opened.
    pub fn ensure_stream(&mut self) -> Result<Option<&mut RotatingFileStream>> {
        let Some(directory) = self.output_directory.as_ref() else {
            return Ok(None);
        };

        if self.stream.is_none() {
            create_directory(directory)?;
            let stream = RotatingFileStream::open(
                directory,
                self.pattern.clone(),
                self.frequency,
                Arc::clone(&self.clock),
            )?;
            self.stream = Some(stream);
        }

        Ok(self.stream.as_mut())
    }

    /// Append a rendered file line.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`FileSink::ensure_stream`] and from the write.
    pub fn write(&mut self, line: &str) -> Result<()> {
        match self.ensure_stream()? {
            Some(stream) => stream.write(line),
            None => Ok(()),
        }
    }
}

fn resolve_directory(directory: PathBuf) -> PathBuf {
    std::path::absolute(&directory).unwrap_or(directory)
}

fn create_directory(directory: &Path) -> Result<()> {
    match fs::create_dir_all(directory) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && directory.is_dir() => Ok(()),
        Err(e) => Err(LoggerError::directory_creation(directory, e)),
    }
}

impl Appender for FileSink {
    fn append(&mut self, line: &str) -> Result<()> {
        self.write(line)
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream.as_mut() {
            Some(stream) => stream.flush(),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}
