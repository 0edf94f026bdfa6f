// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Destinations for rendered report documents.

use crate::error::ReportError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Receives finished report documents.
///
/// Implementations must be safe to call from several report jobs at once.
pub trait ReportSink: Send + Sync {
    /// Stores `contents` under the document name `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document could not be stored.
    fn write_document(&self, name: &str, contents: &str) -> Result<(), ReportError>;
}

/// Writes each document to its own file in a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportSink for FileSink {
    fn write_document(&self, name: &str, contents: &str) -> Result<(), ReportError> {
        let path: PathBuf = self.dir.join(name);
        std::fs::write(&path, contents).map_err(|source| ReportError::Io { path, source })
    }
}

/// Appends every document to one stream, one document after another.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> ReportSink for WriterSink<W> {
    fn write_document(&self, _name: &str, contents: &str) -> Result<(), ReportError> {
        let mut writer = self.writer.lock();
        writer
            .write_all(contents.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
            .map_err(ReportError::Stream)
    }
}

/// Keeps documents in memory, keyed by name.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<BTreeMap<String, String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.documents.lock().get(name).cloned()
    }

    /// Names of every stored document, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.documents.lock().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.lock().is_empty()
    }
}

impl ReportSink for MemorySink {
    fn write_document(&self, name: &str, contents: &str) -> Result<(), ReportError> {
        self.documents
            .lock()
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
