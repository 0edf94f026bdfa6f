// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ballpark::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// A report job that did not produce its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFailure {
    pub document: String,
    pub error: String,
}

impl std::fmt::Display for JobFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.document, self.error)
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report stream: {0}")]
    Stream(#[source] std::io::Error),

    #[error("Report job did not complete: {0}")]
    Join(String),

    #[error(
        "{} report job(s) failed: {}",
        .0.len(),
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    JobsFailed(Vec<JobFailure>),
}
