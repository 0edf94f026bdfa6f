// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::num::NonZeroUsize;

/// Number of report jobs allowed to run at once unless configured otherwise.
pub const DEFAULT_MAX_CONCURRENT_JOBS: usize = 4;

/// Tuning for report fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub max_concurrent_jobs: NonZeroUsize,
}

impl ReportOptions {
    #[must_use]
    pub const fn new(max_concurrent_jobs: NonZeroUsize) -> Self {
        Self {
            max_concurrent_jobs,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_concurrent_jobs: NonZeroUsize::new(DEFAULT_MAX_CONCURRENT_JOBS)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}
