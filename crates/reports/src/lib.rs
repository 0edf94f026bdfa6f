// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod documents;
mod error;
mod generator;
mod options;
mod sink;

#[cfg(test)]
mod tests;

pub use documents::{
    ALL_MATCHES, ALL_TEAMS, PLAYER_STATS_REPORT, PlayerStatsReport, TEAM_SCHEDULE_REPORT,
    TICKET_SALES_REPORT, TeamScheduleReport, TicketSalesReport, player_stats_document_name,
    team_schedule_document_name, ticket_sales_document_name,
};
pub use error::{JobFailure, ReportError};
pub use generator::{ReportGenerator, ReportJob, ReportSummary};
pub use options::{DEFAULT_MAX_CONCURRENT_JOBS, ReportOptions};
pub use sink::{FileSink, MemorySink, ReportSink, WriterSink};
