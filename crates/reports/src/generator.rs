// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report computation and fan-out.
//!
//! Reports read the backend's registries without holding any entity lock
//! across serialization or I/O. A report taken while bookings are in flight
//! may mix states from slightly different moments; that is accepted.
//!
//! `generate_all_reports` runs one job per document on the blocking pool,
//! gated by a semaphore sized from [`ReportOptions`], and waits for every job
//! before returning.

use crate::documents::{
    ALL_MATCHES, ALL_TEAMS, PLAYER_STATS_REPORT, PlayerStatsReport, TEAM_SCHEDULE_REPORT,
    TICKET_SALES_REPORT, TeamScheduleReport, TicketSalesReport, player_stats_document_name,
    team_schedule_document_name, ticket_sales_document_name,
};
use crate::error::{JobFailure, ReportError};
use crate::options::ReportOptions;
use crate::sink::{FileSink, ReportSink};
use ballpark::{Backend, CoreError};
use ballpark_domain::{
    MatchDetails, MatchId, Player, PlayerStats, Team, TeamId, Ticket, TicketHold,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// One unit of work in a full report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportJob {
    /// Player statistics across every team.
    PlayerStats,
    TeamSchedule(TeamId),
    /// Ticket sales across every match.
    TicketSales,
}

impl ReportJob {
    #[must_use]
    pub fn document_name(&self) -> String {
        match self {
            Self::PlayerStats => player_stats_document_name(None),
            Self::TeamSchedule(team_id) => team_schedule_document_name(team_id),
            Self::TicketSales => ticket_sales_document_name(None),
        }
    }
}

/// Outcome of a successful full report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Names of the documents written, sorted.
    pub documents: Vec<String>,
}

/// Computes reports from a shared backend.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    backend: Arc<Backend>,
    options: ReportOptions,
}

impl ReportGenerator {
    #[must_use]
    pub fn new(backend: Arc<Backend>) -> Self {
        Self::with_options(backend, ReportOptions::default())
    }

    #[must_use]
    pub const fn with_options(backend: Arc<Backend>, options: ReportOptions) -> Self {
        Self { backend, options }
    }

    #[must_use]
    pub const fn options(&self) -> ReportOptions {
        self.options
    }

    // ========================================================================
    // Report computation
    // ========================================================================

    /// Statistics for every player, or for one team's players.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TeamNotFound` if `team_id` names an unknown team.
    pub fn player_stats_report(
        &self,
        team_id: Option<&TeamId>,
    ) -> Result<PlayerStatsReport, CoreError> {
        let players: Vec<Player> = match team_id {
            Some(team_id) => {
                self.require_team(team_id)?;
                self.backend.players_by_team(team_id)
            }
            None => self.backend.players(),
        };
        let players: Vec<PlayerStats> = players.iter().map(Player::stats).collect();

        Ok(PlayerStatsReport {
            report_type: String::from(PLAYER_STATS_REPORT),
            generated_at: OffsetDateTime::now_utc(),
            player_count: players.len(),
            team_id: team_id.map_or_else(|| String::from(ALL_TEAMS), ToString::to_string),
            players,
        })
    }

    /// A team's details and every match it plays in.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TeamNotFound` if the team does not exist.
    pub fn team_schedule_report(&self, team_id: &TeamId) -> Result<TeamScheduleReport, CoreError> {
        let team: Team = self.require_team(team_id)?;
        let matches: Vec<MatchDetails> = self
            .backend
            .schedule()
            .matches_by_team(team_id)
            .iter()
            .map(ballpark_domain::Match::details)
            .collect();

        Ok(TeamScheduleReport {
            report_type: String::from(TEAM_SCHEDULE_REPORT),
            generated_at: OffsetDateTime::now_utc(),
            team: team.details(),
            match_count: matches.len(),
            matches,
        })
    }

    /// Ticket counts by status and revenue from sold tickets, for every
    /// match or for one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MatchNotFound` if `match_id` names an unknown
    /// match.
    pub fn ticket_sales_report(
        &self,
        match_id: Option<&MatchId>,
    ) -> Result<TicketSalesReport, CoreError> {
        let tickets: Vec<Arc<Ticket>> = match match_id {
            Some(match_id) => {
                if self.backend.get_match(match_id).is_none() {
                    return Err(CoreError::MatchNotFound(match_id.clone()));
                }
                self.backend.tickets_for_match(match_id)
            }
            None => self.backend.tickets(),
        };

        let mut report: TicketSalesReport = TicketSalesReport {
            report_type: String::from(TICKET_SALES_REPORT),
            generated_at: OffsetDateTime::now_utc(),
            match_id: match_id.map_or_else(|| String::from(ALL_MATCHES), ToString::to_string),
            total_tickets: tickets.len(),
            available_tickets: 0,
            reserved_tickets: 0,
            sold_tickets: 0,
            revenue: Decimal::ZERO,
        };

        for ticket in &tickets {
            // One snapshot per ticket keeps its status and revenue consistent.
            match ticket.hold() {
                TicketHold::Available => report.available_tickets += 1,
                TicketHold::Reserved(_) => report.reserved_tickets += 1,
                TicketHold::Sold(_) => {
                    report.sold_tickets += 1;
                    report.revenue += ticket.price();
                }
                TicketHold::Cancelled => {}
            }
        }

        Ok(report)
    }

    fn require_team(&self, team_id: &TeamId) -> Result<Team, CoreError> {
        self.backend
            .get_team(team_id)
            .ok_or_else(|| CoreError::TeamNotFound(team_id.clone()))
    }

    // ========================================================================
    // Report delivery
    // ========================================================================

    /// Computes the player statistics report and writes it to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the team filter is unknown, or the document could
    /// not be serialized or written.
    pub fn generate_player_stats_report(
        &self,
        sink: &dyn ReportSink,
        team_id: Option<&TeamId>,
    ) -> Result<PlayerStatsReport, ReportError> {
        let report: PlayerStatsReport = self.player_stats_report(team_id)?;
        deliver(sink, &player_stats_document_name(team_id), &report)?;
        Ok(report)
    }

    /// Computes a team's schedule report and writes it to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the team is unknown, or the document could not be
    /// serialized or written.
    pub fn generate_team_schedule_report(
        &self,
        team_id: &TeamId,
        sink: &dyn ReportSink,
    ) -> Result<TeamScheduleReport, ReportError> {
        let report: TeamScheduleReport = self.team_schedule_report(team_id)?;
        deliver(sink, &team_schedule_document_name(team_id), &report)?;
        Ok(report)
    }

    /// Computes the ticket sales report and writes it to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the match filter is unknown, or the document
    /// could not be serialized or written.
    pub fn generate_ticket_sales_report(
        &self,
        match_id: Option<&MatchId>,
        sink: &dyn ReportSink,
    ) -> Result<TicketSalesReport, ReportError> {
        let report: TicketSalesReport = self.ticket_sales_report(match_id)?;
        deliver(sink, &ticket_sales_document_name(match_id), &report)?;
        Ok(report)
    }

    fn run_job(&self, job: &ReportJob, sink: &dyn ReportSink) -> Result<(), ReportError> {
        match job {
            ReportJob::PlayerStats => self.generate_player_stats_report(sink, None).map(|_| ()),
            ReportJob::TeamSchedule(team_id) => self
                .generate_team_schedule_report(team_id, sink)
                .map(|_| ()),
            ReportJob::TicketSales => self.generate_ticket_sales_report(None, sink).map(|_| ()),
        }
    }

    // ========================================================================
    // Fan-out
    // ========================================================================

    /// The jobs a full report run performs: all-team player statistics, one
    /// schedule per registered team, and all-match ticket sales.
    #[must_use]
    pub fn jobs(&self) -> Vec<ReportJob> {
        let mut jobs: Vec<ReportJob> = vec![ReportJob::PlayerStats];
        jobs.extend(
            self.backend
                .teams()
                .iter()
                .map(|team| ReportJob::TeamSchedule(team.id().clone())),
        );
        jobs.push(ReportJob::TicketSales);
        jobs
    }

    /// Writes every report as a JSON file in `output_dir`, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Io` if the directory cannot be created, or
    /// `ReportError::JobsFailed` listing every job that failed. Jobs that
    /// succeeded have still written their files.
    pub async fn generate_all_reports(
        &self,
        output_dir: &Path,
    ) -> Result<ReportSummary, ReportError> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| ReportError::Io {
                path: PathBuf::from(output_dir),
                source,
            })?;

        let sink: Arc<dyn ReportSink> = Arc::new(FileSink::new(output_dir));
        self.generate_all_reports_to(&sink).await
    }

    /// Runs every report job against `sink` and waits for all of them.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::JobsFailed` listing every job that failed.
    pub async fn generate_all_reports_to(
        &self,
        sink: &Arc<dyn ReportSink>,
    ) -> Result<ReportSummary, ReportError> {
        let jobs: Vec<ReportJob> = self.jobs();
        let semaphore: Arc<Semaphore> =
            Arc::new(Semaphore::new(self.options.max_concurrent_jobs.get()));
        let mut set: JoinSet<(String, Result<(), ReportError>)> = JoinSet::new();

        info!(
            jobs = jobs.len(),
            max_concurrent_jobs = self.options.max_concurrent_jobs.get(),
            "Generating reports"
        );

        for job in jobs {
            let generator: Self = self.clone();
            let sink: Arc<dyn ReportSink> = Arc::clone(sink);
            let semaphore: Arc<Semaphore> = Arc::clone(&semaphore);
            let document: String = job.document_name();

            set.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return (document, Err(ReportError::Join(String::from("job queue closed"))));
                };
                let result: Result<(), ReportError> =
                    tokio::task::spawn_blocking(move || generator.run_job(&job, sink.as_ref()))
                        .await
                        .unwrap_or_else(|err| Err(ReportError::Join(err.to_string())));
                (document, result)
            });
        }

        let mut written: Vec<String> = Vec::new();
        let mut failures: Vec<JobFailure> = Vec::new();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((document, Ok(()))) => {
                    debug!(document = %document, "Report written");
                    written.push(document);
                }
                Ok((document, Err(err))) => {
                    error!(document = %document, error = %err, "Report job failed");
                    failures.push(JobFailure {
                        document,
                        error: err.to_string(),
                    });
                }
                Err(err) => {
                    error!(error = %err, "Report task did not complete");
                    failures.push(JobFailure {
                        document: String::from("<unknown>"),
                        error: err.to_string(),
                    });
                }
            }
        }

        if !failures.is_empty() {
            failures.sort_by(|a, b| a.document.cmp(&b.document));
            return Err(ReportError::JobsFailed(failures));
        }

        written.sort();
        info!(documents = written.len(), "Reports generated");
        Ok(ReportSummary { documents: written })
    }
}

fn deliver<T: Serialize>(sink: &dyn ReportSink, name: &str, report: &T) -> Result<(), ReportError> {
    let contents: String = serde_json::to_string_pretty(report)?;
    sink.write_document(name, &contents)?;
    info!(document = name, "Report delivered");
    Ok(())
}
