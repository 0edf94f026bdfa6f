// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report document shapes and their file names.

use ballpark_domain::{MatchDetails, MatchId, PlayerStats, TeamDetails, TeamId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const PLAYER_STATS_REPORT: &str = "Player Statistics";
pub const TEAM_SCHEDULE_REPORT: &str = "Team Schedule";
pub const TICKET_SALES_REPORT: &str = "Ticket Sales";

/// Filter label used when a report covers every team.
pub const ALL_TEAMS: &str = "All Teams";
/// Filter label used when a report covers every match.
pub const ALL_MATCHES: &str = "All Matches";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsReport {
    pub report_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub player_count: usize,
    /// The team filter, or [`ALL_TEAMS`].
    pub team_id: String,
    pub players: Vec<PlayerStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamScheduleReport {
    pub report_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub team: TeamDetails,
    pub match_count: usize,
    pub matches: Vec<MatchDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSalesReport {
    pub report_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    /// The match filter, or [`ALL_MATCHES`].
    pub match_id: String,
    pub total_tickets: usize,
    pub available_tickets: usize,
    pub reserved_tickets: usize,
    pub sold_tickets: usize,
    /// Sum of the prices of sold tickets.
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

#[must_use]
pub fn player_stats_document_name(team_id: Option<&TeamId>) -> String {
    team_id.map_or_else(
        || String::from("player_stats_all.json"),
        |id| format!("player_stats_{id}.json"),
    )
}

#[must_use]
pub fn team_schedule_document_name(team_id: &TeamId) -> String {
    format!("schedule_{team_id}.json")
}

#[must_use]
pub fn ticket_sales_document_name(match_id: Option<&MatchId>) -> String {
    match_id.map_or_else(
        || String::from("ticket_sales_all.json"),
        |id| format!("ticket_sales_{id}.json"),
    )
}
