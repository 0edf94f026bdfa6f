// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Matches between two teams.
//!
//! A match owns no tickets; tickets refer to it by identifier.

use crate::error::DomainError;
use crate::ids::{MatchId, TeamId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const SCHEDULED_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Scheduling status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Live => "Live",
            Self::Completed => "Completed",
            Self::Postponed => "Postponed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "Live" => Ok(Self::Live),
            "Completed" => Ok(Self::Completed),
            "Postponed" => Ok(Self::Postponed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidMatchStatus(s.to_string())),
        }
    }
}

/// Which half of an inning is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InningHalf {
    #[default]
    Top,
    Bottom,
}

impl InningHalf {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }
}

/// A partial update to a match. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchUpdate {
    pub status: Option<MatchStatus>,
    /// Home and away score.
    pub score: Option<(u32, u32)>,
    pub inning: Option<(u8, InningHalf)>,
    pub attendance: Option<u32>,
    pub weather: Option<String>,
}

/// Serializable projection of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub match_id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub venue: String,
    pub scheduled_time: String,
    pub status: MatchStatus,
    pub score: String,
    /// e.g. `"Top 7"` while live, empty otherwise.
    pub current_inning: String,
    pub weather: String,
    pub attendance: u32,
}

/// A scheduled game between a home and an away team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    id: MatchId,
    home_team_id: TeamId,
    away_team_id: TeamId,
    venue: String,
    scheduled_time: PrimitiveDateTime,
    status: MatchStatus,
    home_score: u32,
    away_score: u32,
    inning: u8,
    half: InningHalf,
    weather: String,
    attendance: u32,
}

impl Match {
    /// Creates a scheduled match with an empty scoreboard.
    #[must_use]
    pub fn new(
        id: MatchId,
        home_team_id: TeamId,
        away_team_id: TeamId,
        venue: &str,
        scheduled_time: PrimitiveDateTime,
    ) -> Self {
        Self {
            id,
            home_team_id,
            away_team_id,
            venue: venue.to_string(),
            scheduled_time,
            status: MatchStatus::Scheduled,
            home_score: 0,
            away_score: 0,
            inning: 0,
            half: InningHalf::Top,
            weather: String::new(),
            attendance: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &MatchId {
        &self.id
    }

    #[must_use]
    pub const fn home_team_id(&self) -> &TeamId {
        &self.home_team_id
    }

    #[must_use]
    pub const fn away_team_id(&self) -> &TeamId {
        &self.away_team_id
    }

    /// Returns true if `team_id` plays in this match, home or away.
    #[must_use]
    pub fn involves(&self, team_id: &TeamId) -> bool {
        &self.home_team_id == team_id || &self.away_team_id == team_id
    }

    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    #[must_use]
    pub const fn scheduled_time(&self) -> PrimitiveDateTime {
        self.scheduled_time
    }

    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    /// Home and away score.
    #[must_use]
    pub const fn score(&self) -> (u32, u32) {
        (self.home_score, self.away_score)
    }

    /// The current inning and half, only while the match is live.
    #[must_use]
    pub const fn inning(&self) -> Option<(u8, InningHalf)> {
        match self.status {
            MatchStatus::Live => Some((self.inning, self.half)),
            _ => None,
        }
    }

    #[must_use]
    pub fn weather(&self) -> &str {
        &self.weather
    }

    #[must_use]
    pub const fn attendance(&self) -> u32 {
        self.attendance
    }

    pub const fn update_status(&mut self, status: MatchStatus) {
        self.status = status;
    }

    pub const fn update_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    /// # Errors
    ///
    /// Returns `DomainError::InvalidInning` if `inning` is zero.
    pub fn update_inning(&mut self, inning: u8, half: InningHalf) -> Result<(), DomainError> {
        if inning == 0 {
            return Err(DomainError::InvalidInning(inning));
        }
        self.inning = inning;
        self.half = half;
        Ok(())
    }

    pub const fn update_attendance(&mut self, attendance: u32) {
        self.attendance = attendance;
    }

    pub fn update_weather(&mut self, weather: &str) {
        self.weather = weather.to_string();
    }

    /// Applies every field present in `update`.
    ///
    /// The inning is validated before anything is written, so a rejected
    /// update leaves the match unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInning` if the update carries inning zero.
    pub fn apply(&mut self, update: MatchUpdate) -> Result<(), DomainError> {
        if let Some((0, _)) = update.inning {
            return Err(DomainError::InvalidInning(0));
        }

        if let Some(status) = update.status {
            self.update_status(status);
        }
        if let Some((home, away)) = update.score {
            self.update_score(home, away);
        }
        if let Some((inning, half)) = update.inning {
            self.update_inning(inning, half)?;
        }
        if let Some(attendance) = update.attendance {
            self.update_attendance(attendance);
        }
        if let Some(weather) = update.weather {
            self.weather = weather;
        }
        Ok(())
    }

    #[must_use]
    pub fn details(&self) -> MatchDetails {
        let current_inning: String = match self.inning() {
            Some((inning, half)) => format!("{} {inning}", half.as_str()),
            None => String::new(),
        };

        MatchDetails {
            match_id: self.id.clone(),
            home_team_id: self.home_team_id.clone(),
            away_team_id: self.away_team_id.clone(),
            venue: self.venue.clone(),
            scheduled_time: format_scheduled_time(self.scheduled_time),
            status: self.status,
            score: format!("{} - {}", self.home_score, self.away_score),
            current_inning,
            weather: self.weather.clone(),
            attendance: self.attendance,
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Match {}: {} vs {} at {}",
            self.id, self.home_team_id, self.away_team_id, self.venue
        )
    }
}

fn format_scheduled_time(scheduled_time: PrimitiveDateTime) -> String {
    scheduled_time
        .format(SCHEDULED_TIME_FORMAT)
        .unwrap_or_else(|_| scheduled_time.to_string())
}
