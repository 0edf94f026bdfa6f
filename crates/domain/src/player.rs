// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Players and their accumulated statistics.
//!
//! Rate statistics (batting average, ERA, WHIP) are always derived from the
//! running totals, never stored, so repeated updates cannot drift.

use crate::error::DomainError;
use crate::ids::{PlayerId, TeamId};
use crate::team::round_to;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fielding position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Pitcher,
    Catcher,
    #[serde(rename = "First Base")]
    FirstBase,
    #[serde(rename = "Second Base")]
    SecondBase,
    #[serde(rename = "Third Base")]
    ThirdBase,
    Shortstop,
    #[serde(rename = "Left Field")]
    LeftField,
    #[serde(rename = "Center Field")]
    CenterField,
    #[serde(rename = "Right Field")]
    RightField,
    #[serde(rename = "Designated Hitter")]
    DesignatedHitter,
}

impl Position {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pitcher => "Pitcher",
            Self::Catcher => "Catcher",
            Self::FirstBase => "First Base",
            Self::SecondBase => "Second Base",
            Self::ThirdBase => "Third Base",
            Self::Shortstop => "Shortstop",
            Self::LeftField => "Left Field",
            Self::CenterField => "Center Field",
            Self::RightField => "Right Field",
            Self::DesignatedHitter => "Designated Hitter",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pitcher" => Ok(Self::Pitcher),
            "Catcher" => Ok(Self::Catcher),
            "First Base" => Ok(Self::FirstBase),
            "Second Base" => Ok(Self::SecondBase),
            "Third Base" => Ok(Self::ThirdBase),
            "Shortstop" => Ok(Self::Shortstop),
            "Left Field" => Ok(Self::LeftField),
            "Center Field" => Ok(Self::CenterField),
            "Right Field" => Ok(Self::RightField),
            "Designated Hitter" => Ok(Self::DesignatedHitter),
            _ => Err(DomainError::InvalidPosition(s.to_string())),
        }
    }
}

/// One batch of batting results to add to a player's totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattingLine {
    pub games: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub runs_batted_in: u32,
    pub stolen_bases: u32,
}

/// One batch of pitching results to add to a player's totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PitchingLine {
    pub innings: f64,
    pub wins: u32,
    pub losses: u32,
    pub earned_runs: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub hits_allowed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingStats {
    pub games_played: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub runs_batted_in: u32,
    pub stolen_bases: u32,
    pub batting_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchingStats {
    pub innings_pitched: f64,
    pub wins: u32,
    pub losses: u32,
    pub earned_run_average: f64,
    pub strikeouts: u32,
    pub walks: u32,
    pub whip: f64,
}

/// Serializable statistics projection of a player.
///
/// `pitching_stats` is present only for pitchers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub position: Position,
    pub jersey_number: u8,
    pub batting_stats: BattingStats,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pitching_stats: Option<PitchingStats>,
}

/// A rostered player. The team is referenced by identifier only.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: PlayerId,
    name: String,
    team_id: TeamId,
    position: Position,
    jersey_number: u8,
    batting: BattingLine,
    pitching: PitchingLine,
}

impl Player {
    #[must_use]
    pub fn new(
        id: PlayerId,
        name: &str,
        team_id: TeamId,
        position: Position,
        jersey_number: u8,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            team_id,
            position,
            jersey_number,
            batting: BattingLine::default(),
            pitching: PitchingLine::default(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &PlayerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn jersey_number(&self) -> u8 {
        self.jersey_number
    }

    /// Adds a game line to the running totals. Totals saturate at `u32::MAX`.
    pub const fn record_batting(&mut self, line: BattingLine) {
        self.batting.games = self.batting.games.saturating_add(line.games);
        self.batting.at_bats = self.batting.at_bats.saturating_add(line.at_bats);
        self.batting.hits = self.batting.hits.saturating_add(line.hits);
        self.batting.home_runs = self.batting.home_runs.saturating_add(line.home_runs);
        self.batting.runs_batted_in = self
            .batting
            .runs_batted_in
            .saturating_add(line.runs_batted_in);
        self.batting.stolen_bases = self.batting.stolen_bases.saturating_add(line.stolen_bases);
    }

    pub fn record_pitching(&mut self, line: PitchingLine) {
        self.pitching.innings += line.innings;
        self.pitching.wins = self.pitching.wins.saturating_add(line.wins);
        self.pitching.losses = self.pitching.losses.saturating_add(line.losses);
        self.pitching.earned_runs = self.pitching.earned_runs.saturating_add(line.earned_runs);
        self.pitching.strikeouts = self.pitching.strikeouts.saturating_add(line.strikeouts);
        self.pitching.walks = self.pitching.walks.saturating_add(line.walks);
        self.pitching.hits_allowed = self.pitching.hits_allowed.saturating_add(line.hits_allowed);
    }

    /// Hits over at-bats, three places; zero with no at-bats.
    #[must_use]
    pub fn batting_average(&self) -> f64 {
        if self.batting.at_bats == 0 {
            return 0.0;
        }
        round_to(
            f64::from(self.batting.hits) / f64::from(self.batting.at_bats),
            3,
        )
    }

    /// Earned runs per nine innings, two places; zero with no innings.
    #[must_use]
    pub fn earned_run_average(&self) -> f64 {
        if self.pitching.innings <= 0.0 {
            return 0.0;
        }
        round_to(
            f64::from(self.pitching.earned_runs) / self.pitching.innings * 9.0,
            2,
        )
    }

    /// Walks plus hits per inning pitched, two places; zero with no innings.
    #[must_use]
    pub fn whip(&self) -> f64 {
        if self.pitching.innings <= 0.0 {
            return 0.0;
        }
        round_to(
            (f64::from(self.pitching.walks) + f64::from(self.pitching.hits_allowed))
                / self.pitching.innings,
            2,
        )
    }

    #[must_use]
    pub fn stats(&self) -> PlayerStats {
        let batting_stats: BattingStats = BattingStats {
            games_played: self.batting.games,
            at_bats: self.batting.at_bats,
            hits: self.batting.hits,
            home_runs: self.batting.home_runs,
            runs_batted_in: self.batting.runs_batted_in,
            stolen_bases: self.batting.stolen_bases,
            batting_average: self.batting_average(),
        };

        let pitching_stats: Option<PitchingStats> =
            (self.position == Position::Pitcher).then(|| PitchingStats {
                innings_pitched: self.pitching.innings,
                wins: self.pitching.wins,
                losses: self.pitching.losses,
                earned_run_average: self.earned_run_average(),
                strikeouts: self.pitching.strikeouts,
                walks: self.pitching.walks,
                whip: self.whip(),
            });

        PlayerStats {
            player_id: self.id.clone(),
            name: self.name.clone(),
            team_id: self.team_id.clone(),
            position: self.position,
            jersey_number: self.jersey_number,
            batting_stats,
            pitching_stats,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (#{}, {})",
            self.name, self.jersey_number, self.position
        )
    }
}
