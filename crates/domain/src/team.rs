// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// Serializable projection of a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDetails {
    pub team_id: TeamId,
    pub name: String,
    pub city: String,
    pub stadium: String,
    pub division: String,
    /// Formatted as `"W-L"`.
    pub record: String,
    pub winning_percentage: f64,
    pub roster_size: usize,
}

/// A club with a home stadium and a roster of player identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    city: String,
    stadium: String,
    division: String,
    roster: Vec<PlayerId>,
    wins: u32,
    losses: u32,
}

impl Team {
    #[must_use]
    pub fn new(id: TeamId, name: &str, city: &str, stadium: &str, division: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            city: city.to_string(),
            stadium: stadium.to_string(),
            division: division.to_string(),
            roster: Vec::new(),
            wins: 0,
            losses: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &TeamId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn stadium(&self) -> &str {
        &self.stadium
    }

    #[must_use]
    pub fn division(&self) -> &str {
        &self.division
    }

    #[must_use]
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    /// Wins and losses.
    #[must_use]
    pub const fn record(&self) -> (u32, u32) {
        (self.wins, self.losses)
    }

    /// # Errors
    ///
    /// Returns `DomainError::DuplicateRosterEntry` if the player is already
    /// on the roster.
    pub fn add_player(&mut self, player_id: PlayerId) -> Result<(), DomainError> {
        if self.roster.contains(&player_id) {
            return Err(DomainError::DuplicateRosterEntry(player_id));
        }
        self.roster.push(player_id);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DomainError::NotOnRoster` if the player is not on the roster.
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Result<(), DomainError> {
        let Some(index) = self.roster.iter().position(|id| id == player_id) else {
            return Err(DomainError::NotOnRoster(player_id.clone()));
        };
        self.roster.remove(index);
        Ok(())
    }

    pub const fn update_record(&mut self, win: bool) {
        if win {
            self.wins = self.wins.saturating_add(1);
        } else {
            self.losses = self.losses.saturating_add(1);
        }
    }

    /// Wins over games played, rounded to three places; zero before any game.
    #[must_use]
    pub fn winning_percentage(&self) -> f64 {
        if self.wins == 0 && self.losses == 0 {
            return 0.0;
        }
        let played: f64 = f64::from(self.wins) + f64::from(self.losses);
        round_to(f64::from(self.wins) / played, 3)
    }

    #[must_use]
    pub fn details(&self) -> TeamDetails {
        TeamDetails {
            team_id: self.id.clone(),
            name: self.name.clone(),
            city: self.city.clone(),
            stadium: self.stadium.clone(),
            division: self.division.clone(),
            record: format!("{}-{}", self.wins, self.losses),
            winning_percentage: self.winning_percentage(),
            roster_size: self.roster.len(),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}-{})",
            self.city, self.name, self.wins, self.losses
        )
    }
}

/// Rounds half away from zero to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor: f64 = 10_f64.powi(places);
    (value * factor).round() / factor
}
