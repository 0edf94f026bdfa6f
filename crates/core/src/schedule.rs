// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The match schedule.
//!
//! Each match sits behind its own `RwLock` inside the registry, so a score
//! update on one game never blocks a lookup of another. Query results are
//! cloned snapshots ordered by match identifier.

use crate::error::CoreError;
use crate::registry::Registry;
use ballpark_domain::{Match, MatchId, MatchStatus, MatchUpdate, TeamId};
use parking_lot::RwLock;
use std::sync::Arc;
use time::Date;

#[derive(Debug, Default)]
pub struct Schedule {
    matches: Registry<MatchId, RwLock<Match>>,
}

impl Schedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a match to the schedule.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateMatch` if a match with the same
    /// identifier is already scheduled. The schedule is left unchanged.
    pub fn add_match(&self, matchup: Match) -> Result<Match, CoreError> {
        let id: MatchId = matchup.id().clone();
        let snapshot: Match = matchup.clone();
        self.matches
            .insert_new(id.clone(), RwLock::new(matchup))
            .map(|_| snapshot)
            .ok_or(CoreError::DuplicateMatch(id))
    }

    #[must_use]
    pub fn get(&self, match_id: &MatchId) -> Option<Match> {
        self.matches.get(match_id).map(|entry| entry.read().clone())
    }

    #[must_use]
    pub fn contains(&self, match_id: &MatchId) -> bool {
        self.matches.contains(match_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Applies every field present in `update` under the match's write lock
    /// and returns the updated match.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MatchNotFound` for an unknown match, or a domain
    /// violation if the update is rejected. A rejected update changes
    /// nothing.
    pub fn update(&self, match_id: &MatchId, update: MatchUpdate) -> Result<Match, CoreError> {
        let entry: Arc<RwLock<Match>> = self
            .matches
            .get(match_id)
            .ok_or_else(|| CoreError::MatchNotFound(match_id.clone()))?;

        let mut matchup = entry.write();
        matchup.apply(update)?;
        Ok(matchup.clone())
    }

    #[must_use]
    pub fn all(&self) -> Vec<Match> {
        self.select(|_| true)
    }

    /// Matches whose scheduled start falls on `date`.
    #[must_use]
    pub fn matches_by_date(&self, date: Date) -> Vec<Match> {
        self.select(|matchup| matchup.scheduled_time().date() == date)
    }

    /// Matches in which `team_id` plays home or away.
    #[must_use]
    pub fn matches_by_team(&self, team_id: &TeamId) -> Vec<Match> {
        self.select(|matchup| matchup.involves(team_id))
    }

    #[must_use]
    pub fn matches_by_status(&self, status: MatchStatus) -> Vec<Match> {
        self.select(|matchup| matchup.status() == status)
    }

    fn select<F>(&self, predicate: F) -> Vec<Match>
    where
        F: Fn(&Match) -> bool,
    {
        self.matches
            .values()
            .iter()
            .map(|entry| entry.read().clone())
            .filter(|matchup| predicate(matchup))
            .collect()
    }
}
