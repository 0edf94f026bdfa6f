// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The backend orchestrator.
//!
//! The backend owns every registry and is the only surface external callers
//! use. Entities reference each other by identifier; the registries are the
//! single source of truth for what exists.
//!
//! ## Locking
//!
//! - Identifier counters, tickets, and bookings each have their own lock.
//! - A booking's lock is always taken before any of its tickets' locks.
//! - No lock is held across I/O.
//!
//! ## Multi-ticket operations
//!
//! Confirming or cancelling a booking holds the booking's lock for the whole
//! operation, but the ticket loop and the booking status change are two
//! separate phases. Tickets are owner-checked one at a time; a ticket that
//! no longer belongs to the booking is skipped with a warning rather than
//! failing the whole operation.

use crate::error::CoreError;
use crate::issuer::IdentifierIssuer;
use crate::registry::Registry;
use crate::schedule::Schedule;
use ballpark_domain::{
    BattingLine, Booking, BookingId, BookingStatus, Customer, DomainError, Match, MatchId,
    MatchUpdate, PitchingLine, Player, PlayerId, Position, Team, TeamId, Ticket, TicketCategory,
    TicketId, TicketStatus,
};
use parking_lot::{Mutex, RwLock};
use rust_decimal::Decimal;
use std::sync::Arc;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, info, warn};

/// In-memory ticketing and booking backend.
#[derive(Debug, Default)]
pub struct Backend {
    ids: IdentifierIssuer,
    teams: Registry<TeamId, RwLock<Team>>,
    players: Registry<PlayerId, RwLock<Player>>,
    schedule: Schedule,
    tickets: Registry<TicketId, Ticket>,
    bookings: Registry<BookingId, Mutex<Booking>>,
}

impl Backend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn issuer(&self) -> &IdentifierIssuer {
        &self.ids
    }

    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    // ========================================================================
    // Registration
    // ========================================================================

    #[must_use]
    pub fn add_team(&self, name: &str, city: &str, stadium: &str, division: &str) -> Team {
        let id: TeamId = self.ids.next_team_id();
        let team: Team = Team::new(id.clone(), name, city, stadium, division);
        self.teams.insert(id.clone(), RwLock::new(team.clone()));
        info!(team_id = %id, name = name, "Registered team");
        team
    }

    /// Registers a player and adds them to their team's roster.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TeamNotFound` if the team does not exist.
    pub fn add_player(
        &self,
        name: &str,
        team_id: &TeamId,
        position: Position,
        jersey_number: u8,
    ) -> Result<Player, CoreError> {
        let team: Arc<RwLock<Team>> = self
            .teams
            .get(team_id)
            .ok_or_else(|| CoreError::TeamNotFound(team_id.clone()))?;

        let id: PlayerId = self.ids.next_player_id();
        let player: Player =
            Player::new(id.clone(), name, team_id.clone(), position, jersey_number);

        team.write().add_player(id.clone())?;
        self.players.insert(id.clone(), RwLock::new(player.clone()));
        info!(player_id = %id, team_id = %team_id, "Registered player");
        Ok(player)
    }

    /// Takes a player off a team's roster. The player stays registered.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TeamNotFound` for an unknown team, or a domain
    /// violation if the player is not on the roster.
    pub fn remove_player_from_team(
        &self,
        team_id: &TeamId,
        player_id: &PlayerId,
    ) -> Result<Team, CoreError> {
        let team: Arc<RwLock<Team>> = self
            .teams
            .get(team_id)
            .ok_or_else(|| CoreError::TeamNotFound(team_id.clone()))?;
        let mut team = team.write();
        team.remove_player(player_id)?;
        info!(player_id = %player_id, team_id = %team_id, "Removed player from roster");
        Ok(team.clone())
    }

    /// Schedules a match between two registered teams.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TeamNotFound` if either team does not exist.
    pub fn add_match(
        &self,
        home_team_id: &TeamId,
        away_team_id: &TeamId,
        venue: &str,
        scheduled_time: PrimitiveDateTime,
    ) -> Result<Match, CoreError> {
        for team_id in [home_team_id, away_team_id] {
            if !self.teams.contains(team_id) {
                return Err(CoreError::TeamNotFound(team_id.clone()));
            }
        }

        let id: MatchId = self.ids.next_match_id();
        let matchup: Match = Match::new(
            id.clone(),
            home_team_id.clone(),
            away_team_id.clone(),
            venue,
            scheduled_time,
        );
        let matchup: Match = self.schedule.add_match(matchup)?;
        info!(match_id = %id, home = %home_team_id, away = %away_team_id, "Scheduled match");
        Ok(matchup)
    }

    /// Creates one available ticket per seat in `seats`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MatchNotFound` if the match does not exist, or a
    /// domain violation if the price is negative. No tickets are added on
    /// error.
    pub fn add_tickets_for_match(
        &self,
        match_id: &MatchId,
        section: &str,
        row: &str,
        seats: &[&str],
        category: TicketCategory,
        price: Decimal,
    ) -> Result<Vec<Arc<Ticket>>, CoreError> {
        if !self.schedule.contains(match_id) {
            return Err(CoreError::MatchNotFound(match_id.clone()));
        }

        let tickets: Vec<Ticket> = seats
            .iter()
            .map(|seat| {
                Ticket::new(
                    self.ids.next_ticket_id(),
                    match_id.clone(),
                    section,
                    row,
                    seat,
                    category,
                    price,
                )
            })
            .collect::<Result<_, DomainError>>()?;

        let added: Vec<Arc<Ticket>> = tickets
            .into_iter()
            .filter_map(|ticket| self.tickets.insert_new(ticket.id().clone(), ticket))
            .collect();

        info!(
            match_id = %match_id,
            section = section,
            row = row,
            count = added.len(),
            "Added tickets"
        );
        Ok(added)
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    #[must_use]
    pub fn get_team(&self, team_id: &TeamId) -> Option<Team> {
        self.teams.get(team_id).map(|team| team.read().clone())
    }

    #[must_use]
    pub fn teams(&self) -> Vec<Team> {
        self.teams
            .values()
            .iter()
            .map(|team| team.read().clone())
            .collect()
    }

    #[must_use]
    pub fn teams_by_division(&self, division: &str) -> Vec<Team> {
        self.teams
            .filter(|team| team.read().division() == division)
            .iter()
            .map(|team| team.read().clone())
            .collect()
    }

    #[must_use]
    pub fn get_player(&self, player_id: &PlayerId) -> Option<Player> {
        self.players.get(player_id).map(|player| player.read().clone())
    }

    #[must_use]
    pub fn players(&self) -> Vec<Player> {
        self.players
            .values()
            .iter()
            .map(|player| player.read().clone())
            .collect()
    }

    /// Players on a team's roster, ordered by identifier. Empty for an
    /// unknown team.
    #[must_use]
    pub fn players_by_team(&self, team_id: &TeamId) -> Vec<Player> {
        let Some(roster) = self
            .teams
            .get(team_id)
            .map(|team| team.read().roster().to_vec())
        else {
            return Vec::new();
        };
        let mut players: Vec<Player> = roster
            .iter()
            .filter_map(|player_id| self.get_player(player_id))
            .collect();
        players.sort_by(|a, b| a.id().cmp(b.id()));
        players
    }

    /// Rostered players of a team who play `position`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TeamNotFound` for an unknown team.
    pub fn players_by_position(
        &self,
        team_id: &TeamId,
        position: Position,
    ) -> Result<Vec<Player>, CoreError> {
        if !self.teams.contains(team_id) {
            return Err(CoreError::TeamNotFound(team_id.clone()));
        }
        Ok(self
            .players_by_team(team_id)
            .into_iter()
            .filter(|player| player.position() == position)
            .collect())
    }

    #[must_use]
    pub fn get_match(&self, match_id: &MatchId) -> Option<Match> {
        self.schedule.get(match_id)
    }

    #[must_use]
    pub fn matches(&self) -> Vec<Match> {
        self.schedule.all()
    }

    #[must_use]
    pub fn get_ticket(&self, ticket_id: &TicketId) -> Option<Arc<Ticket>> {
        self.tickets.get(ticket_id)
    }

    #[must_use]
    pub fn tickets(&self) -> Vec<Arc<Ticket>> {
        self.tickets.values()
    }

    #[must_use]
    pub fn tickets_for_match(&self, match_id: &MatchId) -> Vec<Arc<Ticket>> {
        self.tickets.filter(|ticket| ticket.match_id() == match_id)
    }

    /// Available tickets for a match, optionally narrowed to one category,
    /// ordered by ticket identifier.
    #[must_use]
    pub fn available_tickets(
        &self,
        match_id: &MatchId,
        category: Option<TicketCategory>,
    ) -> Vec<Arc<Ticket>> {
        self.tickets.filter(|ticket| {
            ticket.match_id() == match_id
                && ticket.status() == TicketStatus::Available
                && category.is_none_or(|wanted| ticket.category() == wanted)
        })
    }

    #[must_use]
    pub fn get_booking(&self, booking_id: &BookingId) -> Option<Booking> {
        self.bookings
            .get(booking_id)
            .map(|booking| booking.lock().clone())
    }

    #[must_use]
    pub fn bookings_for_match(&self, match_id: &MatchId) -> Vec<Booking> {
        self.bookings
            .filter(|booking| booking.lock().match_id() == match_id)
            .iter()
            .map(|booking| booking.lock().clone())
            .collect()
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Creates a pending booking holding every requested ticket that could
    /// be reserved.
    ///
    /// Tickets that do not exist, are not available, or belong to another
    /// match are skipped. The booking identifier is consumed even if the
    /// booking is discarded.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MatchNotFound` for an unknown match, or
    /// `CoreError::NoTicketsReserved` if none of the tickets could be
    /// reserved.
    pub fn create_booking(
        &self,
        customer: Customer,
        match_id: &MatchId,
        ticket_ids: &[TicketId],
    ) -> Result<Booking, CoreError> {
        if !self.schedule.contains(match_id) {
            return Err(CoreError::MatchNotFound(match_id.clone()));
        }

        let booking_id: BookingId = self.ids.next_booking_id();
        let mut booking: Booking = Booking::new(
            booking_id.clone(),
            customer,
            match_id.clone(),
            OffsetDateTime::now_utc(),
        );

        for ticket_id in ticket_ids {
            let Some(ticket) = self.tickets.get(ticket_id) else {
                debug!(booking_id = %booking_id, ticket_id = %ticket_id, "Skipping unknown ticket");
                continue;
            };
            if ticket.match_id() != match_id {
                debug!(
                    booking_id = %booking_id,
                    ticket_id = %ticket_id,
                    ticket_match = %ticket.match_id(),
                    "Skipping ticket for another match"
                );
                continue;
            }
            if let Err(err) = booking.add_ticket(&ticket) {
                debug!(
                    booking_id = %booking_id,
                    ticket_id = %ticket_id,
                    error = %err,
                    "Skipping ticket"
                );
            }
        }

        if booking.is_empty() {
            warn!(
                booking_id = %booking_id,
                match_id = %match_id,
                "No tickets reserved; booking discarded"
            );
            return Err(CoreError::NoTicketsReserved {
                match_id: match_id.clone(),
            });
        }

        self.bookings
            .insert(booking_id.clone(), Mutex::new(booking.clone()));
        info!(
            booking_id = %booking_id,
            match_id = %match_id,
            tickets = booking.ticket_ids().len(),
            total = %booking.total(),
            "Created booking"
        );
        Ok(booking)
    }

    /// Sells every ticket in a pending booking and confirms it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::BookingNotFound` for an unknown booking, or a
    /// domain violation if the booking is not pending. No ticket is touched
    /// in either case.
    pub fn confirm_booking(
        &self,
        booking_id: &BookingId,
        payment_reference: &str,
    ) -> Result<Booking, CoreError> {
        let entry: Arc<Mutex<Booking>> = self.booking_entry(booking_id)?;
        let mut booking = entry.lock();
        booking.require_pending()?;

        for ticket_id in booking.ticket_ids() {
            let Some(ticket) = self.tickets.get(ticket_id) else {
                warn!(
                    booking_id = %booking_id,
                    ticket_id = %ticket_id,
                    "Ticket missing from registry"
                );
                continue;
            };
            if let Err(err) = ticket.confirm_sale_for(booking_id) {
                warn!(
                    booking_id = %booking_id,
                    ticket_id = %ticket_id,
                    error = %err,
                    "Ticket drifted; not sold"
                );
            }
        }

        booking.confirm(payment_reference)?;
        info!(booking_id = %booking_id, total = %booking.total(), "Confirmed booking");
        Ok(booking.clone())
    }

    /// Releases every ticket in a booking and cancels it. Confirmed
    /// bookings may be cancelled.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::BookingNotFound` for an unknown booking, or a
    /// domain violation if the booking is already cancelled.
    pub fn cancel_booking(&self, booking_id: &BookingId) -> Result<Booking, CoreError> {
        let entry: Arc<Mutex<Booking>> = self.booking_entry(booking_id)?;
        let mut booking = entry.lock();
        if booking.status() == BookingStatus::Cancelled {
            return Err(DomainError::BookingAlreadyCancelled(booking_id.clone()).into());
        }

        for ticket_id in booking.ticket_ids() {
            let Some(ticket) = self.tickets.get(ticket_id) else {
                warn!(
                    booking_id = %booking_id,
                    ticket_id = %ticket_id,
                    "Ticket missing from registry"
                );
                continue;
            };
            if let Err(err) = ticket.release_for(booking_id) {
                warn!(
                    booking_id = %booking_id,
                    ticket_id = %ticket_id,
                    error = %err,
                    "Ticket drifted; not released"
                );
            }
        }

        booking.cancel()?;
        info!(booking_id = %booking_id, "Cancelled booking");
        Ok(booking.clone())
    }

    /// Releases one ticket from a booking and subtracts its price.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown booking or ticket, or a
    /// domain violation if the ticket is not in the booking or the booking
    /// is cancelled.
    pub fn remove_ticket_from_booking(
        &self,
        booking_id: &BookingId,
        ticket_id: &TicketId,
    ) -> Result<Booking, CoreError> {
        let entry: Arc<Mutex<Booking>> = self.booking_entry(booking_id)?;
        let ticket: Arc<Ticket> = self
            .tickets
            .get(ticket_id)
            .ok_or_else(|| CoreError::TicketNotFound(ticket_id.clone()))?;

        let mut booking = entry.lock();
        booking.remove_ticket(&ticket)?;
        info!(
            booking_id = %booking_id,
            ticket_id = %ticket_id,
            total = %booking.total(),
            "Removed ticket from booking"
        );
        Ok(booking.clone())
    }

    fn booking_entry(&self, booking_id: &BookingId) -> Result<Arc<Mutex<Booking>>, CoreError> {
        self.bookings
            .get(booking_id)
            .ok_or_else(|| CoreError::BookingNotFound(booking_id.clone()))
    }

    // ========================================================================
    // Match and statistics updates
    // ========================================================================

    /// # Errors
    ///
    /// Returns `CoreError::MatchNotFound` for an unknown match, or a domain
    /// violation if the update is rejected.
    pub fn update_match(
        &self,
        match_id: &MatchId,
        update: MatchUpdate,
    ) -> Result<Match, CoreError> {
        let matchup: Match = self.schedule.update(match_id, update)?;
        debug!(match_id = %match_id, status = %matchup.status(), "Updated match");
        Ok(matchup)
    }

    /// # Errors
    ///
    /// Returns `CoreError::PlayerNotFound` for an unknown player.
    pub fn record_batting(
        &self,
        player_id: &PlayerId,
        line: BattingLine,
    ) -> Result<Player, CoreError> {
        let player: Arc<RwLock<Player>> = self.player_entry(player_id)?;
        let mut player = player.write();
        player.record_batting(line);
        Ok(player.clone())
    }

    /// # Errors
    ///
    /// Returns `CoreError::PlayerNotFound` for an unknown player.
    pub fn record_pitching(
        &self,
        player_id: &PlayerId,
        line: PitchingLine,
    ) -> Result<Player, CoreError> {
        let player: Arc<RwLock<Player>> = self.player_entry(player_id)?;
        let mut player = player.write();
        player.record_pitching(line);
        Ok(player.clone())
    }

    /// Records a win or a loss for a team.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TeamNotFound` for an unknown team.
    pub fn record_result(&self, team_id: &TeamId, win: bool) -> Result<Team, CoreError> {
        let team: Arc<RwLock<Team>> = self
            .teams
            .get(team_id)
            .ok_or_else(|| CoreError::TeamNotFound(team_id.clone()))?;
        let mut team = team.write();
        team.update_record(win);
        Ok(team.clone())
    }

    fn player_entry(&self, player_id: &PlayerId) -> Result<Arc<RwLock<Player>>, CoreError> {
        self.players
            .get(player_id)
            .ok_or_else(|| CoreError::PlayerNotFound(player_id.clone()))
    }
}
