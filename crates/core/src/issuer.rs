// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier issuance.
//!
//! Each entity kind has its own counter behind its own lock, so issuing a
//! ticket identifier never waits on a booking identifier. Sequences start at
//! one and are never reused.

use ballpark_domain::{BookingId, MatchId, PlayerId, TeamId, TicketId};
use parking_lot::Mutex;

/// The kinds of entity that receive issued identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Team,
    Player,
    Match,
    Ticket,
    Booking,
}

impl EntityKind {
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Team => "T",
            Self::Player => "P",
            Self::Match => "M",
            Self::Ticket => "TK",
            Self::Booking => "B",
        }
    }

    /// Minimum number of digits in the sequence part.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::Team | Self::Player | Self::Match => 4,
            Self::Ticket | Self::Booking => 6,
        }
    }

    /// Renders `sequence` as an identifier of this kind.
    #[must_use]
    pub fn format(&self, sequence: u64) -> String {
        format!("{}{sequence:0width$}", self.prefix(), width = self.width())
    }
}

/// Thread-safe, monotonic identifier source.
#[derive(Debug, Default)]
pub struct IdentifierIssuer {
    team: Mutex<u64>,
    player: Mutex<u64>,
    matchup: Mutex<u64>,
    ticket: Mutex<u64>,
    booking: Mutex<u64>,
}

impl IdentifierIssuer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    const fn counter(&self, kind: EntityKind) -> &Mutex<u64> {
        match kind {
            EntityKind::Team => &self.team,
            EntityKind::Player => &self.player,
            EntityKind::Match => &self.matchup,
            EntityKind::Ticket => &self.ticket,
            EntityKind::Booking => &self.booking,
        }
    }

    /// Issues the next identifier of `kind`.
    #[must_use]
    pub fn next(&self, kind: EntityKind) -> String {
        let sequence: u64 = {
            let mut counter = self.counter(kind).lock();
            *counter += 1;
            *counter
        };
        kind.format(sequence)
    }

    /// Number of identifiers of `kind` issued so far.
    #[must_use]
    pub fn issued(&self, kind: EntityKind) -> u64 {
        *self.counter(kind).lock()
    }

    #[must_use]
    pub fn next_team_id(&self) -> TeamId {
        TeamId::new(self.next(EntityKind::Team))
    }

    #[must_use]
    pub fn next_player_id(&self) -> PlayerId {
        PlayerId::new(self.next(EntityKind::Player))
    }

    #[must_use]
    pub fn next_match_id(&self) -> MatchId {
        MatchId::new(self.next(EntityKind::Match))
    }

    #[must_use]
    pub fn next_ticket_id(&self) -> TicketId {
        TicketId::new(self.next(EntityKind::Ticket))
    }

    #[must_use]
    pub fn next_booking_id(&self) -> BookingId {
        BookingId::new(self.next(EntityKind::Booking))
    }
}
