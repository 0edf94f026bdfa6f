// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ballpark_domain::{BookingId, DomainError, MatchId, PlayerId, TeamId, TicketId};

/// Broad classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced entity does not exist.
    NotFound,
    /// The operation is not allowed in the entity's current state.
    InvalidState,
    /// The operation completed without producing anything.
    EmptyResult,
    /// An input value was malformed.
    Invalid,
}

/// Errors returned by backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    TeamNotFound(TeamId),
    PlayerNotFound(PlayerId),
    MatchNotFound(MatchId),
    TicketNotFound(TicketId),
    BookingNotFound(BookingId),
    /// A match with this identifier is already scheduled.
    DuplicateMatch(MatchId),
    /// None of the requested tickets could be reserved.
    NoTicketsReserved {
        /// The match the booking was for.
        match_id: MatchId,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl CoreError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TeamNotFound(_)
            | Self::PlayerNotFound(_)
            | Self::MatchNotFound(_)
            | Self::TicketNotFound(_)
            | Self::BookingNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateMatch(_) => ErrorKind::InvalidState,
            Self::NoTicketsReserved { .. } => ErrorKind::EmptyResult,
            Self::DomainViolation(err) => {
                if err.is_state_violation() {
                    ErrorKind::InvalidState
                } else {
                    ErrorKind::Invalid
                }
            }
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TeamNotFound(id) => write!(f, "Team not found: {id}"),
            Self::PlayerNotFound(id) => write!(f, "Player not found: {id}"),
            Self::MatchNotFound(id) => write!(f, "Match not found: {id}"),
            Self::TicketNotFound(id) => write!(f, "Ticket not found: {id}"),
            Self::BookingNotFound(id) => write!(f, "Booking not found: {id}"),
            Self::DuplicateMatch(id) => write!(f, "Match {id} is already scheduled"),
            Self::NoTicketsReserved { match_id } => {
                write!(f, "No tickets could be reserved for match {match_id}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
