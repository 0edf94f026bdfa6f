// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::BookingStatus;
use crate::ids::{BookingId, PlayerId, TicketId};
use crate::ticket::TicketStatus;

/// Errors raised by domain state machines and value validation.
///
/// Every variant describes a rejected operation that left the entity
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The ticket cannot be reserved because it is not available.
    TicketUnavailable {
        /// The ticket that was requested.
        ticket_id: TicketId,
        /// The status the ticket was in.
        status: TicketStatus,
    },
    /// The ticket cannot be sold because it is not reserved.
    TicketNotReserved {
        /// The ticket that was requested.
        ticket_id: TicketId,
        /// The status the ticket was in.
        status: TicketStatus,
    },
    /// The ticket cannot be released because it is neither reserved nor sold.
    TicketNotHeld {
        /// The ticket that was requested.
        ticket_id: TicketId,
        /// The status the ticket was in.
        status: TicketStatus,
    },
    /// The ticket is held, but by a different booking.
    TicketHeldByOther {
        /// The ticket that was requested.
        ticket_id: TicketId,
        /// The booking that attempted the operation.
        expected: BookingId,
        /// The booking that actually holds the ticket.
        holder: BookingId,
    },
    /// The ticket is not part of the booking.
    TicketNotInBooking {
        /// The booking.
        booking_id: BookingId,
        /// The ticket that was not found in it.
        ticket_id: TicketId,
    },
    /// The booking must be pending for this operation.
    BookingNotPending {
        /// The booking.
        booking_id: BookingId,
        /// The status the booking was in.
        status: BookingStatus,
    },
    /// The booking has already been cancelled.
    BookingAlreadyCancelled(BookingId),
    /// The player is already on the roster.
    DuplicateRosterEntry(PlayerId),
    /// The player is not on the roster.
    NotOnRoster(PlayerId),
    /// A price was negative.
    InvalidPrice(String),
    /// An inning number was zero.
    InvalidInning(u8),
    /// A string did not name a known ticket category.
    InvalidTicketCategory(String),
    /// A string did not name a known ticket status.
    InvalidTicketStatus(String),
    /// A string did not name a known booking status.
    InvalidBookingStatus(String),
    /// A string did not name a known match status.
    InvalidMatchStatus(String),
    /// A string did not name a known fielding position.
    InvalidPosition(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TicketUnavailable { ticket_id, status } => {
                write!(f, "Ticket {ticket_id} is not available (status: {status})")
            }
            Self::TicketNotReserved { ticket_id, status } => {
                write!(f, "Ticket {ticket_id} is not reserved (status: {status})")
            }
            Self::TicketNotHeld { ticket_id, status } => {
                write!(
                    f,
                    "Ticket {ticket_id} has no reservation to cancel (status: {status})"
                )
            }
            Self::TicketHeldByOther {
                ticket_id,
                expected,
                holder,
            } => {
                write!(
                    f,
                    "Ticket {ticket_id} is held by booking {holder}, not {expected}"
                )
            }
            Self::TicketNotInBooking {
                booking_id,
                ticket_id,
            } => {
                write!(f, "Ticket {ticket_id} is not part of booking {booking_id}")
            }
            Self::BookingNotPending { booking_id, status } => {
                write!(f, "Booking {booking_id} is not pending (status: {status})")
            }
            Self::BookingAlreadyCancelled(booking_id) => {
                write!(f, "Booking {booking_id} is already cancelled")
            }
            Self::DuplicateRosterEntry(player_id) => {
                write!(f, "Player {player_id} is already on the roster")
            }
            Self::NotOnRoster(player_id) => write!(f, "Player {player_id} is not on the roster"),
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {msg}"),
            Self::InvalidInning(inning) => {
                write!(f, "Invalid inning: {inning}. Must be 1 or greater")
            }
            Self::InvalidTicketCategory(s) => write!(f, "Invalid ticket category: {s}"),
            Self::InvalidTicketStatus(s) => write!(f, "Invalid ticket status: {s}"),
            Self::InvalidBookingStatus(s) => write!(f, "Invalid booking status: {s}"),
            Self::InvalidMatchStatus(s) => write!(f, "Invalid match status: {s}"),
            Self::InvalidPosition(s) => write!(f, "Invalid position: {s}"),
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Returns true if the error rejected an operation because of the
    /// current state of an entity, as opposed to malformed input.
    #[must_use]
    pub const fn is_state_violation(&self) -> bool {
        matches!(
            self,
            Self::TicketUnavailable { .. }
                | Self::TicketNotReserved { .. }
                | Self::TicketNotHeld { .. }
                | Self::TicketHeldByOther { .. }
                | Self::TicketNotInBooking { .. }
                | Self::BookingNotPending { .. }
                | Self::BookingAlreadyCancelled(_)
                | Self::DuplicateRosterEntry(_)
                | Self::NotOnRoster(_)
        )
    }
}
