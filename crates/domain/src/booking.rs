// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Customer bookings.
//!
//! A booking groups tickets for one customer purchase. It holds ticket
//! identifiers, never tickets, and changes a ticket's state only through the
//! ticket's own guarded transitions.
//!
//! Valid transitions are:
//! - `Pending` → `Confirmed`
//! - `Pending` → `Cancelled`
//! - `Confirmed` → `Cancelled`

use crate::error::DomainError;
use crate::ids::{BookingId, MatchId, TicketId};
use crate::ticket::Ticket;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Checks if a transition from this status to `target` is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Confirmed" => Ok(Self::Confirmed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

/// Contact details of the purchasing customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    #[must_use]
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}

/// Serializable projection of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub booking_id: BookingId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub match_id: MatchId,
    #[serde(with = "time::serde::rfc3339")]
    pub booking_time: OffsetDateTime,
    pub status: BookingStatus,
    pub ticket_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub payment_reference: String,
}

/// A customer purchase of one or more tickets for a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    id: BookingId,
    customer: Customer,
    match_id: MatchId,
    created_at: OffsetDateTime,
    status: BookingStatus,
    ticket_ids: Vec<TicketId>,
    total: Decimal,
    payment_reference: Option<String>,
}

impl Booking {
    /// Creates a pending booking with no tickets.
    #[must_use]
    pub const fn new(
        id: BookingId,
        customer: Customer,
        match_id: MatchId,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            customer,
            match_id,
            created_at,
            status: BookingStatus::Pending,
            ticket_ids: Vec::new(),
            total: Decimal::ZERO,
            payment_reference: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &BookingId {
        &self.id
    }

    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    #[must_use]
    pub const fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    #[must_use]
    pub fn ticket_ids(&self) -> &[TicketId] {
        &self.ticket_ids
    }

    #[must_use]
    pub fn contains(&self, ticket_id: &TicketId) -> bool {
        self.ticket_ids.contains(ticket_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticket_ids.is_empty()
    }

    /// Sum of the prices of the tickets currently in the booking.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    #[must_use]
    pub fn payment_reference(&self) -> Option<&str> {
        self.payment_reference.as_deref()
    }

    /// Reserves `ticket` for this booking and adds its price to the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking is not pending or the ticket cannot be
    /// reserved. The booking is unchanged on error.
    pub fn add_ticket(&mut self, ticket: &Ticket) -> Result<(), DomainError> {
        self.require_pending()?;
        ticket.reserve(&self.id)?;

        self.ticket_ids.push(ticket.id().clone());
        self.total += ticket.price();
        Ok(())
    }

    /// Releases `ticket` from this booking and subtracts its price.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is not in this booking, the booking is
    /// cancelled, or the ticket's reservation could not be released.
    pub fn remove_ticket(&mut self, ticket: &Ticket) -> Result<(), DomainError> {
        let Some(index) = self.ticket_ids.iter().position(|id| id == ticket.id()) else {
            return Err(DomainError::TicketNotInBooking {
                booking_id: self.id.clone(),
                ticket_id: ticket.id().clone(),
            });
        };

        if self.status == BookingStatus::Cancelled {
            return Err(DomainError::BookingAlreadyCancelled(self.id.clone()));
        }

        ticket.release_for(&self.id)?;

        self.ticket_ids.swap_remove(index);
        self.total -= ticket.price();
        Ok(())
    }

    /// Confirms a pending booking against an already-validated payment.
    ///
    /// Marking the tickets sold is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BookingNotPending` if the booking is not pending.
    pub fn confirm(&mut self, payment_reference: &str) -> Result<(), DomainError> {
        self.require_pending()?;

        self.status = BookingStatus::Confirmed;
        self.payment_reference = Some(payment_reference.to_string());
        Ok(())
    }

    /// Cancels the booking, including after confirmation.
    ///
    /// Releasing the tickets is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BookingAlreadyCancelled` if already cancelled.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(BookingStatus::Cancelled) {
            return Err(DomainError::BookingAlreadyCancelled(self.id.clone()));
        }

        self.status = BookingStatus::Cancelled;
        Ok(())
    }

    /// Checks that the booking is still pending.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BookingNotPending` otherwise.
    pub fn require_pending(&self) -> Result<(), DomainError> {
        if self.status == BookingStatus::Pending {
            Ok(())
        } else {
            Err(DomainError::BookingNotPending {
                booking_id: self.id.clone(),
                status: self.status,
            })
        }
    }

    #[must_use]
    pub fn details(&self) -> BookingDetails {
        BookingDetails {
            booking_id: self.id.clone(),
            customer_name: self.customer.name.clone(),
            customer_email: self.customer.email.clone(),
            customer_phone: self.customer.phone.clone(),
            match_id: self.match_id.clone(),
            booking_time: self.created_at,
            status: self.status,
            ticket_count: self.ticket_ids.len(),
            total_amount: self.total,
            payment_reference: self.payment_reference.clone().unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Booking {}: {}, {} tickets, ${:.2}",
            self.id,
            self.customer.name,
            self.ticket_ids.len(),
            self.total
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            match status.as_str().parse::<BookingStatus>() {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status {status}: {e}"),
            }
        }
    }

    #[test]
    fn test_valid_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
    }

    #[test]
    fn test_no_transitions_out_of_cancelled() {
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Confirmed));
    }
}
