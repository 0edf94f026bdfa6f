// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tickets and the seat reservation state machine.
//!
//! A ticket moves `Available → Reserved → Sold`, and both `Reserved` and
//! `Sold` fall back to `Available` when the reservation is cancelled.
//! `Cancelled` exists for disposal only; no transition here produces it.
//!
//! Each ticket owns a lock around its reservation state. Every transition
//! checks and sets under that lock, so two concurrent reservations of the
//! same seat can never both succeed.

use crate::error::DomainError;
use crate::ids::{BookingId, MatchId, TicketId};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Seating category of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    #[serde(rename = "General Admission")]
    General,
    #[serde(rename = "Reserved Seating")]
    Reserved,
    #[serde(rename = "Premium Seating")]
    Premium,
    #[serde(rename = "VIP")]
    Vip,
    #[serde(rename = "Box Seats")]
    Box,
    #[serde(rename = "Luxury Suite")]
    Suite,
}

impl TicketCategory {
    /// All categories, cheapest seating first.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Reserved,
        Self::Premium,
        Self::Vip,
        Self::Box,
        Self::Suite,
    ];

    /// Returns the display label used in projections and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "General Admission",
            Self::Reserved => "Reserved Seating",
            Self::Premium => "Premium Seating",
            Self::Vip => "VIP",
            Self::Box => "Box Seats",
            Self::Suite => "Luxury Suite",
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "General Admission" | "general" => Ok(Self::General),
            "Reserved Seating" | "reserved" => Ok(Self::Reserved),
            "Premium Seating" | "premium" => Ok(Self::Premium),
            "VIP" | "vip" => Ok(Self::Vip),
            "Box Seats" | "box" => Ok(Self::Box),
            "Luxury Suite" | "suite" => Ok(Self::Suite),
            _ => Err(DomainError::InvalidTicketCategory(s.to_string())),
        }
    }
}

/// Externally visible reservation status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Available,
    Reserved,
    Sold,
    Cancelled,
}

impl TicketStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Sold => "Sold",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "Reserved" => Ok(Self::Reserved),
            "Sold" => Ok(Self::Sold),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidTicketStatus(s.to_string())),
        }
    }
}

/// Reservation state of a ticket.
///
/// The owning booking travels with the `Reserved` and `Sold` variants, so a
/// ticket can never carry a booking while available or lack one while held.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TicketHold {
    #[default]
    Available,
    Reserved(BookingId),
    Sold(BookingId),
    Cancelled,
}

impl TicketHold {
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        match self {
            Self::Available => TicketStatus::Available,
            Self::Reserved(_) => TicketStatus::Reserved,
            Self::Sold(_) => TicketStatus::Sold,
            Self::Cancelled => TicketStatus::Cancelled,
        }
    }

    #[must_use]
    pub const fn booking_id(&self) -> Option<&BookingId> {
        match self {
            Self::Reserved(id) | Self::Sold(id) => Some(id),
            Self::Available | Self::Cancelled => None,
        }
    }
}

/// Serializable projection of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDetails {
    pub ticket_id: TicketId,
    pub match_id: MatchId,
    pub section: String,
    pub row: String,
    pub seat: String,
    pub ticket_type: TicketCategory,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub status: TicketStatus,
    pub booking_id: Option<BookingId>,
}

/// A single sellable seat for one match.
///
/// Everything except the reservation state is immutable after construction.
/// Tickets are shared between threads by the registry and mutated only
/// through the methods below.
#[derive(Debug)]
pub struct Ticket {
    id: TicketId,
    match_id: MatchId,
    section: String,
    row: String,
    seat: String,
    category: TicketCategory,
    price: Decimal,
    hold: Mutex<TicketHold>,
}

impl Ticket {
    /// Creates an available ticket.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if `price` is negative.
    pub fn new(
        id: TicketId,
        match_id: MatchId,
        section: &str,
        row: &str,
        seat: &str,
        category: TicketCategory,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(DomainError::InvalidPrice(format!(
                "ticket {id} priced at {price}; prices cannot be negative"
            )));
        }

        Ok(Self {
            id,
            match_id,
            section: section.to_string(),
            row: row.to_string(),
            seat: seat.to_string(),
            category,
            price,
            hold: Mutex::new(TicketHold::Available),
        })
    }

    #[must_use]
    pub const fn id(&self) -> &TicketId {
        &self.id
    }

    #[must_use]
    pub const fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    #[must_use]
    pub fn row(&self) -> &str {
        &self.row
    }

    #[must_use]
    pub fn seat(&self) -> &str {
        &self.seat
    }

    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the current status. The value may be stale by the time the
    /// caller acts on it; use the transition methods to act atomically.
    #[must_use]
    pub fn status(&self) -> TicketStatus {
        self.hold.lock().status()
    }

    /// Returns the booking currently holding this ticket, if any.
    #[must_use]
    pub fn booking_id(&self) -> Option<BookingId> {
        self.hold.lock().booking_id().cloned()
    }

    /// Returns a copy of the full reservation state.
    #[must_use]
    pub fn hold(&self) -> TicketHold {
        self.hold.lock().clone()
    }

    /// Reserves the ticket for `booking_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketUnavailable` if the ticket is not
    /// available. The ticket is not modified.
    pub fn reserve(&self, booking_id: &BookingId) -> Result<(), DomainError> {
        let mut hold = self.hold.lock();
        match &*hold {
            TicketHold::Available => {
                *hold = TicketHold::Reserved(booking_id.clone());
                Ok(())
            }
            other => Err(DomainError::TicketUnavailable {
                ticket_id: self.id.clone(),
                status: other.status(),
            }),
        }
    }

    /// Marks a reserved ticket as sold.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketNotReserved` if the ticket is not reserved.
    pub fn confirm_sale(&self) -> Result<(), DomainError> {
        let mut hold = self.hold.lock();
        match &*hold {
            TicketHold::Reserved(owner) => {
                *hold = TicketHold::Sold(owner.clone());
                Ok(())
            }
            other => Err(DomainError::TicketNotReserved {
                ticket_id: self.id.clone(),
                status: other.status(),
            }),
        }
    }

    /// Returns a reserved or sold ticket to the available pool.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketNotHeld` if the ticket is available or
    /// cancelled.
    pub fn cancel_reservation(&self) -> Result<(), DomainError> {
        let mut hold = self.hold.lock();
        match &*hold {
            TicketHold::Reserved(_) | TicketHold::Sold(_) => {
                *hold = TicketHold::Available;
                Ok(())
            }
            other => Err(DomainError::TicketNotHeld {
                ticket_id: self.id.clone(),
                status: other.status(),
            }),
        }
    }

    /// Like [`Ticket::confirm_sale`], but only if `booking_id` holds the
    /// reservation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketNotReserved` if the ticket is not
    /// reserved, or `DomainError::TicketHeldByOther` if another booking
    /// holds it.
    pub fn confirm_sale_for(&self, booking_id: &BookingId) -> Result<(), DomainError> {
        let mut hold = self.hold.lock();
        match &*hold {
            TicketHold::Reserved(owner) if owner == booking_id => {
                *hold = TicketHold::Sold(owner.clone());
                Ok(())
            }
            TicketHold::Reserved(owner) => Err(self.held_by_other(booking_id, owner)),
            other => Err(DomainError::TicketNotReserved {
                ticket_id: self.id.clone(),
                status: other.status(),
            }),
        }
    }

    /// Like [`Ticket::cancel_reservation`], but only if `booking_id` holds
    /// the ticket.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketNotHeld` if the ticket is not held, or
    /// `DomainError::TicketHeldByOther` if another booking holds it.
    pub fn release_for(&self, booking_id: &BookingId) -> Result<(), DomainError> {
        let mut hold = self.hold.lock();
        match &*hold {
            TicketHold::Reserved(owner) | TicketHold::Sold(owner) if owner == booking_id => {
                *hold = TicketHold::Available;
                Ok(())
            }
            TicketHold::Reserved(owner) | TicketHold::Sold(owner) => {
                Err(self.held_by_other(booking_id, owner))
            }
            other => Err(DomainError::TicketNotHeld {
                ticket_id: self.id.clone(),
                status: other.status(),
            }),
        }
    }

    /// Takes a consistent snapshot of the ticket for serialization.
    #[must_use]
    pub fn details(&self) -> TicketDetails {
        let hold: TicketHold = self.hold();
        TicketDetails {
            ticket_id: self.id.clone(),
            match_id: self.match_id.clone(),
            section: self.section.clone(),
            row: self.row.clone(),
            seat: self.seat.clone(),
            ticket_type: self.category,
            price: self.price,
            status: hold.status(),
            booking_id: hold.booking_id().cloned(),
        }
    }

    fn held_by_other(&self, expected: &BookingId, holder: &BookingId) -> DomainError {
        DomainError::TicketHeldByOther {
            ticket_id: self.id.clone(),
            expected: expected.clone(),
            holder: holder.clone(),
        }
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ticket {}: {} {}-{} ({})",
            self.id, self.section, self.row, self.seat, self.category
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_string_round_trip() {
        for category in TicketCategory::ALL {
            match category.as_str().parse::<TicketCategory>() {
                Ok(parsed) => assert_eq!(category, parsed),
                Err(e) => panic!("Failed to parse category {category}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_category_string() {
        assert!("Bleachers".parse::<TicketCategory>().is_err());
    }

    #[test]
    fn test_hold_carries_booking_only_when_held() {
        let booking: BookingId = BookingId::new("B000001");
        assert_eq!(TicketHold::Available.booking_id(), None);
        assert_eq!(TicketHold::Cancelled.booking_id(), None);
        assert_eq!(
            TicketHold::Reserved(booking.clone()).booking_id(),
            Some(&booking)
        );
        assert_eq!(TicketHold::Sold(booking.clone()).booking_id(), Some(&booking));
    }
}
