// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Booking, BookingId, Customer, MatchId, Ticket, TicketCategory, TicketId};
use rust_decimal::Decimal;
use time::macros::datetime;

/// Dollars and cents as an exact decimal.
pub fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn create_test_ticket(id: &str, cents: i64) -> Ticket {
    Ticket::new(
        TicketId::new(id),
        MatchId::new("M0001"),
        "Field Level",
        "A",
        "1",
        TicketCategory::Reserved,
        price(cents),
    )
    .unwrap()
}

pub fn create_test_customer() -> Customer {
    Customer::new("John Smith", "john.smith@example.com", "555-123-4567")
}

pub fn create_test_booking(id: &str) -> Booking {
    Booking::new(
        BookingId::new(id),
        create_test_customer(),
        MatchId::new("M0001"),
        datetime!(2026-04-01 12:00 UTC),
    )
}
