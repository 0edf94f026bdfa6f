// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Backend;
use ballpark_domain::{Customer, Match, MatchId, Team, TicketCategory, TicketId};
use rust_decimal::Decimal;
use time::macros::datetime;

pub fn create_test_customer() -> Customer {
    Customer::new("John Smith", "john.smith@example.com", "555-123-4567")
}

pub fn create_other_customer() -> Customer {
    Customer::new("Jane Doe", "jane.doe@example.com", "555-987-6543")
}

/// A backend with two teams (`T0001`, `T0002`) and one match (`M0001`).
pub fn create_test_backend() -> Backend {
    let backend: Backend = Backend::new();
    let home: Team = backend.add_team("Yankees", "New York", "Yankee Stadium", "AL East");
    let away: Team = backend.add_team("Red Sox", "Boston", "Fenway Park", "AL East");
    let _scheduled: Match = backend
        .add_match(
            home.id(),
            away.id(),
            "Yankee Stadium",
            datetime!(2026-04-15 19:05),
        )
        .unwrap();
    backend
}

/// Adds `count` tickets at 50.00 each to `M0001` and returns their ids.
pub fn add_test_tickets(backend: &Backend, count: usize) -> Vec<TicketId> {
    let seats: Vec<String> = (1..=count).map(|seat| seat.to_string()).collect();
    let seats: Vec<&str> = seats.iter().map(String::as_str).collect();
    backend
        .add_tickets_for_match(
            &MatchId::new("M0001"),
            "Field Level",
            "A",
            &seats,
            TicketCategory::Reserved,
            Decimal::new(5000, 2),
        )
        .unwrap()
        .iter()
        .map(|ticket| ticket.id().clone())
        .collect()
}
