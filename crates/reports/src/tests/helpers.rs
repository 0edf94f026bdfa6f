// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ballpark::Backend;
use ballpark_domain::{Customer, MatchId, Position, TeamId, TicketCategory, TicketId};
use rust_decimal::Decimal;
use std::sync::Arc;
use time::macros::datetime;

/// Two teams, three players, one match, and four 50.00 tickets: one sold,
/// one reserved, two available.
pub fn create_populated_backend() -> Arc<Backend> {
    let backend: Backend = Backend::new();
    let home = backend.add_team("Yankees", "New York", "Yankee Stadium", "AL East");
    let away = backend.add_team("Red Sox", "Boston", "Fenway Park", "AL East");

    backend
        .add_player("Aaron Judge", home.id(), Position::RightField, 99)
        .unwrap();
    backend
        .add_player("Gerrit Cole", home.id(), Position::Pitcher, 45)
        .unwrap();
    backend
        .add_player("Rafael Devers", away.id(), Position::ThirdBase, 11)
        .unwrap();

    let matchup = backend
        .add_match(
            home.id(),
            away.id(),
            "Yankee Stadium",
            datetime!(2026-04-15 19:05),
        )
        .unwrap();
    let tickets: Vec<TicketId> = backend
        .add_tickets_for_match(
            matchup.id(),
            "Field Level",
            "A",
            &["1", "2", "3", "4"],
            TicketCategory::Reserved,
            Decimal::new(5000, 2),
        )
        .unwrap()
        .iter()
        .map(|ticket| ticket.id().clone())
        .collect();

    let customer: Customer = Customer::new("John Smith", "john@example.com", "555-1234");
    let sold = backend
        .create_booking(customer.clone(), matchup.id(), &tickets[..1])
        .unwrap();
    backend.confirm_booking(sold.id(), "PAY-1").unwrap();
    backend
        .create_booking(customer, matchup.id(), &tickets[1..2])
        .unwrap();

    Arc::new(backend)
}

pub fn home_team() -> TeamId {
    TeamId::new("T0001")
}

pub fn first_match() -> MatchId {
    MatchId::new("M0001")
}
