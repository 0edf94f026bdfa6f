// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contention tests for the backend.
//!
//! `cargo xtask test-stress` runs this module repeatedly.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::tests::helpers::{add_test_tickets, create_test_backend, create_test_customer};
use crate::{Backend, CoreError, ErrorKind};
use ballpark_domain::{Booking, BookingId, BookingStatus, MatchId, TicketId, TicketStatus};

#[test]
fn test_last_seat_hundred_concurrent_bookings() {
    const REQUESTS: usize = 100;

    let backend: Arc<Backend> = Arc::new(create_test_backend());
    let tickets: Vec<TicketId> = add_test_tickets(&backend, 1);
    let barrier: Arc<Barrier> = Arc::new(Barrier::new(REQUESTS));

    let handles: Vec<_> = (0..REQUESTS)
        .map(|_| {
            let backend: Arc<Backend> = Arc::clone(&backend);
            let barrier: Arc<Barrier> = Arc::clone(&barrier);
            let tickets: Vec<TicketId> = tickets.clone();
            thread::spawn(move || {
                barrier.wait();
                backend.create_booking(create_test_customer(), &MatchId::new("M0001"), &tickets)
            })
        })
        .collect();

    let results: Vec<Result<Booking, CoreError>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let winners: Vec<&Booking> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(winners.len(), 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|err| err.kind() == ErrorKind::EmptyResult)
    );

    let ticket = backend.get_ticket(&tickets[0]).unwrap();
    assert_eq!(ticket.status(), TicketStatus::Reserved);
    assert_eq!(ticket.booking_id().as_ref(), Some(winners[0].id()));
    // Every request consumed a booking identifier.
    assert_eq!(
        backend.issuer().issued(crate::EntityKind::Booking),
        u64::try_from(REQUESTS).unwrap()
    );
}

#[test]
fn test_overlapping_requests_never_double_book() {
    const CUSTOMERS: usize = 32;
    const SEATS: usize = 40;

    let backend: Arc<Backend> = Arc::new(create_test_backend());
    let tickets: Arc<Vec<TicketId>> = Arc::new(add_test_tickets(&backend, SEATS));
    let barrier: Arc<Barrier> = Arc::new(Barrier::new(CUSTOMERS));

    let handles: Vec<_> = (0..CUSTOMERS)
        .map(|i| {
            let backend: Arc<Backend> = Arc::clone(&backend);
            let tickets: Arc<Vec<TicketId>> = Arc::clone(&tickets);
            let barrier: Arc<Barrier> = Arc::clone(&barrier);
            thread::spawn(move || {
                // Each customer wants a window of five adjacent seats.
                let start: usize = i % (SEATS - 5);
                let wanted: &[TicketId] = &tickets[start..start + 5];
                barrier.wait();
                backend
                    .create_booking(create_test_customer(), &MatchId::new("M0001"), wanted)
                    .ok()
            })
        })
        .collect();

    let bookings: Vec<Booking> = handles
        .into_iter()
        .filter_map(|handle| handle.join().unwrap())
        .collect();

    let mut claimed: Vec<&TicketId> = bookings
        .iter()
        .flat_map(|booking| booking.ticket_ids())
        .collect();
    let total_claimed: usize = claimed.len();
    claimed.sort();
    claimed.dedup();
    assert_eq!(claimed.len(), total_claimed);

    for booking in &bookings {
        for ticket_id in booking.ticket_ids() {
            let owner: Option<BookingId> = backend.get_ticket(ticket_id).unwrap().booking_id();
            assert_eq!(owner.as_ref(), Some(booking.id()));
        }
    }
}

#[test]
fn test_concurrent_confirm_and_cancel_of_one_booking() {
    for _ in 0..25 {
        let backend: Arc<Backend> = Arc::new(create_test_backend());
        let tickets: Vec<TicketId> = add_test_tickets(&backend, 3);
        let booking: Booking = backend
            .create_booking(create_test_customer(), &MatchId::new("M0001"), &tickets)
            .unwrap();
        let barrier: Arc<Barrier> = Arc::new(Barrier::new(2));

        let confirmer = {
            let backend: Arc<Backend> = Arc::clone(&backend);
            let barrier: Arc<Barrier> = Arc::clone(&barrier);
            let id: BookingId = booking.id().clone();
            thread::spawn(move || {
                barrier.wait();
                backend.confirm_booking(&id, "PAY-1").is_ok()
            })
        };
        let canceller = {
            let backend: Arc<Backend> = Arc::clone(&backend);
            let barrier: Arc<Barrier> = Arc::clone(&barrier);
            let id: BookingId = booking.id().clone();
            thread::spawn(move || {
                barrier.wait();
                backend.cancel_booking(&id).is_ok()
            })
        };

        let confirmed: bool = confirmer.join().unwrap();
        assert!(canceller.join().unwrap());

        // Cancellation always succeeds; confirmation only if it ran first.
        let final_booking: Booking = backend.get_booking(booking.id()).unwrap();
        assert_eq!(final_booking.status(), BookingStatus::Cancelled);
        assert_eq!(final_booking.payment_reference().is_some(), confirmed);
        for ticket_id in &tickets {
            assert_eq!(
                backend.get_ticket(ticket_id).unwrap().status(),
                TicketStatus::Available
            );
        }
    }
}

#[test]
fn test_concurrent_registration_issues_unique_ids() {
    let backend: Arc<Backend> = Arc::new(Backend::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let backend: Arc<Backend> = Arc::clone(&backend);
            thread::spawn(move || {
                for j in 0..25 {
                    let _team = backend.add_team(&format!("Team {i}-{j}"), "City", "Park", "East");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(backend.teams().len(), 200);
    assert_eq!(backend.teams().last().unwrap().id().value(), "T0200");
}
