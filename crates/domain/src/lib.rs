// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod error;
mod ids;
mod matchup;
mod player;
mod team;
mod ticket;

#[cfg(test)]
mod tests;

pub use booking::{Booking, BookingDetails, BookingStatus, Customer};
pub use error::DomainError;
pub use ids::{BookingId, MatchId, PlayerId, TeamId, TicketId};
pub use matchup::{InningHalf, Match, MatchDetails, MatchStatus, MatchUpdate};
pub use player::{
    BattingLine, BattingStats, PitchingLine, PitchingStats, Player, PlayerStats, Position,
};
pub use team::{Team, TeamDetails};
pub use ticket::{Ticket, TicketCategory, TicketDetails, TicketHold, TicketStatus};
