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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use ballpark::Backend;
use ballpark_domain::{
    BattingLine, Booking, Customer, InningHalf, Match, MatchStatus, MatchUpdate, PitchingLine,
    Player, Position, Team, TicketCategory, TicketId,
};
use ballpark_reports::{ReportGenerator, ReportOptions, ReportSummary};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use rust_decimal::Decimal;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use time::macros::datetime;
use tracing::info;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Ballpark demo - registers teams, sells tickets, and writes every report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the report files are written to.
    #[arg(short, long, default_value = "reports")]
    output_dir: PathBuf,

    /// Maximum number of report jobs running at once.
    #[arg(short = 'j', long, default_value = "4")]
    report_jobs: NonZeroUsize,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over the verbosity flags when set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::default().add_directive(args.verbosity.log_level_filter().as_trace().into())
        }))
        .init();

    let backend: Arc<Backend> = Arc::new(Backend::new());
    let matchup: Match = register_league(&backend)?;
    let booking: Booking = sell_tickets(&backend, &matchup)?;
    let details: String = serde_json::to_string(&booking.details())?;
    info!(booking = %details, "Booking details");
    play_game(&backend, &matchup)?;

    let generator: ReportGenerator = ReportGenerator::with_options(
        Arc::clone(&backend),
        ReportOptions::new(args.report_jobs),
    );
    let summary: ReportSummary = generator.generate_all_reports(&args.output_dir).await?;
    info!(
        output_dir = %args.output_dir.display(),
        documents = ?summary.documents,
        "Demo complete"
    );
    Ok(())
}

/// Registers two clubs with a few players each and schedules one game.
fn register_league(backend: &Backend) -> Result<Match> {
    let yankees: Team = backend.add_team("Yankees", "New York", "Yankee Stadium", "AL East");
    let red_sox: Team = backend.add_team("Red Sox", "Boston", "Fenway Park", "AL East");

    let roster: [(&Team, &str, Position, u8); 6] = [
        (&yankees, "Aaron Judge", Position::RightField, 99),
        (&yankees, "Gerrit Cole", Position::Pitcher, 45),
        (&yankees, "Anthony Volpe", Position::Shortstop, 11),
        (&red_sox, "Rafael Devers", Position::ThirdBase, 11),
        (&red_sox, "Brayan Bello", Position::Pitcher, 66),
        (&red_sox, "Jarren Duran", Position::CenterField, 16),
    ];
    for (team, name, position, jersey) in roster {
        let player: Player = backend.add_player(name, team.id(), position, jersey)?;
        info!(player = %player, team = %team, "Added player");
    }

    let matchup: Match = backend.add_match(
        yankees.id(),
        red_sox.id(),
        yankees.stadium(),
        datetime!(2026-04-15 19:05),
    )?;
    info!(%matchup, "Scheduled match");
    Ok(matchup)
}

/// Stocks inventory for the match and books three premium seats.
fn sell_tickets(backend: &Backend, matchup: &Match) -> Result<Booking> {
    backend.add_tickets_for_match(
        matchup.id(),
        "Field Level",
        "A",
        &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
        TicketCategory::Premium,
        Decimal::new(15000, 2),
    )?;
    backend.add_tickets_for_match(
        matchup.id(),
        "Bleachers",
        "Z",
        &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
        TicketCategory::General,
        Decimal::new(2500, 2),
    )?;

    let premium: Vec<TicketId> = backend
        .available_tickets(matchup.id(), Some(TicketCategory::Premium))
        .iter()
        .take(3)
        .map(|ticket| ticket.id().clone())
        .collect();
    info!(
        available = backend.available_tickets(matchup.id(), None).len(),
        "Inventory ready"
    );

    let customer: Customer = Customer::new("John Smith", "john.smith@example.com", "555-123-4567");
    let booking: Booking = backend.create_booking(customer, matchup.id(), &premium)?;
    info!(%booking, "Created booking");

    let booking: Booking = backend.confirm_booking(booking.id(), "PAY-DEMO-0001")?;
    info!(%booking, status = %booking.status(), "Confirmed booking");
    Ok(booking)
}

/// Runs the match from first pitch to final out and records the results.
fn play_game(backend: &Backend, matchup: &Match) -> Result<()> {
    let live: Match = backend.update_match(
        matchup.id(),
        MatchUpdate {
            status: Some(MatchStatus::Live),
            score: Some((2, 1)),
            inning: Some((5, InningHalf::Top)),
            attendance: Some(46_537),
            weather: Some(String::from("Clear, 68F")),
        },
    )?;
    info!(score = %live.details().score, inning = %live.details().current_inning, "Match live");

    let final_score: Match = backend.update_match(
        matchup.id(),
        MatchUpdate {
            status: Some(MatchStatus::Completed),
            score: Some((5, 3)),
            ..MatchUpdate::default()
        },
    )?;
    info!(score = %final_score.details().score, "Match final");

    backend.record_result(matchup.home_team_id(), true)?;
    backend.record_result(matchup.away_team_id(), false)?;

    for player in backend.players() {
        if player.position() == Position::Pitcher {
            let winner: bool = player.team_id() == matchup.home_team_id();
            backend.record_pitching(
                player.id(),
                PitchingLine {
                    innings: if winner { 7.0 } else { 5.0 },
                    wins: u32::from(winner),
                    losses: u32::from(!winner),
                    earned_runs: if winner { 2 } else { 4 },
                    strikeouts: if winner { 9 } else { 5 },
                    walks: 2,
                    hits_allowed: if winner { 5 } else { 8 },
                },
            )?;
        } else {
            backend.record_batting(
                player.id(),
                BattingLine {
                    games: 1,
                    at_bats: 4,
                    hits: 1,
                    ..BattingLine::default()
                },
            )?;
        }
    }
    Ok(())
}
