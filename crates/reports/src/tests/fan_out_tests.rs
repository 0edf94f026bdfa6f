// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Full report runs.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::tests::helpers::{create_populated_backend, first_match};
use crate::{
    MemorySink, PlayerStatsReport, ReportError, ReportGenerator, ReportJob, ReportOptions,
    ReportSink, ReportSummary, TicketSalesReport,
};
use ballpark::Backend;
use ballpark_domain::{Booking, Customer, TeamId, TicketCategory, TicketId};
use rust_decimal::Decimal;

/// Fails every document whose name starts with `schedule_`.
struct FailingScheduleSink {
    inner: MemorySink,
}

impl ReportSink for FailingScheduleSink {
    fn write_document(&self, name: &str, contents: &str) -> Result<(), ReportError> {
        if name.starts_with("schedule_") {
            return Err(ReportError::Stream(std::io::Error::other("disk full")));
        }
        self.inner.write_document(name, contents)
    }
}

/// Records the largest number of writes in progress at once.
#[derive(Default)]
struct InFlightSink {
    inner: MemorySink,
    in_flight: AtomicUsize,
    high_water: AtomicUsize,
}

impl ReportSink for InFlightSink {
    fn write_document(&self, name: &str, contents: &str) -> Result<(), ReportError> {
        let now: usize = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(now, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        let result: Result<(), ReportError> = self.inner.write_document(name, contents);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

#[test]
fn test_jobs_cover_every_team() {
    let generator: ReportGenerator = ReportGenerator::new(create_populated_backend());

    assert_eq!(
        generator.jobs(),
        vec![
            ReportJob::PlayerStats,
            ReportJob::TeamSchedule(TeamId::new("T0001")),
            ReportJob::TeamSchedule(TeamId::new("T0002")),
            ReportJob::TicketSales,
        ]
    );
}

#[test]
fn test_default_concurrency() {
    let generator: ReportGenerator = ReportGenerator::new(Arc::new(Backend::new()));
    assert_eq!(generator.options().max_concurrent_jobs.get(), 4);
}

#[tokio::test]
async fn test_generate_all_reports_writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("reports");
    let generator: ReportGenerator = ReportGenerator::new(create_populated_backend());

    let summary: ReportSummary = generator.generate_all_reports(&output).await.unwrap();

    assert_eq!(
        summary.documents,
        vec![
            "player_stats_all.json",
            "schedule_T0001.json",
            "schedule_T0002.json",
            "ticket_sales_all.json",
        ]
    );
    for name in &summary.documents {
        let contents: String = std::fs::read_to_string(output.join(name)).unwrap();
        let _: serde_json::Value = serde_json::from_str(&contents).unwrap();
    }
}

#[tokio::test]
async fn test_generate_all_reports_on_empty_backend() {
    let dir = tempfile::tempdir().unwrap();
    let generator: ReportGenerator = ReportGenerator::new(Arc::new(Backend::new()));

    let summary: ReportSummary = generator.generate_all_reports(dir.path()).await.unwrap();

    assert_eq!(
        summary.documents,
        vec!["player_stats_all.json", "ticket_sales_all.json"]
    );

    let players: PlayerStatsReport = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("player_stats_all.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(players.player_count, 0);
    assert!(players.players.is_empty());

    let sales: TicketSalesReport = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("ticket_sales_all.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(sales.total_tickets, 0);
    assert!(sales.revenue.is_zero());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_single_job_bound_still_completes() {
    let options: ReportOptions = ReportOptions::new(NonZeroUsize::MIN);
    let generator: ReportGenerator =
        ReportGenerator::with_options(create_populated_backend(), options);
    let memory: Arc<MemorySink> = Arc::new(MemorySink::new());
    let sink: Arc<dyn ReportSink> = memory.clone();

    let summary: ReportSummary = generator.generate_all_reports_to(&sink).await.unwrap();

    assert_eq!(summary.documents.len(), 4);
    assert_eq!(memory.names(), summary.documents);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrency_bound_limits_jobs_in_flight() {
    let backend: Arc<Backend> = create_populated_backend();
    for n in 0..6 {
        let _team = backend.add_team(&format!("Club {n}"), "Town", "Park", "Minors");
    }
    let options: ReportOptions = ReportOptions::new(NonZeroUsize::new(2).unwrap());
    let generator: ReportGenerator = ReportGenerator::with_options(backend, options);
    let tracking: Arc<InFlightSink> = Arc::new(InFlightSink::default());
    let sink: Arc<dyn ReportSink> = tracking.clone();

    let summary: ReportSummary = generator.generate_all_reports_to(&sink).await.unwrap();

    assert_eq!(summary.documents.len(), 10);
    assert_eq!(tracking.inner.len(), 10);
    let high_water: usize = tracking.high_water.load(Ordering::SeqCst);
    assert!(high_water >= 1);
    assert!(
        high_water <= 2,
        "{high_water} jobs ran at once with a bound of 2"
    );
    assert_eq!(tracking.in_flight.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reports_run_alongside_booking_traffic() {
    let backend: Arc<Backend> = create_populated_backend();
    let seats: Vec<String> = (1..=20).map(|n| format!("{n}")).collect();
    let seats: Vec<&str> = seats.iter().map(String::as_str).collect();
    backend
        .add_tickets_for_match(
            &first_match(),
            "Bleachers",
            "Z",
            &seats,
            TicketCategory::General,
            Decimal::new(2500, 2),
        )
        .unwrap();

    let stop: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
    let workers: Vec<thread::JoinHandle<()>> = (0..4_u32)
        .map(|worker| {
            let backend: Arc<Backend> = Arc::clone(&backend);
            let stop: Arc<AtomicBool> = Arc::clone(&stop);
            thread::spawn(move || {
                let customer: Customer =
                    Customer::new("Fan", "fan@example.com", "555-0000");
                let mut round: u32 = 0;
                while !stop.load(Ordering::SeqCst) {
                    round = round.wrapping_add(1);
                    let wanted: Vec<TicketId> = backend
                        .available_tickets(&first_match(), None)
                        .iter()
                        .take(2)
                        .map(|ticket| ticket.id().clone())
                        .collect();
                    let Ok(booking) =
                        backend.create_booking(customer.clone(), &first_match(), &wanted)
                    else {
                        continue;
                    };
                    if (round + worker) % 2 == 0 {
                        let _ = backend.confirm_booking(booking.id(), "PAY-LOAD");
                    }
                    let cancelled: Booking = backend.cancel_booking(booking.id()).unwrap();
                    assert_eq!(cancelled.id(), booking.id());
                }
            })
        })
        .collect();

    let generator: ReportGenerator = ReportGenerator::new(Arc::clone(&backend));
    for _ in 0..10 {
        let memory: Arc<MemorySink> = Arc::new(MemorySink::new());
        let sink: Arc<dyn ReportSink> = memory.clone();

        let summary: ReportSummary = generator.generate_all_reports_to(&sink).await.unwrap();
        assert_eq!(summary.documents.len(), 4);

        let sales: TicketSalesReport =
            serde_json::from_str(&memory.get("ticket_sales_all.json").unwrap()).unwrap();
        assert_eq!(sales.total_tickets, 24);
        assert_eq!(
            sales.available_tickets + sales.reserved_tickets + sales.sold_tickets,
            sales.total_tickets
        );
        assert!(sales.sold_tickets >= 1);
    }

    stop.store(true, Ordering::SeqCst);
    for worker in workers {
        worker.join().unwrap();
    }
}

#[tokio::test]
async fn test_failed_jobs_are_listed_and_others_still_written() {
    let generator: ReportGenerator = ReportGenerator::new(create_populated_backend());
    let failing: Arc<FailingScheduleSink> = Arc::new(FailingScheduleSink {
        inner: MemorySink::new(),
    });
    let sink: Arc<dyn ReportSink> = failing.clone();

    let err: ReportError = generator.generate_all_reports_to(&sink).await.unwrap_err();

    let ReportError::JobsFailed(failures) = err else {
        panic!("expected JobsFailed");
    };
    let failed: Vec<&str> = failures.iter().map(|f| f.document.as_str()).collect();
    assert_eq!(failed, vec!["schedule_T0001.json", "schedule_T0002.json"]);
    assert_eq!(
        failing.inner.names(),
        vec!["player_stats_all.json", "ticket_sales_all.json"]
    );
}

#[tokio::test]
async fn test_unwritable_output_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "occupied").unwrap();
    let generator: ReportGenerator = ReportGenerator::new(Arc::new(Backend::new()));

    let err: ReportError = generator.generate_all_reports(&blocker).await.unwrap_err();

    assert!(matches!(err, ReportError::Io { .. }));
}
