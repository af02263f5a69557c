//! Queue engine behaviour over the SQLite store

use std::sync::Arc;

use branchq_core::application::{Outcome, QueueService};
use branchq_core::domain::{Counters, QueueCategory};
use branchq_core::port::FixedTimeProvider;
use branchq_infra_sqlite::{create_pool, run_migrations, SqliteKeyValueStore};

const T0: i64 = 1_709_618_828_000;

async fn sqlite_service() -> QueueService {
    let pool = create_pool(":memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let time_provider = Arc::new(FixedTimeProvider::new(T0));
    let store = Arc::new(SqliteKeyValueStore::new(pool, time_provider.clone()));
    QueueService::new(store, time_provider)
}

#[tokio::test]
async fn test_first_tickets_per_category() {
    let service = sqlite_service().await;

    let c1 = service.issue(QueueCategory::Cash).await;
    assert!(!c1.is_degraded());
    assert_eq!(c1.value().queue_number(), "C001");
    assert_eq!(c1.value().service_type(), "Cash/Check Transaction");
    assert_eq!(c1.value().estimated_wait(), 5);

    let c2 = service.issue(QueueCategory::Cash).await.into_value();
    assert_eq!(c2.queue_number(), "C002");
    assert_eq!(c2.estimated_wait(), 10);

    let p1 = service.issue(QueueCategory::Priority).await.into_value();
    assert_eq!(p1.queue_number(), "P001");
    assert_eq!(p1.estimated_wait(), 5);

    let q1 = service.issue(QueueCategory::Qr).await.into_value();
    assert_eq!(q1.queue_number(), "Q001");
    assert_eq!(q1.service_type(), "Scan QR");

    let o1 = service.issue(QueueCategory::Other).await.into_value();
    assert_eq!(o1.queue_number(), "O001");
    assert_eq!(o1.service_type(), "Other Transaction");

    assert_eq!(
        service.load_counters().await,
        Outcome::Ok(Counters {
            cash: 2,
            priority: 1,
            qr: 1,
            other: 1,
        })
    );
}

#[tokio::test]
async fn test_numbering_widens_past_999() {
    let service = sqlite_service().await;

    let mut last = None;
    for _ in 0..1000 {
        last = Some(service.issue(QueueCategory::Other).await.into_value());
    }
    let last = last.unwrap();

    assert_eq!(last.queue_number(), "O1000");
    assert_eq!(last.estimated_wait(), 5000);
}

#[tokio::test]
async fn test_export_matches_log() {
    let service = sqlite_service().await;
    let mix = [
        QueueCategory::Cash,
        QueueCategory::Qr,
        QueueCategory::Cash,
        QueueCategory::Priority,
        QueueCategory::Other,
        QueueCategory::Qr,
        QueueCategory::Cash,
    ];
    for category in mix {
        service.issue(category).await.into_value();
    }

    let log = service.get_queue_log().await.into_value();
    assert_eq!(log.len(), mix.len());
    let numbers: Vec<&str> = log.iter().map(|t| t.queue_number()).collect();
    assert_eq!(
        numbers,
        vec!["C001", "Q001", "C002", "P001", "O001", "Q002", "C003"]
    );

    let csv = service.export_queue_log().await.into_value();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), log.len() + 1);
    assert_eq!(
        lines[0],
        "Queue Number,Service Type,Date & Time,Estimated Wait"
    );
    assert_eq!(
        lines[3],
        "C002,Cash/Check Transaction,\"03/05/2024, 2:07:08 PM\",10 mins"
    );
}

#[tokio::test]
async fn test_reset_starts_new_epoch() {
    let service = sqlite_service().await;
    for _ in 0..3 {
        service.issue(QueueCategory::Priority).await.into_value();
    }

    assert!(!service.reset_counters().await.is_degraded());
    assert_eq!(service.load_counters().await, Outcome::Ok(Counters::zero()));
    assert!(service.get_queue_log().await.value().is_empty());
    assert_eq!(service.export_queue_log().await.value().lines().count(), 1);

    let ticket = service.issue(QueueCategory::Priority).await.into_value();
    assert_eq!(ticket.queue_number(), "P001");
}

#[tokio::test]
async fn test_wall_board_projection() {
    let service = sqlite_service().await;
    for _ in 0..2 {
        service.issue(QueueCategory::Cash).await.into_value();
    }

    let next = service
        .display_next_numbers(QueueCategory::Cash, 5)
        .await
        .into_value();
    assert_eq!(next, vec!["C001", "C001", "C001", "C001", "C002"]);

    // Projection only: reading the board never moves counters
    let before = service.load_counters().await.into_value();
    service.wall_board(5).await.into_value();
    service.now_serving().await.into_value();
    assert_eq!(service.load_counters().await.into_value(), before);
}

#[tokio::test]
async fn test_concurrent_issue_through_one_service() {
    let service = Arc::new(sqlite_service().await);

    let mut handles = Vec::new();
    for i in 0..30 {
        let service = service.clone();
        let category = if i % 3 == 0 {
            QueueCategory::Priority
        } else {
            QueueCategory::Cash
        };
        handles.push(tokio::spawn(async move { service.issue(category).await }));
    }

    let mut numbers = Vec::new();
    for handle in handles {
        let outcome = handle.await.unwrap();
        assert!(!outcome.is_degraded());
        numbers.push(outcome.into_value().queue_number().to_string());
    }
    numbers.sort();
    numbers.dedup();
    assert_eq!(numbers.len(), 30, "every ticket number must be unique");

    let counters = service.load_counters().await.into_value();
    assert_eq!(counters.priority, 10);
    assert_eq!(counters.cash, 20);
    assert_eq!(service.get_queue_log().await.into_value().len(), 30);
}
