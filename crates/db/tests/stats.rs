//! Date-range statistics: totals, per-category breakdown, per-day breakdown.

mod common;

use pocket_ledger_db::repositories::{CategoryRepo, ExpenseRepo, StatsRepo};

#[tokio::test]
async fn test_empty_range_reports_zeroes_for_every_category() {
    let pool = common::test_pool().await;

    let stats = StatsRepo::expense_stats(&pool, common::day("2024-01-01"), common::day("2024-01-31"))
        .await
        .unwrap();

    assert_eq!(stats.total, 0.0);
    assert!(stats.by_date.is_empty());
    assert_eq!(stats.by_category.len(), 6);
    assert!(stats
        .by_category
        .iter()
        .all(|c| c.count == 0 && c.total == 0.0));
}

#[tokio::test]
async fn test_single_expense_scenario() {
    let pool = common::test_pool().await;
    ExpenseRepo::create(&pool, &common::new_expense(50.0, 1, "2024-01-10"))
        .await
        .unwrap();

    let stats = StatsRepo::expense_stats(&pool, common::day("2024-01-01"), common::day("2024-01-31"))
        .await
        .unwrap();

    assert_eq!(stats.total, 50.0);

    let first = &stats.by_category[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.count, 1);
    assert_eq!(first.total, 50.0);
    assert!(stats.by_category[1..].iter().all(|c| c.count == 0));

    assert_eq!(stats.by_date.len(), 1);
    assert_eq!(stats.by_date[0].date, common::day("2024-01-10"));
    assert_eq!(stats.by_date[0].count, 1);
    assert_eq!(stats.by_date[0].total, 50.0);
}

#[tokio::test]
async fn test_expenses_outside_range_are_ignored() {
    let pool = common::test_pool().await;
    for (amount, category, date) in [
        (10.0, 1, "2023-12-31"),
        (20.0, 1, "2024-01-01"),
        (30.0, 2, "2024-01-31"),
        (40.0, 2, "2024-02-01"),
    ] {
        ExpenseRepo::create(&pool, &common::new_expense(amount, category, date))
            .await
            .unwrap();
    }

    let stats = StatsRepo::expense_stats(&pool, common::day("2024-01-01"), common::day("2024-01-31"))
        .await
        .unwrap();

    assert_eq!(stats.total, 50.0);
    let count: i64 = stats.by_category.iter().map(|c| c.count).sum();
    assert_eq!(count, 2);
    assert_eq!(stats.by_date.len(), 2);
}

#[tokio::test]
async fn test_by_category_sorted_by_total_descending() {
    let pool = common::test_pool().await;
    let pets = CategoryRepo::create(&pool, &common::new_category("Pets"))
        .await
        .unwrap();
    for (amount, category) in [(5.0, 1), (7.0, 1), (30.0, 3), (100.0, pets.id)] {
        ExpenseRepo::create(&pool, &common::new_expense(amount, category, "2024-01-10"))
            .await
            .unwrap();
    }

    let stats = StatsRepo::expense_stats(&pool, common::day("2024-01-01"), common::day("2024-01-31"))
        .await
        .unwrap();

    let order: Vec<_> = stats.by_category.iter().map(|c| c.id).collect();
    assert_eq!(order[..3], [pets.id, 3, 1]);
    // Zero-spend categories follow in id order.
    assert_eq!(order[3..], [2, 4, 5, 6]);

    let dining = &stats.by_category[2];
    assert_eq!(dining.count, 2);
    assert_eq!(dining.total, 12.0);
    assert_eq!(stats.total, 142.0);
}

#[tokio::test]
async fn test_by_date_groups_and_sorts_descending() {
    let pool = common::test_pool().await;
    for (amount, date) in [
        (1.0, "2024-01-03"),
        (2.0, "2024-01-05"),
        (4.0, "2024-01-03"),
        (8.0, "2024-01-04"),
    ] {
        ExpenseRepo::create(&pool, &common::new_expense(amount, 2, date))
            .await
            .unwrap();
    }

    let stats = StatsRepo::expense_stats(&pool, common::day("2024-01-01"), common::day("2024-01-31"))
        .await
        .unwrap();

    let rows: Vec<_> = stats
        .by_date
        .iter()
        .map(|d| (d.date, d.count, d.total))
        .collect();
    assert_eq!(
        rows,
        vec![
            (common::day("2024-01-05"), 1, 2.0),
            (common::day("2024-01-04"), 1, 8.0),
            (common::day("2024-01-03"), 2, 5.0),
        ]
    );
}

#[tokio::test]
async fn test_stats_serialize_with_camel_case_keys() {
    let pool = common::test_pool().await;
    let stats = StatsRepo::expense_stats(&pool, common::day("2024-01-01"), common::day("2024-01-31"))
        .await
        .unwrap();

    let json = serde_json::to_value(&stats).unwrap();
    assert!(json["byCategory"].is_array());
    assert!(json["byDate"].is_array());
    assert_eq!(json["total"], 0.0);
}
