//! Category repository: create, read, patch, delete, default protection.

mod common;

use pocket_ledger_db::models::category::CategoryPatch;
use pocket_ledger_db::repositories::{CategoryRepo, ExpenseRepo};

#[tokio::test]
async fn test_create_category_is_never_default() {
    let pool = common::test_pool().await;

    let created = CategoryRepo::create(&pool, &common::new_category("Pets"))
        .await
        .unwrap();
    assert!(!created.is_default);
    assert_eq!(created.name, "Pets");

    let found = CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_list_orders_by_id() {
    let pool = common::test_pool().await;
    CategoryRepo::create(&pool, &common::new_category("Pets"))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &common::new_category("Gifts"))
        .await
        .unwrap();

    let ids: Vec<_> = CategoryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 8);
}

#[tokio::test]
async fn test_find_missing_category_returns_none() {
    let pool = common::test_pool().await;
    assert!(CategoryRepo::find_by_id(&pool, 999).await.unwrap().is_none());
    assert!(!CategoryRepo::exists(&pool, 999).await.unwrap());
    assert!(CategoryRepo::exists(&pool, 1).await.unwrap());
}

#[tokio::test]
async fn test_patch_updates_only_supplied_fields() {
    let pool = common::test_pool().await;
    let created = CategoryRepo::create(&pool, &common::new_category("Pets"))
        .await
        .unwrap();

    let patch = CategoryPatch {
        color: Some("#000000".to_string()),
        ..Default::default()
    };
    let updated = CategoryRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.color, "#000000");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.icon, created.icon);
    assert!(!updated.is_default);
}

#[tokio::test]
async fn test_default_category_can_be_renamed_but_stays_default() {
    let pool = common::test_pool().await;
    let patch = CategoryPatch {
        name: Some("Food".to_string()),
        ..Default::default()
    };
    let updated = CategoryRepo::update(&pool, 1, &patch).await.unwrap().unwrap();
    assert_eq!(updated.name, "Food");
    assert!(updated.is_default);
}

#[tokio::test]
async fn test_patch_missing_category_returns_none() {
    let pool = common::test_pool().await;
    let patch = CategoryPatch {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    assert!(CategoryRepo::update(&pool, 999, &patch).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_default_category_refused() {
    let pool = common::test_pool().await;

    for id in 1..=6 {
        assert!(!CategoryRepo::delete(&pool, id).await.unwrap());
        assert!(CategoryRepo::find_by_id(&pool, id).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn test_delete_user_category() {
    let pool = common::test_pool().await;
    let created = CategoryRepo::create(&pool, &common::new_category("Pets"))
        .await
        .unwrap();

    assert!(CategoryRepo::delete(&pool, created.id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!CategoryRepo::delete(&pool, created.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_referenced_category_is_foreign_key_violation() {
    let pool = common::test_pool().await;
    let created = CategoryRepo::create(&pool, &common::new_category("Pets"))
        .await
        .unwrap();
    ExpenseRepo::create(&pool, &common::new_expense(12.5, created.id, "2024-03-01"))
        .await
        .unwrap();

    let err = CategoryRepo::delete(&pool, created.id).await.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_foreign_key_violation());

    assert!(CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_some());
}
