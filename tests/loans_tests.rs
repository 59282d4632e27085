//! Loan registry behavior tests

use std::fs;

use chrono::{Duration, Utc};
use lectern::error::AppError;
use lectern::repository::LoanStore;
use lectern::services::LoansService;
use tempfile::TempDir;

fn open_registry(dir: &TempDir, contents: &str) -> LoansService {
    let path = dir.path().join("loans.txt");
    fs::write(&path, contents).expect("Failed to seed loans store");
    LoansService::open(LoanStore::open(path).unwrap()).unwrap()
}

#[test]
fn lend_due_date_is_days_from_now() {
    let dir = TempDir::new().unwrap();
    let mut registry = open_registry(&dir, "");

    let due = registry.lend("Alice".into(), "111".into(), 7);
    let expected = Utc::now() + Duration::days(7);

    assert!((due - expected).num_seconds().abs() <= 5);
    assert_eq!(registry.list()[0].due_date, due);
}

#[test]
fn zero_and_negative_day_loans_are_permitted() {
    let dir = TempDir::new().unwrap();
    let mut registry = open_registry(&dir, "");

    let due_now = registry.lend("Alice".into(), "111".into(), 0);
    assert!((due_now - Utc::now()).num_seconds().abs() <= 5);

    let overdue = registry.lend("Bob".into(), "222".into(), -3);
    assert!(overdue < Utc::now());
    assert_eq!(registry.len(), 2);
}

#[test]
fn lend_does_not_check_the_catalog_or_prevent_double_lending() {
    let dir = TempDir::new().unwrap();
    let mut registry = open_registry(&dir, "");

    // Same pair twice, nonexistent ISBN: both always succeed.
    registry.lend("Alice".into(), "no-such-isbn".into(), 7);
    registry.lend("Alice".into(), "no-such-isbn".into(), 14);

    assert_eq!(registry.len(), 2);
}

#[test]
fn return_removes_only_the_first_match() {
    let dir = TempDir::new().unwrap();
    let mut registry = open_registry(&dir, "");

    registry.lend("Alice".into(), "111".into(), 7);
    let second_due = registry.lend("Alice".into(), "111".into(), 14);

    registry.return_loan("Alice", "111").unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.list()[0].due_date, second_due);

    registry.return_loan("Alice", "111").unwrap();
    let error = registry.return_loan("Alice", "111").unwrap_err();
    assert!(matches!(error, AppError::NotFound(_)));
}

#[test]
fn search_by_customer_is_exact_and_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let mut registry = open_registry(&dir, "");

    registry.lend("Alice".into(), "111".into(), 7);
    registry.lend("alice".into(), "222".into(), 7);
    registry.lend("Alice".into(), "333".into(), 7);

    let isbns: Vec<&str> = registry
        .search_by_customer("Alice")
        .into_iter()
        .map(|loan| loan.isbn.as_str())
        .collect();

    assert_eq!(isbns, vec!["111", "333"]);
    assert!(registry.search_by_customer("Ali").is_empty());
}

#[test]
fn list_keeps_registry_order() {
    let dir = TempDir::new().unwrap();
    let registry = open_registry(
        &dir,
        "Carol 333 1700000300\nAlice 111 1700000100\nBob 222 1700000200\n",
    );

    let customers: Vec<&str> = registry
        .list()
        .iter()
        .map(|loan| loan.customer_name.as_str())
        .collect();

    assert_eq!(customers, vec!["Carol", "Alice", "Bob"]);
}
