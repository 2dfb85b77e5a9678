mod mocks;

use mocks::MockContactStore;
use rolodex::error::ImportError;
use rolodex::repositories::{ContactStore, MemoryContactStore};
use rolodex::{Importer, Region, UserId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

fn owner() -> UserId {
    UserId::new("user_1").unwrap()
}

fn importer(store: Arc<dyn ContactStore>) -> Importer {
    Importer::new(store, Region::US)
}

/// Write a throwaway file and return its path; caller removes it.
fn temp_file(name_suffix: &str, contents: &str) -> std::path::PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut path = std::env::temp_dir();
    path.push(format!(
        "rolodex_import_{}_{}_{}",
        std::process::id(),
        unique,
        name_suffix
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

const HEADER: &str = "First Name\tLast Name\tEmail\tPhone\tCompany";

#[tokio::test]
async fn test_non_tsv_extension_fails_fast_with_zero_saves() {
    let store = Arc::new(MockContactStore::new());
    let importer = importer(store.clone());

    let lines = vec![HEADER, "John\tDoe\tj@d.co\t\tAcme"];
    let err = importer
        .import_lines(&owner(), "contacts.csv", lines)
        .await
        .unwrap_err();

    assert!(matches!(err, ImportError::InvalidFileType(_)));
    assert_eq!(store.call_count("insert_unique"), 0);
}

#[tokio::test]
async fn test_extension_check_is_case_insensitive() {
    let store = Arc::new(MemoryContactStore::new()) as Arc<dyn ContactStore>;
    let importer = importer(store);

    let lines = vec![HEADER, "John\tDoe\tj@d.co\t\tAcme"];
    let report = importer
        .import_lines(&owner(), "Contacts.TSV", lines)
        .await
        .unwrap();
    assert_eq!(report.imported, 1);
}

#[tokio::test]
async fn test_missing_file_is_file_read_error() {
    let store = Arc::new(MemoryContactStore::new()) as Arc<dyn ContactStore>;
    let importer = importer(store);

    let err = importer
        .import_path(&owner(), "/nonexistent/contacts.tsv")
        .await
        .unwrap_err();
    assert!(matches!(err, ImportError::FileRead(_)));
}

#[tokio::test]
async fn test_header_only_file_imports_nothing() {
    let store = Arc::new(MemoryContactStore::new()) as Arc<dyn ContactStore>;
    let importer = importer(store);

    let report = importer
        .import_lines(&owner(), "contacts.tsv", vec![HEADER])
        .await
        .unwrap();
    assert_eq!(report.imported, 0);
    assert!(report.is_success());
}

#[tokio::test]
async fn test_duplicate_row_recorded_and_batch_continues() {
    let store = Arc::new(MemoryContactStore::new());
    let importer = importer(store.clone() as Arc<dyn ContactStore>);

    let lines = vec![
        HEADER,
        "John\tDoe\tjohn@example.com\t\tAcme",
        "John\tDoe\tjohn@example.com\t\tAcme",
        "Jane\tDoe\tjane@example.com\t\tAcme",
    ];
    let report = importer
        .import_lines(&owner(), "contacts.tsv", lines)
        .await
        .unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.row_errors.len(), 1);
    assert_eq!(report.row_errors[0].row, 2);
    assert_eq!(
        report.row_errors[0].errors,
        vec!["A duplicate entry for this contact already exists".to_string()]
    );
    assert_eq!(store.count_for_user(&owner()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_validation_failure_records_messages_and_raw_data() {
    let store = Arc::new(MemoryContactStore::new()) as Arc<dyn ContactStore>;
    let importer = importer(store);

    let lines = vec![HEADER, "\t\t\t\t", "John\tDoe\tnot-an-email\t\t"];
    let report = importer
        .import_lines(&owner(), "contacts.tsv", lines)
        .await
        .unwrap();

    assert_eq!(report.imported, 0);
    assert_eq!(report.row_errors.len(), 2);

    let all_blank = &report.row_errors[0];
    assert_eq!(all_blank.row, 1);
    assert_eq!(all_blank.errors.len(), 2);
    assert!(all_blank.errors[0].contains("first name, last name or company"));
    assert!(all_blank.errors[1].contains("phone number or email"));

    let bad_email = &report.row_errors[1];
    assert_eq!(bad_email.row, 2);
    assert_eq!(bad_email.errors, vec!["Email address must be valid".to_string()]);
    assert_eq!(bad_email.data, Some("John\tDoe\tnot-an-email\t\t".to_string()));
}

#[tokio::test]
async fn test_short_line_rejected_with_field_count_error() {
    let store = Arc::new(MemoryContactStore::new()) as Arc<dyn ContactStore>;
    let importer = importer(store);

    let lines = vec![HEADER, "John\tDoe"];
    let report = importer
        .import_lines(&owner(), "contacts.tsv", lines)
        .await
        .unwrap();

    assert_eq!(report.row_errors.len(), 1);
    assert_eq!(
        report.row_errors[0].errors,
        vec!["Expected 5 tab-separated fields, found 2".to_string()]
    );
    assert_eq!(report.row_errors[0].data, Some("John\tDoe".to_string()));
}

#[tokio::test]
async fn test_unexpected_row_failure_does_not_abort_batch() {
    let store = Arc::new(MockContactStore::failing_on_company("BOOM"));
    let importer = importer(store.clone());

    let lines = vec![
        HEADER,
        "John\tDoe\tjohn@example.com\t\t",
        "Jane\tDoe\tjane@example.com\t\tBOOM",
        "Jim\tDoe\tjim@example.com\t\t",
    ];
    let report = importer
        .import_lines(&owner(), "contacts.tsv", lines)
        .await
        .unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.row_errors.len(), 1);
    assert_eq!(report.row_errors[0].row, 2);
    assert_eq!(
        report.row_errors[0].errors,
        vec!["An unexpected error has occurred while processing this line".to_string()]
    );
    // All three rows reached the store.
    assert_eq!(store.call_count("insert_unique"), 3);
}

#[tokio::test]
async fn test_import_path_round_trip() {
    let store = Arc::new(MemoryContactStore::new());
    let importer = importer(store.clone() as Arc<dyn ContactStore>);

    let contents = format!(
        "{}\nJohn\tDoe\tjohn@example.com\t(415) 555-2671\tAcme\nJane\t\t\t+44 20 7946 0958\t\n",
        HEADER
    );
    let path = temp_file("contacts.tsv", &contents);

    let report = importer.import_path(&owner(), &path).await.unwrap();
    std::fs::remove_file(&path).ok();

    assert!(report.is_success());
    assert_eq!(report.imported, 2);

    let contacts = store.list_for_user(&owner()).await.unwrap();
    assert_eq!(contacts[0].phone, Some("+14155552671".to_string()));
    assert!(!contacts[0].international);
    assert_eq!(contacts[1].phone, Some("+442079460958".to_string()));
    assert!(contacts[1].international);
}

#[tokio::test]
async fn test_concurrent_imports_yield_single_copy_per_tuple() {
    let store = Arc::new(MemoryContactStore::new());
    let lines = [
        HEADER,
        "John\tDoe\tjohn@example.com\t\tAcme",
        "Jane\tDoe\tjane@example.com\t\tAcme",
    ];

    let mut handles = Vec::new();
    for _ in 0..2 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let importer = Importer::new(store as Arc<dyn ContactStore>, Region::US);
            importer
                .import_lines(&owner(), "contacts.tsv", lines.to_vec())
                .await
                .unwrap()
        }));
    }

    let mut imported = 0;
    let mut duplicates = 0;
    for handle in handles {
        let report = handle.await.unwrap();
        imported += report.imported;
        for row_error in &report.row_errors {
            assert_eq!(
                row_error.errors,
                vec!["A duplicate entry for this contact already exists".to_string()]
            );
            duplicates += 1;
        }
    }

    // Exactly one copy of each tuple persisted; every other attempt was
    // recovered as a duplicate row error.
    assert_eq!(imported, 2);
    assert_eq!(duplicates, 2);
    assert_eq!(store.count_for_user(&owner()).await.unwrap(), 2);
}
