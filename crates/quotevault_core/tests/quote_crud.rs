use quotevault_core::{QuoteRepository, RepoError, SqliteQuoteRepository};

#[test]
fn add_and_get_roundtrip() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();

    let id = repo.add("Alice", "Hi").unwrap();

    assert_eq!(repo.get_quote(id).unwrap(), "Hi");
    let details = repo.get_details(id).unwrap();
    assert_eq!(details.author, "Alice");
    assert!(details.date > 0);
}

#[test]
fn add_increments_count_by_one() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();
    assert_eq!(repo.count(), 0);

    repo.add("Alice", "first").unwrap();
    assert_eq!(repo.count(), 1);

    repo.add("Bob", "second").unwrap();
    assert_eq!(repo.count(), 2);
}

#[test]
fn get_quote_missing_id_returns_not_found() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();

    let err = repo.get_quote(42).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}

#[test]
fn get_details_missing_id_returns_not_found() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();

    let err = repo.get_details(7).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(7)));
}

#[test]
fn edit_replaces_text_and_reports_missing_ids() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();
    let id = repo.add("Alice", "draft").unwrap();

    assert!(repo.edit(id, "final").unwrap());
    assert_eq!(repo.get_quote(id).unwrap(), "final");

    assert!(!repo.edit(id + 1, "nobody home").unwrap());
    assert_eq!(repo.get_quote(id).unwrap(), "final");
}

#[test]
fn edit_does_not_touch_count() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();
    let id = repo.add("Alice", "draft").unwrap();

    repo.edit(id, "final").unwrap();
    assert_eq!(repo.count(), 1);
}

#[test]
fn delete_decrements_count_and_removes_row() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();
    let id = repo.add("Alice", "gone soon").unwrap();
    assert_eq!(repo.count(), 1);

    assert!(repo.delete(id).unwrap());
    assert_eq!(repo.count(), 0);

    let err = repo.get_quote(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn delete_missing_id_returns_false_and_keeps_count() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();
    repo.add("Alice", "staying").unwrap();

    assert!(!repo.delete(999).unwrap());
    assert_eq!(repo.count(), 1);
}

#[test]
fn validation_failure_blocks_add_and_edit() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();

    let err = repo.add("", "text").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = repo.add("Alice", "   ").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let id = repo.add("Alice", "kept").unwrap();
    let err = repo.edit(id, "").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    assert_eq!(repo.get_quote(id).unwrap(), "kept");
    assert_eq!(repo.count(), 1);
}

#[test]
fn full_store_lifecycle() {
    let repo = SqliteQuoteRepository::open_in_memory().unwrap();
    assert_eq!(repo.count(), 0);

    let first = repo.add("Alice", "Hi").unwrap();
    assert_eq!(first, 1);
    assert_eq!(repo.count(), 1);

    let second = repo.add("Bob", "Yo").unwrap();
    assert_eq!(second, 2);
    assert_eq!(repo.count(), 2);

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second);
    assert_eq!(all[0].author, "Bob");
    assert_eq!(all[0].quote, "Yo");
    assert_eq!(all[1].id, first);
    assert_eq!(all[1].author, "Alice");
    assert_eq!(all[1].quote, "Hi");

    assert!(repo.delete(first).unwrap());
    assert_eq!(repo.count(), 1);

    assert!(repo.edit(second, "Yo!").unwrap());
    assert_eq!(repo.get_quote(second).unwrap(), "Yo!");
}
