//! Tests for the JSON file storage backend.

use lumina_core::{Book, BookInsight};
use lumina_storage::{JsonShelfStore, ShelfStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonShelfStore::new(temp_dir.path().join("books.json"));

    let mut settled = Book::new("Dune", "Frank Herbert");
    settled.settle(BookInsight::new("A spice-soaked epic.", "Science Fiction"));
    let pending = Book::new("Emma", "Jane Austen");
    let books = vec![pending, settled];

    store.save(&books).await.unwrap();
    let loaded = store.load().await.unwrap();

    // Everything round-trips, including optional fields and flags
    assert_eq!(loaded, books);
}

#[tokio::test]
async fn test_missing_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonShelfStore::new(temp_dir.path().join("books.json"));

    let loaded = store.load().await.unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_corrupt_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.json");
    tokio::fs::write(&path, "not json at all {{{").await.unwrap();

    let store = JsonShelfStore::new(&path);
    let loaded = store.load().await.unwrap();

    // Corruption is tolerated, not fatal
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("deeper").join("books.json");
    let store = JsonShelfStore::new(&path);

    store.save(&[Book::new("Dune", "Frank Herbert")]).await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_save_replaces_previous_contents() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonShelfStore::new(temp_dir.path().join("books.json"));

    store
        .save(&[
            Book::new("Dune", "Frank Herbert"),
            Book::new("Emma", "Jane Austen"),
        ])
        .await
        .unwrap();
    store.save(&[Book::new("Ubik", "Philip K. Dick")]).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title(), "Ubik");
}

#[tokio::test]
async fn test_order_is_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonShelfStore::new(temp_dir.path().join("books.json"));

    let books = vec![
        Book::new("Ubik", "Philip K. Dick"),
        Book::new("Emma", "Jane Austen"),
        Book::new("Dune", "Frank Herbert"),
    ];
    store.save(&books).await.unwrap();

    let loaded = store.load().await.unwrap();
    let titles: Vec<_> = loaded.iter().map(|book| book.title().as_str()).collect();
    assert_eq!(titles, vec!["Ubik", "Emma", "Dune"]);
}

#[tokio::test]
async fn test_on_disk_shape() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.json");
    let store = JsonShelfStore::new(&path);

    let book = Book::new("Dune", "Frank Herbert");
    let added_at_millis = book.added_at().timestamp_millis();
    store.save(&[book]).await.unwrap();

    // The file is a bare array of camelCase records with millisecond timestamps
    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["addedAt"].as_i64(), Some(added_at_millis));
    assert!(records[0]["isGenerating"].as_bool().unwrap());

    // No temp file is left behind after a save
    assert!(!path.with_extension("tmp").exists());
}
