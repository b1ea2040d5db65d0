//! Book management command handlers.

use super::commands::OutputFormat;
use lumina::{
    Book, GeminiClient, JsonError, JsonShelfStore, Library, LuminaConfig, LuminaResult, Shelf,
    ShelfStore,
};
use std::sync::Arc;
use uuid::Uuid;

/// Open the configured library with the Gemini driver attached.
///
/// Loads the shelf from disk and requeues any insight requests that were
/// interrupted, so callers see the same state the TUI would.
pub(crate) async fn open_library(config: &LuminaConfig) -> LuminaResult<Library<GeminiClient>> {
    let store = Arc::new(JsonShelfStore::new(config.shelf_path()?));
    let driver = Arc::new(GeminiClient::with_model(config.model())?);

    let mut library =
        Library::with_generation(store, driver, *config.temperature(), *config.max_tokens());
    library.initialize().await?;

    Ok(library)
}

/// Add a book and wait for its insight to settle.
///
/// Blank input is rejected without a message, matching the form.
pub async fn handle_add(title: &str, author: &str) -> LuminaResult<()> {
    let config = LuminaConfig::load()?;
    let mut library = open_library(&config).await?;

    let id = match library.add_book(title, author).await {
        Some(id) => id,
        None => return Ok(()),
    };

    println!("Added {} by {}", title.trim(), author.trim());
    println!("Generating insight...");
    library.wait_for_settlement(id).await;

    if let Some(book) = library.shelf().get(id) {
        print_book(book);
    }

    Ok(())
}

/// List the books on the shelf.
///
/// Reads the shelf file directly so no API key is needed to browse.
pub async fn handle_list(format: OutputFormat) -> LuminaResult<()> {
    let config = LuminaConfig::load()?;
    let store = JsonShelfStore::new(config.shelf_path()?);
    let books = store.load().await?;

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&books).map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            if books.is_empty() {
                println!("Your reading list is currently empty.");
                return Ok(());
            }

            println!("{:-<60}", "");
            for book in &books {
                print_book(book);
                println!("{:-<60}", "");
            }
            println!("Total: {} books", books.len());
        }
    }

    Ok(())
}

/// Remove a book by id.
pub async fn handle_remove(id: Uuid) -> LuminaResult<()> {
    let config = LuminaConfig::load()?;
    let store = JsonShelfStore::new(config.shelf_path()?);
    let mut shelf = Shelf::from(store.load().await?);

    match shelf.remove(id) {
        Some(book) => {
            store.save(shelf.books()).await?;
            println!("Removed {} by {}", book.title(), book.author());
        }
        None => {
            eprintln!("No book with id {}", id);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Print one book as a human-readable card.
fn print_book(book: &Book) {
    let category = book
        .category()
        .as_deref()
        .unwrap_or(if *book.is_generating() {
            "Analyzing..."
        } else {
            "Book"
        });

    println!("{} [{}]", book.title(), category);
    println!("  by {}", book.author());
    println!("  added {}", book.added_at().format("%Y-%m-%d %H:%M"));
    if let Some(insight) = book.insight() {
        println!("  {}", insight);
    }
    println!("  id {}", book.id());
}
