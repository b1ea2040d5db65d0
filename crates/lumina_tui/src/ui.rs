//! UI rendering for TUI.

use crate::app::{App, AppMode};
use lumina_interface::InsightDriver;
use lumina_library::{DraftField, Library};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw<D: InsightDriver + 'static>(f: &mut Frame, app: &App, library: &Library<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Draw header
    draw_header(f, library, chunks[0]);

    // Draw main content based on mode
    match app.mode {
        AppMode::Browse => draw_browse_view(f, app, library, chunks[1]),
        AppMode::Insert => draw_insert_view(f, app, library, chunks[1]),
        AppMode::Detail => draw_detail_view(f, app, library, chunks[1]),
    }

    // Draw status bar
    draw_status_bar(f, app, chunks[2]);
}

/// Draw the header with the shelf count.
#[tracing::instrument(skip_all)]
fn draw_header<D: InsightDriver + 'static>(
    f: &mut Frame,
    library: &Library<D>,
    area: ratatui::layout::Rect,
) {
    let count = library.shelf().len();
    let title = format!(
        "Lumina Library - {} {}",
        count,
        if count == 1 { "Book" } else { "Books" }
    );
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let help_text = match app.mode {
        AppMode::Browse => "↑↓: Navigate | Enter: Detail | A: Add | D: Delete | Q: Quit",
        AppMode::Insert => "Tab: Switch Field | Enter: Add Book | Esc: Cancel",
        AppMode::Detail => "Esc: Back | Q: Quit",
    };

    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Draw the shelf as a table, newest book first.
#[tracing::instrument(skip_all)]
fn draw_browse_view<D: InsightDriver + 'static>(
    f: &mut Frame,
    app: &App,
    library: &Library<D>,
    area: ratatui::layout::Rect,
) {
    if library.shelf().is_empty() {
        let empty = Paragraph::new(
            "Your reading list is currently empty.\nPress a to add your first book.",
        )
        .block(Block::default().borders(Borders::ALL).title("Shelf"))
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Category", "Title", "Author", "Added", "Insight"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = library
        .shelf()
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let badge = book.category().clone().unwrap_or_else(|| {
                if *book.is_generating() {
                    String::from("Analyzing...")
                } else {
                    String::from("Book")
                }
            });

            let insight = if *book.is_generating() {
                String::from("Generating AI insights...")
            } else {
                book.insight().clone().unwrap_or_default()
            };

            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                badge,
                book.title().clone(),
                book.author().clone(),
                book.added_at().format("%Y-%m-%d").to_string(),
                insight,
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(30),
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Shelf"))
    .row_highlight_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(table, area);
}

/// Draw the add-book form.
#[tracing::instrument(skip_all)]
fn draw_insert_view<D: InsightDriver + 'static>(
    f: &mut Frame,
    app: &App,
    library: &Library<D>,
    area: ratatui::layout::Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    let focused = Style::default().fg(Color::Cyan);

    // Title field
    let title_block = Block::default().borders(Borders::ALL).title("Title");
    let title_block = if app.focus == DraftField::Title {
        title_block.border_style(focused)
    } else {
        title_block
    };
    let title_text = library.draft(DraftField::Title);
    let title = if title_text.is_empty() {
        Paragraph::new("The Midnight Library").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(title_text)
    }
    .block(title_block);
    f.render_widget(title, chunks[0]);

    // Author field
    let author_block = Block::default().borders(Borders::ALL).title("Author");
    let author_block = if app.focus == DraftField::Author {
        author_block.border_style(focused)
    } else {
        author_block
    };
    let author_text = library.draft(DraftField::Author);
    let author = if author_text.is_empty() {
        Paragraph::new("Matt Haig").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(author_text)
    }
    .block(author_block);
    f.render_widget(author, chunks[1]);

    // The form refuses a second submission while one is generating
    if library.is_submitting() {
        let submitting = Paragraph::new("Adding...").style(Style::default().fg(Color::Gray));
        f.render_widget(submitting, chunks[2]);
    }
}

/// Draw the full record for the selected book.
#[tracing::instrument(skip_all)]
fn draw_detail_view<D: InsightDriver + 'static>(
    f: &mut Frame,
    app: &App,
    library: &Library<D>,
    area: ratatui::layout::Rect,
) {
    if let Some(book) = library.shelf().books().get(app.selected_index) {
        let category = book.category().clone().unwrap_or_else(|| {
            if *book.is_generating() {
                String::from("Analyzing...")
            } else {
                String::from("Book")
            }
        });

        let insight = if *book.is_generating() {
            String::from("Generating AI insights...")
        } else {
            book.insight().clone().unwrap_or_default()
        };

        let details = vec![
            format!("Title: {}", book.title()),
            format!("Author: {}", book.author()),
            format!("Category: {}", category),
            format!("Added: {}", book.added_at().format("%Y-%m-%d %H:%M")),
            String::new(),
            String::from("Insight:"),
            insight,
        ];

        let detail = Paragraph::new(details.join("\n"))
            .block(Block::default().borders(Borders::ALL).title("Book Detail"))
            .wrap(ratatui::widgets::Wrap { trim: true });

        f.render_widget(detail, area);
    }
}
