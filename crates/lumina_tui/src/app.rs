//! Application state and core TUI types.

use lumina_library::DraftField;

/// Application mode determines which view is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Browse view - scroll through the shelf
    Browse,
    /// Insert view - type a new title and author
    Insert,
    /// Detail view - full insight for a single book
    Detail,
}

/// Main application state.
///
/// Holds only presentation state. The shelf and the draft form live in
/// the library, which the runner threads through to the draw functions.
pub struct App {
    /// Current mode
    pub mode: AppMode,
    /// Currently selected index in the shelf
    pub selected_index: usize,
    /// Form field receiving typed characters in Insert mode
    pub focus: DraftField,
    /// Status message to display
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance with empty state.
    pub fn new() -> Self {
        Self {
            mode: AppMode::Browse,
            selected_index: 0,
            focus: DraftField::Title,
            status_message: String::from("Press a to add a book"),
            should_quit: false,
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self, shelf_len: usize) {
        if self.selected_index < shelf_len.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keep the selection on the shelf after books are added or removed.
    pub fn clamp_selection(&mut self, shelf_len: usize) {
        if shelf_len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= shelf_len {
            self.selected_index = shelf_len - 1;
        }
    }

    /// Enter the add-book form.
    pub fn enter_insert(&mut self) {
        self.mode = AppMode::Insert;
        self.focus = DraftField::Title;
    }

    /// Enter detail view for the selected book.
    pub fn enter_detail(&mut self, shelf_len: usize) {
        if shelf_len > 0 {
            self.mode = AppMode::Detail;
        }
    }

    /// Return to the browse view.
    pub fn return_to_browse(&mut self) {
        self.mode = AppMode::Browse;
        self.focus = DraftField::Title;
    }

    /// Switch focus between the title and author fields.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DraftField::Title => DraftField::Author,
            DraftField::Author => DraftField::Title,
        };
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = App::new();
        app.select_previous();
        assert_eq!(app.selected_index, 0);

        app.select_next(3);
        app.select_next(3);
        app.select_next(3);
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_clamp_after_delete() {
        let mut app = App::new();
        app.selected_index = 4;
        app.clamp_selection(3);
        assert_eq!(app.selected_index, 2);

        app.clamp_selection(0);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_detail_requires_a_book() {
        let mut app = App::new();
        app.enter_detail(0);
        assert_eq!(app.mode, AppMode::Browse);

        app.enter_detail(1);
        assert_eq!(app.mode, AppMode::Detail);
    }

    #[test]
    fn test_insert_focus_cycle() {
        let mut app = App::new();
        app.enter_insert();
        assert_eq!(app.mode, AppMode::Insert);
        assert_eq!(app.focus, DraftField::Title);

        app.toggle_focus();
        assert_eq!(app.focus, DraftField::Author);
        app.toggle_focus();
        assert_eq!(app.focus, DraftField::Title);
    }

    #[test]
    fn test_return_to_browse_resets_focus() {
        let mut app = App::new();
        app.enter_insert();
        app.toggle_focus();
        app.return_to_browse();
        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.focus, DraftField::Title);
    }
}
