//! Application state for mode management and UI context.

use reelshelf_core::Movie;

/// Main menu entries, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    AddMovie,
    DisplayMovies,
    AddTvSeries,
    DisplayTvSeries,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::AddMovie,
        MenuItem::DisplayMovies,
        MenuItem::AddTvSeries,
        MenuItem::DisplayTvSeries,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::AddMovie => "1) ADD MOVIE",
            MenuItem::DisplayMovies => "2) DISPLAY MOVIES",
            MenuItem::AddTvSeries => "3) ADD TV SERIES",
            MenuItem::DisplayTvSeries => "4) DISPLAY TV SERIES",
            MenuItem::Exit => "5) EXIT",
        }
    }
}

/// Selection state of the main menu. Navigation wraps.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn up(&mut self) {
        self.selected = if self.selected == 0 {
            MenuItem::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }

    pub fn item(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }
}

/// Highlight and scroll position of the movie list browser.
///
/// `highlight` is an absolute store index; `offset` is the first
/// visible row. The invariant `offset <= highlight < offset + page`
/// is restored by every movement.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListCursor {
    pub highlight: usize,
    pub offset: usize,
}

impl ListCursor {
    pub fn up(&mut self) {
        if self.highlight > 0 {
            self.highlight -= 1;
        }
        if self.highlight < self.offset {
            self.offset = self.highlight;
        }
    }

    pub fn down(&mut self, count: usize, page: usize) {
        if self.highlight + 1 < count {
            self.highlight += 1;
        }
        if self.highlight >= self.offset + page {
            self.offset = self.highlight + 1 - page;
        }
    }

    /// Move the highlight to `index` and scroll it into view.
    pub fn jump_to(&mut self, index: usize, count: usize, page: usize) {
        self.highlight = index;
        self.clamp(count, page);
    }

    /// Re-establish the invariants after the list shrank or grew.
    pub fn clamp(&mut self, count: usize, page: usize) {
        if count == 0 {
            self.highlight = 0;
            self.offset = 0;
            return;
        }
        if self.highlight >= count {
            self.highlight = count - 1;
        }
        if self.offset > self.highlight {
            self.offset = self.highlight;
        }
        if self.highlight >= self.offset + page {
            self.offset = self.highlight + 1 - page;
        }
    }
}

/// Which screen a dismissed popup returns to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackTo {
    Menu,
    List,
}

/// A modal info/warning dialog. Any key dismisses it.
#[derive(Clone, Debug)]
pub struct PopupState {
    pub title: String,
    pub message: String,
    pub back: BackTo,
}

impl PopupState {
    pub fn new(title: impl Into<String>, message: impl Into<String>, back: BackTo) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            back,
        }
    }
}

/// Fields of the add/edit form, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Director,
    Year,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Director => "Director",
            FormField::Year => "Year",
        }
    }
}

/// Whether the form creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(usize),
}

/// Field-by-field input form for adding or editing a movie.
#[derive(Clone, Debug)]
pub struct FormState {
    pub target: FormTarget,
    pub title: String,
    pub director: String,
    pub year: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl FormState {
    pub fn create() -> Self {
        Self {
            target: FormTarget::Create,
            title: String::new(),
            director: String::new(),
            year: String::new(),
            focus: FormField::Title,
            error: None,
        }
    }

    /// Edit form pre-filled from the record at `index`.
    pub fn edit(index: usize, movie: &Movie) -> Self {
        Self {
            target: FormTarget::Edit(index),
            title: movie.title().to_string(),
            director: movie.director().to_string(),
            year: movie.year().to_string(),
            focus: FormField::Title,
            error: None,
        }
    }

    /// The text buffer of the focused field.
    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Director => &mut self.director,
            FormField::Year => &mut self.year,
        }
    }
}

/// Rating prompt for the highlighted movie. Invalid keystrokes keep
/// the prompt open with an inline error so the user can retry.
#[derive(Clone, Debug)]
pub struct RateState {
    pub index: usize,
    pub error: Option<String>,
}

/// Exact-title search prompt.
#[derive(Clone, Debug, Default)]
pub struct FindState {
    pub query: String,
}

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug)]
pub enum AppMode {
    /// Main menu.
    Menu,
    /// Paginated movie list browser.
    MovieList,
    /// Add or edit form (full screen).
    MovieForm(FormState),
    /// Rating prompt over the list.
    RatePrompt(RateState),
    /// Delete confirmation over the list.
    ConfirmDelete { index: usize },
    /// Title search prompt over the list.
    FindPrompt(FindState),
    /// Modal message dialog over the menu or the list.
    Popup(PopupState),
}
