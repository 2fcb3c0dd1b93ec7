//! Glue code tying the record store, the codec, and the terminal UI together.
//!
//! `CatalogApp` is a synchronous state machine: one blocking event
//! loop reads keystrokes, mutates the store through its API, and
//! redraws. The catalog is loaded once at startup and written back
//! when the user quits with unsaved changes.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use reelshelf_core::{Confirmation, DeleteOutcome, Movie, MovieStore, StoreError, codec};

use crate::config::CliConfig;
use crate::input::{self, ListCommand, MenuCommand, PromptCommand, TextCommand};
use crate::presentation::{
    terminal::{self, Tui},
    ui::{self, RenderContext},
};
use crate::state::{
    AppMode, BackTo, FindState, FormField, FormState, FormTarget, ListCursor, MenuItem, MenuState,
    PopupState, RateState,
};

pub struct CatalogApp {
    config: CliConfig,
    store: MovieStore,
    mode: AppMode,
    menu: MenuState,
    cursor: ListCursor,
    /// Set by any successful mutation; cleared only by the exit save.
    dirty: bool,
}

impl CatalogApp {
    /// Build the application and load the catalog from disk.
    ///
    /// A missing or unreadable catalog file is the first-run state and
    /// never fails construction.
    pub fn new(config: CliConfig) -> Self {
        let mut store = MovieStore::default();
        match codec::load(&config.catalog_file, &mut store) {
            Ok(count) => tracing::info!(count, "catalog ready"),
            Err(err) => tracing::warn!(%err, "could not read catalog; starting empty"),
        }

        Self::with_store(config, store)
    }

    fn with_store(config: CliConfig, store: MovieStore) -> Self {
        Self {
            config,
            store,
            mode: AppMode::Menu,
            menu: MenuState::default(),
            cursor: ListCursor::default(),
            dirty: false,
        }
    }

    /// Run the blocking menu loop until the user quits, then persist.
    pub fn run(mut self) -> Result<()> {
        tracing::info!("catalog UI starting");

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard;

        let loop_result = self.event_loop(&mut terminal);

        // Leave the alternate screen before touching the filesystem so
        // any save diagnostics land on a usable terminal.
        drop(guard);

        let save_result = if self.dirty {
            codec::save(&self.config.catalog_file, &self.store).map_err(anyhow::Error::from)
        } else {
            Ok(())
        };

        loop_result.and(save_result)
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            self.draw(terminal)?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(&key) {
                        break;
                    }
                }
                // Resize and everything else redraw on the next pass.
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            store: &self.store,
            mode: &self.mode,
            menu: &self.menu,
            cursor: &self.cursor,
            page_size: self.config.ui.page_size,
        };
        terminal.draw(|frame| ui::render(frame, &ctx))?;
        Ok(())
    }

    /// Dispatch a key press to the handler for the current mode.
    /// Returns `true` when the application should quit.
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match &self.mode {
            AppMode::Menu => self.handle_menu_key(key),
            AppMode::MovieList => {
                self.handle_list_key(key);
                false
            }
            AppMode::MovieForm(_) => {
                self.handle_form_key(key);
                false
            }
            AppMode::RatePrompt(_) => {
                self.handle_rate_key(key);
                false
            }
            AppMode::ConfirmDelete { .. } => {
                self.handle_confirm_key(key);
                false
            }
            AppMode::FindPrompt(_) => {
                self.handle_find_key(key);
                false
            }
            AppMode::Popup(_) => {
                self.handle_popup_key();
                false
            }
        }
    }

    fn handle_menu_key(&mut self, key: &KeyEvent) -> bool {
        match input::menu_command(key) {
            MenuCommand::Up => self.menu.up(),
            MenuCommand::Down => self.menu.down(),
            MenuCommand::Quit => return true,
            MenuCommand::Select => return self.select_menu_item(),
            MenuCommand::None => {}
        }
        false
    }

    fn select_menu_item(&mut self) -> bool {
        match self.menu.item() {
            MenuItem::AddMovie => self.mode = AppMode::MovieForm(FormState::create()),
            MenuItem::DisplayMovies => {
                if self.store.is_empty() {
                    self.popup("WARNING", "No movies to display!", BackTo::Menu);
                } else {
                    self.cursor.clamp(self.store.len(), self.page());
                    self.mode = AppMode::MovieList;
                }
            }
            MenuItem::AddTvSeries | MenuItem::DisplayTvSeries => {
                self.popup(
                    "INFO",
                    "TV series support is not implemented yet.",
                    BackTo::Menu,
                );
            }
            MenuItem::Exit => return true,
        }
        false
    }

    fn handle_list_key(&mut self, key: &KeyEvent) {
        let page = self.page();
        match input::list_command(key) {
            ListCommand::Up => self.cursor.up(),
            ListCommand::Down => self.cursor.down(self.store.len(), page),
            ListCommand::Back => self.mode = AppMode::Menu,
            ListCommand::Sort => {
                self.store.sort_by_title();
                self.dirty = true;
            }
            ListCommand::Rate => {
                if !self.store.is_empty() {
                    self.mode = AppMode::RatePrompt(RateState {
                        index: self.cursor.highlight,
                        error: None,
                    });
                }
            }
            ListCommand::Delete => {
                if !self.store.is_empty() {
                    self.mode = AppMode::ConfirmDelete {
                        index: self.cursor.highlight,
                    };
                }
            }
            ListCommand::Edit => {
                if let Some(movie) = self.store.get(self.cursor.highlight) {
                    self.mode = AppMode::MovieForm(FormState::edit(self.cursor.highlight, movie));
                }
            }
            ListCommand::Find => self.mode = AppMode::FindPrompt(FindState::default()),
            ListCommand::None => {}
        }
    }

    fn handle_form_key(&mut self, key: &KeyEvent) {
        let AppMode::MovieForm(form) = &mut self.mode else {
            return;
        };

        match input::text_command(key) {
            TextCommand::Insert(ch) => {
                form.field_mut().push(ch);
                form.error = None;
            }
            TextCommand::Backspace => {
                form.field_mut().pop();
            }
            TextCommand::Cancel => {
                let target = form.target;
                self.mode = match target {
                    FormTarget::Create => AppMode::Menu,
                    FormTarget::Edit(_) => AppMode::MovieList,
                };
            }
            TextCommand::Submit => self.submit_form(),
            TextCommand::None => {}
        }
    }

    /// Advance the form focus, validating the field just completed.
    fn submit_form(&mut self) {
        let AppMode::MovieForm(form) = &mut self.mode else {
            return;
        };

        match form.focus {
            FormField::Title => {
                if form.title.trim().is_empty() {
                    form.error = Some("Title cannot be blank.".to_string());
                } else {
                    form.focus = FormField::Director;
                    form.error = None;
                }
            }
            FormField::Director => {
                if form.director.trim().is_empty() {
                    form.error = Some("Director cannot be blank.".to_string());
                } else {
                    form.focus = FormField::Year;
                    form.error = None;
                }
            }
            FormField::Year => self.commit_form(),
        }
    }

    /// Validate the whole form and apply it to the store.
    fn commit_form(&mut self) {
        let AppMode::MovieForm(form) = &self.mode else {
            return;
        };
        let target = form.target;
        let title = form.title.trim().to_string();
        let director = form.director.trim().to_string();
        let year_text = form.year.trim().to_string();

        let result = match year_text.parse::<i32>() {
            Err(_) => Err("Year must be a whole number.".to_string()),
            Ok(year) => match target {
                FormTarget::Create => Movie::new(title, director, year)
                    .map(|movie| {
                        let index = self.store.insert(movie);
                        tracing::info!(index, "added movie");
                    })
                    .map_err(|err| err.to_string()),
                FormTarget::Edit(index) => self
                    .store
                    .update_at(index, title, director, year)
                    .map_err(|err| err.to_string()),
            },
        };

        match result {
            Ok(()) => {
                self.dirty = true;
                let (message, back) = match target {
                    FormTarget::Create => ("Movie added to the catalog.", BackTo::Menu),
                    FormTarget::Edit(_) => ("Movie updated.", BackTo::List),
                };
                self.cursor.clamp(self.store.len(), self.page());
                self.popup("INFO", message, back);
            }
            Err(message) => {
                if let AppMode::MovieForm(form) = &mut self.mode {
                    form.error = Some(message);
                }
            }
        }
    }

    fn handle_rate_key(&mut self, key: &KeyEvent) {
        let AppMode::RatePrompt(rate) = &mut self.mode else {
            return;
        };
        let index = rate.index;

        match input::prompt_command(key) {
            PromptCommand::Cancel => self.mode = AppMode::MovieList,
            PromptCommand::Key(ch) => match self.store.rate_at(index, ch) {
                Ok(()) => {
                    self.dirty = true;
                    tracing::info!(index, "rated movie");
                    self.popup("INFO", "Rating saved.", BackTo::List);
                }
                Err(StoreError::InvalidRating(_)) => {
                    rate.error = Some("Invalid rating. Please try again.".to_string());
                }
                Err(err) => self.popup("WARNING", err.to_string(), BackTo::List),
            },
            PromptCommand::None => {}
        }
    }

    fn handle_confirm_key(&mut self, key: &KeyEvent) {
        let AppMode::ConfirmDelete { index } = &self.mode else {
            return;
        };
        let index = *index;

        match input::prompt_command(key) {
            PromptCommand::Cancel => self.mode = AppMode::MovieList,
            PromptCommand::Key(ch) => {
                let confirmation = Confirmation::from_char(ch);
                match self.store.delete_at(index, confirmation) {
                    Ok(DeleteOutcome::Deleted) => {
                        self.dirty = true;
                        self.cursor.clamp(self.store.len(), self.page());
                        tracing::info!(index, "deleted movie");
                        self.popup("INFO", "Movie deleted successfully!", BackTo::List);
                    }
                    Ok(DeleteOutcome::Cancelled) => {
                        let message = if confirmation == Confirmation::No {
                            "Deletion canceled."
                        } else {
                            "Invalid input. Deletion canceled."
                        };
                        self.popup("INFO", message, BackTo::List);
                    }
                    Err(err) => self.popup("WARNING", err.to_string(), BackTo::List),
                }
            }
            PromptCommand::None => {}
        }
    }

    fn handle_find_key(&mut self, key: &KeyEvent) {
        let AppMode::FindPrompt(find) = &mut self.mode else {
            return;
        };

        match input::text_command(key) {
            TextCommand::Insert(ch) => find.query.push(ch),
            TextCommand::Backspace => {
                find.query.pop();
            }
            TextCommand::Cancel => self.mode = AppMode::MovieList,
            TextCommand::Submit => {
                let query = find.query.trim().to_string();
                if query.is_empty() {
                    self.mode = AppMode::MovieList;
                } else if let Some((index, _)) = self.store.find_by_title(&query) {
                    let (count, page) = (self.store.len(), self.page());
                    self.cursor.jump_to(index, count, page);
                    self.mode = AppMode::MovieList;
                } else {
                    self.popup(
                        "WARNING",
                        format!("No movie titled \"{query}\"."),
                        BackTo::List,
                    );
                }
            }
            TextCommand::None => {}
        }
    }

    fn handle_popup_key(&mut self) {
        let AppMode::Popup(popup) = &self.mode else {
            return;
        };
        let back = popup.back;

        self.mode = match back {
            BackTo::Menu => AppMode::Menu,
            // The list may have emptied out underneath the popup.
            BackTo::List if self.store.is_empty() => AppMode::Menu,
            BackTo::List => AppMode::MovieList,
        };
    }

    fn popup(&mut self, title: &str, message: impl Into<String>, back: BackTo) {
        self.mode = AppMode::Popup(PopupState::new(title, message, back));
    }

    fn page(&self) -> usize {
        self.config.ui.page_size
    }
}
