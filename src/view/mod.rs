//! TUI rendering and terminal management (impure shell)

mod card_list;
pub mod constants;
mod detail;
mod help;
mod layout;
mod search_input;
mod styles;

pub use card_list::{fit_width, CardList};
pub use detail::DetailPanel;
pub use help::render_help_overlay;
pub use layout::render_layout;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, ListStyles, MUTED_TEXT, SECTION_HEADER};

use crate::config::{ConfigError, KeyBindings, ResolvedConfig};
use crate::model::{KeyAction, SourceError};
use crate::source::{HttpCharacterSource, PageFetcher, PageRequest};
use crate::state::search::{
    activate_search_input, handle_backspace, handle_char_input, handle_cursor_left,
    handle_cursor_right,
};
use crate::state::{handle_selection_action, AppState, SearchState};
use constants::TICK_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Character source could not be built
    #[error("Character source error: {0}")]
    Source(#[from] SourceError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    fetcher: PageFetcher,
    key_bindings: KeyBindings,
    styles: ListStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        fetcher: PageFetcher,
        styles: ListStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app_state,
            fetcher,
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Page completions are picked up
    /// on every tick; the screen is redrawn only when something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let tick = Duration::from_millis(TICK_INTERVAL_MS);

        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.poll_completions();

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Kick off the first page load.
    pub fn start(&mut self) {
        let request = self.app_state.initialize();
        self.dispatch(request);
    }

    fn dispatch(&self, request: Option<PageRequest>) {
        if let Some(request) = request {
            self.fetcher.dispatch(request);
        }
    }

    /// Apply finished page loads and pending controller events.
    ///
    /// Returns true if anything changed.
    fn poll_completions(&mut self) -> bool {
        let completions = self.fetcher.poll();
        let mut changed = !completions.is_empty();
        for completion in completions {
            self.app_state.apply_completion(completion);
        }
        changed |= self.app_state.drain_events();
        changed
    }

    /// Handle a key while the search bar is open.
    ///
    /// Returns false if the key is not a search-editing key.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let search = std::mem::take(&mut self.app_state.search);
        let (search, edited) = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                (handle_char_input(search, ch), true)
            }
            KeyCode::Backspace => (handle_backspace(search), true),
            KeyCode::Left => (handle_cursor_left(search), false),
            KeyCode::Right => (handle_cursor_right(search), false),
            KeyCode::Enter => (SearchState::Inactive, false),
            KeyCode::Esc => {
                self.app_state.set_search_term("");
                (SearchState::Inactive, false)
            }
            _ => {
                self.app_state.search = search;
                return false;
            }
        };

        if edited {
            let term = search.query().unwrap_or_default().to_string();
            self.app_state.set_search_term(term);
        }
        self.app_state.search = search;
        true
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        if self.app_state.search.is_typing() && self.handle_search_key(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        match action {
            KeyAction::Quit => return true,

            KeyAction::Help => {
                self.app_state.help_visible = !self.app_state.help_visible;
            }

            KeyAction::ToggleFavorite => {
                if let Some(id) = self.app_state.toggle_selected_favorite() {
                    debug!(%id, "Toggled favorite");
                }
            }

            KeyAction::ToggleFavoritesOnly => {
                self.app_state.toggle_favorites_only();
            }

            KeyAction::StartSearch => {
                let term = self.app_state.controller().filter().search_term.clone();
                let search = std::mem::take(&mut self.app_state.search);
                self.app_state.search = activate_search_input(search, &term);
            }

            KeyAction::ClearSearch => {
                if !self.app_state.controller().filter().search_term.is_empty() {
                    self.app_state.set_search_term("");
                }
            }

            navigation if navigation.is_navigation() => {
                let rows = self.app_state.viewport_rows;
                let request = handle_selection_action(&mut self.app_state, navigation, rows);
                self.dispatch(request);
            }

            _ => {}
        }

        false
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        self.app_state.viewport_rows =
            layout::list_viewport_rows(area, self.app_state.search.is_typing());

        let state = &self.app_state;
        let styles = self.styles;
        self.terminal
            .draw(|frame| layout::render_layout(frame, state, styles))?;

        Ok(())
    }
}

/// Initialize and run the TUI application from resolved configuration
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: ResolvedConfig) -> Result<(), TuiError> {
    config.validate()?;

    let source = HttpCharacterSource::new(&config.api_base_url, config.request_timeout)?;
    let fetcher = PageFetcher::new(Arc::new(source));
    let styles = ListStyles::with_color_config(ColorConfig::from_env_and_args(config.no_color));

    let mut app_state = AppState::new();
    if !config.search_term.is_empty() {
        app_state.set_search_term(config.search_term.clone());
    }
    if config.favorites_only {
        app_state.toggle_favorites_only();
    }

    let mut app = match TuiApp::new(app_state, fetcher, styles) {
        Ok(app) => app,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e);
        }
    };

    info!(api = %config.api_base_url, "Starting character list");
    app.start();

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Character, CharacterPage, PageCursor};
    use crate::source::CharacterSource;
    use ratatui::backend::TestBackend;

    const PAGE_SIZE: u64 = 5;

    /// Serves `PAGE_SIZE` characters per page; every third one is a Rick.
    struct FakeSource;

    impl CharacterSource for FakeSource {
        fn get_characters(&self, page: PageCursor) -> Result<CharacterPage, SourceError> {
            let first = (u64::from(page.get()) - 1) * PAGE_SIZE + 1;
            let results = (first..first + PAGE_SIZE)
                .map(|id| {
                    let name = if id % 3 == 0 { "Rick" } else { "Morty" };
                    Character::new(id, format!("{name} {id}"))
                })
                .collect();
            Ok(CharacterPage::from_results(results))
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn char_key(ch: char) -> KeyEvent {
        key(KeyCode::Char(ch))
    }

    fn create_test_app() -> TuiApp<TestBackend> {
        TuiApp {
            terminal: Terminal::new(TestBackend::new(80, 24)).unwrap(),
            app_state: AppState::new(),
            fetcher: PageFetcher::new(Arc::new(FakeSource)),
            key_bindings: KeyBindings::default(),
            styles: ListStyles::default(),
        }
    }

    /// Apply completions until no load is in flight.
    fn settle(app: &mut TuiApp<TestBackend>) {
        while app.app_state.controller().is_loading() {
            let completion = app
                .fetcher
                .wait(Duration::from_secs(5))
                .expect("page load timed out");
            app.app_state.apply_completion(completion);
        }
    }

    fn started_app() -> TuiApp<TestBackend> {
        let mut app = create_test_app();
        app.start();
        settle(&mut app);
        app
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn tui_error_from_source_error() {
        let tui_err: TuiError = SourceError::InvalidUrl("nope".to_string()).into();
        assert!(matches!(tui_err, TuiError::Source(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(app.handle_key(char_key('q')), "'q' should trigger quit");
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c));
    }

    #[test]
    fn handle_key_other_returns_false() {
        let mut app = create_test_app();
        assert!(!app.handle_key(char_key('x')));
    }

    #[test]
    fn start_loads_first_page() {
        let app = started_app();
        assert_eq!(app.app_state.controller().characters().len(), 5);
        assert_eq!(app.app_state.controller().page(), PageCursor::FIRST);
    }

    #[test]
    fn poll_completions_applies_finished_loads() {
        let mut app = create_test_app();
        app.start();

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while !app.poll_completions() {
            assert!(std::time::Instant::now() < deadline, "no completion arrived");
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(app.app_state.controller().characters().len(), 5);
        assert!(!app.app_state.controller().is_loading());
    }

    #[test]
    fn end_key_at_bottom_loads_next_page() {
        let mut app = started_app();

        app.handle_key(key(KeyCode::End));
        assert!(app.app_state.controller().is_loading());
        settle(&mut app);

        assert_eq!(app.app_state.controller().characters().len(), 10);
        assert_eq!(app.app_state.controller().page().get(), 2);
    }

    #[test]
    fn repeated_bottom_hits_while_loading_request_once() {
        let mut app = started_app();

        app.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        app.handle_key(key(KeyCode::End));
        app.handle_key(char_key('j'));
        settle(&mut app);

        assert_eq!(app.app_state.controller().characters().len(), 10);
        assert_eq!(app.app_state.controller().page().get(), 2);
    }

    #[test]
    fn selection_survives_page_append() {
        let mut app = started_app();

        app.handle_key(key(KeyCode::End));
        settle(&mut app);

        assert_eq!(
            app.app_state.selected_character().map(|c| c.id.get()),
            Some(5)
        );
    }

    #[test]
    fn favorite_key_updates_badge() {
        let mut app = started_app();

        app.handle_key(char_key('f'));
        assert_eq!(app.app_state.favorite_count, 1);

        app.handle_key(char_key('f'));
        assert_eq!(app.app_state.favorite_count, 0);
    }

    #[test]
    fn favorites_only_key_filters_list() {
        let mut app = started_app();
        app.handle_key(char_key('j'));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT));

        assert!(app.app_state.controller().filter().favorites_only);
        assert_eq!(app.app_state.visible_len(), 1);
        assert_eq!(
            app.app_state.selected_character().map(|c| c.name.as_str()),
            Some("Morty 2")
        );
    }

    #[test]
    fn typing_search_filters_live() {
        let mut app = started_app();

        app.handle_key(char_key('/'));
        assert!(app.app_state.search.is_typing());

        for ch in "RICK".chars() {
            app.handle_key(char_key(ch));
        }

        assert_eq!(app.app_state.controller().filter().search_term, "RICK");
        assert_eq!(app.app_state.visible_len(), 1);
    }

    #[test]
    fn typed_q_does_not_quit_while_searching() {
        let mut app = started_app();
        app.handle_key(char_key('/'));
        assert!(!app.handle_key(char_key('q')));
        assert_eq!(app.app_state.search.query(), Some("q"));
    }

    #[test]
    fn enter_keeps_term_and_esc_clears_it() {
        let mut app = started_app();
        app.handle_key(char_key('/'));
        app.handle_key(char_key('r'));
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.app_state.search.is_typing());
        assert_eq!(app.app_state.controller().filter().search_term, "r");

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.app_state.controller().filter().search_term, "");
        assert_eq!(app.app_state.visible_len(), 5);
    }

    #[test]
    fn esc_while_typing_clears_and_closes() {
        let mut app = started_app();
        app.handle_key(char_key('/'));
        app.handle_key(char_key('m'));
        app.handle_key(key(KeyCode::Esc));

        assert!(!app.app_state.search.is_typing());
        assert_eq!(app.app_state.controller().filter().search_term, "");
    }

    #[test]
    fn backspace_while_typing_widens_filter() {
        let mut app = started_app();
        app.handle_key(char_key('/'));
        app.handle_key(char_key('k'));
        app.handle_key(char_key('x'));
        assert_eq!(app.app_state.visible_len(), 0);

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.app_state.controller().filter().search_term, "k");
        assert_eq!(app.app_state.visible_len(), 1);
    }

    #[test]
    fn help_blocks_other_actions_until_closed() {
        let mut app = started_app();

        app.handle_key(char_key('?'));
        assert!(app.app_state.help_visible);

        app.handle_key(char_key('j'));
        assert_eq!(app.app_state.selected_index(), Some(0));

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.app_state.help_visible);

        app.handle_key(char_key('j'));
        assert_eq!(app.app_state.selected_index(), Some(1));
    }

    #[test]
    fn draw_records_viewport_rows() {
        let mut app = started_app();
        app.draw().unwrap();
        // 24 rows: header and status bar leave 22, the list border takes 2
        assert_eq!(app.app_state.viewport_rows, 20);
    }

    #[test]
    fn draw_renders_first_page() {
        let mut app = started_app();
        app.draw().unwrap();

        let buffer = app.terminal.backend().buffer();
        let text: String = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Morty 1"));
        assert!(text.contains("Rick 3"));
    }
}
