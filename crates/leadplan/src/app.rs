use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::data::storage::DataDirectory;
use crate::screens::{
    allocator::AllocatorScreen, contact::ContactScreen, projector::ProjectorScreen,
};
use crate::state::{AppState, TabId};

/// How long to wait for input before redrawing, so the send indicator keeps moving
const TICK_RATE: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    allocator_screen: AllocatorScreen,
    projector_screen: ProjectorScreen,
    contact_screen: ContactScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::from_state(AppState::default())
    }

    /// Create app with a data directory path.
    /// A benchmarks override there replaces the built-in tables if it validates.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let storage = DataDirectory::new(data_dir.clone());
        let loaded = storage.active_benchmarks();
        Self::from_state(AppState::from_loaded(loaded, data_dir))
    }

    fn from_state(state: AppState) -> Self {
        Self {
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            allocator_screen: AllocatorScreen::new(),
            projector_screen: ProjectorScreen::new(),
            contact_screen: ContactScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(source = ?self.state.benchmark_source, "Application started");

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.state.contact.tick(Instant::now());
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Allocator => self.allocator_screen.render(frame, area, &self.state),
            TabId::Projector => self.projector_screen.render(frame, area, &self.state),
            TabId::Contact => self.contact_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(TICK_RATE)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() && !self.state.is_editing_text() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            // Esc clears a visible error first, otherwise the screen gets it
            KeyCode::Esc if self.state.error_message.is_some() => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Allocator => self.allocator_screen.handle_key(key_event, &mut self.state),
            TabId::Projector => self.projector_screen.handle_key(key_event, &mut self.state),
            TabId::Contact => self.contact_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}
