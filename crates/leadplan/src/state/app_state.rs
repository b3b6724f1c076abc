use std::path::PathBuf;

use leadplan_core::model::Benchmarks;

use crate::data::storage::{BenchmarkSource, LoadedBenchmarks};

use super::{AllocatorState, ContactField, ContactState, ProjectorState, TabId};

pub struct AppState {
    pub active_tab: TabId,
    pub exit: bool,
    pub error_message: Option<String>,
    /// Benchmark tables for this process, never mutated after startup
    pub benchmarks: Benchmarks,
    pub benchmark_source: BenchmarkSource,
    pub data_dir: Option<PathBuf>,

    // Per-screen state
    pub allocator: AllocatorState,
    pub projector: ProjectorState,
    pub contact: ContactState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_benchmarks(Benchmarks::builtin().clone(), BenchmarkSource::Builtin)
    }
}

impl AppState {
    pub fn with_benchmarks(benchmarks: Benchmarks, benchmark_source: BenchmarkSource) -> Self {
        Self {
            active_tab: TabId::Allocator,
            exit: false,
            error_message: None,
            allocator: AllocatorState::new(&benchmarks),
            projector: ProjectorState::new(),
            contact: ContactState::new(),
            benchmarks,
            benchmark_source,
            data_dir: None,
        }
    }

    /// Build state from tables picked at startup, surfacing a rejected override
    pub fn from_loaded(loaded: LoadedBenchmarks, data_dir: PathBuf) -> Self {
        let mut state = Self::with_benchmarks(loaded.benchmarks, loaded.source);
        state.data_dir = Some(data_dir);
        if let Some(warning) = loaded.warning {
            state.set_error(format!("{warning} (using built-in benchmarks)"));
        }
        state
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        let next_index = (self.active_tab.index() + 1) % TabId::ALL.len();
        self.active_tab = TabId::from_index(next_index).unwrap_or(TabId::Allocator);
    }

    pub fn prev_tab(&mut self) {
        let len = TabId::ALL.len();
        let prev_index = (self.active_tab.index() + len - 1) % len;
        self.active_tab = TabId::from_index(prev_index).unwrap_or(TabId::Allocator);
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// True while keystrokes should go to a text input rather than shortcuts
    pub fn is_editing_text(&self) -> bool {
        match self.active_tab {
            TabId::Allocator => false,
            TabId::Projector => self.projector.focused().is_some_and(|f| f.is_text()),
            TabId::Contact => self.contact.focused() != ContactField::Industry,
        }
    }
}
