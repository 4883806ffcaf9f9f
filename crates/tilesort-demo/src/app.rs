#![forbid(unsafe_code)]

//! Demo state: the selected algorithm, the visualizer and key handling.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tilesort_core::Algorithm;
use tilesort_runtime::{Renderer, TickReport, Visualizer};
use tracing::debug;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(Algorithm),
    Previous,
    Next,
    Sort,
    Reset,
    Quit,
}

/// Map a key press to an action.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    match key.code {
        KeyCode::Up => Some(Action::Previous),
        KeyCode::Down => Some(Action::Next),
        KeyCode::Enter | KeyCode::Char('s') => Some(Action::Sort),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Some(Action::Select(Algorithm::ALL[index]))
        }
        _ => None,
    }
}

/// The demo around one [`Visualizer`].
#[derive(Debug)]
pub struct App<R> {
    visualizer: Visualizer<R>,
    selected: Algorithm,
    quit: bool,
}

impl<R: Renderer + 'static> App<R> {
    pub fn new(visualizer: Visualizer<R>, selected: Algorithm) -> Self {
        Self {
            visualizer,
            selected,
            quit: false,
        }
    }

    pub fn handle(&mut self, action: Action) {
        debug!(?action, "action");
        match action {
            Action::Select(algorithm) => self.selected = algorithm,
            Action::Previous => self.selected = step_selection(self.selected, -1),
            Action::Next => self.selected = step_selection(self.selected, 1),
            Action::Sort => {
                self.visualizer.start(self.selected);
            }
            Action::Reset => self.visualizer.reset(),
            Action::Quit => self.quit = true,
        }
    }

    /// Feed wall-clock time (since the visualizer was built).
    pub fn tick(&mut self, elapsed: Duration) -> TickReport {
        self.visualizer.advance_to(elapsed)
    }

    /// Handle an action that arrived at wall time `elapsed`.
    ///
    /// The clock catches up first, so a run started here takes its first
    /// step one full delay after the key press.
    pub fn handle_at(&mut self, elapsed: Duration, action: Action) -> TickReport {
        let report = self.tick(elapsed);
        self.handle(action);
        report
    }

    pub fn selected(&self) -> Algorithm {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn visualizer(&self) -> &Visualizer<R> {
        &self.visualizer
    }

    pub fn visualizer_mut(&mut self) -> &mut Visualizer<R> {
        &mut self.visualizer
    }

    /// One line listing every algorithm, the selected one bracketed.
    pub fn selector_line(&self) -> String {
        Algorithm::ALL
            .iter()
            .enumerate()
            .map(|(i, &alg)| {
                if alg == self.selected {
                    format!("[{} {}]", i + 1, alg.name())
                } else {
                    format!(" {} {} ", i + 1, alg.name())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn status_line(&self) -> String {
        let stats = self.visualizer.stats();
        let state = match self.visualizer.active_algorithm() {
            Some(alg) => format!("{alg} running"),
            None if self.visualizer.sequence().is_sorted() => "sorted".to_string(),
            None => "idle".to_string(),
        };
        format!(
            "{state} | steps {} | runs {} started, {} finished",
            stats.ticks, stats.runs_started, stats.runs_completed
        )
    }
}

fn step_selection(current: Algorithm, delta: isize) -> Algorithm {
    let len = Algorithm::ALL.len() as isize;
    let index = (current.index() as isize + delta).rem_euclid(len);
    Algorithm::ALL[index as usize]
}
