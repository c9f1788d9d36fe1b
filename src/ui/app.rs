//! Notebook application state and event loop

use super::panes;
use crate::algorithms::{overview, PendingAlgorithm};
use crate::config::Config;
use crate::render::{memory_blocks, MemoryBlock};
use crate::session::{Session, Submission};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;
use std::time::Instant;

/// Id of the algorithm overview block at the top of the memory pane
pub const OVERVIEW_BLOCK_ID: &str = "overview";

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Cells,
    Memory,
    Input,
}

impl FocusedPane {
    /// Move focus to the next pane (input -> cells -> memory)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Cells,
            FocusedPane::Cells => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Memory,
            FocusedPane::Cells => FocusedPane::Input,
            FocusedPane::Memory => FocusedPane::Cells,
        }
    }
}

/// Notebook state shared by every pane
pub struct App {
    pub session: Session,
    pub config: Config,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Line being typed
    pub input: String,

    /// Earlier lines of an incomplete multi-line submission
    pub buffer: Vec<String>,

    /// Algorithm being stepped through; `Some` means algorithm mode
    pub algorithm: Option<PendingAlgorithm>,

    /// Ids of cells whose change diagram is shown
    pub expanded_cells: FxHashSet<usize>,

    /// Ids of memory blocks folded to their header
    pub collapsed_blocks: FxHashSet<String>,

    pub selected_cell: Option<usize>,
    pub selected_block: usize,

    /// Per-pane scroll offsets
    pub cells_scroll: usize,
    pub memory_scroll: usize,

    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub is_error: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    pub fn new(session: Session, config: Config) -> Self {
        let mut collapsed_blocks = FxHashSet::default();
        if config.overview_collapsed {
            collapsed_blocks.insert(OVERVIEW_BLOCK_ID.to_string());
        }
        App {
            session,
            config,
            focused_pane: FocusedPane::Input,
            input: String::new(),
            buffer: Vec::new(),
            algorithm: None,
            expanded_cells: FxHashSet::default(),
            collapsed_blocks,
            selected_cell: None,
            selected_block: 0,
            cells_scroll: 0,
            memory_scroll: 0,
            show_help: false,
            should_quit: false,
            status_message: String::from("Ready! Type code and press Enter"),
            is_error: false,
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Drive the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Auto-play
            if self.is_playing && self.last_play_time.elapsed() >= self.config.play_interval {
                self.step_forward();
                self.last_play_time = Instant::now();
            }

            // Poll so playback keeps ticking without key presses
            if event::poll(self.config.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Run `code` as one cell, whatever its bracket balance
    pub fn submit_code(&mut self, code: &str) {
        self.submit(code, true);
    }

    fn submit(&mut self, code: &str, force_submit: bool) -> Submission {
        let submission = self.session.submit(code, force_submit);
        let Submission::Recorded(index) = submission else {
            return submission;
        };

        let cell = &self.session.cells()[index];
        self.expanded_cells.insert(cell.id);
        self.selected_cell = Some(index);
        match &cell.error {
            Some(error) => {
                self.is_error = true;
                self.status_message = format!("Error: {}", error.lines().next().unwrap_or(""));
            }
            None => {
                self.is_error = false;
                self.status_message = format!("Cell {} ran", cell.id);
            }
        }

        if let Some(pending) = self.session.take_pending() {
            self.status_message = format!(
                "{}: Space/N to step, A to play, Esc to exit",
                pending.runner.name()
            );
            self.is_playing = false;
            self.algorithm = Some(pending);
        }
        submission
    }

    /// Submit the input line, buffering it while the code is incomplete.
    /// An empty line after buffered lines forces the buffer through.
    fn run_input(&mut self) {
        let force_submit = self.input.trim().is_empty() && !self.buffer.is_empty();
        let mut lines = self.buffer.clone();
        if !force_submit {
            lines.push(self.input.clone());
        }
        let code = lines.join("\n");
        if code.trim().is_empty() {
            return;
        }

        match self.submit(&code, force_submit) {
            Submission::Incomplete => {
                self.buffer = lines;
                self.input.clear();
                self.is_error = false;
                self.status_message =
                    "Incomplete: keep typing, or press Enter on an empty line to run".to_string();
            }
            Submission::Recorded(_) => {
                self.buffer.clear();
                self.input.clear();
            }
        }
    }

    /// Overview block followed by the memory view of the latest snapshot
    fn memory_entries(&self) -> Vec<MemoryBlock> {
        let mut entries = vec![MemoryBlock {
            id: OVERVIEW_BLOCK_ID.to_string(),
            header: "Algorithms".to_string(),
            summary: "search, tree_search, tree_traverse".to_string(),
            content: overview(),
        }];
        entries.extend(memory_blocks(self.session.snapshot()));
        entries
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Cells (top) | Input (bottom)
        let input_height = panes::input::input_height(self.buffer.len()).min(columns[0].height / 2);
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(input_height)])
            .split(columns[0]);

        let cells_selection = match self.focused_pane {
            FocusedPane::Cells => self.selected_cell,
            _ => None,
        };
        panes::render_cells_pane(
            frame,
            left_rows[0],
            self.session.cells(),
            &self.expanded_cells,
            cells_selection,
            self.focused_pane == FocusedPane::Cells,
            &mut self.cells_scroll,
        );

        panes::render_input_pane(
            frame,
            left_rows[1],
            &self.buffer,
            &self.input,
            self.focused_pane == FocusedPane::Input,
            self.algorithm.is_some(),
        );

        // Right column: Algorithm (top, while active) | Memory
        let memory_area = match &self.algorithm {
            Some(pending) => {
                let right_rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(columns[1]);
                panes::render_algorithm_pane(frame, right_rows[0], pending, true);
                right_rows[1]
            }
            None => columns[1],
        };

        let entries = self.memory_entries();
        self.selected_block = self.selected_block.min(entries.len().saturating_sub(1));
        panes::render_memory_pane(
            frame,
            memory_area,
            &entries,
            &self.collapsed_blocks,
            self.selected_block,
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.algorithm.as_ref().map(|pending| &pending.runner),
            self.session.cells().len(),
            self.is_error,
            self.is_playing,
        );

        if self.show_help {
            panes::render_help_popup(frame, size);
        }
    }

    /// Dispatch one key press
    fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(1) {
            self.show_help = !self.show_help;
            return;
        }
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        if self.algorithm.is_some() {
            match key.code {
                KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => {
                    self.is_playing = false;
                    self.step_forward();
                    return;
                }
                KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Left => {
                    self.is_playing = false;
                    self.step_backward();
                    return;
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.reset_algorithm();
                    return;
                }
                KeyCode::Char('a') | KeyCode::Char('A') => {
                    self.toggle_play();
                    return;
                }
                KeyCode::Esc => {
                    self.algorithm = None;
                    self.is_playing = false;
                    self.status_message = "Left algorithm mode".to_string();
                    return;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                    return;
                }
                // The input line is locked while an algorithm is active
                KeyCode::Char(_) | KeyCode::Backspace => return,
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Memory => {
                    self.selected_block = self.selected_block.saturating_sub(1);
                }
                FocusedPane::Cells | FocusedPane::Input => self.select_cell(-1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Memory => {
                    self.selected_block = self.selected_block.saturating_add(1);
                }
                FocusedPane::Cells | FocusedPane::Input => self.select_cell(1),
            },
            KeyCode::Enter => match self.focused_pane {
                FocusedPane::Input => {
                    if self.algorithm.is_none() {
                        self.run_input();
                    }
                }
                FocusedPane::Cells => self.toggle_selected_cell(),
                FocusedPane::Memory => self.toggle_selected_block(),
            },
            KeyCode::Char('?') if self.focused_pane != FocusedPane::Input => {
                self.show_help = true;
            }
            KeyCode::Char(c) if self.focused_pane == FocusedPane::Input && !ctrl => {
                self.input.push(c);
            }
            KeyCode::Backspace if self.focused_pane == FocusedPane::Input => {
                if self.input.pop().is_none() {
                    if let Some(line) = self.buffer.pop() {
                        self.input = line;
                    }
                }
            }
            KeyCode::Esc if self.focused_pane == FocusedPane::Input => {
                self.input.clear();
                self.buffer.clear();
                self.status_message = "Input cleared".to_string();
            }
            _ => {}
        }
    }

    fn select_cell(&mut self, delta: isize) {
        let count = self.session.cells().len();
        if count == 0 {
            return;
        }
        self.selected_cell = Some(match self.selected_cell {
            Some(index) => index.saturating_add_signed(delta).min(count - 1),
            None => count - 1,
        });
    }

    fn toggle_selected_cell(&mut self) {
        let Some(cell) = self.selected_cell.and_then(|index| self.session.cells().get(index)) else {
            return;
        };
        let id = cell.id;
        if !self.expanded_cells.remove(&id) {
            self.expanded_cells.insert(id);
        }
    }

    fn toggle_selected_block(&mut self) {
        let entries = self.memory_entries();
        let Some(block) = entries.get(self.selected_block) else {
            return;
        };
        if !self.collapsed_blocks.remove(&block.id) {
            self.collapsed_blocks.insert(block.id.clone());
        }
    }

    /// Step the active algorithm forward
    fn step_forward(&mut self) {
        let Some(pending) = self.algorithm.as_mut() else {
            self.is_playing = false;
            return;
        };
        if pending.runner.is_complete() {
            self.is_playing = false;
            self.status_message = "Already at the last step".to_string();
            return;
        }
        match pending.runner.advance() {
            Some(step) => {
                self.status_message = format!("Step {}: {}", step.step_number, step.action);
                if step.is_complete && self.is_playing {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
            }
            None => {
                self.is_playing = false;
                self.status_message = "No more steps".to_string();
            }
        }
    }

    /// Step the active algorithm backward
    fn step_backward(&mut self) {
        let Some(pending) = self.algorithm.as_mut() else {
            return;
        };
        if pending.runner.at_start() {
            self.status_message = "Already at the start".to_string();
            return;
        }
        self.status_message = match pending.runner.rewind() {
            Some(step) => format!("Step {}: {}", step.step_number, step.action),
            None => "Back at the start".to_string(),
        };
    }

    fn reset_algorithm(&mut self) {
        if let Some(pending) = self.algorithm.as_mut() {
            pending.runner.reset();
            self.is_playing = false;
            self.status_message = "Reset to start".to_string();
        }
    }

    fn toggle_play(&mut self) {
        let Some(pending) = self.algorithm.as_mut() else {
            return;
        };
        self.is_playing = !self.is_playing;
        if self.is_playing {
            if pending.runner.is_complete() {
                pending.runner.reset();
            }
            // Take the first step on the next tick
            self.last_play_time = Instant::now()
                .checked_sub(self.config.play_interval)
                .unwrap_or_else(Instant::now);
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Session::new(), Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_focus_cycles_through_panes() {
        let pane = FocusedPane::Input;
        assert_eq!(pane.next().next().next(), pane);
        assert_eq!(pane.next().prev(), pane);
    }

    #[test]
    fn test_enter_runs_input() {
        let mut app = app();
        type_line(&mut app, "x = 41 + 1");
        assert_eq!(app.session.cells().len(), 1);
        assert!(app.input.is_empty());
        assert_eq!(app.status_message, "Cell 1 ran");
        assert!(app.expanded_cells.contains(&1));
    }

    #[test]
    fn test_incomplete_input_is_buffered() {
        let mut app = app();
        type_line(&mut app, "arr = [1,");
        assert!(app.session.cells().is_empty());
        assert_eq!(app.buffer, vec!["arr = [1,".to_string()]);
        type_line(&mut app, "2]");
        assert!(app.buffer.is_empty());
        let cell = &app.session.cells()[0];
        assert_eq!(cell.code, "arr = [1,\n2]");
        assert!(cell.ok);
    }

    #[test]
    fn test_empty_line_forces_buffer() {
        let mut app = app();
        type_line(&mut app, "arr = [1,");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.cells()[0].error.as_deref(), Some("Incomplete code"));
        assert!(app.is_error);
    }

    #[test]
    fn test_algorithm_mode_keys() {
        let mut app = app();
        type_line(&mut app, "search('linear', [1, 2], 2)");
        assert!(app.algorithm.is_some());

        press(&mut app, KeyCode::Char('n'));
        assert!(app.status_message.starts_with("Step 1: Examine index 0"));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input.is_empty());

        press(&mut app, KeyCode::Char('p'));
        assert!(app.algorithm.as_ref().unwrap().runner.at_start());

        press(&mut app, KeyCode::Char('a'));
        assert!(app.is_playing);
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.is_playing);

        press(&mut app, KeyCode::Esc);
        assert!(app.algorithm.is_none());
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_memory_block_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Memory);
        press(&mut app, KeyCode::Enter);
        assert!(app.collapsed_blocks.contains(OVERVIEW_BLOCK_ID));
        press(&mut app, KeyCode::Enter);
        assert!(app.collapsed_blocks.is_empty());
    }

    #[test]
    fn test_render_shows_panes() {
        let mut app = app();
        app.submit_code("stack = Stack()\nstack.push(3)");
        type_line(&mut app, "search('binary', [1, 3, 5], 5)");
        let text = screen(&mut app);
        assert!(text.contains("Cells"));
        assert!(text.contains("Memory"));
        assert!(text.contains("Binary Search"));
        assert!(text.contains("Step 0/?"));
    }
}
