//! Main TUI application state and logic

use crate::config::{Labels, PlaybackConfig};
use crate::puzzle::MAX_ANIMATED_DISKS;
use crate::session::{Session, SessionEvent};
use crate::ui::panes::{
    self, InfoRenderData, MovesRenderData, PegsRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Longest time to block waiting for a key
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Pegs,
    Moves,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Pegs => FocusedPane::Moves,
            FocusedPane::Moves => FocusedPane::Pegs,
        }
    }
}

/// The main application state
pub struct App {
    /// The puzzle session
    pub session: Session,

    /// Playback timing and arrow toggle
    pub playback: PlaybackConfig,

    /// Peg names and disk colors
    pub labels: Labels,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Scroll offset of the move list
    pub moves_scroll: usize,

    /// Row selected in the move list
    pub selected_move: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Set by the session observer when the solution is rebuilt
    regenerated: Rc<Cell<bool>>,
}

impl App {
    /// Create a new app around a session
    pub fn new(mut session: Session, playback: PlaybackConfig, labels: Labels) -> Self {
        let regenerated = Rc::new(Cell::new(false));
        let flag = Rc::clone(&regenerated);
        session.subscribe(move |event| {
            if *event == SessionEvent::Regenerated {
                flag.set(true);
            }
        });

        App {
            session,
            playback,
            labels,
            focused_pane: FocusedPane::Pegs,
            moves_scroll: 0,
            selected_move: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            regenerated,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick();

            // Use poll with timeout to allow auto-play to work
            let timeout = POLL_INTERVAL.min(self.playback.step_interval());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Drive auto-play: one step per elapsed interval
    pub fn tick(&mut self) {
        if !self.session.is_playing() {
            return;
        }
        if self.last_play_time.elapsed() < self.playback.step_interval() {
            return;
        }
        self.session.advance_playback();
        self.last_play_time = Instant::now();
        if !self.session.is_playing() {
            self.status_message = "Playback complete".to_string();
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        if self.regenerated.replace(false) {
            self.moves_scroll = 0;
            self.selected_move = 0;
        }

        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(pane_area);

        // Left column: Pegs (top) | Info (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(columns[0]);

        let session = &self.session;
        let params = session.params();

        panes::render_pegs_pane(
            frame,
            left_rows[0],
            &PegsRenderData {
                snapshot: session.current_snapshot(),
                disks: params.disks,
                pending: session.pending_move(),
                show_arrow: self.playback.show_arrow,
                start: params.start,
                end: params.end,
                labels: &self.labels,
            },
            self.focused_pane == FocusedPane::Pegs,
        );

        panes::render_info_pane(
            frame,
            left_rows[1],
            &InfoRenderData {
                disks: params.disks,
                start: params.start,
                middle: session.middle_peg(),
                end: params.end,
                min_moves: session.min_moves(),
                position: session.position(),
                total: session.moves().len(),
                progress: session.playback().progress(),
                playback: &self.playback,
                labels: &self.labels,
            },
        );

        let empty_message = if params.disks > MAX_ANIMATED_DISKS {
            "Too many disks to list every move. Use 12 or fewer disks to see the full table."
        } else {
            "No moves: the stack is already on the end peg."
        };

        panes::render_moves_pane(
            frame,
            columns[1],
            &MovesRenderData {
                moves: session.moves(),
                position: session.position(),
                selected: self.selected_move,
                empty_message,
                labels: &self.labels,
            },
            self.focused_pane == FocusedPane::Moves,
            &mut self.moves_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.session.position(),
            self.session.moves().len(),
            self.session.is_playing(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.session.next() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                if self.focused_pane == FocusedPane::Moves {
                    // Start the selection at the pending move
                    let last = self.session.moves().len().saturating_sub(1);
                    self.selected_move = self.session.position().min(last);
                }
            }
            KeyCode::Left => {
                if self.session.prev() {
                    self.status_message = "Stepped backward".to_string();
                } else {
                    self.status_message = "Already at the start".to_string();
                }
            }
            KeyCode::Right => {
                if self.session.next() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Already solved".to_string();
                }
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Moves {
                    self.selected_move = self.selected_move.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Moves {
                    let last = self.session.moves().len().saturating_sub(1);
                    self.selected_move = (self.selected_move + 1).min(last);
                }
            }
            KeyCode::Char('g') => {
                if self.focused_pane == FocusedPane::Moves && !self.session.moves().is_empty() {
                    self.session.select_move(self.selected_move);
                    self.status_message = format!("Jumped to move {}", self.selected_move + 1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_playing();
                }
            }
            KeyCode::Enter => {
                self.session.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.session.reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.playback.faster();
                self.status_message = format!("Speed {:.1}x", self.playback.speed());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.playback.slower();
                self.status_message = format!("Speed {:.1}x", self.playback.speed());
            }
            KeyCode::Char(']') => {
                self.session.set_disks(self.session.disks() as i64 + 1);
                self.status_message = format!("{} disks", self.session.disks());
            }
            KeyCode::Char('[') => {
                self.session.set_disks(self.session.disks() as i64 - 1);
                self.status_message = format!("{} disks", self.session.disks());
            }
            KeyCode::Char('s') => {
                let start = self.session.start_peg().cycle_next();
                self.session.set_start_peg(start);
                self.status_message = self.pegs_message();
            }
            KeyCode::Char('e') => {
                let end = self.session.end_peg().cycle_next();
                self.session.set_end_peg(end);
                self.status_message = self.pegs_message();
            }
            KeyCode::Char('a') => {
                self.playback.show_arrow = !self.playback.show_arrow;
                self.status_message = if self.playback.show_arrow {
                    "Arrow shown".to_string()
                } else {
                    "Arrow hidden".to_string()
                };
            }
            _ => {}
        }
    }

    fn toggle_playing(&mut self) {
        if self.session.moves().is_empty() {
            self.status_message = "Nothing to play".to_string();
            return;
        }
        if self.session.toggle_playing() {
            // Take the first step right away
            self.last_play_time = Instant::now()
                .checked_sub(self.playback.step_interval())
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    fn pegs_message(&self) -> String {
        format!(
            "{} → {}",
            self.labels.peg_name(self.session.start_peg()),
            self.labels.peg_name(self.session.end_peg())
        )
    }
}
