#![forbid(unsafe_code)]

//! Terminal session and the interactive event loop.
//!
//! [`TerminalSession`] enters raw mode and the alternate screen and hides the
//! cursor; dropping it undoes all three. A panic hook does the same
//! best-effort cleanup before the panic message is printed.
//!
//! # Screen layout
//!
//! | Row | Content |
//! |-----|---------|
//! | 0 | algorithm selector |
//! | 1 | status line |
//! | 2 .. h-1 | bars |
//! | h-1 | key help |

use std::io::{self, Stdout, Write};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use tilesort_core::Algorithm;
use tilesort_runtime::{RunStats, Visualizer, VisualizerConfig};
use tracing::info;

use crate::app::{Action, App, action_for};
use crate::view::TerminalRenderer;

/// Longest wait for input while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Rows above the bars.
const HEADER_ROWS: u16 = 2;

const HELP_LINE: &str = "Up/Down 1-6 select | Enter sort | r reset | q quit";

/// Raw mode + alternate screen, restored on drop.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen: bool,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        terminal::enable_raw_mode()?;
        info!("terminal raw mode enabled");
        let mut session = Self {
            alternate_screen: false,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        session.alternate_screen = true;
        Ok(session)
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
        info!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
}

/// Bar region for a terminal of `cols` x `rows`: (top, width, height).
pub fn bar_region(cols: u16, rows: u16) -> (u16, u16, u16) {
    let height = rows.saturating_sub(HEADER_ROWS + 1);
    (HEADER_ROWS, cols, height)
}

/// Run the interactive demo until the user quits.
///
/// The visualizer's clock follows wall time from the moment the row is
/// first drawn.
pub fn run_interactive(
    config: VisualizerConfig,
    selected: Algorithm,
    autostart: bool,
) -> io::Result<RunStats> {
    let _session = TerminalSession::new()?;
    let (mut cols, mut rows) = terminal::size()?;
    let (top, width, height) = bar_region(cols, rows);
    let renderer = TerminalRenderer::new(io::stdout(), top, width, height);
    let mut app = App::new(Visualizer::new(config, renderer), selected);
    let epoch = Instant::now();
    if autostart {
        app.handle(Action::Sort);
    }

    loop {
        draw_chrome(&mut app, cols, rows)?;
        if let Some(err) = app.visualizer_mut().renderer_mut().take_error() {
            return Err(err);
        }
        if app.should_quit() {
            break;
        }

        let timeout = app
            .visualizer()
            .time_until_next()
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = action_for(&key) {
                        app.handle_at(epoch.elapsed(), action);
                    }
                }
                Event::Resize(new_cols, new_rows) => {
                    (cols, rows) = (new_cols, new_rows);
                    let (top, width, height) = bar_region(cols, rows);
                    execute!(io::stdout(), Clear(ClearType::All))?;
                    app.visualizer_mut()
                        .renderer_mut()
                        .resize(top, width, height);
                    app.visualizer_mut().redraw();
                }
                _ => {}
            }
        }
        app.tick(epoch.elapsed());
    }

    Ok(app.visualizer().stats())
}

fn draw_chrome(app: &mut App<TerminalRenderer<Stdout>>, cols: u16, rows: u16) -> io::Result<()> {
    let width = usize::from(cols);
    let selector = clip(&app.selector_line(), width);
    let status = clip(&app.status_line(), width);
    let out = app.visualizer_mut().renderer_mut().writer_mut();
    queue!(
        out,
        MoveTo(0, 0),
        Clear(ClearType::CurrentLine),
        Print(selector),
        MoveTo(0, 1),
        Clear(ClearType::CurrentLine),
        Print(status),
        MoveTo(0, rows.saturating_sub(1)),
        Clear(ClearType::CurrentLine),
        Print(clip(HELP_LINE, width))
    )?;
    out.flush()
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
