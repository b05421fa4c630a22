pub mod constants;
pub mod layout;
pub mod render;

use std::io::{self, Stderr};

use linkshort_core::AppViewModel;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::Terminal;

/// Presents a view model. The controller calls it only when state changed.
pub trait ViewRenderer {
    fn render(&mut self, view: &AppViewModel) -> io::Result<()>;
}

/// Full-screen renderer on stderr. Restores the terminal when dropped.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    active: bool,
}

impl TerminalRenderer {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        if let Err(err) = execute!(stderr, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let mut renderer = Self {
            terminal: Terminal::new(CrosstermBackend::new(stderr))?,
            active: true,
        };
        renderer.terminal.clear()?;
        Ok(renderer)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()
    }
}

impl ViewRenderer for TerminalRenderer {
    fn render(&mut self, view: &AppViewModel) -> io::Result<()> {
        self.terminal
            .draw(|frame| render::draw(frame, view))
            .map(|_| ())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
