use crate::command::Command;
use crate::engine::Engine;
use crate::scheduler::{Scheduler, Timers};
use crate::view::GameView;
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug)]
pub(crate) struct App<S: Scheduler = Timers> {
    engine: Engine<S>,
    show_help: bool,
    quitting: bool,
}

impl<S: Scheduler> App<S> {
    pub(crate) fn new(engine: Engine<S>) -> App<S> {
        App {
            engine,
            show_help: false,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        info!(status = ?self.engine.status(), "quitting");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let snapshot = self.engine.snapshot();
        let view = GameView {
            snapshot: &snapshot,
            grid: self.engine.grid(),
            show_help: self.show_help,
        };
        terminal.draw(|frame| frame.render_widget(view, frame.area()))?;
        Ok(())
    }

    /// Wait for an input event until the engine's next timer is due, handle
    /// the event if one arrived, and then fire any timers that have come due
    fn process_input(&mut self) -> io::Result<()> {
        let ready = match self.engine.next_deadline() {
            Some(when) => poll(when.saturating_duration_since(Instant::now()))?,
            None => true,
        };
        if ready {
            self.handle_event(read()?);
        }
        self.engine.run_due_timers();
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        debug!(?cmd, "key pressed");
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Start => self.engine.start_game(),
            Command::Help => self.show_help = !self.show_help,
            Command::Game(key) => self.engine.handle_key_down(key),
        }
    }
}
