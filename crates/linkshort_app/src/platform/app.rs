use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use linkshort_core::{update, AppState, AppViewModel, Msg};
use linkshort_engine::EngineHandle;
use linkshort_logging::{client_debug, client_info};
use ratatui::crossterm::event::{self, Event};

use super::clipboard::SystemClipboard;
use super::config::ClientConfig;
use super::effects::EffectRunner;
use super::input::{self, InputAction};
use super::ui::{TerminalRenderer, ViewRenderer};

/// How long to wait for terminal input before ticking.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(config: &ClientConfig) -> anyhow::Result<()> {
    let engine = EngineHandle::new(config.api_settings()).context("starting request engine")?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(engine, Box::new(SystemClipboard::new()), msg_tx);

    let renderer = TerminalRenderer::enter().context("preparing terminal")?;
    let mut controller = Controller::new(
        AppState::with_backend(config.backend_url.clone()),
        runner,
        msg_rx,
        renderer,
    );

    let outcome = event_loop(&mut controller);
    controller.renderer.restore().context("restoring terminal")?;
    client_info!("linkshort exiting");
    outcome
}

fn event_loop(controller: &mut Controller<TerminalRenderer>) -> anyhow::Result<()> {
    controller.request_render();
    loop {
        controller.process_pending_messages();
        controller.render_if_needed()?;

        if !event::poll(POLL_INTERVAL)? {
            controller.dispatch(Msg::Tick);
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) => input::map_key(key, controller.view()),
            Event::Paste(text) => input::map_paste(&text, controller.view()),
            Event::Resize(..) => {
                controller.request_render();
                InputAction::Ignore
            }
            _ => InputAction::Ignore,
        };
        match action {
            InputAction::Dispatch(msg) => controller.dispatch(msg),
            InputAction::Quit => return Ok(()),
            InputAction::Ignore => {}
        }
    }
}

/// Owns the state and routes every message through `update`.
struct Controller<R: ViewRenderer> {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    renderer: R,
    needs_render: bool,
}

impl<R: ViewRenderer> Controller<R> {
    fn new(state: AppState, runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>, renderer: R) -> Self {
        let view = state.view();
        Self {
            state,
            view,
            runner,
            msg_rx,
            renderer,
            needs_render: false,
        }
    }

    fn view(&self) -> &AppViewModel {
        &self.view
    }

    fn request_render(&mut self) {
        self.needs_render = true;
    }

    fn dispatch(&mut self, msg: Msg) {
        if !matches!(msg, Msg::Tick) {
            client_debug!("dispatch {:?}", msg);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.needs_render = true;
        }
        self.state = state;
        self.runner.run(effects);
    }

    fn process_pending_messages(&mut self) {
        self.runner.poll_engine();
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn render_if_needed(&mut self) -> io::Result<()> {
        if std::mem::take(&mut self.needs_render) {
            self.renderer.render(&self.view)?;
        }
        Ok(())
    }
}
