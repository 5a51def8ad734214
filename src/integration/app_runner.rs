use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{field::FieldMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::field::FieldRole,
    infrastructure::{
        config::Config,
        ticker::TickerService,
        tui::{event_source::EventSource, Event, Frame, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Values placed into the input fields before the first frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

/// Drives the update loop against a terminal: events in, frames out
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    event_source: EventSource,
    components: Components,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    ticker_cancel_token: CancellationToken,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Create a runner reading events from the terminal itself
    pub fn new_with_real(config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Result<Self> {
        let event_source = EventSource::real(Arc::clone(&tui));
        Self::new_with_config(config, tui, event_source)
    }

    /// Create a runner with an explicit event source
    ///
    /// Fails without touching the terminal when the configured layout lacks a
    /// required element. Must be called inside a tokio runtime.
    pub fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        event_source: EventSource,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config)?;

        let mut runtime = Runtime::new(initial_state);
        runtime.set_executor();

        let (ticker_tx, ticker_cancel_token, ticker_service) =
            TickerService::new(runtime.get_raw_sender());
        ticker_service.run();
        runtime.add_ticker_sender(ticker_tx).map_err(|e| eyre!(e))?;

        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            event_source,
            components: Components::new(),
            tui_rx,
            ticker_cancel_token,
        })
    }

    /// Fill input fields as if the user had typed the values
    pub fn prefill(&mut self, prefill: Prefill) {
        let values = [
            (FieldRole::Hours, prefill.hours),
            (FieldRole::Minutes, prefill.minutes),
            (FieldRole::Seconds, prefill.seconds),
        ];
        for (role, value) in values {
            if let Some(value) = value {
                self.runtime.send_msg(Msg::Field(FieldMsg::Set(role, value)));
            }
        }
    }

    /// Run until a quit is requested or the event source closes
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let result = self.run_loop().await;

        // Shutdown services and exit TUI even if the loop failed
        self.ticker_cancel_token.cancel();
        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        self.update()?;
        self.render().await?;

        loop {
            match self.event_source.next().await {
                Some(event) => self.handle_event(event),
                None => self.runtime.send_raw_msg(RawMsg::Quit),
            }

            self.update()?;

            // Host-side reactions requested by commands
            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                    }
                }
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            self.render().await?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let raw = match event {
            Event::Quit | Event::Closed => Some(RawMsg::Quit),
            Event::Key(key) => Some(RawMsg::Key(key)),
            Event::Resize(width, height) => Some(RawMsg::Resize(width, height)),
            Event::Render => Some(RawMsg::Render),
            Event::Error => Some(RawMsg::Error("Terminal event stream failed".to_owned())),
            Event::Init | Event::FocusGained | Event::FocusLost => None,
        };
        if let Some(raw) = raw {
            self.runtime.send_raw_msg(raw);
        }
    }

    fn update(&mut self) -> Result<()> {
        match self.runtime.run_update_cycle() {
            Ok(log) => {
                for entry in log.iter().filter(|entry| entry.starts_with('✗')) {
                    log::warn!("{entry}");
                }
            }
            Err(e) => {
                log::error!("Runtime error: {e}");
                return Err(eyre!(e));
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui.lock().await.draw(&mut |f: &mut Frame<'_>| components.render(f, state))
    }
}
