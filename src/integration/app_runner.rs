use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use std::sync::Arc;
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        api::ApiClient,
        api_service::ApiService,
        config::Config,
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime: terminal events and backend results go in,
/// coalesced resizes and renders come out.
pub struct AppRunner {
    runtime: Runtime,
    renderer: Renderer,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    // Requests emitted by CmdExecutor
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    // For service termination
    api_cancel: CancellationToken,
    api_task: Option<JoinHandle<()>>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Create an AppRunner with the API service started in the background.
    pub async fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Result<Self> {
        let client = ApiClient::new(config.api.base_url.clone(), config.api_timeout())?;
        log::info!("Using backend at {}", client.base_url());

        let mut runtime = Runtime::new(AppState::new_with_config(config));

        let (api_tx, api_cancel, api_service) = ApiService::new(client, runtime.get_raw_sender());
        let api_task = api_service.run();
        runtime.set_api_sender(api_tx);

        let (tui_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx);
        let (render_tx, render_req_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_tx);

        Ok(Self {
            runtime,
            renderer: Renderer::new(),
            tui,
            events,
            tui_cmd_rx,
            render_req_rx,
            api_cancel,
            api_task: Some(api_task),
        })
    }

    /// Create an AppRunner reading events from the real terminal.
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = tui;
        Self::new_with_config(config, Arc::clone(&tui), EventSource::real(tui)).await
    }

    /// Queue more events when running from a test source
    pub fn push_events(&mut self, events: impl IntoIterator<Item = tui::Event>) {
        if let EventSource::Test(queue) = &mut self.events {
            queue.extend(events);
        }
    }

    /// Enter the terminal, run until quit, then shut everything down.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        let result = self.run_until_idle().await;
        self.shutdown().await?;
        result
    }

    /// Main loop. Returns on quit, or once a test source is drained and no
    /// backend request is outstanding.
    pub async fn run_until_idle(&mut self) -> Result<()> {
        let mut events_done = false;

        loop {
            if events_done && !self.runtime.state().is_busy() {
                break;
            }

            let mut needs_render = false;
            tokio::select! {
                event = self.events.next(), if !events_done => match event {
                    Some(event) => needs_render = self.handle_event(event),
                    None => {
                        events_done = true;
                        if !self.events.is_test() {
                            self.runtime.send_raw_msg(RawMsg::Quit);
                        }
                    }
                },
                raw = self.runtime.recv_raw() => {
                    if let Some(raw) = raw {
                        self.runtime.send_raw_msg(raw);
                        // Backend results always reach the screen
                        needs_render = true;
                    }
                }
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
            }

            let mut resizes = Vec::new();
            while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
                resizes.push((width, height));
            }
            let resize = Coalescer::decide_resize(None, &resizes);
            if let Some((width, height)) = resize {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
            }

            let mut queued_render_reqs = 0;
            while self.render_req_rx.try_recv().is_ok() {
                queued_render_reqs += 1;
            }
            if Coalescer::decide_render(queued_render_reqs, needs_render, resize.is_some()) {
                self.render().await?;
            }

            if self.runtime.state().system.should_suspend() {
                self.suspend().await?;
            }

            if self.runtime.state().system.should_quit() {
                break;
            }
        }

        Ok(())
    }

    /// Forward one terminal event. Returns whether the screen should be redrawn.
    fn handle_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Init | tui::Event::Render => true,
            tui::Event::Quit | tui::Event::Closed => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            tui::Event::Tick => {
                self.runtime.send_raw_msg(RawMsg::Tick);
                false
            }
            tui::Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                true
            }
            tui::Event::Paste(text) => {
                self.runtime.send_raw_msg(RawMsg::Paste(text));
                true
            }
            tui::Event::Resize(width, height) => {
                self.runtime.send_raw_msg(RawMsg::Resize(width, height));
                true
            }
            tui::Event::Error => {
                log::warn!("Terminal reported an input error");
                false
            }
            tui::Event::FocusGained | tui::Event::FocusLost | tui::Event::Mouse(_) => false,
        }
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            // Returns here after SIGCONT
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
        }
        self.render().await
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.api_cancel.cancel();
        if let Some(task) = self.api_task.take() {
            if let Err(e) = task.await {
                log::warn!("ApiService task ended abnormally: {e}");
            }
        }
        self.tui.lock().await.exit()
    }
}

impl Drop for AppRunner {
    fn drop(&mut self) {
        self.api_cancel.cancel();
    }
}
