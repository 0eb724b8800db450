use color_eyre::eyre::eyre;
use ratatui::DefaultTerminal;
use tokio_util::sync::CancellationToken;

use crate::api::GitHubClient;
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::fetch;
use crate::state::{self, Command, ViewState};
use crate::ui;

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub running: bool,
    pub events: EventHandler,
    pub config: AppConfig,
    pub state: ViewState,
    client: GitHubClient,

    // Cancellation: the root stops every producer on quit, the children only
    // the outstanding fetch or timer.
    shutdown: CancellationToken,
    in_flight: Option<CancellationToken>,
    in_flight_timer: Option<CancellationToken>,

    // Commands from `ViewState::init`, run when the loop starts.
    pending: Vec<Command>,
}

impl App {
    pub fn new(config: AppConfig, client: GitHubClient) -> Self {
        Self::with_events(config, client, EventHandler::new())
    }

    pub fn with_events(config: AppConfig, client: GitHubClient, events: EventHandler) -> Self {
        let (state, pending) = ViewState::init(config.username.clone());
        Self {
            running: true,
            events,
            config,
            state,
            client,
            shutdown: CancellationToken::new(),
            in_flight: None,
            in_flight_timer: None,
            pending,
        }
    }

    // -- Main event loop ----------------------------------------------------

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.start();
        while self.running {
            terminal.draw(|frame| ui::draw(frame, &self.state))?;
            self.step().await?;
        }
        self.shutdown.cancel();
        Ok(())
    }

    /// Wait for the next event and apply it. Fails when terminal input is
    /// gone, since the quit keys could never arrive again.
    pub async fn step(&mut self) -> color_eyre::Result<()> {
        match self.events.next().await? {
            Event::InputClosed(reason) => {
                self.quit();
                Err(eyre!("event loop stopped: {reason}"))
            }
            event => {
                self.handle_event(event);
                Ok(())
            }
        }
    }

    /// Issue the startup requests.
    pub fn start(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        self.execute(pending);
    }

    /// Apply one event and perform the side effects it asks for.
    pub fn handle_event(&mut self, event: Event) {
        tracing::trace!(?event, "event");
        let (next, commands) = state::update(std::mem::take(&mut self.state), event);
        self.state = next;
        self.execute(commands);
    }

    fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            tracing::debug!(?command, "executing");
            match command {
                Command::StartTimer => {
                    // Only one timer chain runs at a time.
                    if let Some(previous) = self.in_flight_timer.take() {
                        previous.cancel();
                    }
                    let cancel = self.shutdown.child_token();
                    self.in_flight_timer = Some(cancel.clone());
                    fetch::start_timer(self.config.timer_interval(), self.events.sender(), cancel);
                }
                Command::StartFetch { seq } => {
                    // A newer refresh supersedes the outstanding one.
                    if let Some(previous) = self.in_flight.take() {
                        previous.cancel();
                    }
                    let cancel = self.shutdown.child_token();
                    self.in_flight = Some(cancel.clone());
                    fetch::start_fetch(
                        self.client.clone(),
                        self.state.username.clone(),
                        seq,
                        self.events.sender(),
                        cancel,
                    );
                }
                Command::Quit => {
                    self.quit();
                }
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
        self.shutdown.cancel();
    }
}
