// ABOUTME: App orchestrator — wires together generator, chat worker, and TUI.
// ABOUTME: Sets up subsystems then runs the terminal event loop until quit.

use tokio::sync::mpsc;

use crate::config::Config;
use crate::generate::create_generator;
use crate::logging;
use crate::tui;
use crate::tui::state::{ChatMessageKind, TuiState, UserEvent};
use crate::worker::{ChatLoopParams, run_chat_loop};

/// Top-level application that orchestrates all subsystems.
pub struct App {
    config: Config,
}

impl App {
    /// Create a new app with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the application: build the generator, launch the chat worker, and
    /// drive the TUI.
    pub async fn run(self) -> anyhow::Result<()> {
        // Load local .env if present (e.g. PLAINCHAT_BASE_URL).
        let _ = dotenvy::dotenv();

        if let Err(e) = logging::init(&Config::config_dir()) {
            eprintln!("Warning: failed to set up log file: {}", e);
        }

        // The generator is the one expensive shared resource: built once here,
        // shared read-only by every exchange afterwards. A bad config is fatal.
        let generator = create_generator(&self.config.generator)?;

        let model = self.config.generator.model.clone();
        tracing::info!(model = %model, base_url = %self.config.generator.base_url, "starting");

        // Channels for TUI <-> worker communication.
        let (user_tx, user_rx) = mpsc::channel::<UserEvent>(16);
        let (worker_tx, worker_rx) = mpsc::channel(16);

        let worker_handle = tokio::spawn(run_chat_loop(
            ChatLoopParams { generator },
            user_rx,
            worker_tx,
        ));

        let mut state = TuiState::new(model.clone(), self.config.generation_config());
        state.push_message(
            ChatMessageKind::System,
            format!(
                "chatting with {} — a base model, not instruction-tuned; expect rough answers",
                model
            ),
        );

        // Clone user_tx before moving it into the TUI (need it for the quit
        // signal after the loop exits).
        let user_tx_for_quit = user_tx.clone();

        let result = tui::run(state, user_tx, worker_rx).await;

        // Signal the worker to quit and wait for it.
        let _ = user_tx_for_quit.send(UserEvent::Quit).await;
        drop(user_tx_for_quit);
        let _ = worker_handle.await;

        result
    }
}
