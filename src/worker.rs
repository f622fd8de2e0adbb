// ABOUTME: Chat worker loop — owns the session history and drives generation requests.
// ABOUTME: Processes one user event at a time; a failed exchange is never recorded.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::chat::{History, run_exchange};
use crate::generate::Generator;
use crate::tui::state::{UserEvent, WorkerEvent};

/// Bundled parameters for the chat worker.
pub struct ChatLoopParams {
    pub generator: Arc<dyn Generator>,
}

/// Run the chat worker, processing user messages until quit or channel close.
///
/// The worker is the sole owner of the session [`History`]. Events arrive over
/// an mpsc channel and are handled to completion one at a time, which is what
/// serializes generation: there is never more than one request in flight for
/// the session. On success the finished turn is appended; on failure the error
/// is reported to the TUI and the history is left untouched.
pub async fn run_chat_loop(
    params: ChatLoopParams,
    mut user_rx: mpsc::Receiver<UserEvent>,
    worker_tx: mpsc::Sender<WorkerEvent>,
) {
    let mut history = History::new();

    loop {
        let event = match user_rx.recv().await {
            Some(e) => e,
            None => break, // Channel closed.
        };

        match event {
            UserEvent::Quit => break,
            UserEvent::Clear => {
                history.clear();
                tracing::info!("history cleared");
            }
            UserEvent::Ask { text, config } => {
                match run_exchange(params.generator.as_ref(), &history, &text, &config).await {
                    Ok(reply) => {
                        history.append(&text, &reply);
                        tracing::info!(
                            turns = history.len(),
                            reply_len = reply.len(),
                            "exchange complete"
                        );
                        if worker_tx.send(WorkerEvent::Reply(reply)).await.is_err() {
                            break; // TUI gone.
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "exchange failed");
                        if worker_tx
                            .send(WorkerEvent::Error(e.to_string()))
                            .await
                            .is_err()
                        {
                            break;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GenerationConfig;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every prompt it sees and echoes it back with a canned reply.
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        reply: String,
    }

    #[async_trait]
    impl Generator for RecordingGenerator {
        async fn generate(
            &self,
            prompt: &str,
            _config: &GenerationConfig,
        ) -> anyhow::Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(format!("{} {}", prompt, self.reply))
        }
    }

    fn ask(text: &str) -> UserEvent {
        UserEvent::Ask {
            text: text.to_string(),
            config: GenerationConfig::default(),
        }
    }

    #[tokio::test]
    async fn worker_replies_and_accumulates_history() {
        let generator = Arc::new(RecordingGenerator {
            prompts: Mutex::new(Vec::new()),
            reply: "fine.".to_string(),
        });
        let (user_tx, user_rx) = mpsc::channel(4);
        let (worker_tx, mut worker_rx) = mpsc::channel(4);
        let handle = tokio::spawn(run_chat_loop(
            ChatLoopParams {
                generator: generator.clone(),
            },
            user_rx,
            worker_tx,
        ));

        user_tx.send(ask("how are you?")).await.unwrap();
        assert_eq!(
            worker_rx.recv().await.unwrap(),
            WorkerEvent::Reply("fine.".to_string())
        );

        user_tx.send(ask("still?")).await.unwrap();
        worker_rx.recv().await.unwrap();

        user_tx.send(UserEvent::Quit).await.unwrap();
        handle.await.unwrap();

        // The second prompt must carry the first completed turn.
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("Question: how are you?\nAnswer: fine.\n"));
        assert!(prompts[1].ends_with("Question: still?\nAnswer:"));
    }

    #[tokio::test]
    async fn clear_drops_history_for_later_prompts() {
        let generator = Arc::new(RecordingGenerator {
            prompts: Mutex::new(Vec::new()),
            reply: "ok".to_string(),
        });
        let (user_tx, user_rx) = mpsc::channel(4);
        let (worker_tx, mut worker_rx) = mpsc::channel(4);
        let handle = tokio::spawn(run_chat_loop(
            ChatLoopParams {
                generator: generator.clone(),
            },
            user_rx,
            worker_tx,
        ));

        user_tx.send(ask("first")).await.unwrap();
        worker_rx.recv().await.unwrap();
        user_tx.send(UserEvent::Clear).await.unwrap();
        user_tx.send(ask("second")).await.unwrap();
        worker_rx.recv().await.unwrap();
        user_tx.send(UserEvent::Quit).await.unwrap();
        handle.await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        // After the clear the prompt reverts to the empty-history form.
        assert!(!prompts[1].contains("first"));
        assert!(prompts[1].ends_with("Question: second\nAnswer:"));
    }

    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _config: &GenerationConfig,
        ) -> anyhow::Result<String> {
            anyhow::bail!("backend unavailable")
        }
    }

    #[tokio::test]
    async fn failed_exchange_reports_error_and_skips_append() {
        let (user_tx, user_rx) = mpsc::channel(4);
        let (worker_tx, mut worker_rx) = mpsc::channel(4);
        let handle = tokio::spawn(run_chat_loop(
            ChatLoopParams {
                generator: Arc::new(FailingGenerator),
            },
            user_rx,
            worker_tx,
        ));

        user_tx.send(ask("boom")).await.unwrap();
        match worker_rx.recv().await.unwrap() {
            WorkerEvent::Error(message) => assert!(message.contains("backend unavailable")),
            other => panic!("expected error event, got {:?}", other),
        }

        user_tx.send(UserEvent::Quit).await.unwrap();
        handle.await.unwrap();
    }
}
