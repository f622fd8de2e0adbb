// ABOUTME: TUI module — ratatui full-screen interface for plainchat.
// ABOUTME: Transcript display, input handling, settings row, and the terminal event loop.

pub mod input;
pub mod state;
pub mod ui;
pub mod widgets;

pub use state::*;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::tui::input::{InputResult, handle_key};

/// Run the terminal event loop until the user quits.
///
/// Key events and worker events are multiplexed on one select loop; a redraw
/// happens after every handled event. Submissions while a generation is in
/// flight are dropped by the input layer, so only one request is ever pending.
pub async fn run(
    mut state: TuiState,
    user_tx: mpsc::Sender<UserEvent>,
    mut worker_rx: mpsc::Receiver<WorkerEvent>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let mut events = EventStream::new();

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::render(frame, &mut state)) {
            break Err(e.into());
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match handle_key(&mut state, key) {
                            InputResult::Send(text) => {
                                state.push_message(ChatMessageKind::User, text.clone());
                                state.generating = true;
                                let event = UserEvent::Ask { text, config: state.config };
                                if user_tx.send(event).await.is_err() {
                                    break Ok(()); // worker gone
                                }
                            }
                            InputResult::Clear => {
                                state.clear_transcript();
                                state.push_message(
                                    ChatMessageKind::System,
                                    "chat cleared".to_string(),
                                );
                                if user_tx.send(UserEvent::Clear).await.is_err() {
                                    break Ok(());
                                }
                            }
                            InputResult::Quit => break Ok(()),
                            InputResult::None => {}
                        }
                    }
                    Some(Ok(_)) => {} // resize, mouse, release — redraw is enough
                    Some(Err(e)) => break Err(e.into()),
                    None => break Ok(()),
                }
            }
            worker_event = worker_rx.recv() => {
                match worker_event {
                    Some(WorkerEvent::Reply(reply)) => {
                        state.generating = false;
                        state.turn_count += 1;
                        state.push_message(ChatMessageKind::Assistant, reply);
                    }
                    Some(WorkerEvent::Error(message)) => {
                        state.generating = false;
                        state.push_message(
                            ChatMessageKind::System,
                            format!("generation failed: {}", message),
                        );
                    }
                    None => break Ok(()), // worker gone
                }
            }
        }
    };

    ratatui::restore();
    result
}
