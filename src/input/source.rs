//! Input backends
//!
//! The loops in `modes` only see [`InputSource`]. Which backend runs is decided
//! once at startup.

use std::future::Future;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::handler::{InputHandler, KeyAction};

/// Something that produces player actions
pub trait InputSource {
    /// Wait for the next action. `KeyAction::None` means nothing usable
    /// arrived: the poll window passed, the key was unknown, or the read failed.
    fn next_action(&mut self) -> impl Future<Output = KeyAction>;
}

/// Non-blocking keyboard polling on a raw-mode terminal
pub struct TerminalInput {
    events: EventStream,
    handler: InputHandler,
    poll_timeout: Duration,
}

impl TerminalInput {
    /// Poll the terminal, waiting at most `poll_timeout` per call.
    /// The caller must have enabled raw mode.
    pub fn new(poll_timeout: Duration) -> Self {
        Self {
            events: EventStream::new(),
            handler: InputHandler::new(),
            poll_timeout,
        }
    }
}

impl InputSource for TerminalInput {
    async fn next_action(&mut self) -> KeyAction {
        match timeout(self.poll_timeout, self.events.next()).await {
            Ok(Some(Ok(Event::Key(key)))) if key.kind == KeyEventKind::Press => {
                self.handler.handle_key_event(key)
            }
            Ok(Some(Err(err))) => {
                debug!(%err, "terminal read failed, treating as no input");
                KeyAction::None
            }
            Ok(None) => {
                debug!("terminal event stream closed");
                KeyAction::None
            }
            // Timed out, or a non-key event (resize, release, focus)
            _ => KeyAction::None,
        }
    }
}

/// Blocking line-per-turn input
pub struct LineInput<R> {
    lines: Lines<BufReader<R>>,
    handler: InputHandler,
}

impl LineInput<Stdin> {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            handler: InputHandler::new(),
        }
    }
}

impl<R: AsyncRead + Unpin> InputSource for LineInput<R> {
    async fn next_action(&mut self) -> KeyAction {
        match self.lines.next_line().await {
            Ok(Some(line)) => self.handler.handle_line(&line),
            // End of input ends the game like an explicit quit
            Ok(None) => {
                info!("input closed");
                KeyAction::Quit
            }
            Err(err) => {
                warn!(%err, "failed to read input line");
                KeyAction::None
            }
        }
    }
}

/// Replays a fixed list of actions, then quits
#[cfg(test)]
pub struct ScriptedInput {
    actions: std::collections::VecDeque<KeyAction>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = KeyAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    async fn next_action(&mut self) -> KeyAction {
        self.actions.pop_front().unwrap_or(KeyAction::Quit)
    }
}
