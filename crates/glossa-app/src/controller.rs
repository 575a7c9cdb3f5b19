use std::future::Future;
use std::sync::Arc;

use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::console::output_loop;
use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub commands: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub output: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            commands: kanal::bounded_async(16),
            output: kanal::bounded_async(256), // progress bursts
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Handle `command` to completion. `shutdown` resolving cancels
    /// any classification run in flight.
    pub async fn run(
        self,
        command: AppEvent,
        shutdown: impl Future<Output = ()>,
    ) -> anyhow::Result<()> {
        let ChannelSet {
            commands: (command_tx, command_rx),
            output: (output_tx, output_rx),
        } = self.channels;

        let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
        tasks.spawn(event_loop(
            self.state.clone(),
            command_rx,
            output_tx,
            self.cancel_token.child_token(),
        ));
        tasks.spawn(output_loop(output_rx));

        command_tx.send(command).await?;
        // The event loop drains and exits once every command sender is gone
        drop(command_tx);

        tokio::pin!(shutdown);
        let mut first_error = None;
        loop {
            tokio::select! {
                _ = &mut shutdown, if !self.cancel_token.is_cancelled() => {
                    tracing::info!("Shutdown requested");
                    self.cancel_token.cancel();
                }
                joined = tasks.join_next() => match joined {
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("task exited: {e}");
                        first_error.get_or_insert(e);
                    }
                    Some(Err(e)) => {
                        tracing::error!("task panicked: {e}");
                        first_error.get_or_insert(e.into());
                    }
                    None => break,
                },
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}
