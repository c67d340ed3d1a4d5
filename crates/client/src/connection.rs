// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection manager for the FAHClient command port.
//!
//! A supervisor task owns the socket. It connects, sends `auth` and the
//! registered connect commands, then reads until the peer closes or the
//! connection is cancelled. Each read is pushed into a [`FrameBuffer`];
//! every complete message is mapped and broadcast as a [`Delivery`].
//!
//! ```text
//! Disconnected -> Connecting -> Connected -> Disconnected (retry)
//!                      |                  \-> Closing -> Closed
//!                      \-> Disconnected (backoff) ... -> Closed (exhausted)
//! ```
//!
//! `Connected` is entered only after `auth` and the connect commands are
//! written. A failed connect, or a session that ends before any message is
//! framed, counts toward the policy's `max_attempts`; a session that framed
//! a message resets the count.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use fah_core::{Delivery, FahMessage};
use fah_pyon::{FrameBuffer, RawMessage};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{ClientConfig, Command, ConnectionError};

/// Deliveries buffered per subscriber before it starts lagging.
const DELIVERY_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Closing,
    Closed,
}

fah_core::simple_display! {
    ConnectionState {
        Disconnected => "disconnected",
        Connecting => "connecting",
        Connected => "connected",
        Closing => "closing",
        Closed => "closed",
    }
}

struct Shared {
    config: ClientConfig,
    state: watch::Sender<ConnectionState>,
    deliveries: broadcast::Sender<Arc<Delivery>>,
    writer: tokio::sync::Mutex<Option<OwnedWriteHalf>>,
    on_connect: Mutex<Vec<Command>>,
    cancel: CancellationToken,
    /// Failed attempts when the supervisor gave up; zero otherwise.
    gave_up_after: AtomicU32,
}

impl Shared {
    fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Move to `next`. `Closing` only advances to `Closed`; `Closed` is final.
    fn set_state(&self, next: ConnectionState) {
        self.state.send_if_modified(|current| {
            let allowed = match *current {
                ConnectionState::Closed => false,
                ConnectionState::Closing => next == ConnectionState::Closed,
                _ => true,
            };
            if !allowed || *current == next {
                return false;
            }
            debug!(from = %current, to = %next, "connection state");
            *current = next;
            true
        });
    }

    async fn write_line(&self, line: &str) -> Result<(), ConnectionError> {
        let mut guard = self.writer.lock().await;
        let Some(writer) = guard.as_mut() else {
            return Err(ConnectionError::NotConnected(self.state()));
        };
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }

    fn dispatch(&self, raw: RawMessage) {
        match FahMessage::parse(&raw) {
            Ok(message) => {
                let delivery = Arc::new(Delivery { type_name: raw.type_name, message });
                // Having no subscribers is fine.
                let _ = self.deliveries.send(delivery);
            }
            Err(e) => {
                warn!(message = %raw.type_name, error = %e, "dropping undecodable message");
            }
        }
    }
}

/// Handle to a supervised FAHClient connection.
///
/// Dropping the handle cancels the supervisor.
pub struct Connection {
    shared: Arc<Shared>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Connection {
    /// Start the supervisor without waiting for the first connect.
    ///
    /// Subscribe before [`Connection::wait_connected`] to observe replies
    /// to `on_connect` commands.
    pub fn spawn(config: ClientConfig, on_connect: Vec<Command>) -> Self {
        let (state, _) = watch::channel(ConnectionState::Disconnected);
        let (deliveries, _) = broadcast::channel(DELIVERY_CAPACITY);
        let shared = Arc::new(Shared {
            config,
            state,
            deliveries,
            writer: tokio::sync::Mutex::new(None),
            on_connect: Mutex::new(on_connect),
            cancel: CancellationToken::new(),
            gave_up_after: AtomicU32::new(0),
        });
        let task = tokio::spawn(supervise(Arc::clone(&shared)));
        Self { shared, task: Mutex::new(Some(task)) }
    }

    /// Connect and wait until the connection is established.
    pub async fn connect(config: ClientConfig) -> Result<Self, ConnectionError> {
        Self::connect_with(config, Vec::new()).await
    }

    /// Like [`Connection::connect`], sending `on_connect` after every (re)connect.
    pub async fn connect_with(
        config: ClientConfig,
        on_connect: Vec<Command>,
    ) -> Result<Self, ConnectionError> {
        let connection = Self::spawn(config, on_connect);
        connection.wait_connected().await?;
        Ok(connection)
    }

    /// Wait for `Connected`. Fails once the connection is closing or closed.
    pub async fn wait_connected(&self) -> Result<(), ConnectionError> {
        let mut rx = self.shared.state.subscribe();
        let state = *rx
            .wait_for(|s| {
                matches!(
                    s,
                    ConnectionState::Connected | ConnectionState::Closing | ConnectionState::Closed
                )
            })
            .await
            .map_err(|_| ConnectionError::Closed)?;
        if state == ConnectionState::Connected {
            return Ok(());
        }
        match self.shared.gave_up_after.load(Ordering::Acquire) {
            0 => Err(ConnectionError::Closed),
            attempts => Err(ConnectionError::RetriesExhausted {
                address: self.shared.config.address(),
                attempts,
            }),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.shared.state()
    }

    pub fn watch_state(&self) -> watch::Receiver<ConnectionState> {
        self.shared.state.subscribe()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Delivery>> {
        self.shared.deliveries.subscribe()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.shared.config
    }

    /// Register a command to send after every future (re)connect.
    pub fn on_connect(&self, command: Command) {
        self.shared.on_connect.lock().push(command);
    }

    /// Write one command. Only allowed while `Connected`.
    pub async fn send(&self, command: &Command) -> Result<(), ConnectionError> {
        let state = self.state();
        if state != ConnectionState::Connected {
            return Err(ConnectionError::NotConnected(state));
        }
        if !matches!(command, Command::Auth(_)) {
            debug!(%command, "send");
        }
        self.shared.write_line(&command.to_line()).await
    }

    /// Stop the supervisor and wait for it to finish.
    pub async fn disconnect(&self) {
        self.shared.set_state(ConnectionState::Closing);
        self.shared.cancel.cancel();
        let task = self.task.lock().take();
        if let Some(task) = task {
            if let Err(e) = task.await {
                warn!(error = %e, "connection task failed");
            }
        }
        self.shared.set_state(ConnectionState::Closed);
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.shared.cancel.cancel();
    }
}

enum ReadEnd {
    Cancelled,
    Eof,
    Failed(std::io::Error),
}

async fn supervise(shared: Arc<Shared>) {
    let policy = shared.config.reconnect.clone();
    let address = shared.config.address();
    let mut buffer = FrameBuffer::new();
    let mut failures: u32 = 0;

    loop {
        if shared.cancel.is_cancelled() {
            break;
        }
        shared.set_state(ConnectionState::Connecting);

        let stream = tokio::select! {
            result = TcpStream::connect(&address) => result,
            _ = shared.cancel.cancelled() => break,
        };

        match stream {
            Ok(stream) => {
                info!(%address, "connected");
                let (read, write) = stream.into_split();
                buffer.reset();
                *shared.writer.lock().await = Some(write);

                let mut framed = 0usize;
                let end = match greet(&shared).await {
                    Ok(()) => {
                        shared.set_state(ConnectionState::Connected);
                        read_loop(&shared, read, &mut buffer, &mut framed).await
                    }
                    Err(ConnectionError::Io(e)) => ReadEnd::Failed(e),
                    Err(e) => {
                        warn!(error = %e, "failed to send connect commands");
                        ReadEnd::Eof
                    }
                };
                *shared.writer.lock().await = None;
                match end {
                    ReadEnd::Cancelled => break,
                    ReadEnd::Eof => info!(%address, "connection closed by peer"),
                    ReadEnd::Failed(e) => warn!(%address, error = %e, "connection lost"),
                }
                if !buffer.is_empty() {
                    debug!(bytes = buffer.len(), "discarding partial message");
                }
                shared.set_state(ConnectionState::Disconnected);

                // A session that never framed a message counts as a failed attempt.
                if framed > 0 {
                    failures = 0;
                } else {
                    failures += 1;
                    warn!(%address, attempt = failures, "connection dropped before any message");
                    if policy.exhausted(failures) {
                        warn!(%address, attempts = failures, "giving up on connection");
                        shared.gave_up_after.store(failures, Ordering::Release);
                        break;
                    }
                }
            }
            Err(e) => {
                failures += 1;
                warn!(%address, attempt = failures, error = %e, "connect failed");
                shared.set_state(ConnectionState::Disconnected);
                if policy.exhausted(failures) {
                    warn!(%address, attempts = failures, "giving up on connection");
                    shared.gave_up_after.store(failures, Ordering::Release);
                    break;
                }
            }
        }

        let delay = policy.delay(failures.max(1));
        info!(%address, ?delay, "reconnecting");
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shared.cancel.cancelled() => break,
        }
    }

    *shared.writer.lock().await = None;
    shared.set_state(ConnectionState::Closed);
}

/// Send `auth` (when configured) and the registered connect commands.
async fn greet(shared: &Shared) -> Result<(), ConnectionError> {
    if let Some(password) = &shared.config.password {
        shared.write_line(&Command::Auth(password.clone()).to_line()).await?;
    }
    let commands = shared.on_connect.lock().clone();
    for command in &commands {
        debug!(%command, "send on connect");
        shared.write_line(&command.to_line()).await?;
    }
    Ok(())
}

/// Read until EOF, error or cancellation, counting framed messages in `framed`.
async fn read_loop(
    shared: &Shared,
    mut read: OwnedReadHalf,
    buffer: &mut FrameBuffer,
    framed: &mut usize,
) -> ReadEnd {
    let mut chunk = vec![0u8; shared.config.read_buffer_size.max(1)];
    loop {
        let n = tokio::select! {
            result = read.read(&mut chunk) => match result {
                Ok(0) => return ReadEnd::Eof,
                Ok(n) => n,
                Err(e) => return ReadEnd::Failed(e),
            },
            _ = shared.cancel.cancelled() => return ReadEnd::Cancelled,
        };
        buffer.push(&chunk[..n]);
        while let Some(raw) = buffer.next_message() {
            *framed += 1;
            shared.dispatch(raw);
        }
    }
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
