//! Background request execution.
//!
//! One worker thread runs requests strictly in submission order and posts
//! each [`Completion`] back over a channel. The UI thread polls the channel
//! from its event loop, so requests never block rendering or input.

use crate::client::{execute, CatalogApi, Completion, Request};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from the request worker.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The worker thread could not be started.
    #[error("Failed to spawn request worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// The worker thread has exited and no longer accepts requests.
    #[error("Request worker is no longer running")]
    Disconnected,
}

/// Handle to the request worker thread.
///
/// Dropping the handle closes the request channel; the thread finishes its
/// current request and exits. In-flight requests are never cancelled.
#[derive(Debug)]
pub struct RequestWorker {
    requests: Sender<Request>,
    completions: Receiver<Completion>,
}

impl RequestWorker {
    /// Start the worker thread, moving `api` onto it.
    ///
    /// # Errors
    ///
    /// Returns `WorkerError::Spawn` if the OS refuses to create the thread.
    pub fn spawn<A>(api: A) -> Result<Self, WorkerError>
    where
        A: CatalogApi + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (completion_tx, completion_rx) = mpsc::channel::<Completion>();

        thread::Builder::new()
            .name("booklib-requests".to_string())
            .spawn(move || {
                for request in request_rx {
                    debug!(ticket = request.ticket().0, "Executing request");
                    let completion = execute(&api, request);
                    if completion_tx.send(completion).is_err() {
                        // UI side is gone
                        break;
                    }
                }
            })
            .map_err(WorkerError::Spawn)?;

        Ok(Self {
            requests: request_tx,
            completions: completion_rx,
        })
    }

    /// Queue a request.
    ///
    /// # Errors
    ///
    /// Returns `WorkerError::Disconnected` if the worker thread has exited.
    pub fn submit(&self, request: Request) -> Result<(), WorkerError> {
        self.requests
            .send(request)
            .map_err(|_| WorkerError::Disconnected)
    }

    /// Collect every completion that has arrived so far. Non-blocking.
    pub fn drain(&self) -> Vec<Completion> {
        let mut completions = Vec::new();
        loop {
            match self.completions.try_recv() {
                Ok(completion) => completions.push(completion),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Request worker disconnected");
                    break;
                }
            }
        }
        completions
    }
}
