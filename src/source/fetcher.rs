//! Background page fetching.
//!
//! The event loop must never block on the network, so each page request runs
//! on its own worker thread and reports back over a channel. The loop drains
//! completions on its timer tick, the same way it polls for input.

use super::{CharacterSource, PageRequest};
use crate::model::{CharacterPage, SourceError};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

/// Result of one dispatched page request.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCompletion {
    /// The request this answers.
    pub request: PageRequest,
    /// Page contents or the failure.
    pub outcome: Result<CharacterPage, SourceError>,
}

/// Runs source calls off the UI thread.
///
/// There is no cancellation: a dispatched request runs to completion (or
/// forever, if the source never answers) even if nobody polls for it.
pub struct PageFetcher {
    source: Arc<dyn CharacterSource>,
    tx: Sender<PageCompletion>,
    rx: Receiver<PageCompletion>,
}

impl PageFetcher {
    /// Fetcher over the given source.
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Start fetching a page in the background.
    ///
    /// If the worker thread cannot be spawned the request completes
    /// immediately with a `SourceError::Network`, so the caller still gets
    /// exactly one completion per dispatch.
    pub fn dispatch(&self, request: PageRequest) {
        debug!(page = %request.page, "Dispatching page request");

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("page-fetch-{}", request.page))
            .spawn(move || {
                let outcome = source.get_characters(request.page);
                // Receiver gone means the app is shutting down
                let _ = tx.send(PageCompletion { request, outcome });
            });

        if let Err(e) = spawned {
            error!(page = %request.page, error = %e, "Failed to spawn fetch worker");
            let _ = self.tx.send(PageCompletion {
                request,
                outcome: Err(SourceError::Network(format!(
                    "failed to spawn fetch worker: {e}"
                ))),
            });
        }
    }

    /// Drain every completion that has arrived. Never blocks.
    pub fn poll(&self) -> Vec<PageCompletion> {
        self.rx.try_iter().collect()
    }

    /// Block up to `timeout` for the next completion.
    pub fn wait(&self, timeout: Duration) -> Option<PageCompletion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher").finish_non_exhaustive()
    }
}
