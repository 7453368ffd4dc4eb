//! Simulated OSINT search.
//!
//! A search sleeps for the configured delay on a background tokio runtime and
//! then produces fixed sample records. The outcome travels back to the UI loop
//! over a std channel that the loop drains with [`SearchRunner::poll`].

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use crystal_core::{CrystalError, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::module::OsintModule;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub module: OsintModule,
    pub query: String,
}

/// A sample record in a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    pub id: u32,
    pub name: String,
}

/// Result payload rendered in the results area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub module: String,
    pub query: String,
    /// ISO-8601 UTC with millisecond precision
    pub timestamp: String,
    pub data: Vec<SearchRecord>,
}

impl SearchResults {
    /// Fixed sample results for `request`, stamped with `at`.
    pub fn mock(request: &SearchRequest, at: DateTime<Utc>) -> Self {
        Self {
            module: request.module.title().to_string(),
            query: request.query.clone(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            data: vec![
                SearchRecord {
                    id: 1,
                    name: "Sample Data 1".to_string(),
                },
                SearchRecord {
                    id: 2,
                    name: "Sample Data 2".to_string(),
                },
            ],
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Wait `delay`, then produce the mock results for `request`.
pub async fn run_mock_search(request: SearchRequest, delay: Duration) -> SearchResults {
    tokio::time::sleep(delay).await;
    SearchResults::mock(&request, Utc::now())
}

/// Owns the background runtime and at most one in-flight search.
pub struct SearchRunner {
    runtime: tokio::runtime::Runtime,
    delay: Duration,
    tx: Sender<SearchResults>,
    rx: Receiver<SearchResults>,
    in_flight: bool,
}

impl std::fmt::Debug for SearchRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchRunner")
            .field("delay", &self.delay)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl SearchRunner {
    /// Build a runner whose searches complete after `delay`.
    pub fn new(delay: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("crystal-search")
            .enable_time()
            .build()
            .map_err(|e| CrystalError::SearchRuntime {
                message: e.to_string(),
            })?;
        let (tx, rx) = mpsc::channel();

        debug!(
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "search runner started"
        );
        Ok(Self {
            runtime,
            delay,
            tx,
            rx,
            in_flight: false,
        })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a search is running.
    pub fn is_running(&self) -> bool {
        self.in_flight
    }

    /// Start a search. Returns `false` if one is already running.
    pub fn start(&mut self, request: SearchRequest) -> bool {
        if self.in_flight {
            debug!("search already running, ignoring request");
            return false;
        }

        info!(module = request.module.title(), query = %request.query, "search started");
        let tx = self.tx.clone();
        let delay = self.delay;
        self.runtime.spawn(async move {
            let results = run_mock_search(request, delay).await;
            if tx.send(results).is_err() {
                warn!("search finished after the UI went away");
            }
        });
        self.in_flight = true;
        true
    }

    /// Take the finished search, if any.
    pub fn poll(&mut self) -> Option<SearchResults> {
        match self.rx.try_recv() {
            Ok(results) => {
                self.in_flight = false;
                info!(module = %results.module, "search complete");
                Some(results)
            }
            Err(TryRecvError::Empty) => None,
            // We hold a sender ourselves, so the channel never disconnects.
            Err(TryRecvError::Disconnected) => None,
        }
    }
}
