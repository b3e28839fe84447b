//! Per-mount classifier state.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::service::Classifier;
use crate::models::UploadedFile;

/// Classifier panel state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierState {
    /// Nothing dropped yet.
    #[default]
    Idle,
    /// At least one timer is still pending.
    AwaitingResult,
    /// Every scheduled timer has fired.
    Resolved,
}

/// Message from a timer task to the UI loop.
struct Outcome {
    batch: u64,
    label: String,
}

/// A scheduled timer and the batch it belongs to.
struct PendingRequest {
    batch: u64,
    task: JoinHandle<()>,
}

/// Files, result and pending timers for one mount of the classifier panel.
pub struct ClassifierSession {
    handle: Handle,
    classifier: Arc<dyn Classifier>,
    delay: Duration,

    files: Vec<UploadedFile>,
    result: Option<String>,
    state: ClassifierState,

    next_batch: u64,
    pending: Vec<PendingRequest>,
    tx: mpsc::UnboundedSender<Outcome>,
    rx: mpsc::UnboundedReceiver<Outcome>,
}

impl ClassifierSession {
    /// Create an empty session whose timers run on `handle`.
    pub fn new(handle: Handle, classifier: Arc<dyn Classifier>, delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            classifier,
            delay,
            files: Vec::new(),
            result: None,
            state: ClassifierState::Idle,
            next_batch: 0,
            pending: Vec::new(),
            tx,
            rx,
        }
    }

    /// Accept a batch of files and schedule its classification.
    ///
    /// Files are appended to the display list without deduplication. An empty
    /// batch still schedules a timer. Earlier timers keep running.
    pub fn drop_files(&mut self, batch: Vec<UploadedFile>) {
        let id = self.next_batch;
        self.next_batch += 1;

        tracing::info!(batch = id, files = batch.len(), "Files dropped, scheduling classification");

        self.files.extend(batch.iter().cloned());

        // Deadline is fixed at drop time, not when the task is first polled.
        let deadline = tokio::time::Instant::now() + self.delay;
        let classifier = Arc::clone(&self.classifier);
        let tx = self.tx.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let label = classifier.classify(&batch);
            let _ = tx.send(Outcome { batch: id, label });
        });

        self.pending.push(PendingRequest { batch: id, task });
        self.state = ClassifierState::AwaitingResult;
    }

    /// Apply results from timers that have fired.
    ///
    /// Called once per frame. Returns `true` if the result changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Ok(outcome) = self.rx.try_recv() {
            self.pending.retain(|p| p.batch != outcome.batch);
            tracing::debug!(batch = outcome.batch, label = %outcome.label, "Classification timer fired");
            self.result = Some(outcome.label);
            changed = true;
        }

        if changed && self.pending.is_empty() {
            self.state = ClassifierState::Resolved;
        }

        changed
    }

    /// Files accepted so far, in drop order.
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Latest classification text, empty until the first timer fires.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Image URIs of every accepted file that has a preview.
    pub fn preview_uris(&self) -> Vec<String> {
        self.files.iter().filter_map(|f| f.preview.uri()).collect()
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for ClassifierSession {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(pending = self.pending.len(), "Classifier unmounted, aborting timers");
        }
        for request in self.pending.drain(..) {
            request.task.abort();
        }
    }
}
