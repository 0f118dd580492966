use std::sync::Arc;

use scl_ledger::{Admission, Ledger, StatusBoard, TraceWriter};
use scl_store::RecordStore;
use scl_types::SyncState;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::error::{SyncError, SyncResult};
use crate::source::InboundSource;

/// Tally of one worker run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub received: usize,
    pub admitted: usize,
    pub rejected: usize,
}

impl SyncReport {
    fn tally(&mut self, admission: &Admission) {
        self.received += 1;
        if admission.is_admitted() {
            self.admitted += 1;
        } else {
            self.rejected += 1;
        }
    }
}

/// Drains an inbound source into a ledger's admission gate.
///
/// Rejections are counted and logged by the gate; they never stop the
/// worker. A run ends only when the source does.
pub struct SyncWorker<W: ?Sized> {
    writer: Arc<W>,
    status: Option<StatusBoard>,
}

impl SyncWorker<Ledger> {
    /// Worker bound to a ledger and reporting on its status board.
    pub fn for_ledger(ledger: Arc<Ledger>) -> Self {
        let status = ledger.status_board();
        Self::new(ledger).with_status(status)
    }
}

impl<W: TraceWriter + ?Sized> SyncWorker<W> {
    pub fn new(writer: Arc<W>) -> Self {
        Self {
            writer,
            status: None,
        }
    }

    pub fn with_status(mut self, status: StatusBoard) -> Self {
        self.status = Some(status);
        self
    }

    /// Admit a single item. Fails with [`SyncError::FeedClosed`] once the
    /// source has ended.
    pub async fn step<S: InboundSource + ?Sized>(&self, source: &mut S) -> SyncResult<Admission> {
        let item = source.next_inbound().await.ok_or(SyncError::FeedClosed)?;
        Ok(self.writer.ingest_inbound(&item))
    }

    /// Drain `source` to its end.
    pub async fn run<S: InboundSource>(&self, mut source: S) -> SyncReport {
        self.set_state(SyncState::Syncing);
        let mut report = SyncReport::default();
        while let Ok(admission) = self.step(&mut source).await {
            report.tally(&admission);
        }
        self.set_state(SyncState::Idle);
        tracing::info!(
            received = report.received,
            admitted = report.admitted,
            rejected = report.rejected,
            "inbound feed ended"
        );
        report
    }

    fn set_state(&self, state: SyncState) {
        if let Some(status) = &self.status {
            status.set_state(state);
        }
    }
}

impl<W: TraceWriter + ?Sized + 'static> SyncWorker<W> {
    /// Run on a tokio task.
    pub fn spawn<S: InboundSource + 'static>(self, source: S) -> SyncHandle {
        SyncHandle {
            task: tokio::spawn(async move { self.run(source).await }),
        }
    }

    /// Take the store's feed and run on a tokio task.
    pub fn attach(self, store: &dyn RecordStore) -> SyncResult<SyncHandle> {
        let feed = store.subscribe()?;
        tracing::debug!("subscribed to record feed");
        Ok(self.spawn(feed))
    }
}

/// Handle to a spawned worker.
#[derive(Debug)]
pub struct SyncHandle {
    task: JoinHandle<SyncReport>,
}

impl SyncHandle {
    /// Wait for the worker's source to end.
    pub async fn join(self) -> SyncResult<SyncReport> {
        self.task
            .await
            .map_err(|e| SyncError::TaskFailed(e.to_string()))
    }

    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
